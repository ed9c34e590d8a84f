//! User account HTTP handlers.
//!
//! ```text
//! POST /api/v1/user-accounts
//! GET  /api/v1/user-accounts/{username}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, UserAccountDto, UserAccountId};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for registering a user account.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserAccountRequestBody {
    pub username: String,
    /// Credential as stored; hashing happens before it reaches this API.
    pub password_hash: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
}

/// User account response payload.
///
/// The stored credential is never echoed back to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountResponseBody {
    pub id: Option<i64>,
    pub username: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub memo: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    #[schema(format = "date-time")]
    pub modified_at: Option<String>,
    pub modified_by: Option<String>,
}

impl From<UserAccountDto> for UserAccountResponseBody {
    fn from(value: UserAccountDto) -> Self {
        Self {
            id: value.id.map(UserAccountId::into_inner),
            username: value.username,
            email: value.email,
            nickname: value.nickname,
            memo: value.memo,
            created_at: value.created_at.map(|at| at.to_rfc3339()),
            created_by: value.created_by,
            modified_at: value.modified_at.map(|at| at.to_rfc3339()),
            modified_by: value.modified_by,
        }
    }
}

fn registration_dto(payload: RegisterUserAccountRequestBody) -> UserAccountDto {
    UserAccountDto {
        id: None,
        username: payload.username,
        password_hash: payload.password_hash,
        email: payload.email,
        nickname: payload.nickname,
        memo: payload.memo,
        created_at: None,
        created_by: None,
        modified_at: None,
        modified_by: None,
    }
}

#[derive(Debug, Deserialize)]
struct UserAccountPath {
    username: String,
}

/// Register a new user account.
#[utoipa::path(
    post,
    path = "/api/v1/user-accounts",
    request_body = RegisterUserAccountRequestBody,
    responses(
        (status = 201, description = "Account registered", body = UserAccountResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["user-accounts"],
    operation_id = "registerUserAccount"
)]
#[post("/user-accounts")]
pub async fn register_user_account(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserAccountRequestBody>,
) -> ApiResult<HttpResponse> {
    let stored = state
        .user_accounts
        .register_user_account(registration_dto(payload.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(UserAccountResponseBody::from(stored)))
}

/// Fetch a user account by username.
#[utoipa::path(
    get,
    path = "/api/v1/user-accounts/{username}",
    params(
        ("username" = String, Path, description = "Unique login name")
    ),
    responses(
        (status = 200, description = "Account found", body = UserAccountResponseBody),
        (status = 404, description = "No account with that username", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["user-accounts"],
    operation_id = "getUserAccount"
)]
#[get("/user-accounts/{username}")]
pub async fn get_user_account(
    state: web::Data<HttpState>,
    path: web::Path<UserAccountPath>,
) -> ApiResult<web::Json<UserAccountResponseBody>> {
    let account = state
        .user_accounts
        .get_user_account(&path.into_inner().username)
        .await?;

    Ok(web::Json(UserAccountResponseBody::from(account)))
}

#[cfg(test)]
#[path = "user_accounts_tests.rs"]
mod tests;

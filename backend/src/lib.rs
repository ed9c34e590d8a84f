//! Pinboard backend library: a bulletin-board service exposing articles,
//! threaded comments, and author accounts over REST, backed by PostgreSQL.
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] holds entities, DTOs, services, and the ports they speak to.
//! - [`inbound`] adapts HTTP (actix-web) onto the driving ports.
//! - [`outbound`] adapts the driven ports onto Diesel/PostgreSQL.
//! - [`middleware`] carries the request trace correlation layer.
//! - [`doc`] assembles the OpenAPI document.
//!
//! The binary in `main.rs` wires these together; a missing database URL
//! selects fixture service backends so the HTTP surface stays responsive.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::{ApiResult, Error, ErrorCode, TraceId};
pub use middleware::trace::Trace;

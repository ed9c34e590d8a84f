//! Backend entry-point: wires the board REST endpoints and OpenAPI docs.

mod server;
#[cfg(test)]
mod tests;

use actix_web::web;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pinboard_backend::inbound::http::health::HealthState;
use pinboard_backend::outbound::persistence::DbPool;
use server::{AppSettings, ServerConfig, create_server};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(database_url) => {
            run_pending_migrations(database_url.to_owned()).await?;
            let pool = DbPool::new(settings.pool_config(database_url))
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database url configured; serving fixture data"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

/// Apply pending migrations before the pool starts serving repositories.
async fn run_pending_migrations(database_url: String) -> std::io::Result<()> {
    let applied = tokio::task::spawn_blocking(move || -> std::io::Result<usize> {
        use diesel::Connection;

        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)
            .map_err(|e| std::io::Error::other(format!("migration connection failed: {e}")))?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        Ok(versions.len())
    })
    .await
    .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))??;

    info!(applied, "database migrations up to date");
    Ok(())
}

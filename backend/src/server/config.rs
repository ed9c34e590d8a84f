//! HTTP server configuration objects and helpers.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use pinboard_backend::outbound::persistence::{DbPool, PoolConfig};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener and persistence,
/// loaded via OrthoConfig.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PINBOARD")]
pub struct AppSettings {
    /// IP address the HTTP listener binds to.
    pub host: Option<String>,
    /// Port the HTTP listener binds to.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Fixture data serves requests when unset.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub max_pool_size: Option<u32>,
    /// Seconds to wait for a pooled connection before giving up.
    pub connection_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Return the listener address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the configured host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse()?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Build the pool configuration for `url`, applying any configured
    /// size and timeout overrides on top of the pool defaults.
    #[must_use]
    pub fn pool_config(&self, url: &str) -> PoolConfig {
        let mut config = PoolConfig::new(url);
        if let Some(size) = self.max_pool_size {
            config = config.with_max_size(size);
        }
        if let Some(secs) = self.connection_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration binding the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses database-backed services for every
    /// board port; without it, fixture implementations serve requests.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by integration tests; retained for fixture access"
        )
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener configuration parsing.

    use std::ffi::OsString;
    use std::net::{IpAddr, Ipv4Addr};

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("pinboard-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PINBOARD_HOST", None::<String>),
            ("PINBOARD_PORT", None::<String>),
            ("PINBOARD_DATABASE_URL", None::<String>),
            ("PINBOARD_MAX_POOL_SIZE", None::<String>),
            ("PINBOARD_CONNECTION_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        let addr = settings.bind_addr().expect("default host should parse");
        assert_eq!(
            addr,
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
        );
        assert!(settings.database_url().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PINBOARD_HOST", Some("127.0.0.1".to_owned())),
            ("PINBOARD_PORT", Some("9090".to_owned())),
            (
                "PINBOARD_DATABASE_URL",
                Some("postgres://db/pinboard".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        let addr = settings.bind_addr().expect("host should parse");
        assert_eq!(addr, SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 9090));
        assert_eq!(settings.database_url(), Some("postgres://db/pinboard"));
    }

    #[rstest]
    fn host_names_are_rejected() {
        let _guard = lock_env([
            ("PINBOARD_HOST", Some("board.invalid".to_owned())),
            ("PINBOARD_PORT", None::<String>),
            ("PINBOARD_DATABASE_URL", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }

    #[rstest]
    fn pool_settings_fall_back_to_pool_defaults() {
        let _guard = lock_env([
            ("PINBOARD_MAX_POOL_SIZE", None::<String>),
            ("PINBOARD_CONNECTION_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        let config = settings.pool_config("postgres://db/pinboard");
        assert_eq!(config.database_url(), "postgres://db/pinboard");
        assert_eq!(config.max_size(), 10);
        assert_eq!(config.connection_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn pool_settings_override_the_pool_defaults() {
        let _guard = lock_env([
            ("PINBOARD_MAX_POOL_SIZE", Some("3".to_owned())),
            ("PINBOARD_CONNECTION_TIMEOUT_SECS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let config = settings.pool_config("postgres://db/pinboard");
        assert_eq!(config.max_size(), 3);
        assert_eq!(config.connection_timeout(), Duration::from_secs(5));
    }
}

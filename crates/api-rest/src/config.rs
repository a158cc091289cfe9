//! Server runtime configuration.
//!
//! Configuration is resolved once at startup and passed to [`crate::serve`]. Handlers never read
//! environment variables.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const REST_ADDR_ENV: &str = "ECOG_REST_ADDR";

/// Listen address used when [`REST_ADDR_ENV`] is unset or blank.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address {value:?}: {source}")]
    InvalidAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Reads [`REST_ADDR_ENV`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        rest_addr_from_env_value(std::env::var(REST_ADDR_ENV).ok()).map(Self::new)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

/// Parse the listen address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> Result<SocketAddr, ConfigError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());

    value
        .parse::<SocketAddr>()
        .map_err(|source| ConfigError::InvalidAddress { value, source })
}

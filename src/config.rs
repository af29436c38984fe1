//! Configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults matching each binary's
//! conventional bind address.
//!
//! The idle receive timeout is deliberately optional. When unset — the
//! default — a receive blocks indefinitely and a silent peer holds its
//! connection open.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::GatewayError;

/// Gateway (echo + status) configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Idle receive timeout per WebSocket connection; `None` waits forever.
    pub receive_timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads `LISTEN_ADDR` (default `0.0.0.0:3000`) and
    /// `WS_RECEIVE_TIMEOUT_SECS` (unset = no timeout). Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidListenAddr`] if `LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let receive_timeout =
            parse_env_opt::<u64>("WS_RECEIVE_TIMEOUT_SECS").map(Duration::from_secs);

        Ok(Self {
            listen_addr,
            receive_timeout,
        })
    }
}

/// Greeting server configuration.
///
/// Loaded once at startup via [`GreetConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GreetConfig {
    /// Socket address to bind the raw WebSocket listener to.
    pub listen_addr: SocketAddr,

    /// Idle receive timeout per connection; `None` waits forever.
    pub receive_timeout: Option<Duration>,
}

impl GreetConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads `GREET_LISTEN_ADDR` (default `127.0.0.1:8999`) and
    /// `GREET_RECEIVE_TIMEOUT_SECS` (unset = no timeout). Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidListenAddr`] if `GREET_LISTEN_ADDR`
    /// is set but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("GREET_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8999".to_string())
            .parse()?;

        let receive_timeout =
            parse_env_opt::<u64>("GREET_RECEIVE_TIMEOUT_SECS").map(Duration::from_secs);

        Ok(Self {
            listen_addr,
            receive_timeout,
        })
    }
}

/// Parses an environment variable as `T`, returning `None` when the
/// variable is unset or unparsable.
fn parse_env_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

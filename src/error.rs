//! Startup error types shared by both binaries.
//!
//! [`GatewayError`] covers the failures that can abort process startup:
//! configuration parsing and socket I/O. Conditions that end a single
//! connection (peer disconnect, transport failure mid-receive) are terminal
//! states of the per-connection loop, not values of this type.

use std::net::AddrParseError;

/// Startup error for either binary.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A listen address from the environment could not be parsed.
    #[error("invalid listen address: {0}")]
    InvalidListenAddr(#[from] AddrParseError),

    /// Binding or serving a socket failed.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}

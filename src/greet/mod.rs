//! Standalone greeting server.
//!
//! A raw `tokio-tungstenite` WebSocket server that greets each client on
//! connect, echoes text messages, and special-cases the `"AdaV3"` trigger
//! literal. Deliberately independent of the gateway's `/ws` handler: the
//! two binaries are separate deployment targets, not one system.

pub mod connection;
pub mod server;

//! WebSocket layer for the gateway: upgrade handler and echo loop.
//!
//! The endpoint at `/ws` accepts text frames and replies to each with the
//! same payload behind an `"Echo: "` prefix.

pub mod connection;
pub mod handler;

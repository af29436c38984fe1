//! # ada-gateway
//!
//! Minimal WebSocket servers for Ada clients: an Axum gateway exposing a
//! `/ws` echo endpoint plus a `GET /status` check, and a standalone
//! greeting server that echoes messages and special-cases the `"AdaV3"`
//! trigger.
//!
//! The two binaries are independent deployment targets of the same
//! receive/respond pattern. They deliberately share no handler core —
//! only configuration, logging, and the startup error type.
//!
//! ## Architecture
//!
//! ```text
//! ada-gateway (src/main.rs)        greet_server (src/bin/greet_server.rs)
//!     │                                │
//!     ├── REST Handlers (api/)         └── Accept Loop (greet/)
//!     │       └── GET /status              └── Greet/Echo Loop
//!     └── WS Echo Handler (ws/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod greet;
pub mod ws;

//! Per-connection echo loop for the `/ws` endpoint.
//!
//! The receive half is modeled as an explicit tagged result — a frame,
//! a close, or a transport failure — so the loop exits deterministically
//! on [`Received::Closed`] instead of treating disconnects as errors.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use uuid::Uuid;

/// Prefix prepended to every echoed payload.
pub const ECHO_PREFIX: &str = "Echo: ";

/// Terminal-state-aware result of one receive operation.
#[derive(Debug)]
enum Received {
    /// A text frame arrived.
    Text(String),
    /// The peer closed the connection (close frame or end of stream).
    Closed,
    /// The transport failed mid-receive.
    Failed(axum::Error),
}

/// Runs the echo loop for a single upgraded connection.
///
/// Replies to each text frame with [`ECHO_PREFIX`] + payload until the
/// peer disconnects. When `receive_timeout` is set, a connection idle for
/// that long is closed; `None` waits indefinitely.
pub async fn run_connection(
    mut socket: WebSocket,
    conn_id: Uuid,
    receive_timeout: Option<Duration>,
) {
    tracing::info!(%conn_id, "client connected");

    loop {
        let received = match receive_timeout {
            Some(limit) => match tokio::time::timeout(limit, recv_text(&mut socket)).await {
                Ok(received) => received,
                Err(_) => {
                    tracing::info!(%conn_id, "idle timeout reached, closing connection");
                    let _ = socket.send(Message::Close(None)).await;
                    break;
                }
            },
            None => recv_text(&mut socket).await,
        };

        match received {
            Received::Text(text) => {
                let reply = echo_reply(&text);
                if socket.send(Message::text(reply)).await.is_err() {
                    // Peer went away mid-send.
                    break;
                }
            }
            Received::Closed => {
                tracing::info!(%conn_id, "client disconnected");
                break;
            }
            Received::Failed(err) => {
                tracing::warn!(%conn_id, error = %err, "transport failure, dropping connection");
                break;
            }
        }
    }
}

/// Waits for the next text frame, skipping binary and ping/pong traffic.
async fn recv_text(socket: &mut WebSocket) -> Received {
    loop {
        match socket.recv().await {
            Some(Ok(Message::Text(text))) => return Received::Text(text.to_string()),
            Some(Ok(Message::Close(_))) | None => return Received::Closed,
            Some(Ok(_)) => {}
            Some(Err(err)) => return Received::Failed(err),
        }
    }
}

/// Builds the echo response for one received payload.
fn echo_reply(text: &str) -> String {
    format!("{ECHO_PREFIX}{text}")
}

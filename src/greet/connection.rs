//! Per-connection greet/echo loop.
//!
//! Mirrors the gateway's tagged receive result over the raw
//! `tokio-tungstenite` stream: a frame, a close, or a transport failure.

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::error::{Error, ProtocolError};
use uuid::Uuid;

/// First frame sent to every client after the handshake completes.
pub const GREETING: &str = "Hello from the server!";

/// Literal message that selects the special-cased reply.
pub const TRIGGER: &str = "AdaV3";

/// Reply sent for the trigger literal.
pub const TRIGGER_REPLY: &str = "hello Ada V3";

/// Terminal-state-aware result of one receive operation.
#[derive(Debug)]
enum Received {
    Text(String),
    Closed,
    Failed(Error),
}

/// Performs the WebSocket handshake, sends the greeting, then runs the
/// echo loop until the peer disconnects.
pub async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    receive_timeout: Option<Duration>,
) {
    let conn_id = Uuid::new_v4();

    let mut ws = match tokio_tungstenite::accept_async(stream).await {
        Ok(ws) => ws,
        Err(err) => {
            tracing::warn!(%conn_id, %peer, error = %err, "handshake failed");
            return;
        }
    };

    tracing::info!(%conn_id, %peer, "client connected");

    // The greeting is the very first server frame, before any client
    // message is processed.
    if ws.send(Message::text(GREETING)).await.is_err() {
        tracing::info!(%conn_id, %peer, "client disconnected");
        return;
    }

    loop {
        let received = match receive_timeout {
            Some(limit) => match tokio::time::timeout(limit, recv_text(&mut ws)).await {
                Ok(received) => received,
                Err(_) => {
                    tracing::info!(%conn_id, %peer, "idle timeout reached, closing connection");
                    let _ = ws.close(None).await;
                    break;
                }
            },
            None => recv_text(&mut ws).await,
        };

        match received {
            Received::Text(text) => {
                tracing::debug!(%conn_id, message = %text, "received");
                let reply = reply_for(&text);
                if ws.send(Message::text(reply)).await.is_err() {
                    break;
                }
            }
            Received::Closed => {
                tracing::info!(%conn_id, %peer, "client disconnected");
                break;
            }
            Received::Failed(err) => {
                tracing::warn!(%conn_id, %peer, error = %err, "transport failure, dropping connection");
                break;
            }
        }
    }
}

/// Waits for the next text frame, skipping binary and ping/pong traffic.
///
/// An abrupt TCP reset without a closing handshake counts as a close, not
/// a failure.
async fn recv_text(ws: &mut WebSocketStream<TcpStream>) -> Received {
    loop {
        match ws.next().await {
            Some(Ok(Message::Text(text))) => return Received::Text(text.to_string()),
            Some(Ok(Message::Close(_))) | None => return Received::Closed,
            Some(Ok(_)) => {}
            Some(Err(
                Error::ConnectionClosed
                | Error::AlreadyClosed
                | Error::Protocol(ProtocolError::ResetWithoutClosingHandshake),
            )) => return Received::Closed,
            Some(Err(err)) => return Received::Failed(err),
        }
    }
}

/// Chooses the reply for one received payload.
///
/// Exact match on [`TRIGGER`] — case-sensitive, no trimming — selects
/// [`TRIGGER_REPLY`]; everything else is echoed behind the prefix.
fn reply_for(text: &str) -> String {
    if text == TRIGGER {
        TRIGGER_REPLY.to_string()
    } else {
        format!("Echo: {text}")
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn trigger_gets_special_reply() {
        assert_eq!(reply_for("AdaV3"), "hello Ada V3");
    }

    #[test]
    fn other_messages_echo() {
        assert_eq!(reply_for("hi"), "Echo: hi");
    }

    #[test]
    fn trigger_is_case_sensitive() {
        assert_eq!(reply_for("adav3"), "Echo: adav3");
        assert_eq!(reply_for("ADAV3"), "Echo: ADAV3");
    }

    #[test]
    fn trigger_is_not_trimmed() {
        assert_eq!(reply_for(" AdaV3"), "Echo:  AdaV3");
        assert_eq!(reply_for("AdaV3 "), "Echo: AdaV3 ");
    }

    #[test]
    fn empty_message_yields_bare_prefix() {
        assert_eq!(reply_for(""), "Echo: ");
    }
}

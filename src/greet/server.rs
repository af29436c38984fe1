//! Accept loop for the standalone greeting server.

use std::time::Duration;

use tokio::net::TcpListener;

use super::connection::handle_connection;

/// Serves WebSocket connections from `listener` until the process exits.
///
/// Each accepted socket is handled on its own task, so one slow or idle
/// client never blocks the others. An accept failure is logged and the
/// loop keeps going.
pub async fn serve(listener: TcpListener, receive_timeout: Option<Duration>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                tokio::spawn(handle_connection(stream, peer, receive_timeout));
            }
            Err(err) => {
                tracing::warn!(error = %err, "accept failed");
            }
        }
    }
}

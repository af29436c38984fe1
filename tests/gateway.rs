//! End-to-end tests for the gateway router: status endpoint and `/ws`
//! echo loop, driven over real sockets.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use ada_gateway::api;
use ada_gateway::app_state::AppState;
use ada_gateway::config::GatewayConfig;
use ada_gateway::ws::handler::ws_handler;

/// Binds the gateway router on an ephemeral loopback port and returns the
/// bound address.
async fn spawn_gateway() -> SocketAddr {
    let Ok(listen_addr) = "127.0.0.1:0".parse::<SocketAddr>() else {
        panic!("valid loopback addr");
    };
    let state = AppState {
        config: Arc::new(GatewayConfig {
            listen_addr,
            receive_timeout: None,
        }),
    };
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .with_state(state);

    let Ok(listener) = tokio::net::TcpListener::bind(listen_addr).await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local_addr failed");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn connect_ws(addr: SocketAddr) -> WebSocketStream<MaybeTlsStream<TcpStream>> {
    let Ok((ws, _)) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws")).await else {
        panic!("ws connect failed");
    };
    ws
}

async fn next_text(ws: &mut WebSocketStream<MaybeTlsStream<TcpStream>>) -> String {
    loop {
        match ws.next().await {
            Some(Ok(Message::Text(text))) => return text.to_string(),
            Some(Ok(_)) => {}
            other => panic!("expected text frame, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn status_returns_running() {
    let addr = spawn_gateway().await;

    let Ok(resp) = reqwest::get(format!("http://{addr}/status")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 200);

    let Ok(body) = resp.json::<serde_json::Value>().await else {
        panic!("body was not json");
    };
    assert_eq!(body, serde_json::json!({"status": "running"}));
}

#[tokio::test]
async fn ws_echoes_text() {
    let addr = spawn_gateway().await;
    let mut ws = connect_ws(addr).await;

    let Ok(()) = ws.send(Message::text("test")).await else {
        panic!("send failed");
    };
    assert_eq!(next_text(&mut ws).await, "Echo: test");
}

#[tokio::test]
async fn ws_echoes_empty_string() {
    let addr = spawn_gateway().await;
    let mut ws = connect_ws(addr).await;

    let Ok(()) = ws.send(Message::text("")).await else {
        panic!("send failed");
    };
    assert_eq!(next_text(&mut ws).await, "Echo: ");
}

#[tokio::test]
async fn clean_close_sends_no_further_frames() {
    let addr = spawn_gateway().await;
    let mut ws = connect_ws(addr).await;

    let Ok(()) = ws.send(Message::text("bye")).await else {
        panic!("send failed");
    };
    assert_eq!(next_text(&mut ws).await, "Echo: bye");

    let Ok(()) = ws.close(None).await else {
        panic!("close failed");
    };
    while let Some(Ok(frame)) = ws.next().await {
        assert!(
            !frame.is_text(),
            "unexpected frame after close: {frame:?}"
        );
    }
}

#[tokio::test]
async fn abrupt_client_drop_leaves_server_usable() {
    let addr = spawn_gateway().await;

    let mut ws = connect_ws(addr).await;
    let Ok(()) = ws.send(Message::text("test")).await else {
        panic!("send failed");
    };
    assert_eq!(next_text(&mut ws).await, "Echo: test");
    // Drop without a closing handshake.
    drop(ws);

    // The server must keep serving both endpoints afterwards.
    let mut ws2 = connect_ws(addr).await;
    let Ok(()) = ws2.send(Message::text("again")).await else {
        panic!("send failed");
    };
    assert_eq!(next_text(&mut ws2).await, "Echo: again");

    let Ok(resp) = reqwest::get(format!("http://{addr}/status")).await else {
        panic!("request failed");
    };
    assert_eq!(resp.status().as_u16(), 200);
}

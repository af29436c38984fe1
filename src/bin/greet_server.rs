//! Standalone greeting server entry point.
//!
//! Binds a raw WebSocket listener (default `127.0.0.1:8999`) and serves
//! the greet/echo loop until the process is killed.

use tracing_subscriber::EnvFilter;

use ada_gateway::config::GreetConfig;
use ada_gateway::error::GatewayError;
use ada_gateway::greet;

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GreetConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting greet-server");

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    greet::server::serve(listener, config.receive_timeout).await;

    Ok(())
}

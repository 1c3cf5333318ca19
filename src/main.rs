mod apple;
mod config;
mod error;
mod mcp;
mod tools;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::load_default()?;
    let bridge = apple::OsaScript::new(config.bridge.clone());
    let server = mcp::Server::new(config, bridge);

    tracing::info!("Apple Calendar MCP Server running on stdio");
    server.run().await
}

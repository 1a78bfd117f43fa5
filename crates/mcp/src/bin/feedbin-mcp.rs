// Feedbin MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use feedbin_mcp::config::{ENV_BASE_URL, ENV_EMAIL, ENV_PASSWORD, ENV_TIMEOUT_SECS};
use feedbin_mcp::{register_feedbin_tools, McpServer, ServerConfig, ToolRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "feedbin-mcp",
    about = "MCP server for the Feedbin RSS reader, served over stdio",
    after_help = "Environment:\n  \
        FEEDBIN_EMAIL         Feedbin account email (required)\n  \
        FEEDBIN_PASSWORD      Feedbin account password (required)\n  \
        FEEDBIN_BASE_URL      API base URL [default: https://api.feedbin.com/v2/]\n  \
        FEEDBIN_TIMEOUT_SECS  Request timeout in seconds [default: 30]\n  \
        RUST_LOG              Log filter, written to stderr [default: info]"
)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Feedbin MCP server starting...");

    let config = ServerConfig::from_env().with_context(|| {
        format!(
            "Invalid configuration (set {} and {}; optional {} and {})",
            ENV_EMAIL, ENV_PASSWORD, ENV_BASE_URL, ENV_TIMEOUT_SECS
        )
    })?;
    tracing::info!(base_url = %config.base_url, "Using Feedbin API");

    let client = config.client().context("Failed to build Feedbin client")?;

    let mut registry = ToolRegistry::new();
    register_feedbin_tools(&mut registry, &client);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}

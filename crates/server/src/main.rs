use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod api;
mod config;

use config::AppState;

#[derive(Parser, Debug)]
#[command(name = "meraki-mcp-http")]
#[command(about = "MCP server for the Cisco Meraki Dashboard API over HTTP", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "MERAKI_MCP_CONFIG", default_value = "meraki-mcp.toml")]
    config: PathBuf,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meraki_mcp=info,meraki_mcp_server=info,tower_http=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let args = Args::parse();

    let mut config = config::load(&args.config)?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    tracing::info!(profile = %config.profile(), "Starting Meraki MCP HTTP server");
    let state = AppState::new(&config)?;

    api::serve(&config.http_addr(), state).await?;

    Ok(())
}

// Standalone MCP server binary (stdio transport) plus tool and coverage reports

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meraki_mcp::coverage;
use meraki_mcp::{build_registry, McpServer};
use meraki_mcp_core::{McpConfig, ModuleSelection, Profile};
use meraki_sdk::DashboardClient;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "meraki-mcp")]
#[command(about = "MCP server for the Cisco Meraki Dashboard API", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "MERAKI_MCP_CONFIG", default_value = "meraki-mcp.toml")]
    config: PathBuf,

    /// Log output format (logs always go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve MCP over stdin/stdout (default)
    Serve,

    /// List the tools a profile registers
    Tools {
        /// Profile to list instead of the configured one
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Compare implemented operations against the SDK's method list
    Coverage {
        /// JSON category map or OpenAPI document listing every SDK method
        #[arg(long)]
        sdk_methods: PathBuf,

        /// Source directories scanned for additional call sites
        #[arg(long = "source")]
        sources: Vec<PathBuf>,

        /// Write the full report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format);

    let config = McpConfig::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!(profile = %config.profile(), "Meraki MCP server starting");
            let server = McpServer::from_config(&config)?;
            server.serve_stdio().await?;
        }
        Command::Tools { profile } => {
            let selection = match profile {
                Some(name) => ModuleSelection::new(Profile::from_name(&name)),
                None => config.module_selection(),
            };
            let registry = build_registry(offline_client(&config)?, &selection);

            println!("{} profile: {} tools", selection.profile, registry.len());
            for schema in registry.list_schemas() {
                println!("  {:<60} {}", schema.name, schema.description);
            }
        }
        Command::Coverage {
            sdk_methods,
            sources,
            output,
        } => {
            let sdk = coverage::load_sdk_methods(&sdk_methods)?;
            let registry = build_registry(offline_client(&config)?, &ModuleSelection::default());

            let mut implemented = vec![coverage::registry_methods(&registry.operations())];
            if !sources.is_empty() {
                implemented.push(coverage::scan_sources(&sources)?);
            }
            let report = coverage::analyze(&sdk, &coverage::merge(implemented));

            println!("{}", report.summary());
            if let Some(path) = output {
                report.write_json(&path)?;
                tracing::info!(path = %path.display(), "Coverage report written");
            }
        }
    }

    Ok(())
}

/// A client for commands that only inspect tool metadata and never call the API
fn offline_client(config: &McpConfig) -> Result<Arc<DashboardClient>> {
    let api_key = config
        .meraki
        .api_key
        .clone()
        .unwrap_or_else(|| "offline".to_string());
    let client = DashboardClient::builder()
        .base_url(config.meraki.base_url.clone())
        .api_key(api_key)
        .build()?;
    Ok(Arc::new(client))
}

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use meraki_mcp::McpServer;
use meraki_mcp_core::McpConfig;
use std::path::Path;

/// Load the shared configuration; a missing file means defaults
pub fn load(config_path: &Path) -> Result<McpConfig> {
    McpConfig::load(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mcp: McpServer,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: &McpConfig) -> Result<Self> {
        let mcp = McpServer::from_config(config).context("Failed to create MCP server")?;
        Ok(Self::from_server(mcp))
    }

    pub fn from_server(mcp: McpServer) -> Self {
        Self {
            mcp,
            started_at: Utc::now(),
        }
    }
}

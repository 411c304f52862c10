// MCP (Model Context Protocol) server for the Cisco Meraki Dashboard API
// Exposes Dashboard operations as tools to agent clients

pub mod coverage;
pub mod format;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;

pub use resources::ResourceProvider;
pub use server::McpServer;
pub use tools::{build_registry, ToolRegistry};

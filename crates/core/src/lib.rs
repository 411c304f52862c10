// Shared types for the Meraki MCP server: SDK categories, tool profiles and
// configuration

pub mod category;
pub mod config;
pub mod error;
pub mod profile;

pub use category::SdkCategory;
pub use config::McpConfig;
pub use error::{CoreError, CoreResult};
pub use profile::{ModuleSelection, Profile};

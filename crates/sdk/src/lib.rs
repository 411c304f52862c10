//! # Meraki SDK
//!
//! Async client for the Cisco Meraki Dashboard API v1.
//!
//! Operations are described by a static endpoint catalog, one table per SDK
//! category, and invoked by operation id. A few typed conveniences cover
//! the calls the MCP helpers make directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meraki_sdk::{CallArgs, DashboardClient, MerakiResult};
//!
//! #[tokio::main]
//! async fn main() -> MerakiResult<()> {
//!     let client = DashboardClient::builder()
//!         .api_key("your-dashboard-api-key")
//!         .build()?;
//!
//!     let orgs = client.organizations().get_organizations().await?;
//!     println!("Found {} organizations", orgs.len());
//!
//!     // Any catalogued operation by id
//!     let ports = client
//!         .switch()
//!         .invoke("getDeviceSwitchPorts", CallArgs::new().path("serial", "Q2XX-AAAA-BBBB"))
//!         .await?;
//!     println!("{}", ports);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod args;
pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

pub use api::CategoryApi;
pub use args::CallArgs;
pub use client::{DashboardClient, DashboardClientBuilder};
pub use config::{ClientConfig, RetryConfig};
pub use endpoint::{Endpoint, HttpMethod, Param, ParamKind};
pub use error::{MerakiError, MerakiResult};
pub use types::{Device, Network, NetworkClient, Organization};

pub use meraki_mcp_core::SdkCategory;

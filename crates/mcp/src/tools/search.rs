// Inventory search across every accessible organization

use super::{json_schema_object, json_schema_string, tool_error, Tool};
use crate::protocol::{CallToolResult, ToolAnnotations, ToolSchema};
use anyhow::{bail, Context, Result};
use meraki_sdk::{DashboardClient, Device, Organization};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt::Write;
use std::sync::Arc;

pub const SEARCH_DEVICE_BY_SERIAL: &str = "search_device_by_serial";
pub const SEARCH_DEVICES_BY_MODEL: &str = "search_devices_by_model";
pub const FIND_UNCLAIMED_DEVICES: &str = "find_unclaimed_devices";

/// Devices listed per organization before collapsing the rest
const DEVICES_PER_ORG: usize = 10;

fn read_only() -> Option<ToolAnnotations> {
    Some(ToolAnnotations {
        read_only_hint: true,
        destructive_hint: false,
    })
}

/// Organizations to search with their device inventories.
///
/// An organization whose inventory cannot be read is skipped so one
/// restricted org does not hide matches in the others.
async fn inventories(
    client: &DashboardClient,
    orgs: Vec<Organization>,
) -> Vec<(Organization, Vec<Device>)> {
    let mut found = Vec::with_capacity(orgs.len());
    for org in orgs {
        match client.organizations().get_organization_devices(&org.id).await {
            Ok(devices) => found.push((org, devices)),
            Err(e) => {
                tracing::warn!(org = %org.id, error = %e, "Skipping organization inventory");
            }
        }
    }
    found
}

fn device_line(device: &Device) -> String {
    format!(
        "- **{}** ({}) - Serial: {}",
        device.display_name(),
        device.model.as_deref().unwrap_or("unknown model"),
        device.serial
    )
}

fn render_org_group(out: &mut String, org: &Organization, devices: &[&Device]) {
    let _ = writeln!(out, "## {} ({} devices)\n", org.name, devices.len());
    for device in devices.iter().take(DEVICES_PER_ORG) {
        let _ = writeln!(out, "{}", device_line(device));
    }
    if devices.len() > DEVICES_PER_ORG {
        let _ = writeln!(out, "\n*...and {} more*", devices.len() - DEVICES_PER_ORG);
    }
    let _ = writeln!(out);
}

/// Locate a device by serial in any accessible organization
pub struct SearchDeviceBySerialTool {
    client: Arc<DashboardClient>,
}

impl SearchDeviceBySerialTool {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchDeviceBySerialArgs {
    serial: String,
}

#[async_trait::async_trait]
impl Tool for SearchDeviceBySerialTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: SEARCH_DEVICE_BY_SERIAL.to_string(),
            description: "🔎 Find a device by serial number across all accessible organizations"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "serial": json_schema_string("Device serial, e.g. Q2XX-AAAA-BBBB (case-insensitive)")
                }),
                vec!["serial"],
            ),
            annotations: read_only(),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        match self.search(arguments).await {
            Ok(report) => Ok(CallToolResult::text(report)),
            Err(e) => Ok(tool_error(SEARCH_DEVICE_BY_SERIAL, format!("{:#}", e))),
        }
    }
}

impl SearchDeviceBySerialTool {
    async fn search(&self, arguments: Value) -> Result<String> {
        let args: SearchDeviceBySerialArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for search_device_by_serial")?;
        let serial = args.serial.trim().to_uppercase();
        if serial.is_empty() {
            bail!("serial must not be empty");
        }

        let orgs = self.client.organizations().get_organizations().await?;
        for (org, devices) in inventories(&self.client, orgs).await {
            if let Some(device) = devices
                .into_iter()
                .find(|d| d.serial.eq_ignore_ascii_case(&serial))
            {
                tracing::debug!(serial = %serial, org = %org.id, "Serial matched");
                return Ok(self.render_found(&org, &device).await);
            }
        }

        let mut out = format!(
            "❌ Device with serial **{}** not found in any accessible organization.\n\n",
            serial
        );
        let _ = writeln!(out, "Possible reasons:");
        let _ = writeln!(out, "- The serial number is mistyped");
        let _ = writeln!(out, "- The device belongs to an organization this API key cannot access");
        let _ = writeln!(out, "- The device has not been added to any inventory yet");
        Ok(out)
    }

    async fn render_found(&self, org: &Organization, device: &Device) -> String {
        let mut out = String::from("# ✅ Device Found!\n\n");
        let _ = writeln!(out, "**Organization**: {} (ID: {})\n", org.name, org.id);

        let _ = writeln!(out, "## Device Details");
        let _ = writeln!(out, "- **Serial**: {}", device.serial);
        let _ = writeln!(out, "- **Name**: {}", device.display_name());
        let fields = [
            ("Model", &device.model),
            ("MAC", &device.mac),
            ("Product Type", &device.product_type),
            ("Firmware", &device.firmware),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                let _ = writeln!(out, "- **{}**: {}", label, value);
            }
        }

        let _ = writeln!(out, "\n## Network");
        match &device.network_id {
            Some(network_id) => match self.client.networks().get_network(network_id).await {
                Ok(network) => {
                    let _ = writeln!(out, "- **Name**: {}", network.name);
                    let _ = writeln!(out, "- **ID**: {}", network.id);
                }
                Err(e) => {
                    tracing::debug!(network = %network_id, error = %e, "Network lookup failed");
                    let _ = writeln!(out, "- **ID**: {}", network_id);
                }
            },
            None => {
                let _ = writeln!(out, "- Unclaimed (not assigned to a network)");
            }
        }

        let address = device.extra.get("address").and_then(Value::as_str);
        let lat = device.extra.get("lat").and_then(Value::as_f64);
        let lng = device.extra.get("lng").and_then(Value::as_f64);
        if address.is_some() || lat.is_some() {
            let _ = writeln!(out, "\n## Location");
            if let Some(address) = address.filter(|a| !a.is_empty()) {
                let _ = writeln!(out, "- **Address**: {}", address);
            }
            if let (Some(lat), Some(lng)) = (lat, lng) {
                let _ = writeln!(out, "- **Coordinates**: {}, {}", lat, lng);
            }
        }
        out
    }
}

/// List devices whose model contains a pattern
pub struct SearchDevicesByModelTool {
    client: Arc<DashboardClient>,
}

impl SearchDevicesByModelTool {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchDevicesByModelArgs {
    model: String,
    #[serde(default)]
    organization_id: Option<String>,
}

#[async_trait::async_trait]
impl Tool for SearchDevicesByModelTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: SEARCH_DEVICES_BY_MODEL.to_string(),
            description: "🔎 Find devices whose model contains a pattern (e.g. MR, MS225)"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "model": json_schema_string("Model or model fragment, case-insensitive"),
                    "organization_id": json_schema_string("Only search this organization")
                }),
                vec!["model"],
            ),
            annotations: read_only(),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        match self.search(arguments).await {
            Ok(report) => Ok(CallToolResult::text(report)),
            Err(e) => Ok(tool_error(SEARCH_DEVICES_BY_MODEL, format!("{:#}", e))),
        }
    }
}

impl SearchDevicesByModelTool {
    async fn search(&self, arguments: Value) -> Result<String> {
        let args: SearchDevicesByModelArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for search_devices_by_model")?;
        let pattern = args.model.trim().to_lowercase();
        if pattern.is_empty() {
            bail!("model must not be empty");
        }

        let organizations = self.client.organizations();
        let orgs = match &args.organization_id {
            Some(id) => vec![organizations.get_organization(id).await?],
            None => organizations.get_organizations().await?,
        };

        let mut out = format!("# 🔎 Devices matching '{}'\n\n", args.model.trim());
        let mut total = 0;
        for (org, devices) in inventories(&self.client, orgs).await {
            let matches: Vec<&Device> = devices
                .iter()
                .filter(|d| {
                    d.model
                        .as_deref()
                        .is_some_and(|m| m.to_lowercase().contains(&pattern))
                })
                .collect();
            if matches.is_empty() {
                continue;
            }
            total += matches.len();
            render_org_group(&mut out, &org, &matches);
        }

        if total == 0 {
            return Ok(format!(
                "❌ No devices found with model matching '{}'",
                args.model.trim()
            ));
        }
        let _ = writeln!(out, "## Summary\n**Total devices found**: {}", total);
        Ok(out)
    }
}

/// List inventory devices that are not assigned to any network
pub struct FindUnclaimedDevicesTool {
    client: Arc<DashboardClient>,
}

impl FindUnclaimedDevicesTool {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for FindUnclaimedDevicesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: FIND_UNCLAIMED_DEVICES.to_string(),
            description: "📦 List devices in inventory that are not assigned to a network"
                .to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
            annotations: read_only(),
        }
    }

    async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
        match self.find().await {
            Ok(report) => Ok(CallToolResult::text(report)),
            Err(e) => Ok(tool_error(FIND_UNCLAIMED_DEVICES, format!("{:#}", e))),
        }
    }
}

impl FindUnclaimedDevicesTool {
    async fn find(&self) -> Result<String> {
        let orgs = self.client.organizations().get_organizations().await?;

        let mut out = String::from("# 📦 Unclaimed Devices\n\n");
        let mut total = 0;
        for (org, devices) in inventories(&self.client, orgs).await {
            let unclaimed: Vec<&Device> =
                devices.iter().filter(|d| d.network_id.is_none()).collect();
            if unclaimed.is_empty() {
                continue;
            }
            total += unclaimed.len();
            render_org_group(&mut out, &org, &unclaimed);
        }

        if total == 0 {
            return Ok("✅ No unclaimed devices found in any organization".to_string());
        }
        let _ = writeln!(out, "## Summary\n**Total unclaimed devices**: {}", total);
        Ok(out)
    }
}

// Discovery helpers

use super::{json_schema_object, json_schema_string, tool_error, Tool};
use crate::protocol::{CallToolResult, ToolAnnotations, ToolSchema};
use anyhow::{Context, Result};
use meraki_mcp_core::profile::{HELPERS_MODULE, IP_LOOKUP_MODULE, RESOURCES_MODULE, SEARCH_MODULE};
use meraki_mcp_core::ModuleSelection;
use meraki_sdk::{catalog, DashboardClient, Device, Endpoint, HttpMethod, SdkCategory};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

pub const CHECK_NETWORK_CAPABILITIES: &str = "check_network_capabilities";
pub const SUGGEST_TOOLS_FOR_TASK: &str = "suggest_tools_for_task";
pub const LIST_TOOL_CATEGORIES: &str = "list_tool_categories";
pub const HELPER_TOOLS_INFO: &str = "helper_tools_info";

/// Devices listed per model family before collapsing the rest
const DEVICES_PER_GROUP: usize = 3;
/// Tool hints listed per product type
const HINTS_PER_PRODUCT: usize = 3;
/// Catalog tools suggested per matched topic
const TOOLS_PER_TOPIC: usize = 5;

/// Product types a network can carry, with what each one brings
const PRODUCTS: &[(&str, SdkCategory, &str, &[&str])] = &[
    (
        "appliance",
        SdkCategory::Appliance,
        "🔐 Security Appliance (MX)",
        &["Firewall management", "VPN configuration", "Traffic shaping", "DHCP services", "Uplink monitoring"],
    ),
    (
        "switch",
        SdkCategory::Switch,
        "🔌 Switches (MS)",
        &["Port configuration", "VLAN management", "STP settings", "PoE control"],
    ),
    (
        "wireless",
        SdkCategory::Wireless,
        "📡 Wireless (MR)",
        &["SSID configuration", "RF profiles", "Client analytics", "Bluetooth settings"],
    ),
    (
        "camera",
        SdkCategory::Camera,
        "📹 Cameras (MV)",
        &["Video quality and retention", "Motion detection", "Analytics zones", "Snapshots"],
    ),
    (
        "cellularGateway",
        SdkCategory::CellularGateway,
        "📶 Cellular Gateways (MG)",
        &["LAN settings", "Port forwarding", "Uplink status"],
    ),
    (
        "sensor",
        SdkCategory::Sensor,
        "🌡️ Sensors (MT)",
        &["Environmental readings", "Alert profiles", "Relationships"],
    ),
];

/// Summarize what a network contains and which tools apply to it
pub struct CheckNetworkCapabilitiesTool {
    client: Arc<DashboardClient>,
}

impl CheckNetworkCapabilitiesTool {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CheckNetworkCapabilitiesArgs {
    network_id: String,
}

#[async_trait::async_trait]
impl Tool for CheckNetworkCapabilitiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: CHECK_NETWORK_CAPABILITIES.to_string(),
            description: "🔍 Check which device types a network has and which tool categories apply"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "network_id": json_schema_string("Network ID to check")
                }),
                vec!["network_id"],
            ),
            annotations: Some(ToolAnnotations {
                read_only_hint: true,
                destructive_hint: false,
            }),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        match self.check(arguments).await {
            Ok(report) => Ok(CallToolResult::text(report)),
            Err(e) => Ok(tool_error(CHECK_NETWORK_CAPABILITIES, format!("{:#}", e))),
        }
    }
}

impl CheckNetworkCapabilitiesTool {
    async fn check(&self, arguments: Value) -> Result<String> {
        let args: CheckNetworkCapabilitiesArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for check_network_capabilities")?;

        let networks = self.client.networks();
        let network = networks.get_network(&args.network_id).await?;
        let devices = networks.get_network_devices(&args.network_id).await?;

        let mut out = String::new();
        let _ = writeln!(out, "🔍 Network Capabilities Check");
        let _ = writeln!(out, "{}\n", "=".repeat(50));
        let _ = writeln!(out, "Network: {}", network.name);
        let _ = writeln!(out, "Product Types: {}\n", network.product_types.join(", "));

        let present: Vec<_> = PRODUCTS
            .iter()
            .filter(|(product, ..)| network.product_types.iter().any(|p| p == product))
            .collect();

        let _ = writeln!(out, "✅ Available Capabilities:");
        if present.is_empty() {
            let _ = writeln!(out, "\n   (no managed product types)");
        }
        for (_, _, title, features) in &present {
            let _ = writeln!(out, "\n{}:", title);
            for feature in features.iter() {
                let _ = writeln!(out, "   • {}", feature);
            }
        }

        render_inventory(&mut out, &devices);

        if !present.is_empty() {
            let _ = writeln!(out, "\n💡 Recommended Tools:");
            for (_, category, title, _) in &present {
                let _ = writeln!(out, "\n   For {}:", title);
                for endpoint in catalog::endpoints(*category)
                    .iter()
                    .filter(|e| e.method == HttpMethod::Get)
                    .take(HINTS_PER_PRODUCT)
                {
                    let _ = writeln!(out, "   • {} - {}", endpoint.tool_name(), endpoint.summary);
                }
            }
        }

        Ok(out)
    }
}

/// Devices grouped by model family (`MS`, `MR`, ...)
fn render_inventory(out: &mut String, devices: &[Device]) {
    let _ = writeln!(out, "\n📊 Device Inventory ({} devices):", devices.len());

    let mut groups: BTreeMap<String, Vec<&Device>> = BTreeMap::new();
    for device in devices {
        let family = device
            .model
            .as_deref()
            .map(|m| m.chars().take(2).collect::<String>())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        groups.entry(family).or_default().push(device);
    }

    for (family, members) in &groups {
        let _ = writeln!(out, "\n{} Devices ({}):", family, members.len());
        for device in members.iter().take(DEVICES_PER_GROUP) {
            let status = if device.status.as_deref() == Some("online") {
                "🟢"
            } else {
                "🔴"
            };
            let _ = writeln!(
                out,
                "   {} {} ({})",
                status,
                device.display_name(),
                device.model.as_deref().unwrap_or("unknown model")
            );
        }
        if members.len() > DEVICES_PER_GROUP {
            let _ = writeln!(out, "   ... and {} more", members.len() - DEVICES_PER_GROUP);
        }
    }
}

/// A task area: trigger words, the operation id fragments whose tools
/// cover it, and any custom tools that help
struct Topic {
    title: &'static str,
    keywords: &'static [&'static str],
    operations: &'static [&'static str],
    custom: &'static [&'static str],
}

const TOPICS: &[Topic] = &[
    Topic {
        title: "🔥 Firewall",
        keywords: &["firewall", "block", "allow", "port forward", "nat"],
        operations: &["Firewall"],
        custom: &[],
    },
    Topic {
        title: "🔒 VPN",
        keywords: &["vpn", "site-to-site", "tunnel"],
        operations: &["Vpn"],
        custom: &[],
    },
    Topic {
        title: "📡 Clients and WiFi",
        keywords: &["client", "wifi", "wireless", "ssid", "connected"],
        operations: &["Clients", "Ssids"],
        custom: &[crate::tools::ip_lookup::FIND_DEVICE_BY_IP],
    },
    Topic {
        title: "📈 Monitoring",
        keywords: &["monitor", "performance", "health", "latency", "uptime", "status"],
        operations: &["Statuses", "Health", "LossAndLatency"],
        custom: &[CHECK_NETWORK_CAPABILITIES],
    },
    Topic {
        title: "🏷️ DHCP and addressing",
        keywords: &["dhcp", "reservation", "fixed ip", "vlan", "ip address"],
        operations: &["Vlan", "Dhcp"],
        custom: &[
            crate::tools::ip_lookup::FIND_DEVICE_BY_IP,
            crate::tools::ip_lookup::CREATE_DHCP_RESERVATION_FROM_IP,
        ],
    },
    Topic {
        title: "🚦 Traffic shaping and QoS",
        keywords: &["qos", "traffic shaping", "bandwidth", "throttle"],
        operations: &["TrafficShaping"],
        custom: &[],
    },
    Topic {
        title: "🔔 Alerts",
        keywords: &["alert", "notification", "webhook"],
        operations: &["Alerts", "Webhooks"],
        custom: &[],
    },
    Topic {
        title: "📝 Configuration changes",
        keywords: &["change", "audit", "who changed", "config log"],
        operations: &["ConfigurationChanges"],
        custom: &[],
    },
    Topic {
        title: "🔎 Inventory",
        keywords: &["serial", "inventory", "model", "unclaimed", "find device"],
        operations: &["Inventory"],
        custom: &[
            crate::tools::search::SEARCH_DEVICE_BY_SERIAL,
            crate::tools::search::SEARCH_DEVICES_BY_MODEL,
            crate::tools::search::FIND_UNCLAIMED_DEVICES,
        ],
    },
];

/// Module that registers a custom tool
fn custom_module(tool: &str) -> &'static str {
    use crate::tools::{ip_lookup, search};
    match tool {
        ip_lookup::FIND_DEVICE_BY_IP | ip_lookup::CREATE_DHCP_RESERVATION_FROM_IP => {
            IP_LOOKUP_MODULE
        }
        search::SEARCH_DEVICE_BY_SERIAL
        | search::SEARCH_DEVICES_BY_MODEL
        | search::FIND_UNCLAIMED_DEVICES => SEARCH_MODULE,
        _ => HELPERS_MODULE,
    }
}

fn topic_endpoints(topic: &Topic, selection: &ModuleSelection) -> Vec<&'static Endpoint> {
    catalog::all()
        .filter(|e| selection.should_load_category(e.category))
        .filter(|e| topic.operations.iter().any(|op| e.operation_id.contains(op)))
        .take(TOOLS_PER_TOPIC)
        .collect()
}

fn read_only() -> Option<ToolAnnotations> {
    Some(ToolAnnotations {
        read_only_hint: true,
        destructive_hint: false,
    })
}

/// Suggest loaded tools for a task described in plain words
pub struct SuggestToolsForTaskTool {
    selection: ModuleSelection,
}

impl SuggestToolsForTaskTool {
    pub fn new(selection: ModuleSelection) -> Self {
        Self { selection }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestToolsForTaskArgs {
    task_description: String,
}

#[async_trait::async_trait]
impl Tool for SuggestToolsForTaskTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: SUGGEST_TOOLS_FOR_TASK.to_string(),
            description: "💡 Suggest which tools to use for a task described in plain words"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "task_description": json_schema_string(
                        "What you want to do, e.g. 'block traffic to a website'"
                    )
                }),
                vec!["task_description"],
            ),
            annotations: read_only(),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        match self.suggest(arguments) {
            Ok(report) => Ok(CallToolResult::text(report)),
            Err(e) => Ok(tool_error(SUGGEST_TOOLS_FOR_TASK, format!("{:#}", e))),
        }
    }
}

impl SuggestToolsForTaskTool {
    fn suggest(&self, arguments: Value) -> Result<String> {
        let args: SuggestToolsForTaskArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for suggest_tools_for_task")?;
        let task = args.task_description.to_lowercase();

        let mut out = String::from("# 💡 Tool Suggestions\n\n");
        let _ = writeln!(out, "**Task**: {}\n", args.task_description.trim());

        let mut matched = 0;
        for topic in TOPICS
            .iter()
            .filter(|t| t.keywords.iter().any(|k| task.contains(k)))
        {
            let custom: Vec<&str> = topic
                .custom
                .iter()
                .copied()
                .filter(|tool| self.selection.should_load(custom_module(tool)))
                .collect();
            let endpoints = topic_endpoints(topic, &self.selection);
            if custom.is_empty() && endpoints.is_empty() {
                continue;
            }

            matched += 1;
            let _ = writeln!(out, "## {}", topic.title);
            for tool in custom {
                let _ = writeln!(out, "- `{}`", tool);
            }
            for endpoint in endpoints {
                let _ = writeln!(out, "- `{}` - {}", endpoint.tool_name(), endpoint.summary);
            }
            let _ = writeln!(out);
        }

        if matched == 0 {
            let _ = writeln!(out, "No specific tools matched this task among the loaded modules.\n");
            let _ = writeln!(out, "- Use `{}` to see what is loaded", LIST_TOOL_CATEGORIES);
            let _ = writeln!(out, "- Start from `get_organizations` and `get_organization_networks`");
            let _ = writeln!(out, "- Rephrase with a keyword such as firewall, vpn, client, dhcp or alert\n");
        }

        let _ = writeln!(out, "## Tips");
        let _ = writeln!(out, "- Read tools are safe to run; destructive tools require `confirmed: true`");
        let _ = writeln!(out, "- Most network tools need a `network_id`; device tools need a `serial`");
        Ok(out)
    }
}

/// Overview of every tool category and whether it is loaded
pub struct ListToolCategoriesTool {
    selection: ModuleSelection,
}

impl ListToolCategoriesTool {
    pub fn new(selection: ModuleSelection) -> Self {
        Self { selection }
    }
}

#[async_trait::async_trait]
impl Tool for ListToolCategoriesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: LIST_TOOL_CATEGORIES.to_string(),
            description: "📚 List all tool categories with their tool counts".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
            annotations: read_only(),
        }
    }

    async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
        Ok(CallToolResult::text(self.render()))
    }
}

impl ListToolCategoriesTool {
    fn mark(&self, module: &str) -> &'static str {
        if self.selection.should_load(module) {
            "✅"
        } else {
            "⬜"
        }
    }

    fn render(&self) -> String {
        let mut out = String::from("# 📚 Tool Categories\n\n");
        let _ = writeln!(out, "**Profile**: {}\n", self.selection.profile.title());

        let _ = writeln!(out, "## SDK Categories");
        let mut loaded_tools = 0;
        for category in SdkCategory::ALL {
            let module = category.module_name();
            let count = catalog::endpoints(category).len();
            if self.selection.should_load(&module) {
                loaded_tools += count;
            }
            let _ = writeln!(
                out,
                "- {} {} **{}** ({} tools)",
                self.mark(&module),
                category.emoji(),
                category,
                count
            );
        }

        let _ = writeln!(out, "\n## Custom Modules");
        let custom = [
            (HELPERS_MODULE, "discovery and guidance"),
            (SEARCH_MODULE, "inventory search across organizations"),
            (IP_LOOKUP_MODULE, "find clients by IP and reserve addresses"),
            (RESOURCES_MODULE, "read-only MCP resources"),
        ];
        for (module, summary) in custom {
            let _ = writeln!(out, "- {} **{}**: {}", self.mark(module), module, summary);
        }

        let _ = writeln!(out, "\n**Loaded SDK tools**: {}", loaded_tools);
        out
    }
}

/// Guide to the custom helper tools
pub struct HelperToolsInfoTool {
    selection: ModuleSelection,
}

impl HelperToolsInfoTool {
    pub fn new(selection: ModuleSelection) -> Self {
        Self { selection }
    }
}

const HELPER_GUIDE: &[(&str, &str)] = &[
    (CHECK_NETWORK_CAPABILITIES, "See which product types and devices a network has before picking tools"),
    (SUGGEST_TOOLS_FOR_TASK, "Describe a task in plain words and get matching tools"),
    (LIST_TOOL_CATEGORIES, "Overview of every category and what this server loaded"),
    (crate::tools::search::SEARCH_DEVICE_BY_SERIAL, "Locate a device by serial in any organization"),
    (crate::tools::search::SEARCH_DEVICES_BY_MODEL, "List devices whose model contains a pattern"),
    (crate::tools::search::FIND_UNCLAIMED_DEVICES, "Inventory devices not yet assigned to a network"),
    (crate::tools::ip_lookup::FIND_DEVICE_BY_IP, "Find the client or device behind an IP address"),
    (
        crate::tools::ip_lookup::CREATE_DHCP_RESERVATION_FROM_IP,
        "Reserve an address for the client currently using another one",
    ),
];

#[async_trait::async_trait]
impl Tool for HelperToolsInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: HELPER_TOOLS_INFO.to_string(),
            description: "ℹ️ Explain the custom helper tools and when to use them".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
            annotations: read_only(),
        }
    }

    async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
        let mut out = String::from("# ℹ️ Helper Tools\n\n");
        for (tool, purpose) in HELPER_GUIDE
            .iter()
            .filter(|(tool, _)| self.selection.should_load(custom_module(tool)))
        {
            let _ = writeln!(out, "- `{}`: {}", tool, purpose);
        }

        let _ = writeln!(out, "\n## Workflow");
        let _ = writeln!(out, "1. `get_organizations` to find your organization ID");
        let _ = writeln!(out, "2. `get_organization_networks` to pick a network");
        let _ = writeln!(out, "3. `{}` to see what that network supports", CHECK_NETWORK_CAPABILITIES);
        let _ = writeln!(out, "4. `{}` when unsure which tool fits", SUGGEST_TOOLS_FOR_TASK);
        Ok(CallToolResult::text(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meraki_mcp_core::Profile;
    use meraki_sdk::RetryConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Arc<DashboardClient> {
        Arc::new(
            DashboardClient::builder()
                .api_key("test-key")
                .base_url(format!("{}/api/v1", server.uri()))
                .retry_config(RetryConfig::no_retry())
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_capabilities_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "N_1", "name": "Branch", "productTypes": ["switch", "wireless"]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"serial": "S1", "model": "MS120-8", "name": "Core", "status": "online"},
                {"serial": "S2", "model": "MS120-8"},
                {"serial": "S3", "model": "MS225-24"},
                {"serial": "S4", "model": "MS225-48"},
                {"serial": "W1", "model": "MR36", "name": "Lobby AP"}
            ])))
            .mount(&server)
            .await;

        let tool = CheckNetworkCapabilitiesTool::new(client_for(&server));
        let result = tool.execute(json!({"network_id": "N_1"})).await.unwrap();
        let text = result.text_content();

        assert!(!result.is_error());
        assert!(text.contains("Network: Branch"));
        assert!(text.contains("🔌 Switches (MS):"));
        assert!(text.contains("📡 Wireless (MR):"));
        assert!(!text.contains("Security Appliance"));
        assert!(text.contains("📊 Device Inventory (5 devices):"));
        assert!(text.contains("MS Devices (4):"));
        assert!(text.contains("   🟢 Core (MS120-8)"));
        assert!(text.contains("   🔴 S2 (MS120-8)"));
        assert!(text.contains("   ... and 1 more"));
        assert!(text.contains("MR Devices (1):"));
        assert!(text.contains("get_network_wireless"));
    }

    #[tokio::test]
    async fn test_capabilities_error_policy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["Not found"]})))
            .mount(&server)
            .await;

        let tool = CheckNetworkCapabilitiesTool::new(client_for(&server));
        let result = tool.execute(json!({"network_id": "N_missing"})).await.unwrap();
        assert!(result.is_error());
        assert!(result
            .text_content()
            .starts_with("❌ Error in check_network_capabilities: "));

        let result = tool.execute(json!({})).await.unwrap();
        assert!(result.is_error());
    }

    #[tokio::test]
    async fn test_suggestions_follow_keywords() {
        let tool = SuggestToolsForTaskTool::new(ModuleSelection::new(Profile::Full));
        let result = tool
            .execute(json!({"task_description": "Block a website on the Firewall"}))
            .await
            .unwrap();
        let text = result.text_content();

        assert!(text.contains("## 🔥 Firewall"));
        assert!(text.contains("`get_network_appliance_firewall_l3_firewall_rules`"));
        assert!(!text.contains("## 🔒 VPN"));
        assert!(text.contains("## Tips"));
    }

    #[tokio::test]
    async fn test_suggestions_respect_selection() {
        let tool = SuggestToolsForTaskTool::new(ModuleSelection::new(Profile::Wireless));
        let text = tool
            .execute(json!({"task_description": "set up a firewall rule"}))
            .await
            .unwrap()
            .text_content();
        assert!(text.contains("`get_network_wireless_ssid_firewall_l3_firewall_rules`"));
        assert!(!text.contains("get_network_appliance_firewall"));

        let text = tool
            .execute(json!({"task_description": "order lunch for the team"}))
            .await
            .unwrap()
            .text_content();
        assert!(text.contains("No specific tools matched"));

        let text = tool
            .execute(json!({"task_description": "reserve a DHCP address"}))
            .await
            .unwrap()
            .text_content();
        assert!(text.contains("`create_dhcp_reservation_from_ip`"));
    }

    #[tokio::test]
    async fn test_suggestions_require_description() {
        let tool = SuggestToolsForTaskTool::new(ModuleSelection::default());
        let result = tool.execute(json!({})).await.unwrap();
        assert!(result.is_error());
    }

    #[tokio::test]
    async fn test_category_overview_marks_loaded_modules() {
        let tool = ListToolCategoriesTool::new(ModuleSelection::new(Profile::Wireless));
        let text = tool.execute(json!({})).await.unwrap().text_content();

        let wireless = catalog::endpoints(SdkCategory::Wireless).len();
        assert!(text.contains("**Profile**: Wireless Specialist"));
        assert!(text.contains(&format!("- ✅ 📡 **wireless** ({} tools)", wireless)));
        assert!(text.contains("- ⬜ 🔐 **appliance**"));
        assert!(text.contains("- ✅ **search**"));
        assert!(text.contains(&format!("**Loaded SDK tools**: {}", wireless)));
    }

    #[tokio::test]
    async fn test_helper_info_lists_loaded_helpers() {
        let tool = HelperToolsInfoTool::new(ModuleSelection::new(Profile::Minimal));
        let text = tool.execute(json!({})).await.unwrap().text_content();
        assert!(text.contains("- `check_network_capabilities`"));
        assert!(text.contains("- `find_device_by_ip`"));
        assert!(!text.contains("search_device_by_serial"));
        assert!(text.contains("## Workflow"));
    }
}

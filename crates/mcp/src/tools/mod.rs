pub mod args;
pub mod dashboard;
pub mod helpers;
pub mod ip_lookup;
mod registry;
pub mod search;

pub use dashboard::{DashboardTool, CONFIRMATION_REQUIRED};
pub use helpers::{
    CheckNetworkCapabilitiesTool, HelperToolsInfoTool, ListToolCategoriesTool,
    SuggestToolsForTaskTool,
};
pub use ip_lookup::{CreateDhcpReservationFromIpTool, FindDeviceByIpTool};
pub use registry::{
    json_schema_boolean, json_schema_enum, json_schema_integer, json_schema_number,
    json_schema_object, json_schema_string, Tool, ToolRegistry, ToolTier,
};
pub use search::{FindUnclaimedDevicesTool, SearchDeviceBySerialTool, SearchDevicesByModelTool};

use crate::protocol::CallToolResult;
use meraki_mcp_core::profile::{HELPERS_MODULE, IP_LOOKUP_MODULE, SEARCH_MODULE};
use meraki_mcp_core::ModuleSelection;
use meraki_sdk::{catalog, DashboardClient, SdkCategory};
use std::fmt;
use std::sync::Arc;

/// Uniform failure result for every tool
pub fn tool_error(tool_name: &str, message: impl fmt::Display) -> CallToolResult {
    CallToolResult::error(format!("❌ Error in {}: {}", tool_name, message))
}

/// Register the tools of every module the selection loads
pub fn register_tools(
    registry: &mut ToolRegistry,
    client: Arc<DashboardClient>,
    selection: &ModuleSelection,
) {
    for category in SdkCategory::ALL {
        let module = category.module_name();
        if !selection.should_load(&module) {
            tracing::debug!(module = %module, "Skipping module");
            continue;
        }

        let endpoints = catalog::endpoints(category);
        for endpoint in endpoints {
            registry.register(Arc::new(DashboardTool::new(client.clone(), endpoint)));
        }
        tracing::debug!(module = %module, tools = endpoints.len(), "Loaded module");
    }

    if selection.should_load(HELPERS_MODULE) {
        registry.register(Arc::new(CheckNetworkCapabilitiesTool::new(client.clone())));
        registry.register(Arc::new(SuggestToolsForTaskTool::new(selection.clone())));
        registry.register(Arc::new(ListToolCategoriesTool::new(selection.clone())));
        registry.register(Arc::new(HelperToolsInfoTool::new(selection.clone())));
    }

    if selection.should_load(SEARCH_MODULE) {
        registry.register(Arc::new(SearchDeviceBySerialTool::new(client.clone())));
        registry.register(Arc::new(SearchDevicesByModelTool::new(client.clone())));
        registry.register(Arc::new(FindUnclaimedDevicesTool::new(client.clone())));
    }

    if selection.should_load(IP_LOOKUP_MODULE) {
        registry.register(Arc::new(FindDeviceByIpTool::new(client.clone())));
        registry.register(Arc::new(CreateDhcpReservationFromIpTool::new(client)));
    }
}

/// A registry holding the selected tools
pub fn build_registry(client: Arc<DashboardClient>, selection: &ModuleSelection) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_tools(&mut registry, client, selection);
    tracing::info!(
        profile = %selection.profile,
        tools = registry.len(),
        "Registered tools"
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use meraki_mcp_core::Profile;

    fn client() -> Arc<DashboardClient> {
        Arc::new(DashboardClient::builder().api_key("k").build().unwrap())
    }

    #[test]
    fn test_full_profile_registers_whole_catalog() {
        let registry = build_registry(client(), &ModuleSelection::new(Profile::Full));
        assert_eq!(registry.len(), catalog::all().count() + 9);
        assert!(registry.contains("get_device_switch_ports"));
        assert!(registry.contains(helpers::CHECK_NETWORK_CAPABILITIES));
        assert!(registry.contains(helpers::SUGGEST_TOOLS_FOR_TASK));
        assert!(registry.contains(search::SEARCH_DEVICE_BY_SERIAL));
        assert!(registry.contains(ip_lookup::FIND_DEVICE_BY_IP));
        assert!(registry.contains(ip_lookup::CREATE_DHCP_RESERVATION_FROM_IP));
    }

    #[test]
    fn test_minimal_profile_skips_switch() {
        let registry = build_registry(client(), &ModuleSelection::new(Profile::Minimal));
        assert!(registry.contains("get_network"));
        assert!(registry.contains("get_organizations"));
        assert!(!registry.contains("get_device_switch_ports"));
        assert!(registry.contains(helpers::CHECK_NETWORK_CAPABILITIES));
        assert!(registry.contains(helpers::LIST_TOOL_CATEGORIES));
        assert!(!registry.contains(search::FIND_UNCLAIMED_DEVICES));

        let ops = registry.operations();
        assert!(ops.contains_key(&SdkCategory::Devices));
        assert!(!ops.contains_key(&SdkCategory::Switch));
    }

    #[test]
    fn test_excluded_modules_are_skipped() {
        let selection = ModuleSelection::new(Profile::Full).with_excluded_modules(vec![
            "SDK_camera".to_string(),
            IP_LOOKUP_MODULE.to_string(),
        ]);
        let registry = build_registry(client(), &selection);
        assert!(!registry.contains(ip_lookup::FIND_DEVICE_BY_IP));
        assert!(!registry.contains(ip_lookup::CREATE_DHCP_RESERVATION_FROM_IP));
        assert!(!registry.operations().contains_key(&SdkCategory::Camera));
    }

    #[test]
    fn test_tool_error_text() {
        let result = tool_error("get_network", "boom");
        assert!(result.is_error());
        assert_eq!(result.text_content(), "❌ Error in get_network: boom");
    }
}

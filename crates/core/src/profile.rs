// Tool profiles: which tool modules get registered
//
// Agent runtimes cap the number of tools they accept, so a server instance
// usually loads a focused subset of modules.

use crate::category::SdkCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Module that exposes the MCP resources
pub const RESOURCES_MODULE: &str = "resources";
/// Module with discovery helpers (`check_network_capabilities`,
/// `suggest_tools_for_task`, ...)
pub const HELPERS_MODULE: &str = "helpers";
/// Module with inventory search tools (`search_device_by_serial`, ...)
pub const SEARCH_MODULE: &str = "search";
/// Module with IP lookup tools (`find_device_by_ip`,
/// `create_dhcp_reservation_from_ip`)
pub const IP_LOOKUP_MODULE: &str = "IP_lookup";

/// Modules registered for every profile unless explicitly excluded
const ALWAYS_LOADED: &[&str] = &[RESOURCES_MODULE, IP_LOOKUP_MODULE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profile {
    Full,
    Wireless,
    Network,
    Organizations,
    Monitoring,
    SdkCore,
    Minimal,
}

impl Profile {
    pub const ALL: [Profile; 7] = [
        Profile::Full,
        Profile::Wireless,
        Profile::Network,
        Profile::Organizations,
        Profile::Monitoring,
        Profile::SdkCore,
        Profile::Minimal,
    ];

    /// Parse a profile name, falling back to `FULL` for unknown names
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(profile = name, "Unknown profile, falling back to FULL");
            Profile::Full
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Full => "FULL",
            Profile::Wireless => "WIRELESS",
            Profile::Network => "NETWORK",
            Profile::Organizations => "ORGANIZATIONS",
            Profile::Monitoring => "MONITORING",
            Profile::SdkCore => "SDK_CORE",
            Profile::Minimal => "MINIMAL",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Profile::Full => "Full Server (All Tools)",
            Profile::Wireless => "Wireless Specialist",
            Profile::Network => "Network Infrastructure",
            Profile::Organizations => "Organization Management",
            Profile::Monitoring => "Device Monitoring",
            Profile::SdkCore => "Pure SDK Categories",
            Profile::Minimal => "Essential Only",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::Full => "Complete Meraki API coverage - all SDK categories + custom tools",
            Profile::Wireless => "Wireless network management and optimization",
            Profile::Network => "Switch, appliance, and network infrastructure",
            Profile::Organizations => "Organization-level administration and policies",
            Profile::Monitoring => "Device management, cameras, and sensors",
            Profile::SdkCore => "Pure SDK categories - matches the Dashboard SDK namespaces exactly",
            Profile::Minimal => "Basic read-only operations",
        }
    }

    /// Modules loaded by this profile; `None` means every module
    pub fn modules(&self) -> Option<Vec<String>> {
        use SdkCategory::*;

        let (categories, extras): (Vec<SdkCategory>, Vec<&str>) = match self {
            Profile::Full => return None,
            Profile::Wireless => (vec![Wireless], vec![HELPERS_MODULE, SEARCH_MODULE]),
            Profile::Network => (
                vec![Networks, Switch, Appliance, CellularGateway],
                vec![HELPERS_MODULE, SEARCH_MODULE],
            ),
            Profile::Organizations => (
                vec![Organizations, Administered, Licensing],
                vec![HELPERS_MODULE, SEARCH_MODULE],
            ),
            Profile::Monitoring => (
                vec![Devices, Camera, Sensor, Sm, Insight],
                vec![HELPERS_MODULE, SEARCH_MODULE],
            ),
            Profile::SdkCore => (SdkCategory::ALL.to_vec(), vec![]),
            Profile::Minimal => (vec![Organizations, Networks, Devices], vec![HELPERS_MODULE]),
        };

        let mut modules = vec![RESOURCES_MODULE.to_string()];
        modules.extend(categories.iter().map(|c| c.module_name()));
        modules.extend(extras.iter().map(|m| m.to_string()));
        Some(modules)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Profile::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == upper)
            .ok_or_else(|| format!("unknown profile: {}", s))
    }
}

/// Expand a module group name into its modules
pub fn module_group(name: &str) -> Option<Vec<String>> {
    use SdkCategory::*;

    fn sdk(cats: &[SdkCategory]) -> Vec<String> {
        cats.iter().map(|c| c.module_name()).collect()
    }

    match name {
        "sdk_core" => {
            let mut modules = vec![RESOURCES_MODULE.to_string()];
            modules.extend(sdk(&SdkCategory::ALL));
            Some(modules)
        }
        "custom_tools" => Some(vec![
            HELPERS_MODULE.to_string(),
            SEARCH_MODULE.to_string(),
            IP_LOOKUP_MODULE.to_string(),
        ]),
        "network_stack" => Some(sdk(&[Networks, Switch, Appliance, CellularGateway])),
        "device_management" => Some(sdk(&[Devices, Camera, Sensor, Sm, Insight])),
        "admin_tools" => Some(sdk(&[Organizations, Administered, Licensing])),
        _ => None,
    }
}

/// Parse a comma-separated module list, expanding groups and dropping
/// duplicates while preserving first-seen order
pub fn parse_module_list(raw: &str) -> Vec<String> {
    let mut modules: Vec<String> = Vec::new();

    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let expanded = module_group(item).unwrap_or_else(|| vec![item.to_string()]);
        for module in expanded {
            if !modules.contains(&module) {
                modules.push(module);
            }
        }
    }

    modules
}

/// Resolved module selection for one server instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSelection {
    pub profile: Profile,
    pub custom_modules: Vec<String>,
    pub excluded_modules: Vec<String>,
}

impl ModuleSelection {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            custom_modules: Vec::new(),
            excluded_modules: Vec::new(),
        }
    }

    pub fn with_custom_modules(mut self, modules: Vec<String>) -> Self {
        self.custom_modules = modules;
        self
    }

    pub fn with_excluded_modules(mut self, modules: Vec<String>) -> Self {
        self.excluded_modules = modules;
        self
    }

    /// Exclusions win; then always-loaded modules; then an explicit module
    /// list; then the profile.
    pub fn should_load(&self, module: &str) -> bool {
        if self.excluded_modules.iter().any(|m| m == module) {
            return false;
        }

        if ALWAYS_LOADED.contains(&module) {
            return true;
        }

        if !self.custom_modules.is_empty() {
            return self.custom_modules.iter().any(|m| m == module);
        }

        match self.profile.modules() {
            None => true,
            Some(modules) => modules.iter().any(|m| m == module),
        }
    }

    pub fn should_load_category(&self, category: SdkCategory) -> bool {
        self.should_load(&category.module_name())
    }
}

impl Default for ModuleSelection {
    fn default() -> Self {
        Self::new(Profile::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_profile_loads_everything() {
        let selection = ModuleSelection::new(Profile::Full);
        for category in SdkCategory::ALL {
            assert!(selection.should_load_category(category));
        }
        assert!(selection.should_load(HELPERS_MODULE));
    }

    #[test]
    fn test_wireless_profile() {
        let selection = ModuleSelection::new(Profile::Wireless);
        assert!(selection.should_load_category(SdkCategory::Wireless));
        assert!(!selection.should_load_category(SdkCategory::Switch));
        assert!(selection.should_load(RESOURCES_MODULE));
        assert!(selection.should_load(IP_LOOKUP_MODULE));
    }

    #[test]
    fn test_search_module_membership() {
        assert!(ModuleSelection::new(Profile::Network).should_load(SEARCH_MODULE));
        assert!(ModuleSelection::new(Profile::Monitoring).should_load(SEARCH_MODULE));
        assert!(!ModuleSelection::new(Profile::Minimal).should_load(SEARCH_MODULE));
        assert!(parse_module_list("custom_tools").contains(&SEARCH_MODULE.to_string()));
    }

    #[test]
    fn test_sdk_core_has_no_custom_helpers() {
        let selection = ModuleSelection::new(Profile::SdkCore);
        assert!(!selection.should_load(HELPERS_MODULE));
        assert!(!selection.should_load(SEARCH_MODULE));
        assert!(selection.should_load_category(SdkCategory::Sm));
    }

    #[test]
    fn test_exclusion_wins() {
        let selection = ModuleSelection::new(Profile::Full)
            .with_excluded_modules(vec!["SDK_camera".to_string(), IP_LOOKUP_MODULE.to_string()]);
        assert!(!selection.should_load_category(SdkCategory::Camera));
        assert!(!selection.should_load(IP_LOOKUP_MODULE));
        assert!(selection.should_load_category(SdkCategory::Switch));
    }

    #[test]
    fn test_custom_modules_override_profile() {
        let selection = ModuleSelection::new(Profile::Wireless)
            .with_custom_modules(vec!["SDK_switch".to_string()]);
        assert!(selection.should_load_category(SdkCategory::Switch));
        assert!(!selection.should_load_category(SdkCategory::Wireless));
    }

    #[test]
    fn test_parse_module_list_expands_groups_and_dedups() {
        let modules = parse_module_list("SDK_switch, network_stack ,, SDK_camera");
        assert_eq!(
            modules,
            vec![
                "SDK_switch",
                "SDK_networks",
                "SDK_appliance",
                "SDK_cellularGateway",
                "SDK_camera"
            ]
        );
    }

    #[test]
    fn test_unknown_profile_falls_back_to_full() {
        assert_eq!(Profile::from_name("nonsense"), Profile::Full);
        assert_eq!(Profile::from_name("wireless"), Profile::Wireless);
        assert_eq!(Profile::from_name("sdk_core"), Profile::SdkCore);
    }
}

//! Static catalog of Dashboard API operations, one table per category.
//!
//! The tables are plain data; tool registration, validation and
//! invocation are all driven from them.

mod administered;
mod appliance;
mod camera;
mod cellular_gateway;
mod devices;
mod insight;
mod licensing;
mod networks;
mod organizations;
mod sensor;
mod sm;
mod switch;
mod wireless;

use crate::endpoint::{Endpoint, HttpMethod, Param};
use meraki_mcp_core::SdkCategory;

pub(crate) const fn get(
    category: SdkCategory,
    operation_id: &'static str,
    path: &'static str,
    summary: &'static str,
) -> Endpoint {
    Endpoint::new(category, HttpMethod::Get, operation_id, path, summary)
}

pub(crate) const fn post(
    category: SdkCategory,
    operation_id: &'static str,
    path: &'static str,
    summary: &'static str,
) -> Endpoint {
    Endpoint::new(category, HttpMethod::Post, operation_id, path, summary)
}

pub(crate) const fn put(
    category: SdkCategory,
    operation_id: &'static str,
    path: &'static str,
    summary: &'static str,
) -> Endpoint {
    Endpoint::new(category, HttpMethod::Put, operation_id, path, summary)
}

pub(crate) const fn delete(
    category: SdkCategory,
    operation_id: &'static str,
    path: &'static str,
    summary: &'static str,
) -> Endpoint {
    Endpoint::new(category, HttpMethod::Delete, operation_id, path, summary)
}

// Parameters shared across categories

pub(crate) const T0: Param = Param::string("t0", "Beginning of the timespan (ISO 8601 or epoch)");
pub(crate) const T1: Param = Param::string("t1", "End of the timespan (ISO 8601 or epoch)");
pub(crate) const TIMESPAN: Param =
    Param::ranged("timespan", 0, 31_536_000, "Timespan in seconds, instead of t0/t1");
pub(crate) const RESOLUTION: Param =
    Param::integer("resolution", "Time resolution in seconds for returned data");
pub(crate) const NETWORK_IDS: Param = Param::list("networkIds", "Filter by network IDs");
pub(crate) const SERIALS: Param = Param::list("serials", "Filter by device serials");
pub(crate) const PRODUCT_TYPES: Param = Param::list(
    "productTypes",
    "Filter by product types (wireless, appliance, switch, camera, cellularGateway, sensor, systemsManager)",
);
pub(crate) const TAGS: Param = Param::list("tags", "Tags to apply");
pub(crate) const NAME: Param = Param::string("name", "Name");
pub(crate) const NOTES: Param = Param::string("notes", "Free-form notes");
pub(crate) const ENABLED: Param = Param::boolean("enabled", "Whether the item is enabled");
pub(crate) const VLAN: Param = Param::ranged("vlan", 1, 4094, "VLAN ID (1-4094)");
pub(crate) const RULES: Param = Param::json("rules", "Ordered list of rules (JSON array)");

pub(crate) const TIME_WINDOW: &[Param] = &[T0, T1, TIMESPAN];
pub(crate) const TIME_WINDOW_RESOLUTION: &[Param] = &[T0, T1, TIMESPAN, RESOLUTION];
pub(crate) const RECENT: &[Param] = &[T0, TIMESPAN];

/// Endpoints of one category
pub fn endpoints(category: SdkCategory) -> &'static [Endpoint] {
    match category {
        SdkCategory::Administered => administered::ENDPOINTS,
        SdkCategory::Appliance => appliance::ENDPOINTS,
        SdkCategory::Camera => camera::ENDPOINTS,
        SdkCategory::CellularGateway => cellular_gateway::ENDPOINTS,
        SdkCategory::Devices => devices::ENDPOINTS,
        SdkCategory::Insight => insight::ENDPOINTS,
        SdkCategory::Licensing => licensing::ENDPOINTS,
        SdkCategory::Networks => networks::ENDPOINTS,
        SdkCategory::Organizations => organizations::ENDPOINTS,
        SdkCategory::Sensor => sensor::ENDPOINTS,
        SdkCategory::Sm => sm::ENDPOINTS,
        SdkCategory::Switch => switch::ENDPOINTS,
        SdkCategory::Wireless => wireless::ENDPOINTS,
    }
}

/// Every endpoint in category order
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    SdkCategory::ALL
        .into_iter()
        .flat_map(|category| endpoints(category).iter())
}

/// Look up an operation within a category
pub fn find(category: SdkCategory, operation_id: &str) -> Option<&'static Endpoint> {
    endpoints(category)
        .iter()
        .find(|endpoint| endpoint.operation_id == operation_id)
}

/// Look up an endpoint by its tool name
pub fn find_by_tool_name(tool_name: &str) -> Option<&'static Endpoint> {
    all().find(|endpoint| endpoint.tool_name() == tool_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::MAX_TOOL_NAME_LEN;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_endpoints() {
        for category in SdkCategory::ALL {
            assert!(
                !endpoints(category).is_empty(),
                "no endpoints for {}",
                category
            );
        }
    }

    #[test]
    fn test_endpoints_filed_under_their_category() {
        for category in SdkCategory::ALL {
            for endpoint in endpoints(category) {
                assert_eq!(endpoint.category, category, "{}", endpoint.operation_id);
            }
        }
    }

    #[test]
    fn test_tool_names_unique_and_short() {
        let mut names = HashSet::new();
        for endpoint in all() {
            let name = endpoint.tool_name();
            assert!(name.len() <= MAX_TOOL_NAME_LEN, "{} too long", name);
            assert!(names.insert(name.clone()), "duplicate tool name {}", name);
        }
    }

    #[test]
    fn test_operation_ids_unique_per_category() {
        for category in SdkCategory::ALL {
            let mut seen = HashSet::new();
            for endpoint in endpoints(category) {
                assert!(seen.insert(endpoint.operation_id), "{}", endpoint.operation_id);
            }
        }
    }

    #[test]
    fn test_paths_are_well_formed() {
        for endpoint in all() {
            assert!(endpoint.path.starts_with('/'), "{}", endpoint.operation_id);
            assert_eq!(
                endpoint.path.matches('{').count(),
                endpoint.path.matches('}').count(),
                "{}",
                endpoint.operation_id
            );
            assert!(
                !endpoint.paginated || endpoint.method == HttpMethod::Get,
                "{} paginated but not GET",
                endpoint.operation_id
            );
        }
    }

    #[test]
    fn test_params_do_not_shadow_path_params() {
        for endpoint in all() {
            let path_params = endpoint.path_params();
            for param in endpoint.query.iter().chain(endpoint.body.iter()) {
                assert!(
                    !path_params.contains(&param.name),
                    "{} repeats {}",
                    endpoint.operation_id,
                    param.name
                );
            }
        }
    }

    #[test]
    fn test_find() {
        let vlans = find(SdkCategory::Appliance, "getNetworkApplianceVlans").unwrap();
        assert_eq!(vlans.path, "/networks/{networkId}/appliance/vlans");
        assert!(find(SdkCategory::Switch, "getNetworkApplianceVlans").is_none());

        let by_name = find_by_tool_name("get_device_switch_ports").unwrap();
        assert_eq!(by_name.operation_id, "getDeviceSwitchPorts");
    }

    #[test]
    fn test_destructive_operations_flagged() {
        let reboot = find(SdkCategory::Devices, "rebootDevice").unwrap();
        assert!(reboot.is_destructive());
        let cycle = find(SdkCategory::Switch, "cycleDeviceSwitchPorts").unwrap();
        assert!(cycle.is_destructive());
        let read = find(SdkCategory::Networks, "getNetwork").unwrap();
        assert!(!read.is_destructive());
    }
}

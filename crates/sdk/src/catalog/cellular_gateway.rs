use super::*;

const C: SdkCategory = SdkCategory::CellularGateway;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getDeviceCellularGatewayLan", "/devices/{serial}/cellularGateway/lan", "Show the LAN Settings of a MG"),
    put(C, "updateDeviceCellularGatewayLan", "/devices/{serial}/cellularGateway/lan", "Update the LAN Settings for a single MG")
        .body(&[
            Param::json("reservedIpRanges", "Reserved IP ranges"),
            Param::json("fixedIpAssignments", "Fixed IP assignments"),
        ]),
    get(C, "getDeviceCellularGatewayPortForwardingRules", "/devices/{serial}/cellularGateway/portForwardingRules", "Returns the port forwarding rules for a single MG"),
    put(C, "updateDeviceCellularGatewayPortForwardingRules", "/devices/{serial}/cellularGateway/portForwardingRules", "Updates the port forwarding rules for a single MG")
        .body(&[RULES]),
    get(C, "getNetworkCellularGatewayConnectivityMonitoringDestinations", "/networks/{networkId}/cellularGateway/connectivityMonitoringDestinations", "Return the connectivity testing destinations for an MG network"),
    put(C, "updateNetworkCellularGatewayConnectivityMonitoringDestinations", "/networks/{networkId}/cellularGateway/connectivityMonitoringDestinations", "Update the connectivity testing destinations for an MG network")
        .body(&[Param::json("destinations", "Connectivity testing destinations").required()]),
    get(C, "getNetworkCellularGatewayDhcp", "/networks/{networkId}/cellularGateway/dhcp", "List common DHCP settings of MGs"),
    get(C, "getNetworkCellularGatewaySubnetPool", "/networks/{networkId}/cellularGateway/subnetPool", "Return the subnet pool and mask configured for MGs in the network"),
    get(C, "getNetworkCellularGatewayUplink", "/networks/{networkId}/cellularGateway/uplink", "Returns the uplink settings for your MG network"),
    get(C, "getOrganizationCellularGatewayUplinkStatuses", "/organizations/{organizationId}/cellularGateway/uplink/statuses", "List the uplink status of every Meraki MG cellular gateway in the organization")
        .paginated()
        .query(&[NETWORK_IDS, SERIALS, Param::list("iccids", "Filter by ICCIDs")]),
    get(C, "getOrganizationCellularGatewayEsimsInventory", "/organizations/{organizationId}/cellularGateway/esims/inventory", "The eSIM inventory of a given organization")
        .query(&[Param::list("eids", "Filter by eSIM EIDs")]),
    get(C, "getOrganizationCellularGatewayEsimsServiceProvidersAccounts", "/organizations/{organizationId}/cellularGateway/esims/serviceProviders/accounts", "Inventory of service provider accounts tied to the organization")
        .query(&[Param::list("accountIds", "Filter by account IDs")]),
    delete(C, "deleteOrganizationCellularGatewayEsimsServiceProvidersAccount", "/organizations/{organizationId}/cellularGateway/esims/serviceProviders/accounts/{accountId}", "Remove a service provider account's integration with the Dashboard"),
];

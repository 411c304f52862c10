use super::*;

const C: SdkCategory = SdkCategory::Switch;

const PORT_TYPES: &[&str] = &["trunk", "access", "stack", "routed"];
const STP_GUARDS: &[&str] = &["disabled", "root guard", "bpdu guard", "loop guard"];

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getDeviceSwitchPorts", "/devices/{serial}/switch/ports", "List the switch ports for a switch"),
    get(C, "getDeviceSwitchPort", "/devices/{serial}/switch/ports/{portId}", "Return a switch port"),
    put(C, "updateDeviceSwitchPort", "/devices/{serial}/switch/ports/{portId}", "Update a switch port").body(&[
        NAME,
        TAGS,
        ENABLED,
        Param::boolean("poeEnabled", "PoE status of the port"),
        Param::one_of("type", PORT_TYPES, "Port type"),
        VLAN,
        Param::ranged("voiceVlan", 1, 4094, "Voice VLAN (1-4094)"),
        Param::string("allowedVlans", "VLANs allowed on a trunk port, e.g. 1,3,5-10 or all"),
        Param::boolean("isolationEnabled", "Port isolation status"),
        Param::boolean("rstpEnabled", "Rapid spanning tree protocol status"),
        Param::one_of("stpGuard", STP_GUARDS, "STP guard setting"),
        Param::string("linkNegotiation", "Link speed, e.g. Auto negotiate"),
        Param::one_of(
            "accessPolicyType",
            &["Open", "Custom access policy", "MAC allow list", "Sticky MAC allow list"],
            "Access policy type",
        ),
        Param::ranged("accessPolicyNumber", 1, 65_535, "Access policy number"),
        Param::list("macAllowList", "MACs allowed on the port"),
        Param::string("portScheduleId", "Port schedule ID"),
    ]),
    get(C, "getDeviceSwitchPortsStatuses", "/devices/{serial}/switch/ports/statuses", "Return the status for all the ports of a switch")
        .query(RECENT),
    get(C, "getDeviceSwitchPortsStatusesPackets", "/devices/{serial}/switch/ports/statuses/packets", "Return the packet counters for all the ports of a switch")
        .query(RECENT),
    post(C, "cycleDeviceSwitchPorts", "/devices/{serial}/switch/ports/cycle", "Cycle a set of switch ports")
        .body(&[Param::list("ports", "Ports to cycle, e.g. [\"1\", \"2-5\"]").required()]),
    get(C, "getDeviceSwitchRoutingInterfaces", "/devices/{serial}/switch/routing/interfaces", "List layer 3 interfaces for a switch"),
    get(C, "getDeviceSwitchRoutingInterface", "/devices/{serial}/switch/routing/interfaces/{interfaceId}", "Return a layer 3 interface for a switch"),
    post(C, "createDeviceSwitchRoutingInterface", "/devices/{serial}/switch/routing/interfaces", "Create a layer 3 interface for a switch")
        .body(&[
            NAME.required(),
            Param::string("subnet", "Network that this routed interface is on, in CIDR notation"),
            Param::string("interfaceIp", "IP address this switch will use for layer 3 routing"),
            Param::ranged("vlanId", 1, 4094, "VLAN this routed interface is on").required(),
            Param::string("defaultGateway", "Next hop for traffic that isn't going to a directly connected subnet"),
            Param::one_of("multicastRouting", &["disabled", "enabled", "IGMP snooping querier"], "Multicast routing mode"),
            Param::json("ospfSettings", "OSPF settings"),
        ]),
    delete(C, "deleteDeviceSwitchRoutingInterface", "/devices/{serial}/switch/routing/interfaces/{interfaceId}", "Delete a layer 3 interface from the switch"),
    get(C, "getDeviceSwitchRoutingStaticRoutes", "/devices/{serial}/switch/routing/staticRoutes", "List layer 3 static routes for a switch"),
    get(C, "getDeviceSwitchWarmSpare", "/devices/{serial}/switch/warmSpare", "Return warm spare configuration for a switch"),
    get(C, "getNetworkSwitchAccessPolicies", "/networks/{networkId}/switch/accessPolicies", "List the access policies for a switch network"),
    get(C, "getNetworkSwitchSettings", "/networks/{networkId}/switch/settings", "Returns the switch network settings"),
    put(C, "updateNetworkSwitchSettings", "/networks/{networkId}/switch/settings", "Update switch network settings")
        .body(&[
            Param::ranged("vlan", 1, 4094, "Management VLAN"),
            Param::boolean("useCombinedPower", "Use combined power for MS390 switches"),
            Param::json("powerExceptions", "Per-switch power settings"),
        ]),
    get(C, "getNetworkSwitchStp", "/networks/{networkId}/switch/stp", "Returns STP settings"),
    put(C, "updateNetworkSwitchStp", "/networks/{networkId}/switch/stp", "Updates STP settings")
        .body(&[
            Param::boolean("rstpEnabled", "Enable spanning tree protocol"),
            Param::json("stpBridgePriority", "STP bridge priority for switches or stacks"),
        ]),
    get(C, "getNetworkSwitchStacks", "/networks/{networkId}/switch/stacks", "List the switch stacks in a network"),
    get(C, "getNetworkSwitchDhcpServerPolicy", "/networks/{networkId}/switch/dhcpServerPolicy", "Return the DHCP server settings"),
    get(C, "getNetworkSwitchQosRules", "/networks/{networkId}/switch/qosRules", "List quality of service rules"),
    get(C, "getNetworkSwitchMtu", "/networks/{networkId}/switch/mtu", "Return the MTU configuration"),
    get(C, "getNetworkSwitchPortSchedules", "/networks/{networkId}/switch/portSchedules", "List switch port schedules"),
    get(C, "getNetworkSwitchStormControl", "/networks/{networkId}/switch/stormControl", "Return the storm control configuration for a switch network"),
    get(C, "getOrganizationSwitchPortsBySwitch", "/organizations/{organizationId}/switch/ports/bySwitch", "List the switchports in an organization by switch")
        .paginated()
        .query(&[
            NETWORK_IDS,
            SERIALS,
            Param::string("name", "Filter by switch name"),
            Param::string("mac", "Filter by switch MAC"),
            Param::string("configurationUpdatedAfter", "Only switches updated after this time"),
        ]),
];

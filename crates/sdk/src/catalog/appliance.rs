use super::*;

const C: SdkCategory = SdkCategory::Appliance;

const DHCP_HANDLING: &[&str] = &[
    "Run a DHCP server",
    "Relay DHCP to another server",
    "Do not respond to DHCP requests",
];

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getNetworkApplianceVlans", "/networks/{networkId}/appliance/vlans", "List the VLANs for an MX network"),
    get(C, "getNetworkApplianceVlan", "/networks/{networkId}/appliance/vlans/{vlanId}", "Return a VLAN"),
    post(C, "createNetworkApplianceVlan", "/networks/{networkId}/appliance/vlans", "Add a VLAN").body(&[
        Param::ranged("id", 1, 4094, "VLAN ID (1-4094)").required(),
        NAME.required(),
        Param::string("subnet", "Subnet of the VLAN, e.g. 192.168.1.0/24"),
        Param::string("applianceIp", "Local IP of the appliance on the VLAN"),
        Param::string("groupPolicyId", "Group policy to apply to the VLAN"),
        Param::string("templateVlanType", "Type of subnetting for template networks (same, unique)"),
    ]),
    put(C, "updateNetworkApplianceVlan", "/networks/{networkId}/appliance/vlans/{vlanId}", "Update a VLAN").body(&[
        NAME,
        Param::string("subnet", "Subnet of the VLAN"),
        Param::string("applianceIp", "Local IP of the appliance on the VLAN"),
        Param::string("groupPolicyId", "Group policy to apply to the VLAN"),
        Param::string("vpnNatSubnet", "Translated VPN subnet if VPN translation is enabled"),
        Param::one_of("dhcpHandling", DHCP_HANDLING, "How the appliance handles DHCP requests on this VLAN"),
        Param::list("dhcpRelayServerIps", "DHCP relay server IPs"),
        Param::string("dhcpLeaseTime", "Lease time, e.g. '1 day'"),
        Param::string("dnsNameservers", "DNS nameservers: upstream_dns, google_dns, opendns, or a newline separated list of IPs"),
        Param::json("fixedIpAssignments", "Fixed IP assignments keyed by MAC"),
        Param::json("reservedIpRanges", "Reserved IP ranges, [{\"start\", \"end\", \"comment\"}]"),
        Param::json("dhcpOptions", "DHCP options"),
    ]),
    delete(C, "deleteNetworkApplianceVlan", "/networks/{networkId}/appliance/vlans/{vlanId}", "Delete a VLAN from a network"),
    get(C, "getNetworkApplianceVlansSettings", "/networks/{networkId}/appliance/vlans/settings", "Returns the enabled status of VLANs for the network"),
    put(C, "updateNetworkApplianceVlansSettings", "/networks/{networkId}/appliance/vlans/settings", "Enable/Disable VLANs for the given network")
        .body(&[Param::boolean("vlansEnabled", "Enable VLANs on the network").required()]),
    get(C, "getNetworkApplianceSingleLan", "/networks/{networkId}/appliance/singleLan", "Return single LAN configuration"),
    get(C, "getNetworkApplianceFirewallL3FirewallRules", "/networks/{networkId}/appliance/firewall/l3FirewallRules", "Return the L3 firewall rules for an MX network"),
    put(C, "updateNetworkApplianceFirewallL3FirewallRules", "/networks/{networkId}/appliance/firewall/l3FirewallRules", "Update the L3 firewall rules of an MX network")
        .body(&[
            RULES,
            Param::boolean("syslogDefaultRule", "Log the special default rule"),
        ]),
    get(C, "getNetworkApplianceFirewallL7FirewallRules", "/networks/{networkId}/appliance/firewall/l7FirewallRules", "List the MX L7 firewall rules for an MX network"),
    put(C, "updateNetworkApplianceFirewallL7FirewallRules", "/networks/{networkId}/appliance/firewall/l7FirewallRules", "Update the MX L7 firewall rules for an MX network")
        .body(&[RULES]),
    get(C, "getNetworkApplianceFirewallInboundFirewallRules", "/networks/{networkId}/appliance/firewall/inboundFirewallRules", "Return the inbound firewall rules for an MX network"),
    get(C, "getNetworkApplianceFirewallPortForwardingRules", "/networks/{networkId}/appliance/firewall/portForwardingRules", "Return the port forwarding rules for an MX network"),
    put(C, "updateNetworkApplianceFirewallPortForwardingRules", "/networks/{networkId}/appliance/firewall/portForwardingRules", "Update the port forwarding rules for an MX network")
        .body(&[RULES.required()]),
    get(C, "getNetworkApplianceFirewallOneToOneNatRules", "/networks/{networkId}/appliance/firewall/oneToOneNatRules", "Return the 1:1 NAT mapping rules for an MX network"),
    get(C, "getNetworkApplianceContentFiltering", "/networks/{networkId}/appliance/contentFiltering", "Return the content filtering settings for an MX network"),
    put(C, "updateNetworkApplianceContentFiltering", "/networks/{networkId}/appliance/contentFiltering", "Update the content filtering settings for an MX network")
        .body(&[
            Param::list("allowedUrlPatterns", "URL patterns to allow"),
            Param::list("blockedUrlPatterns", "URL patterns to block"),
            Param::list("blockedUrlCategories", "URL category IDs to block"),
            Param::one_of("urlCategoryListSize", &["topSites", "fullList"], "Size of the URL category list"),
        ]),
    get(C, "getNetworkApplianceContentFilteringCategories", "/networks/{networkId}/appliance/contentFiltering/categories", "List all available content filtering categories for an MX network"),
    get(C, "getNetworkApplianceSecurityIntrusion", "/networks/{networkId}/appliance/security/intrusion", "Returns all supported intrusion settings for an MX network"),
    get(C, "getNetworkApplianceSecurityMalware", "/networks/{networkId}/appliance/security/malware", "Returns all supported malware settings for an MX network"),
    get(C, "getNetworkApplianceSecurityEvents", "/networks/{networkId}/appliance/security/events", "List the security events for a network")
        .paginated()
        .query(&[
            T0,
            T1,
            Param::ranged("timespan", 0, 31_536_000, "Timespan in seconds (max 365 days)"),
            Param::one_of("sortOrder", &["ascending", "descending"], "Sort order of events"),
        ]),
    get(C, "getNetworkApplianceClientSecurityEvents", "/networks/{networkId}/appliance/clients/{clientId}/security/events", "List the security events for a client")
        .paginated()
        .query(TIME_WINDOW),
    get(C, "getNetworkApplianceTrafficShapingRules", "/networks/{networkId}/appliance/trafficShaping/rules", "Display the traffic shaping settings rules for an MX network"),
    get(C, "getNetworkApplianceTrafficShapingUplinkBandwidth", "/networks/{networkId}/appliance/trafficShaping/uplinkBandwidth", "Returns the uplink bandwidth limits for your MX network"),
    get(C, "getNetworkApplianceUplinksUsageHistory", "/networks/{networkId}/appliance/uplinks/usageHistory", "Get the sent and received bytes for each uplink of a network")
        .query(TIME_WINDOW_RESOLUTION),
    get(C, "getNetworkApplianceVpnSiteToSiteVpn", "/networks/{networkId}/appliance/vpn/siteToSiteVpn", "Return the site-to-site VPN settings of a network"),
    put(C, "updateNetworkApplianceVpnSiteToSiteVpn", "/networks/{networkId}/appliance/vpn/siteToSiteVpn", "Update the site-to-site VPN settings of a network")
        .body(&[
            Param::one_of("mode", &["none", "spoke", "hub"], "Site-to-site VPN type").required(),
            Param::json("hubs", "Hubs this spoke connects to"),
            Param::json("subnets", "Subnets and their VPN presence"),
        ]),
    get(C, "getNetworkApplianceStaticRoutes", "/networks/{networkId}/appliance/staticRoutes", "List the static routes for an MX or teleworker network"),
    get(C, "getNetworkApplianceWarmSpare", "/networks/{networkId}/appliance/warmSpare", "Return MX warm spare settings"),
    post(C, "swapNetworkApplianceWarmSpare", "/networks/{networkId}/appliance/warmSpare/swap", "Swap MX primary and warm spare appliances")
        .destructive(),
    get(C, "getNetworkAppliancePorts", "/networks/{networkId}/appliance/ports", "List per-port VLAN settings for all ports of a MX"),
    get(C, "getDeviceApplianceDhcpSubnets", "/devices/{serial}/appliance/dhcp/subnets", "Return the DHCP subnet information for an appliance"),
    get(C, "getDeviceAppliancePerformance", "/devices/{serial}/appliance/performance", "Return the performance score for a single MX"),
    get(C, "getDeviceApplianceUplinksSettings", "/devices/{serial}/appliance/uplinks/settings", "Return the uplink settings for an MX appliance"),
    get(C, "getOrganizationApplianceUplinkStatuses", "/organizations/{organizationId}/appliance/uplink/statuses", "List the uplink status of every Meraki MX and Z series appliance in the organization")
        .paginated()
        .query(&[NETWORK_IDS, SERIALS]),
    get(C, "getOrganizationApplianceVpnStatuses", "/organizations/{organizationId}/appliance/vpn/statuses", "Show VPN status for networks in an organization")
        .paginated()
        .query(&[NETWORK_IDS]),
    get(C, "getOrganizationApplianceSecurityIntrusion", "/organizations/{organizationId}/appliance/security/intrusion", "Returns all supported intrusion settings for an organization"),
];

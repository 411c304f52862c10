use super::*;

const C: SdkCategory = SdkCategory::Networks;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getNetwork", "/networks/{networkId}", "Return a network"),
    put(C, "updateNetwork", "/networks/{networkId}", "Update a network").body(&[
        NAME,
        Param::string("timeZone", "Time zone of the network"),
        TAGS,
        NOTES,
        Param::string("enrollmentString", "Enrollment string for the network"),
    ]),
    delete(C, "deleteNetwork", "/networks/{networkId}", "Delete a network"),
    get(C, "getNetworkDevices", "/networks/{networkId}/devices", "List the devices in a network"),
    post(C, "claimNetworkDevices", "/networks/{networkId}/devices/claim", "Claim devices into a network")
        .body(&[Param::list("serials", "Serials of devices to claim").required()]),
    post(C, "removeNetworkDevices", "/networks/{networkId}/devices/remove", "Remove a single device")
        .body(&[Param::string("serial", "Serial of the device to remove").required()]),
    get(C, "getNetworkClients", "/networks/{networkId}/clients", "List the clients that have used this network in the timespan")
        .paginated()
        .query(&[
            T0,
            TIMESPAN,
            Param::list("statuses", "Filter by status (Online, Offline)"),
            Param::string("ip", "Filter by IP address"),
            Param::string("ip6", "Filter by IPv6 address"),
            Param::string("mac", "Filter by MAC address"),
            Param::string("os", "Filter by operating system"),
            Param::string("description", "Filter by description"),
            Param::string("vlan", "Filter by VLAN"),
            Param::list("recentDeviceConnections", "Filter by recent connection type (Wired, Wireless)"),
        ]),
    get(C, "getNetworkClient", "/networks/{networkId}/clients/{clientId}", "Return the client associated with the given identifier"),
    get(C, "getNetworkClientPolicy", "/networks/{networkId}/clients/{clientId}/policy", "Return the policy assigned to a client on the network"),
    put(C, "updateNetworkClientPolicy", "/networks/{networkId}/clients/{clientId}/policy", "Update the policy assigned to a client on the network")
        .body(&[
            Param::one_of("devicePolicy", &["Group policy", "Allowed", "Blocked", "Normal"], "Policy to assign").required(),
            Param::string("groupPolicyId", "Group policy when devicePolicy is 'Group policy'"),
        ]),
    get(C, "getNetworkClientUsageHistory", "/networks/{networkId}/clients/{clientId}/usageHistory", "Return the client's daily usage history"),
    get(C, "getNetworkClientsOverview", "/networks/{networkId}/clients/overview", "Return overview statistics for network clients")
        .query(TIME_WINDOW_RESOLUTION),
    post(C, "provisionNetworkClients", "/networks/{networkId}/clients/provision", "Provisions a client with a name and policy")
        .body(&[
            Param::json("clients", "Clients to provision, [{\"mac\": ..., \"name\": ...}]").required(),
            Param::one_of("devicePolicy", &["Group policy", "Allowed", "Blocked", "Per connection", "Normal"], "Policy to apply").required(),
            Param::string("groupPolicyId", "Group policy when devicePolicy is 'Group policy'"),
        ]),
    get(C, "getNetworkEvents", "/networks/{networkId}/events", "List the events for the network")
        .paginated()
        .query(&[
            Param::string("productType", "Product type to fetch events for"),
            Param::list("includedEventTypes", "Only these event types"),
            Param::list("excludedEventTypes", "Exclude these event types"),
            Param::string("deviceMac", "Filter by device MAC"),
            Param::string("deviceSerial", "Filter by device serial"),
            Param::string("deviceName", "Filter by device name"),
            Param::string("clientIp", "Filter by client IP"),
            Param::string("clientMac", "Filter by client MAC"),
            Param::string("clientName", "Filter by client name"),
        ]),
    get(C, "getNetworkEventsEventTypes", "/networks/{networkId}/events/eventTypes", "List the event type to human-readable description"),
    get(C, "getNetworkAlertsSettings", "/networks/{networkId}/alerts/settings", "Return the alert configuration for this network"),
    put(C, "updateNetworkAlertsSettings", "/networks/{networkId}/alerts/settings", "Update the alert configuration for this network")
        .body(&[
            Param::json("defaultDestinations", "Default alert destinations"),
            Param::json("alerts", "Alert-specific configuration"),
            Param::json("muting", "Mute alerts by type"),
        ]),
    get(C, "getNetworkAlertsHistory", "/networks/{networkId}/alerts/history", "Return the alert history for this network")
        .paginated(),
    get(C, "getNetworkHealthAlerts", "/networks/{networkId}/health/alerts", "Return all global alerts on this network"),
    get(C, "getNetworkFirmwareUpgrades", "/networks/{networkId}/firmwareUpgrades", "Get firmware upgrade information for a network"),
    put(C, "updateNetworkFirmwareUpgrades", "/networks/{networkId}/firmwareUpgrades", "Update firmware upgrade information for a network")
        .body(&[
            Param::json("upgradeWindow", "Upgrade window, {\"dayOfWeek\": ..., \"hourOfDay\": ...}"),
            Param::string("timezone", "Timezone for the network"),
            Param::json("products", "Per-product upgrade settings"),
        ]),
    get(C, "getNetworkGroupPolicies", "/networks/{networkId}/groupPolicies", "List the group policies in a network"),
    post(C, "createNetworkGroupPolicy", "/networks/{networkId}/groupPolicies", "Create a group policy")
        .body(&[
            NAME.required(),
            Param::json("scheduling", "Schedule for the group policy"),
            Param::json("bandwidth", "Bandwidth settings"),
            Param::json("firewallAndTrafficShaping", "Firewall and traffic shaping rules"),
            Param::one_of("splashAuthSettings", &["network default", "bypass"], "Splash page behaviour"),
            Param::json("vlanTagging", "VLAN tagging settings"),
        ]),
    get(C, "getNetworkGroupPolicy", "/networks/{networkId}/groupPolicies/{groupPolicyId}", "Display a group policy"),
    delete(C, "deleteNetworkGroupPolicy", "/networks/{networkId}/groupPolicies/{groupPolicyId}", "Delete a group policy"),
    get(C, "getNetworkSettings", "/networks/{networkId}/settings", "Return the settings for a network"),
    put(C, "updateNetworkSettings", "/networks/{networkId}/settings", "Update the settings for a network")
        .body(&[
            Param::boolean("localStatusPageEnabled", "Enables the local device status pages"),
            Param::boolean("remoteStatusPageEnabled", "Enables access to the device status page"),
            Param::json("localStatusPage", "Local status page authentication"),
            Param::json("securePort", "SecureConnect settings"),
        ]),
    get(C, "getNetworkSnmp", "/networks/{networkId}/snmp", "Return the SNMP settings for a network"),
    get(C, "getNetworkSyslogServers", "/networks/{networkId}/syslogServers", "List the syslog servers for a network"),
    put(C, "updateNetworkSyslogServers", "/networks/{networkId}/syslogServers", "Update the syslog servers for a network")
        .body(&[Param::json("servers", "Syslog servers, [{\"host\", \"port\", \"roles\"}]").required()]),
    get(C, "getNetworkTraffic", "/networks/{networkId}/traffic", "Return the traffic analysis data for this network")
        .query(&[
            T0,
            TIMESPAN,
            Param::one_of("deviceType", &["combined", "wireless", "switch", "appliance"], "Filter by device type"),
        ]),
    get(C, "getNetworkTrafficAnalysis", "/networks/{networkId}/trafficAnalysis", "Return the traffic analysis settings for a network"),
    get(C, "getNetworkWebhooksHttpServers", "/networks/{networkId}/webhooks/httpServers", "List the HTTP servers for a network"),
    post(C, "createNetworkWebhooksHttpServer", "/networks/{networkId}/webhooks/httpServers", "Add an HTTP server to a network")
        .body(&[
            NAME.required(),
            Param::string("url", "URL of the HTTP server").required(),
            Param::string("sharedSecret", "Shared secret included in POSTs"),
            Param::json("payloadTemplate", "Payload template for webhooks"),
        ]),
    delete(C, "deleteNetworkWebhooksHttpServer", "/networks/{networkId}/webhooks/httpServers/{httpServerId}", "Delete an HTTP server from a network"),
    get(C, "getNetworkFloorPlans", "/networks/{networkId}/floorPlans", "List the floor plans that belong to your network"),
    get(C, "getNetworkMerakiAuthUsers", "/networks/{networkId}/merakiAuthUsers", "List the users configured under Meraki Authentication"),
    post(C, "bindNetwork", "/networks/{networkId}/bind", "Bind a network to a template")
        .body(&[
            Param::string("configTemplateId", "Template to bind to").required(),
            Param::boolean("autoBind", "Automatically bind switches to switch profiles"),
        ]),
    post(C, "unbindNetwork", "/networks/{networkId}/unbind", "Unbind a network from a template")
        .body(&[Param::boolean("retainConfigs", "Keep the template's configuration on the network")]),
    post(C, "splitNetwork", "/networks/{networkId}/split", "Split a combined network into individual networks for each type of device")
        .destructive(),
    get(C, "getNetworkTopologyLinkLayer", "/networks/{networkId}/topology/linkLayer", "List the LLDP and CDP information for all discovered devices and connections"),
    get(C, "getNetworkPoliciesByClient", "/networks/{networkId}/policies/byClient", "Get policies for all clients with policies")
        .paginated()
        .query(RECENT),
];

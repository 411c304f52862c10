use super::*;

const C: SdkCategory = SdkCategory::Wireless;

const BANDS: &[&str] = &["2.4", "5", "6"];

const STATS_FILTERS: &[Param] = &[
    T0,
    T1,
    Param::ranged("timespan", 0, 604_800, "Timespan in seconds (max 7 days)"),
    Param::one_of("band", BANDS, "Filter by band"),
    Param::ranged("ssid", 0, 14, "Filter by SSID number"),
    Param::ranged("vlan", 1, 4094, "Filter by VLAN"),
    Param::string("apTag", "Filter by AP tag"),
];

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getNetworkWirelessSsids", "/networks/{networkId}/wireless/ssids", "List the MR SSIDs in a network"),
    get(C, "getNetworkWirelessSsid", "/networks/{networkId}/wireless/ssids/{number}", "Return a single MR SSID"),
    put(C, "updateNetworkWirelessSsid", "/networks/{networkId}/wireless/ssids/{number}", "Update the attributes of an MR SSID").body(&[
        NAME,
        ENABLED,
        Param::one_of(
            "authMode",
            &["open", "open-enhanced", "psk", "open-with-radius", "open-with-nac", "8021x-meraki", "8021x-nac", "8021x-radius", "8021x-google", "8021x-localradius", "ipsk-with-radius", "ipsk-without-radius", "ipsk-with-nac"],
            "Association control method",
        ),
        Param::one_of("encryptionMode", &["wep", "wpa"], "PSK encryption mode"),
        Param::string("psk", "Passkey for the SSID"),
        Param::one_of(
            "wpaEncryptionMode",
            &["WPA1 only", "WPA1 and WPA2", "WPA2 only", "WPA3 Transition Mode", "WPA3 only", "WPA3 192-bit Security"],
            "WPA encryption mode",
        ),
        Param::boolean("visible", "Advertise the SSID"),
        Param::one_of(
            "ipAssignmentMode",
            &["NAT mode", "Bridge mode", "Layer 3 roaming", "Ethernet over GRE", "Layer 3 roaming with a concentrator", "VPN"],
            "Client IP assignment mode",
        ),
        Param::boolean("useVlanTagging", "Tag client traffic with a VLAN"),
        Param::ranged("defaultVlanId", 1, 4094, "Default VLAN for tagged traffic"),
        Param::ranged("perClientBandwidthLimitUp", 0, 1_000_000, "Upload limit per client in Kbps (0 = unlimited)"),
        Param::ranged("perClientBandwidthLimitDown", 0, 1_000_000, "Download limit per client in Kbps (0 = unlimited)"),
        Param::string("bandSelection", "Band selection, e.g. 'Dual band operation'"),
        Param::one_of("minBitrate", &["1", "2", "5.5", "6", "9", "11", "12", "18", "24", "36", "48", "54"], "Minimum bitrate in Mbps"),
        Param::one_of(
            "splashPage",
            &["None", "Click-through splash page", "Billing", "Password-protected with Meraki RADIUS", "Sponsored guest", "Cisco ISE"],
            "Splash page type",
        ),
    ]),
    get(C, "getNetworkWirelessSsidFirewallL3FirewallRules", "/networks/{networkId}/wireless/ssids/{number}/firewall/l3FirewallRules", "Return the L3 firewall rules for an SSID"),
    put(C, "updateNetworkWirelessSsidFirewallL3FirewallRules", "/networks/{networkId}/wireless/ssids/{number}/firewall/l3FirewallRules", "Update the L3 firewall rules of an SSID")
        .body(&[
            RULES,
            Param::boolean("allowLanAccess", "Allow wireless clients to access the local LAN"),
        ]),
    get(C, "getNetworkWirelessSsidFirewallL7FirewallRules", "/networks/{networkId}/wireless/ssids/{number}/firewall/l7FirewallRules", "Return the L7 firewall rules for an SSID"),
    get(C, "getNetworkWirelessSsidSplashSettings", "/networks/{networkId}/wireless/ssids/{number}/splash/settings", "Display the splash page settings for the given SSID"),
    get(C, "getNetworkWirelessSsidTrafficShapingRules", "/networks/{networkId}/wireless/ssids/{number}/trafficShaping/rules", "Display the traffic shaping settings for a SSID"),
    get(C, "getNetworkWirelessSsidHotspot20", "/networks/{networkId}/wireless/ssids/{number}/hotspot20", "Return the Hotspot 2.0 settings for an SSID"),
    get(C, "getNetworkWirelessSettings", "/networks/{networkId}/wireless/settings", "Return the wireless settings for a network"),
    put(C, "updateNetworkWirelessSettings", "/networks/{networkId}/wireless/settings", "Update the wireless settings for a network")
        .body(&[
            Param::boolean("meshingEnabled", "Toggle for enabling or disabling meshing"),
            Param::boolean("ipv6BridgeEnabled", "Toggle for enabling or disabling IPv6 bridging"),
            Param::boolean("locationAnalyticsEnabled", "Toggle for enabling or disabling location analytics"),
            Param::one_of("upgradeStrategy", &["minimizeUpgradeTime", "minimizeClientDowntime"], "Upgrade strategy"),
            Param::boolean("ledLightsOn", "Turn the LED lights on"),
        ]),
    get(C, "getNetworkWirelessRfProfiles", "/networks/{networkId}/wireless/rfProfiles", "List RF profiles for this network")
        .query(&[Param::boolean("includeTemplateProfiles", "Include RF profiles from the bound template")]),
    get(C, "getNetworkWirelessBluetoothSettings", "/networks/{networkId}/wireless/bluetooth/settings", "Return the Bluetooth settings for a network"),
    get(C, "getNetworkWirelessAirMarshal", "/networks/{networkId}/wireless/airMarshal", "List Air Marshal scan results from a network")
        .query(RECENT),
    get(C, "getNetworkWirelessClientCountHistory", "/networks/{networkId}/wireless/clientCountHistory", "Return wireless client counts over time")
        .query(&[
            T0,
            T1,
            Param::ranged("timespan", 0, 604_800, "Timespan in seconds (max 7 days)"),
            RESOLUTION,
            Param::boolean("autoResolution", "Pick a resolution automatically"),
            Param::string("clientId", "Filter by client"),
            Param::string("deviceSerial", "Filter by access point"),
            Param::string("apTag", "Filter by AP tag"),
            Param::one_of("band", BANDS, "Filter by band"),
            Param::ranged("ssid", 0, 14, "Filter by SSID number"),
        ]),
    get(C, "getNetworkWirelessConnectionStats", "/networks/{networkId}/wireless/connectionStats", "Aggregated connectivity info for this network")
        .query(STATS_FILTERS),
    get(C, "getNetworkWirelessFailedConnections", "/networks/{networkId}/wireless/failedConnections", "List of all failed client connection events on this network")
        .query(STATS_FILTERS),
    get(C, "getNetworkWirelessLatencyStats", "/networks/{networkId}/wireless/latencyStats", "Aggregated latency info for this network")
        .query(STATS_FILTERS),
    get(C, "getNetworkWirelessChannelUtilizationHistory", "/networks/{networkId}/wireless/channelUtilizationHistory", "Return AP channel utilization over time")
        .query(&[
            T0,
            T1,
            TIMESPAN,
            RESOLUTION,
            Param::boolean("autoResolution", "Pick a resolution automatically"),
            Param::string("deviceSerial", "Filter by access point"),
            Param::one_of("band", BANDS, "Filter by band"),
        ]),
    get(C, "getNetworkWirelessUsageHistory", "/networks/{networkId}/wireless/usageHistory", "Return AP usage over time")
        .query(&[
            T0,
            T1,
            TIMESPAN,
            RESOLUTION,
            Param::string("deviceSerial", "Filter by access point"),
            Param::one_of("band", BANDS, "Filter by band"),
            Param::ranged("ssid", 0, 14, "Filter by SSID number"),
        ]),
    get(C, "getDeviceWirelessStatus", "/devices/{serial}/wireless/status", "Return the SSID statuses of an access point"),
    get(C, "getDeviceWirelessRadioSettings", "/devices/{serial}/wireless/radio/settings", "Return the manually configured radio settings overrides of a device"),
    get(C, "getDeviceWirelessConnectionStats", "/devices/{serial}/wireless/connectionStats", "Aggregated connectivity info for a given AP on this network")
        .query(STATS_FILTERS),
    get(C, "getDeviceWirelessBluetoothSettings", "/devices/{serial}/wireless/bluetooth/settings", "Return the bluetooth settings for a wireless device"),
    get(C, "getOrganizationWirelessDevicesEthernetStatuses", "/organizations/{organizationId}/wireless/devices/ethernet/statuses", "List the most recent Ethernet link speed, duplex, aggregation and power mode and status information for wireless devices")
        .paginated()
        .query(&[NETWORK_IDS]),
];

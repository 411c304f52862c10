use super::*;

const C: SdkCategory = SdkCategory::Sm;

const DEVICE_SELECTORS: &[Param] = &[
    Param::list("wifiMacs", "Wifi MACs of the devices"),
    Param::list("ids", "Systems Manager device IDs"),
    SERIALS,
    Param::list("scope", "Scope, e.g. [\"withAny\", \"tag1\"]"),
];

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getNetworkSmDevices", "/networks/{networkId}/sm/devices", "List the devices enrolled in an SM network with various specified fields and filters")
        .paginated()
        .query(&[
            Param::list("fields", "Additional fields to return (ip, systemType, lastConnected, location, ...)"),
            Param::list("wifiMacs", "Filter by Wifi MACs"),
            SERIALS,
            Param::list("ids", "Filter by device IDs"),
            Param::list("uuids", "Filter by UUIDs"),
            Param::list("scope", "Filter by scope"),
        ]),
    post(C, "checkinNetworkSmDevices", "/networks/{networkId}/sm/devices/checkin", "Force check-in a set of devices")
        .body(DEVICE_SELECTORS),
    post(C, "lockNetworkSmDevices", "/networks/{networkId}/sm/devices/lock", "Lock a set of devices")
        .body(&[
            Param::list("wifiMacs", "Wifi MACs of the devices"),
            Param::list("ids", "Systems Manager device IDs"),
            SERIALS,
            Param::list("scope", "Scope of the devices"),
            Param::ranged("pin", 100_000, 999_999, "Six-digit lock PIN for macOS devices"),
        ]),
    post(C, "wipeNetworkSmDevices", "/networks/{networkId}/sm/devices/wipe", "Wipe a device")
        .body(&[
            Param::string("wifiMac", "Wifi MAC of the device"),
            Param::string("id", "Systems Manager device ID"),
            Param::string("serial", "Serial of the device"),
            Param::ranged("pin", 100_000, 999_999, "Six-digit PIN for macOS devices"),
        ]),
    post(C, "moveNetworkSmDevices", "/networks/{networkId}/sm/devices/move", "Move a set of devices to a new network")
        .body(&[
            Param::list("wifiMacs", "Wifi MACs of the devices"),
            Param::list("ids", "Systems Manager device IDs"),
            SERIALS,
            Param::list("scope", "Scope of the devices"),
            Param::string("newNetwork", "Network to move the devices to").required(),
        ]),
    post(C, "unenrollNetworkSmDevice", "/networks/{networkId}/sm/devices/{deviceId}/unenroll", "Unenroll a device"),
    get(C, "getNetworkSmDeviceSoftwares", "/networks/{networkId}/sm/devices/{deviceId}/softwares", "Get a list of softwares associated with a device"),
    get(C, "getNetworkSmDeviceNetworkAdapters", "/networks/{networkId}/sm/devices/{deviceId}/networkAdapters", "List the network adapters of a device"),
    get(C, "getNetworkSmDeviceRestrictions", "/networks/{networkId}/sm/devices/{deviceId}/restrictions", "List the restrictions on a device"),
    get(C, "getNetworkSmDeviceSecurityCenters", "/networks/{networkId}/sm/devices/{deviceId}/securityCenters", "List the security centers on a device"),
    get(C, "getNetworkSmDeviceCellularUsageHistory", "/networks/{networkId}/sm/devices/{deviceId}/cellularUsageHistory", "Return the client's daily cellular data usage history"),
    get(C, "getNetworkSmDevicePerformanceHistory", "/networks/{networkId}/sm/devices/{deviceId}/performanceHistory", "Return historical records of various Systems Manager client metrics")
        .paginated(),
    get(C, "getNetworkSmProfiles", "/networks/{networkId}/sm/profiles", "List all profiles in a network")
        .query(&[Param::list("payloadTypes", "Filter by payload types")]),
    get(C, "getNetworkSmUsers", "/networks/{networkId}/sm/users", "List the owners in an SM network with various specified fields and filters")
        .query(&[
            Param::list("ids", "Filter by owner IDs"),
            Param::list("usernames", "Filter by usernames"),
            Param::list("emails", "Filter by emails"),
            Param::list("scope", "Filter by scope"),
        ]),
    get(C, "getNetworkSmTargetGroups", "/networks/{networkId}/sm/targetGroups", "List the target groups in this network")
        .query(&[Param::boolean("withDetails", "Include scope details")]),
    get(C, "getOrganizationSmApnsCert", "/organizations/{organizationId}/sm/apnsCert", "Get the organization's APNS certificate"),
    get(C, "getOrganizationSmVppAccounts", "/organizations/{organizationId}/sm/vppAccounts", "List the VPP accounts in the organization"),
];

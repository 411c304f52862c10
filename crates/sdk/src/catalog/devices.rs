use super::*;

const C: SdkCategory = SdkCategory::Devices;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getDevice", "/devices/{serial}", "Return a single device"),
    put(C, "updateDevice", "/devices/{serial}", "Update the attributes of a device").body(&[
        NAME,
        TAGS,
        Param::number("lat", "Latitude of the device"),
        Param::number("lng", "Longitude of the device"),
        Param::string("address", "Physical address of the device"),
        NOTES,
        Param::boolean("moveMapMarker", "Set the latitude and longitude based on the address"),
        Param::string("switchProfileId", "Switch template to bind to"),
        Param::string("floorPlanId", "Floor plan to associate with"),
    ]),
    post(C, "rebootDevice", "/devices/{serial}/reboot", "Reboot a device"),
    post(C, "blinkDeviceLeds", "/devices/{serial}/blinkLeds", "Blink the LEDs on a device").body(&[
        Param::ranged("duration", 5, 120, "Duration in seconds (5-120)"),
        Param::ranged("period", 100, 1000, "Period in milliseconds (100-1000)"),
        Param::ranged("duty", 10, 90, "Duty cycle as a percent (10-90)"),
    ]),
    get(C, "getDeviceClients", "/devices/{serial}/clients", "List the clients of a device, up to a maximum of a month ago")
        .query(RECENT),
    get(C, "getDeviceLldpCdp", "/devices/{serial}/lldpCdp", "List LLDP and CDP information for a device"),
    get(C, "getDeviceManagementInterface", "/devices/{serial}/managementInterface", "Return the management interface settings for a device"),
    put(C, "updateDeviceManagementInterface", "/devices/{serial}/managementInterface", "Update the management interface settings for a device")
        .body(&[
            Param::json("wan1", "WAN 1 settings"),
            Param::json("wan2", "WAN 2 settings"),
        ]),
    get(C, "getDeviceLossAndLatencyHistory", "/devices/{serial}/lossAndLatencyHistory", "Get the uplink loss percentage and latency in milliseconds")
        .query(&[
            Param::string("ip", "Destination IP used to obtain the requested stats").required(),
            T0,
            T1,
            Param::ranged("timespan", 0, 2_592_000, "Timespan in seconds"),
            Param::integer("resolution", "Time resolution in seconds (60, 600, 3600, 86400)"),
            Param::one_of("uplink", &["wan1", "wan2", "wan3", "cellular"], "WAN uplink used"),
        ]),
    get(C, "getDeviceCellularSims", "/devices/{serial}/cellular/sims", "Return the SIM and APN configurations for a cellular device"),
    post(C, "createDeviceLiveToolsPing", "/devices/{serial}/liveTools/ping", "Enqueue a job to ping a target host from the device")
        .body(&[
            Param::string("target", "FQDN, IPv4 or IPv6 address").required(),
            Param::ranged("count", 1, 5, "Number of pings (1-5)"),
        ]),
    get(C, "getDeviceLiveToolsPing", "/devices/{serial}/liveTools/ping/{id}", "Return a ping job"),
    post(C, "createDeviceLiveToolsPingDevice", "/devices/{serial}/liveTools/pingDevice", "Enqueue a job to check connectivity status to the device")
        .body(&[Param::ranged("count", 1, 5, "Number of pings (1-5)")]),
    post(C, "createDeviceLiveToolsArpTable", "/devices/{serial}/liveTools/arpTable", "Enqueue a job to perform an ARP table request for the device"),
    get(C, "getDeviceLiveToolsArpTable", "/devices/{serial}/liveTools/arpTable/{arpTableId}", "Return an ARP table live tool job"),
    post(C, "createDeviceLiveToolsCableTest", "/devices/{serial}/liveTools/cableTest", "Enqueue a job to perform a cable test for the device on the specified ports")
        .body(&[Param::list("ports", "Switch ports to test").required()]),
    get(C, "getDeviceLiveToolsCableTest", "/devices/{serial}/liveTools/cableTest/{id}", "Return a cable test live tool job"),
    post(C, "createDeviceLiveToolsThroughputTest", "/devices/{serial}/liveTools/throughputTest", "Enqueue a job to test a device throughput"),
    get(C, "getDeviceLiveToolsThroughputTest", "/devices/{serial}/liveTools/throughputTest/{throughputTestId}", "Return a throughput test job"),
    post(C, "createDeviceLiveToolsWakeOnLan", "/devices/{serial}/liveTools/wakeOnLan", "Enqueue a job to send a Wake-on-LAN packet from the device")
        .body(&[
            Param::ranged("vlanId", 1, 4094, "VLAN to send the packet on").required(),
            Param::string("mac", "MAC address of the device to wake").required(),
        ]),
    get(C, "getDeviceLiveToolsWakeOnLan", "/devices/{serial}/liveTools/wakeOnLan/{wakeOnLanId}", "Return a Wake-on-LAN job"),
];

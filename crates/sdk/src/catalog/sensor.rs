use super::*;

const C: SdkCategory = SdkCategory::Sensor;

const METRICS: Param = Param::list(
    "metrics",
    "Metrics to include (temperature, humidity, door, water, noise, pm25, tvoc, co2, battery, ...)",
);

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getDeviceSensorRelationships", "/devices/{serial}/sensor/relationships", "List the sensor roles for a given sensor or camera device"),
    put(C, "updateDeviceSensorRelationships", "/devices/{serial}/sensor/relationships", "Assign one or more sensor roles to a given sensor or camera device")
        .body(&[Param::json("livestream", "Livestream relationship, {\"relatedDevices\": [...]}")]),
    post(C, "createDeviceSensorCommand", "/devices/{serial}/sensor/commands", "Sends a command to a sensor")
        .body(&[Param::one_of(
            "operation",
            &["disableDownstreamPower", "enableDownstreamPower", "cycleDownstreamPower", "refreshData"],
            "Command to send",
        )
        .required()]),
    get(C, "getDeviceSensorCommands", "/devices/{serial}/sensor/commands", "Returns a historical log of all commands")
        .paginated()
        .query(&[Param::list("operations", "Filter by operation"), T0, T1, TIMESPAN]),
    get(C, "getNetworkSensorAlertsProfiles", "/networks/{networkId}/sensor/alerts/profiles", "Lists all sensor alert profiles for a network"),
    post(C, "createNetworkSensorAlertsProfile", "/networks/{networkId}/sensor/alerts/profiles", "Creates a sensor alert profile for a network")
        .body(&[
            NAME.required(),
            Param::json("conditions", "Conditions that trigger alerts").required(),
            Param::json("schedule", "Alert schedule"),
            Param::json("recipients", "Alert recipients"),
            Param::list("serials", "Sensors that send alerts using this profile"),
        ]),
    get(C, "getNetworkSensorAlertsProfile", "/networks/{networkId}/sensor/alerts/profiles/{id}", "Show details of a sensor alert profile for a network"),
    delete(C, "deleteNetworkSensorAlertsProfile", "/networks/{networkId}/sensor/alerts/profiles/{id}", "Deletes a sensor alert profile from a network"),
    get(C, "getNetworkSensorAlertsCurrentOverviewByMetric", "/networks/{networkId}/sensor/alerts/current/overview/byMetric", "Return an overview of currently alerting sensors by metric"),
    get(C, "getNetworkSensorAlertsOverviewByMetric", "/networks/{networkId}/sensor/alerts/overview/byMetric", "Return an overview of alert occurrences over a timespan, by metric")
        .query(&[T0, T1, Param::ranged("timespan", 0, 31_536_000, "Timespan in seconds"), Param::integer("interval", "Time interval in seconds")]),
    get(C, "getNetworkSensorMqttBrokers", "/networks/{networkId}/sensor/mqttBrokers", "List the sensor settings of all MQTT brokers for this network"),
    get(C, "getOrganizationSensorReadingsLatest", "/organizations/{organizationId}/sensor/readings/latest", "Return the latest available reading for each metric from each sensor")
        .paginated()
        .query(&[NETWORK_IDS, SERIALS, METRICS]),
    get(C, "getOrganizationSensorReadingsHistory", "/organizations/{organizationId}/sensor/readings/history", "Return all reported readings from sensors in a given timespan")
        .paginated()
        .query(&[
            T0,
            T1,
            Param::ranged("timespan", 0, 604_800, "Timespan in seconds (max 7 days)"),
            NETWORK_IDS,
            SERIALS,
            METRICS,
        ]),
];

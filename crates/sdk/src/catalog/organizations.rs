use super::*;

const C: SdkCategory = SdkCategory::Organizations;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getOrganizations", "/organizations", "List the organizations that the user has privileges on").paginated(),
    get(C, "getOrganization", "/organizations/{organizationId}", "Return an organization"),
    put(C, "updateOrganization", "/organizations/{organizationId}", "Update an organization").body(&[
        NAME,
        Param::json("api", "API settings, e.g. {\"enabled\": true}"),
        Param::json("management", "Management details (JSON object)"),
    ]),
    get(C, "getOrganizationNetworks", "/organizations/{organizationId}/networks", "List the networks that the user has privileges on in an organization")
        .paginated()
        .query(&[
            Param::string("configTemplateId", "Only networks bound to this template"),
            Param::boolean("isBoundToConfigTemplate", "Filter on template binding"),
            Param::list("tags", "Only networks with these tags"),
            Param::one_of("tagsFilterType", &["withAnyTags", "withAllTags"], "How to match tags"),
            PRODUCT_TYPES,
        ]),
    post(C, "createOrganizationNetwork", "/organizations/{organizationId}/networks", "Create a network")
        .body(&[
            NAME.required(),
            Param::list("productTypes", "Product types of the network").required(),
            TAGS,
            Param::string("timeZone", "Time zone, e.g. America/Los_Angeles"),
            NOTES,
            Param::string("copyFromNetworkId", "Network to copy configuration from"),
        ]),
    get(C, "getOrganizationDevices", "/organizations/{organizationId}/devices", "List the devices in an organization")
        .paginated()
        .query(&[
            NETWORK_IDS,
            PRODUCT_TYPES,
            SERIALS,
            Param::string("name", "Filter by device name"),
            Param::string("mac", "Filter by MAC address"),
            Param::string("model", "Filter by model"),
            Param::list("tags", "Filter by tags"),
        ]),
    get(C, "getOrganizationDevicesStatuses", "/organizations/{organizationId}/devices/statuses", "List the status of every Meraki device in the organization")
        .paginated()
        .query(&[
            NETWORK_IDS,
            SERIALS,
            Param::list("statuses", "Filter by status (online, alerting, offline, dormant)"),
            PRODUCT_TYPES,
            Param::list("models", "Filter by models"),
        ]),
    get(C, "getOrganizationDevicesStatusesOverview", "/organizations/{organizationId}/devices/statuses/overview", "Return an overview of current device statuses")
        .query(&[PRODUCT_TYPES, NETWORK_IDS]),
    get(C, "getOrganizationDevicesAvailabilities", "/organizations/{organizationId}/devices/availabilities", "List the availability information for devices in an organization")
        .paginated()
        .query(&[NETWORK_IDS, PRODUCT_TYPES, SERIALS]),
    get(C, "getOrganizationDevicesUplinksLossAndLatency", "/organizations/{organizationId}/devices/uplinksLossAndLatency", "Return the uplink loss and latency for every MX in the organization")
        .query(&[
            T0,
            T1,
            Param::ranged("timespan", 0, 300, "Timespan in seconds (max 300)"),
            Param::one_of("uplink", &["wan1", "wan2", "wan3", "cellular"], "Only this uplink"),
            Param::string("ip", "Only this destination IP"),
        ]),
    get(C, "getOrganizationUplinksStatuses", "/organizations/{organizationId}/uplinks/statuses", "List the uplink status of every Meraki MX, MG and Z series device")
        .paginated()
        .query(&[NETWORK_IDS, SERIALS, Param::list("iccids", "Filter by ICCIDs")]),
    get(C, "getOrganizationInventoryDevices", "/organizations/{organizationId}/inventory/devices", "Return the device inventory for an organization")
        .paginated()
        .query(&[
            Param::one_of("usedState", &["used", "unused"], "Filter by used or unused inventory"),
            Param::string("search", "Search by serial, MAC or model"),
            NETWORK_IDS,
            SERIALS,
            PRODUCT_TYPES,
        ]),
    post(C, "claimIntoOrganization", "/organizations/{organizationId}/claim", "Claim a list of devices, licenses, and/or orders into an organization")
        .body(&[
            Param::list("orders", "Order numbers to claim"),
            Param::list("serials", "Serials of devices to claim"),
            Param::json("licenses", "Licenses to claim, [{\"key\": ..., \"mode\": ...}]"),
        ]),
    post(C, "releaseFromOrganizationInventory", "/organizations/{organizationId}/inventory/release", "Release a list of claimed devices from an organization")
        .body(&[Param::list("serials", "Serials of devices to release").required()])
        .destructive(),
    get(C, "getOrganizationAdmins", "/organizations/{organizationId}/admins", "List the dashboard administrators in this organization"),
    post(C, "createOrganizationAdmin", "/organizations/{organizationId}/admins", "Create a new dashboard administrator")
        .body(&[
            Param::string("email", "Email of the administrator").required(),
            NAME.required(),
            Param::one_of("orgAccess", &["full", "read-only", "enterprise", "none"], "Organization privilege").required(),
            Param::json("tags", "Tag-scoped privileges"),
            Param::json("networks", "Network-scoped privileges"),
        ]),
    put(C, "updateOrganizationAdmin", "/organizations/{organizationId}/admins/{adminId}", "Update an administrator")
        .body(&[
            NAME,
            Param::one_of("orgAccess", &["full", "read-only", "enterprise", "none"], "Organization privilege"),
            Param::json("tags", "Tag-scoped privileges"),
            Param::json("networks", "Network-scoped privileges"),
        ]),
    delete(C, "deleteOrganizationAdmin", "/organizations/{organizationId}/admins/{adminId}", "Revoke all access for a dashboard administrator"),
    get(C, "getOrganizationAlertsProfiles", "/organizations/{organizationId}/alerts/profiles", "List all organization-wide alert configurations"),
    get(C, "getOrganizationAssuranceAlerts", "/organizations/{organizationId}/assurance/alerts", "Return all health alerts for an organization")
        .paginated()
        .query(&[
            Param::string("networkId", "Only alerts for this network"),
            Param::one_of("severity", &["critical", "warning", "informational"], "Only alerts of this severity"),
            Param::boolean("active", "Only active alerts"),
            Param::boolean("resolved", "Only resolved alerts"),
            Param::string("tsStart", "Starting point of the query (ISO 8601)"),
            Param::string("tsEnd", "End point of the query (ISO 8601)"),
            SERIALS,
        ]),
    get(C, "getOrganizationApiRequests", "/organizations/{organizationId}/apiRequests", "List the API requests made by an organization")
        .paginated()
        .query(&[
            T0,
            T1,
            TIMESPAN,
            Param::string("adminId", "Filter by admin ID"),
            Param::string("path", "Filter by request path"),
            Param::one_of("method", &["GET", "PUT", "POST", "DELETE"], "Filter by HTTP method"),
            Param::integer("responseCode", "Filter by response code"),
        ]),
    get(C, "getOrganizationApiRequestsOverview", "/organizations/{organizationId}/apiRequests/overview", "Return an aggregated overview of API requests data")
        .query(TIME_WINDOW),
    get(C, "getOrganizationConfigTemplates", "/organizations/{organizationId}/configTemplates", "List the configuration templates for this organization"),
    delete(C, "deleteOrganizationConfigTemplate", "/organizations/{organizationId}/configTemplates/{configTemplateId}", "Remove a configuration template"),
    get(C, "getOrganizationConfigurationChanges", "/organizations/{organizationId}/configurationChanges", "View the change log for your organization")
        .paginated()
        .query(&[
            T0,
            T1,
            TIMESPAN,
            Param::string("networkId", "Filter by network ID"),
            Param::string("adminId", "Filter by admin ID"),
        ]),
    get(C, "getOrganizationClientsSearch", "/organizations/{organizationId}/clients/search", "Return the client details in an organization")
        .paginated()
        .query(&[Param::string("mac", "Client MAC address").required()]),
    get(C, "getOrganizationFirmwareUpgrades", "/organizations/{organizationId}/firmware/upgrades", "Get firmware upgrade information for an organization")
        .paginated()
        .query(&[
            Param::list("status", "Filter by upgrade status"),
            PRODUCT_TYPES,
        ]),
    get(C, "getOrganizationLicensesOverview", "/organizations/{organizationId}/licenses/overview", "Return an overview of the license state for an organization"),
    get(C, "getOrganizationLicenses", "/organizations/{organizationId}/licenses", "List the licenses for an organization")
        .paginated()
        .query(&[
            Param::string("deviceSerial", "Filter by assigned device"),
            Param::string("networkId", "Filter by network"),
            Param::one_of("state", &["active", "expired", "expiring", "recentlyQueued", "unused", "unusedActive"], "Filter by license state"),
        ]),
    get(C, "getOrganizationLoginSecurity", "/organizations/{organizationId}/loginSecurity", "Return the login security settings for an organization"),
    get(C, "getOrganizationSnmp", "/organizations/{organizationId}/snmp", "Return the SNMP settings for an organization"),
    get(C, "getOrganizationWebhooksLogs", "/organizations/{organizationId}/webhooks/logs", "Return the log of webhook POSTs sent")
        .paginated()
        .query(&[T0, T1, TIMESPAN, Param::string("url", "Filter by webhook URL")]),
    get(C, "getOrganizationPolicyObjects", "/organizations/{organizationId}/policyObjects", "Lists Policy Objects belonging to the organization")
        .paginated(),
    get(C, "getOrganizationOpenapiSpec", "/organizations/{organizationId}/openapiSpec", "Return the OpenAPI Specification of the organization's API documentation")
        .query(&[Param::ranged("version", 2, 3, "OpenAPI specification version")]),
];

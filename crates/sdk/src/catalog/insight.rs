use super::*;

const C: SdkCategory = SdkCategory::Insight;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getOrganizationInsightApplications", "/organizations/{organizationId}/insight/applications", "List all Insight tracked applications"),
    get(C, "getOrganizationInsightMonitoredMediaServers", "/organizations/{organizationId}/insight/monitoredMediaServers", "List the monitored media servers for this organization"),
    get(C, "getOrganizationInsightMonitoredMediaServer", "/organizations/{organizationId}/insight/monitoredMediaServers/{monitoredMediaServerId}", "Return a monitored media server for this organization"),
    post(C, "createOrganizationInsightMonitoredMediaServer", "/organizations/{organizationId}/insight/monitoredMediaServers", "Add a media server to be monitored for this organization")
        .body(&[
            NAME.required(),
            Param::string("address", "IP address or hostname of the media server").required(),
            Param::boolean("bestEffortMonitoringEnabled", "Use best-effort monitoring"),
        ]),
    put(C, "updateOrganizationInsightMonitoredMediaServer", "/organizations/{organizationId}/insight/monitoredMediaServers/{monitoredMediaServerId}", "Update a monitored media server for this organization")
        .body(&[
            NAME,
            Param::string("address", "IP address or hostname of the media server"),
            Param::boolean("bestEffortMonitoringEnabled", "Use best-effort monitoring"),
        ]),
    delete(C, "deleteOrganizationInsightMonitoredMediaServer", "/organizations/{organizationId}/insight/monitoredMediaServers/{monitoredMediaServerId}", "Delete a monitored media server from this organization"),
    get(C, "getNetworkInsightApplicationHealthByTime", "/networks/{networkId}/insight/applications/{applicationId}/healthByTime", "Get application health by time")
        .query(&[
            T0,
            T1,
            Param::ranged("timespan", 0, 604_800, "Timespan in seconds (max 7 days)"),
            RESOLUTION,
        ]),
];

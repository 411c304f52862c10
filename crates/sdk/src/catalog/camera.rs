use super::*;

const C: SdkCategory = SdkCategory::Camera;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getDeviceCameraVideoLink", "/devices/{serial}/camera/videoLink", "Returns video link to the specified camera")
        .query(&[Param::string("timestamp", "Video link at this time (ISO 8601 or epoch)")]),
    post(C, "generateDeviceCameraSnapshot", "/devices/{serial}/camera/generateSnapshot", "Generate a snapshot of what the camera sees at the specified time")
        .body(&[
            Param::string("timestamp", "Time of the snapshot (ISO 8601); defaults to now"),
            Param::boolean("fullframe", "Return the full frame rather than the cropped view"),
        ]),
    get(C, "getDeviceCameraQualityAndRetention", "/devices/{serial}/camera/qualityAndRetention", "Returns quality and retention settings for the given camera"),
    put(C, "updateDeviceCameraQualityAndRetention", "/devices/{serial}/camera/qualityAndRetention", "Update quality and retention settings for the given camera")
        .body(&[
            Param::string("profileId", "Quality retention profile"),
            Param::boolean("motionBasedRetentionEnabled", "Retain video only when there is motion"),
            Param::boolean("audioRecordingEnabled", "Record audio"),
            Param::boolean("restrictedBandwidthModeEnabled", "Restrict bandwidth"),
            Param::one_of("quality", &["Standard", "High", "Enhanced"], "Recording quality"),
            Param::string("resolution", "Resolution, e.g. 1280x720"),
            Param::ranged("motionDetectorVersion", 1, 2, "Motion detector version"),
        ]),
    get(C, "getDeviceCameraSense", "/devices/{serial}/camera/sense", "Returns sense settings for a given camera"),
    put(C, "updateDeviceCameraSense", "/devices/{serial}/camera/sense", "Update sense settings for the given camera")
        .body(&[
            Param::boolean("senseEnabled", "Enable sense API"),
            Param::string("mqttBrokerId", "MQTT broker ID"),
            Param::json("audioDetection", "Audio detection settings"),
            Param::string("detectionModelId", "Detection model ID"),
        ]),
    get(C, "getDeviceCameraAnalyticsLive", "/devices/{serial}/camera/analytics/live", "Returns live state from camera analytics zones"),
    get(C, "getDeviceCameraAnalyticsZones", "/devices/{serial}/camera/analytics/zones", "Returns all configured analytic zones for this camera"),
    get(C, "getDeviceCameraAnalyticsZoneHistory", "/devices/{serial}/camera/analytics/zones/{zoneId}/history", "Return historical records for analytic zones")
        .query(&[
            T0,
            T1,
            Param::ranged("timespan", 0, 14_400, "Timespan in seconds (max 4 hours)"),
            Param::integer("resolution", "Time resolution in seconds (60)"),
            Param::one_of("objectType", &["person", "vehicle"], "Object type to count"),
        ]),
    get(C, "getDeviceCameraVideoSettings", "/devices/{serial}/camera/video/settings", "Returns video settings for the given camera"),
    get(C, "getDeviceCameraWirelessProfiles", "/devices/{serial}/camera/wirelessProfiles", "Returns wireless profile assigned to the given camera"),
    get(C, "getNetworkCameraQualityRetentionProfiles", "/networks/{networkId}/camera/qualityRetentionProfiles", "List the quality retention profiles for this network"),
    post(C, "createNetworkCameraQualityRetentionProfile", "/networks/{networkId}/camera/qualityRetentionProfiles", "Creates new quality retention profile for this network")
        .body(&[
            NAME.required(),
            Param::boolean("motionBasedRetentionEnabled", "Delete footage older than 3 days without motion"),
            Param::boolean("restrictedBandwidthModeEnabled", "Disable features that require additional bandwidth"),
            Param::boolean("audioRecordingEnabled", "Record audio"),
            Param::boolean("cloudArchiveEnabled", "Create redundant video backup using Cloud Archive"),
            Param::ranged("motionDetectorVersion", 1, 2, "Motion detector version"),
            Param::integer("maxRetentionDays", "Maximum days of video to retain"),
            Param::json("videoSettings", "Video quality and resolution per camera model"),
        ]),
    delete(C, "deleteNetworkCameraQualityRetentionProfile", "/networks/{networkId}/camera/qualityRetentionProfiles/{qualityRetentionProfileId}", "Delete an existing quality retention profile for this network"),
    get(C, "getNetworkCameraSchedules", "/networks/{networkId}/camera/schedules", "Returns a list of all camera recording schedules"),
    get(C, "getNetworkCameraWirelessProfiles", "/networks/{networkId}/camera/wirelessProfiles", "List the camera wireless profiles for this network"),
    get(C, "getOrganizationCameraOnboardingStatuses", "/organizations/{organizationId}/camera/onboarding/statuses", "Fetch onboarding status of cameras")
        .query(&[SERIALS, NETWORK_IDS]),
];

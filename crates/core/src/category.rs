// Dashboard API product categories (SDK namespaces)

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One namespace of the Dashboard API, mirrored as an accessor on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SdkCategory {
    Administered,
    Appliance,
    Camera,
    CellularGateway,
    Devices,
    Insight,
    Licensing,
    Networks,
    Organizations,
    Sensor,
    Sm,
    Switch,
    Wireless,
}

impl SdkCategory {
    pub const ALL: [SdkCategory; 13] = [
        SdkCategory::Administered,
        SdkCategory::Appliance,
        SdkCategory::Camera,
        SdkCategory::CellularGateway,
        SdkCategory::Devices,
        SdkCategory::Insight,
        SdkCategory::Licensing,
        SdkCategory::Networks,
        SdkCategory::Organizations,
        SdkCategory::Sensor,
        SdkCategory::Sm,
        SdkCategory::Switch,
        SdkCategory::Wireless,
    ];

    /// Wire name, as used by the Dashboard SDK and OpenAPI tags
    pub fn as_str(&self) -> &'static str {
        match self {
            SdkCategory::Administered => "administered",
            SdkCategory::Appliance => "appliance",
            SdkCategory::Camera => "camera",
            SdkCategory::CellularGateway => "cellularGateway",
            SdkCategory::Devices => "devices",
            SdkCategory::Insight => "insight",
            SdkCategory::Licensing => "licensing",
            SdkCategory::Networks => "networks",
            SdkCategory::Organizations => "organizations",
            SdkCategory::Sensor => "sensor",
            SdkCategory::Sm => "sm",
            SdkCategory::Switch => "switch",
            SdkCategory::Wireless => "wireless",
        }
    }

    /// Tool module name used by profiles (`SDK_<category>`)
    pub fn module_name(&self) -> String {
        format!("SDK_{}", self.as_str())
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SdkCategory::Administered => "👤",
            SdkCategory::Appliance => "🔐",
            SdkCategory::Camera => "📹",
            SdkCategory::CellularGateway => "📶",
            SdkCategory::Devices => "🖥️",
            SdkCategory::Insight => "📊",
            SdkCategory::Licensing => "🔑",
            SdkCategory::Networks => "🌐",
            SdkCategory::Organizations => "🏢",
            SdkCategory::Sensor => "🌡️",
            SdkCategory::Sm => "📱",
            SdkCategory::Switch => "🔌",
            SdkCategory::Wireless => "📡",
        }
    }
}

impl fmt::Display for SdkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SdkCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix("SDK_").unwrap_or(trimmed);
        SdkCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(name) || name.eq_ignore_ascii_case(&snake(c.as_str())))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

fn snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

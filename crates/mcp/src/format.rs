//! Markdown rendering of Dashboard responses.
//!
//! Every category has a [`FieldProfile`] naming which fields identify an
//! item, which ones are worth showing in a list, and which ones lead a
//! detail view. Lists are capped at [`MAX_LIST_ITEMS`] entries and objects
//! show at most [`MAX_EXTRA_FIELDS`] fields beyond the profile's own.

use meraki_sdk::{Endpoint, HttpMethod, SdkCategory};
use serde_json::{Map, Value};
use std::fmt::Write;

pub const MAX_LIST_ITEMS: usize = 10;
pub const MAX_EXTRA_FIELDS: usize = 5;
const MAX_OBJECT_PAIRS: usize = 3;

pub const NO_DATA: &str = "*No data available*";
pub const WRITE_COMPLETED: &str = "✅ Operation completed successfully";

/// How one field value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Plain,
    /// Boolean shown as ✅ / ❌
    Flag,
    /// Object with an `enabled` boolean, shown as ✅ / ❌
    Enabled,
    /// Array shown as its length
    Count,
}

/// Which fields of a category's objects are shown, and how
#[derive(Debug)]
pub struct FieldProfile {
    /// Keys tried in order for an item's heading
    pub name_keys: &'static [&'static str],
    /// `(key, label)` lines shown under each list item
    pub list_fields: &'static [(&'static str, &'static str)],
    /// Keys shown first for a single object
    pub detail_fields: &'static [&'static str],
    pub rules: &'static [(&'static str, FieldRule)],
}

impl FieldProfile {
    pub fn rule(&self, key: &str) -> FieldRule {
        self.rules
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, rule)| *rule)
            .unwrap_or(FieldRule::Plain)
    }
}

use FieldRule::*;

const DEFAULT_NAMES: &[&str] = &["name", "serial", "id"];

static ADMINISTERED: FieldProfile = FieldProfile {
    name_keys: &["name", "email", "id"],
    list_fields: &[
        ("email", "Email"),
        ("lastUsedDashboardAt", "Last Used"),
        ("authentication", "Authentication"),
    ],
    detail_fields: &["id", "name", "email", "lastUsedDashboardAt", "authentication"],
    rules: &[],
};

static APPLIANCE: FieldProfile = FieldProfile {
    name_keys: &["name", "id", "comment"],
    list_fields: &[
        ("id", "ID"),
        ("subnet", "Subnet"),
        ("applianceIp", "Appliance IP"),
        ("policy", "Policy"),
        ("protocol", "Protocol"),
        ("destCidr", "Destination"),
        ("enabled", "Enabled"),
    ],
    detail_fields: &[
        "id",
        "name",
        "subnet",
        "applianceIp",
        "dhcpHandling",
        "mode",
        "enabled",
        "rules",
        "subnets",
    ],
    rules: &[
        ("enabled", Flag),
        ("rules", Count),
        ("subnets", Count),
        ("dhcpRelayServerIps", Count),
    ],
};

static CAMERA: FieldProfile = FieldProfile {
    name_keys: DEFAULT_NAMES,
    list_fields: &[
        ("model", "Model"),
        ("serial", "Serial"),
        ("status", "Status"),
        ("recording", "Recording"),
        ("motionDetection", "Motion Detection"),
    ],
    detail_fields: &[
        "name",
        "serial",
        "model",
        "firmware",
        "recording",
        "analytics",
        "motionDetection",
        "senseEnabled",
        "audioDetection",
        "qualityRetentionProfileId",
    ],
    rules: &[
        ("recording", Enabled),
        ("analytics", Enabled),
        ("motionDetection", Enabled),
        ("audioDetection", Enabled),
        ("senseEnabled", Flag),
        ("motionBasedRetentionEnabled", Flag),
    ],
};

static CELLULAR_GATEWAY: FieldProfile = FieldProfile {
    name_keys: DEFAULT_NAMES,
    list_fields: &[
        ("model", "Model"),
        ("status", "Status"),
        ("subnet", "Subnet"),
        ("policy", "Policy"),
    ],
    detail_fields: &[
        "serial",
        "name",
        "model",
        "subnets",
        "reservedIpRanges",
        "fixedIpAssignments",
        "rules",
    ],
    rules: &[
        ("subnets", Count),
        ("reservedIpRanges", Count),
        ("fixedIpAssignments", Count),
        ("rules", Count),
    ],
};

static DEVICES: FieldProfile = FieldProfile {
    name_keys: DEFAULT_NAMES,
    list_fields: &[
        ("serial", "Serial"),
        ("model", "Model"),
        ("lanIp", "LAN IP"),
        ("firmware", "Firmware"),
        ("status", "Status"),
    ],
    detail_fields: &[
        "name",
        "serial",
        "model",
        "mac",
        "lanIp",
        "firmware",
        "networkId",
        "address",
        "tags",
    ],
    rules: &[],
};

static INSIGHT: FieldProfile = FieldProfile {
    name_keys: &["name", "applicationId", "id"],
    list_fields: &[
        ("applicationId", "Application"),
        ("expression", "Expression"),
        ("thresholds", "Thresholds"),
    ],
    detail_fields: &["name", "applicationId", "expression", "thresholds"],
    rules: &[],
};

static LICENSING: FieldProfile = FieldProfile {
    name_keys: &["name", "claimKey", "id"],
    list_fields: &[
        ("status", "Status"),
        ("expirationDate", "Expires"),
        ("productType", "Product"),
        ("counts", "Counts"),
    ],
    detail_fields: &[
        "name",
        "claimKey",
        "status",
        "expirationDate",
        "productType",
        "subscription",
        "counts",
        "productTypes",
        "networks",
    ],
    rules: &[("counts", Count), ("networks", Count)],
};

static NETWORKS: FieldProfile = FieldProfile {
    name_keys: &["name", "description", "id", "mac"],
    list_fields: &[
        ("id", "ID"),
        ("productTypes", "Products"),
        ("timeZone", "Time Zone"),
        ("mac", "MAC"),
        ("ip", "IP"),
        ("status", "Status"),
    ],
    detail_fields: &[
        "id",
        "name",
        "organizationId",
        "productTypes",
        "timeZone",
        "tags",
        "notes",
        "isBoundToConfigTemplate",
    ],
    rules: &[("isBoundToConfigTemplate", Flag)],
};

static ORGANIZATIONS: FieldProfile = FieldProfile {
    name_keys: DEFAULT_NAMES,
    list_fields: &[
        ("id", "ID"),
        ("model", "Model"),
        ("status", "Status"),
        ("productTypes", "Products"),
        ("url", "URL"),
    ],
    detail_fields: &["id", "name", "url", "api", "licensing", "cloud", "management"],
    rules: &[("api", Enabled)],
};

static SENSOR: FieldProfile = FieldProfile {
    name_keys: &["name", "serial", "id"],
    list_fields: &[
        ("model", "Model"),
        ("metric", "Metric"),
        ("serial", "Serial"),
        ("conditions", "Conditions"),
    ],
    detail_fields: &["name", "serial", "model", "metric", "conditions", "recipients", "schedule"],
    rules: &[("conditions", Count)],
};

static SM: FieldProfile = FieldProfile {
    name_keys: &["name", "serialNumber", "id"],
    list_fields: &[
        ("osName", "OS"),
        ("systemModel", "Model"),
        ("serialNumber", "Serial"),
        ("isManaged", "Managed"),
    ],
    detail_fields: &[
        "name",
        "id",
        "osName",
        "systemModel",
        "serialNumber",
        "wifiMac",
        "ownerEmail",
        "isSupervised",
        "tags",
    ],
    rules: &[("isManaged", Flag), ("isSupervised", Flag), ("tags", Count)],
};

static SWITCH: FieldProfile = FieldProfile {
    name_keys: &["name", "portId", "serial", "id"],
    list_fields: &[
        ("portId", "Port"),
        ("enabled", "Enabled"),
        ("type", "Type"),
        ("vlan", "VLAN"),
        ("poeEnabled", "PoE"),
        ("status", "Status"),
    ],
    detail_fields: &[
        "name",
        "portId",
        "enabled",
        "type",
        "vlan",
        "voiceVlan",
        "allowedVlans",
        "poeEnabled",
        "isolationEnabled",
        "stpGuard",
    ],
    rules: &[
        ("enabled", Flag),
        ("poeEnabled", Flag),
        ("isolationEnabled", Flag),
        ("rstpEnabled", Flag),
    ],
};

static WIRELESS: FieldProfile = FieldProfile {
    name_keys: &["name", "number", "id"],
    list_fields: &[
        ("number", "SSID"),
        ("enabled", "Enabled"),
        ("authMode", "Auth"),
        ("band", "Band"),
        ("channel", "Channel"),
    ],
    detail_fields: &[
        "name",
        "number",
        "enabled",
        "authMode",
        "encryptionMode",
        "ipAssignmentMode",
        "splashPage",
        "bandSelection",
        "visible",
    ],
    rules: &[("enabled", Flag), ("visible", Flag)],
};

pub fn profile(category: SdkCategory) -> &'static FieldProfile {
    match category {
        SdkCategory::Administered => &ADMINISTERED,
        SdkCategory::Appliance => &APPLIANCE,
        SdkCategory::Camera => &CAMERA,
        SdkCategory::CellularGateway => &CELLULAR_GATEWAY,
        SdkCategory::Devices => &DEVICES,
        SdkCategory::Insight => &INSIGHT,
        SdkCategory::Licensing => &LICENSING,
        SdkCategory::Networks => &NETWORKS,
        SdkCategory::Organizations => &ORGANIZATIONS,
        SdkCategory::Sensor => &SENSOR,
        SdkCategory::Sm => &SM,
        SdkCategory::Switch => &SWITCH,
        SdkCategory::Wireless => &WIRELESS,
    }
}

/// Render the result of one endpoint call
pub fn format_response(endpoint: &Endpoint, value: &Value) -> String {
    let mut out = format!("# {} {}\n\n", endpoint.category.emoji(), endpoint.title());
    let profile = profile(endpoint.category);

    match value {
        Value::Null if endpoint.method == HttpMethod::Get => {
            let _ = writeln!(out, "{}", NO_DATA);
        }
        Value::Null => {
            let _ = writeln!(out, "{}", WRITE_COMPLETED);
        }
        Value::Array(items) => render_list(&mut out, profile, items),
        Value::Object(fields) => render_object(&mut out, profile, fields),
        scalar => {
            let _ = writeln!(out, "**Result**: {}", scalar_text(scalar));
        }
    }

    out
}

fn render_list(out: &mut String, profile: &FieldProfile, items: &[Value]) {
    let _ = writeln!(out, "**Total Items**: {}\n", items.len());

    for (idx, item) in items.iter().take(MAX_LIST_ITEMS).enumerate() {
        let number = idx + 1;
        match item {
            Value::Object(fields) => {
                let name = item_name(profile, fields)
                    .unwrap_or_else(|| format!("Item {}", number));
                let _ = writeln!(out, "**{}. {}**", number, name);

                for (key, label) in profile.list_fields {
                    let text = fields
                        .get(*key)
                        .and_then(|v| render_field(profile.rule(key), v));
                    if let Some(text) = text {
                        let _ = writeln!(out, "   - {}: {}", label, text);
                    }
                }
            }
            other => {
                let _ = writeln!(out, "**{}. {}**", number, scalar_text(other));
            }
        }
        out.push('\n');
    }

    if items.len() > MAX_LIST_ITEMS {
        let _ = writeln!(out, "... and {} more items", items.len() - MAX_LIST_ITEMS);
    }
}

fn render_object(out: &mut String, profile: &FieldProfile, fields: &Map<String, Value>) {
    for key in profile.detail_fields {
        let text = fields
            .get(*key)
            .and_then(|v| render_field(profile.rule(key), v));
        if let Some(text) = text {
            let _ = writeln!(out, "- **{}**: {}", key, text);
        }
    }

    let remaining: Vec<(&String, &Value)> = fields
        .iter()
        .filter(|(key, _)| !profile.detail_fields.contains(&key.as_str()))
        .collect();

    for (key, value) in remaining.iter().take(MAX_EXTRA_FIELDS) {
        let text = match value {
            Value::Array(items) if !items.is_empty() => Some(format!("{} items", items.len())),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                render_field(profile.rule(key), value)
            }
            _ => None,
        };
        if let Some(text) = text {
            let _ = writeln!(out, "- **{}**: {}", key, text);
        }
    }

    if remaining.len() > MAX_EXTRA_FIELDS {
        let _ = writeln!(out, "... and {} more fields", remaining.len() - MAX_EXTRA_FIELDS);
    }
}

fn item_name(profile: &FieldProfile, fields: &Map<String, Value>) -> Option<String> {
    profile
        .name_keys
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|v| !v.is_null())
        .map(scalar_text)
}

/// Text for one field, `None` when there is nothing to show
fn render_field(rule: FieldRule, value: &Value) -> Option<String> {
    match (rule, value) {
        (_, Value::Null) => None,
        (Flag, Value::Bool(b)) | (Enabled, Value::Bool(b)) => Some(flag(*b).to_string()),
        (Enabled, Value::Object(fields)) => match fields.get("enabled") {
            Some(Value::Bool(b)) => Some(flag(*b).to_string()),
            _ => plain(value),
        },
        (Count, Value::Array(items)) => Some(items.len().to_string()),
        _ => plain(value),
    }
}

fn plain(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(items) if items.is_empty() => Some("none".to_string()),
        Value::Array(items) if items.iter().all(is_scalar) => Some(
            items
                .iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Array(items) => Some(format!("{} items", items.len())),
        Value::Object(fields) => Some(
            fields
                .iter()
                .take(MAX_OBJECT_PAIRS)
                .map(|(k, v)| format!("{}: {}", k, scalar_text(v)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        scalar => Some(scalar_text(scalar)),
    }
}

fn flag(on: bool) -> &'static str {
    if on {
        "✅"
    } else {
        "❌"
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

/// Strings without quotes, everything else as JSON
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

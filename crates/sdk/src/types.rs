//! Typed views of the Dashboard objects used by the MCP helpers.
//!
//! Only the commonly read fields are named; everything else is kept in
//! `extra` so nothing is lost when the value is re-serialized.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub product_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub serial: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lan_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wan1_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wan2_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Device {
    /// Display name, falling back to the serial
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.serial)
    }

    /// Every IP the device is known by (LAN and WAN uplinks)
    pub fn ips(&self) -> impl Iterator<Item = &str> {
        [&self.lan_ip, &self.wan1_ip, &self.wan2_ip]
            .into_iter()
            .filter_map(|ip| ip.as_deref())
    }
}

/// A client seen on a network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkClient {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// VLAN as reported, either a number or a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_device_serial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switchport: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_keeps_unknown_fields() {
        let device: Device = serde_json::from_value(json!({
            "serial": "Q2XX-AAAA-BBBB",
            "model": "MS220-8P",
            "lanIp": "10.0.0.2",
            "wan1Ip": null,
            "tags": ["core"],
        }))
        .unwrap();

        assert_eq!(device.display_name(), "Q2XX-AAAA-BBBB");
        assert_eq!(device.ips().collect::<Vec<_>>(), vec!["10.0.0.2"]);
        assert_eq!(device.extra.get("tags"), Some(&json!(["core"])));

        let back = serde_json::to_value(&device).unwrap();
        assert_eq!(back["lanIp"], "10.0.0.2");
        assert_eq!(back["tags"], json!(["core"]));
    }

    #[test]
    fn test_client_vlan_accepts_number_or_string() {
        let numeric: NetworkClient =
            serde_json::from_value(json!({"id": "k1", "vlan": 10})).unwrap();
        let textual: NetworkClient =
            serde_json::from_value(json!({"id": "k2", "vlan": "10"})).unwrap();

        assert_eq!(numeric.vlan, Some(json!(10)));
        assert_eq!(textual.vlan, Some(json!("10")));
    }
}

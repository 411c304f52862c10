//! Read-only MCP resources over organizations, networks and devices.

use crate::protocol::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use meraki_sdk::{DashboardClient, MerakiError};
use serde_json::{json, Value};
use std::sync::Arc;

const JSON_MIME: &str = "application/json";

const STATIC_RESOURCES: &[(&str, &str, &str)] = &[
    (
        "organizations://",
        "Organizations",
        "Every organization the API key can access",
    ),
    ("networks://", "Networks", "How to address network resources"),
    ("devices://", "Devices", "How to address device resources"),
];

const TEMPLATES: &[(&str, &str, &str)] = &[
    ("organizations://{org_id}", "Organization", "Organization details"),
    (
        "organizations://{org_id}/networks",
        "Organization networks",
        "Networks in an organization",
    ),
    (
        "organizations://{org_id}/alerts",
        "Organization alerts",
        "Health alerts raised in an organization",
    ),
    (
        "organizations://{org_id}/firmware",
        "Organization firmware",
        "Firmware upgrades of an organization",
    ),
    ("networks://{network_id}", "Network", "Network details"),
    (
        "networks://{network_id}/devices",
        "Network devices",
        "Devices in a network",
    ),
    (
        "networks://{network_id}/clients",
        "Network clients",
        "Clients seen on a network in the last day",
    ),
    (
        "networks://{network_id}/wireless/ssids",
        "Wireless SSIDs",
        "SSIDs configured on a network",
    ),
    (
        "networks://{network_id}/vlans",
        "Appliance VLANs",
        "VLANs configured on a network's appliance",
    ),
    ("devices://{serial}", "Device", "Device details"),
    (
        "devices://{serial}/switch/ports",
        "Switch ports",
        "Ports of a switch",
    ),
];

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Unknown resource: {0}")]
    NotFound(String),

    #[error(transparent)]
    Api(#[from] MerakiError),

    #[error("Failed to encode resource: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed resource URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Organizations,
    Organization(String),
    OrganizationNetworks(String),
    OrganizationAlerts(String),
    OrganizationFirmware(String),
    NetworksHelp,
    Network(String),
    NetworkDevices(String),
    NetworkClients(String),
    NetworkSsids(String),
    NetworkVlans(String),
    DevicesHelp,
    Device(String),
    DeviceSwitchPorts(String),
}

impl ResourceUri {
    pub fn parse(uri: &str) -> Option<Self> {
        let (scheme, rest) = uri.split_once("://")?;
        let parts: Vec<&str> = rest.split('/').filter(|p| !p.is_empty()).collect();

        let parsed = match (scheme, parts.as_slice()) {
            ("organizations", []) => Self::Organizations,
            ("organizations", [org]) => Self::Organization(org.to_string()),
            ("organizations", [org, "networks"]) => Self::OrganizationNetworks(org.to_string()),
            ("organizations", [org, "alerts"]) => Self::OrganizationAlerts(org.to_string()),
            ("organizations", [org, "firmware"]) => Self::OrganizationFirmware(org.to_string()),
            ("networks", []) => Self::NetworksHelp,
            ("networks", [net]) => Self::Network(net.to_string()),
            ("networks", [net, "devices"]) => Self::NetworkDevices(net.to_string()),
            ("networks", [net, "clients"]) => Self::NetworkClients(net.to_string()),
            ("networks", [net, "wireless", "ssids"]) => Self::NetworkSsids(net.to_string()),
            ("networks", [net, "vlans"]) => Self::NetworkVlans(net.to_string()),
            ("devices", []) => Self::DevicesHelp,
            ("devices", [serial]) => Self::Device(serial.to_string()),
            ("devices", [serial, "switch", "ports"]) => Self::DeviceSwitchPorts(serial.to_string()),
            _ => return None,
        };
        Some(parsed)
    }
}

pub struct ResourceProvider {
    client: Arc<DashboardClient>,
}

impl ResourceProvider {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Vec<Resource> {
        STATIC_RESOURCES
            .iter()
            .map(|(uri, name, description)| Resource {
                uri: uri.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                mime_type: Some(JSON_MIME.to_string()),
            })
            .collect()
    }

    pub fn templates(&self) -> Vec<ResourceTemplate> {
        TEMPLATES
            .iter()
            .map(|(uri, name, description)| ResourceTemplate {
                uri_template: uri.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                mime_type: Some(JSON_MIME.to_string()),
            })
            .collect()
    }

    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let parsed =
            ResourceUri::parse(uri).ok_or_else(|| ResourceError::NotFound(uri.to_string()))?;
        tracing::debug!(uri, "Reading resource");

        let value = self.fetch(parsed).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents {
                uri: uri.to_string(),
                mime_type: Some(JSON_MIME.to_string()),
                text: serde_json::to_string_pretty(&value)?,
            }],
        })
    }

    async fn fetch(&self, uri: ResourceUri) -> Result<Value, ResourceError> {
        let client = &self.client;
        let value = match uri {
            ResourceUri::Organizations => {
                serde_json::to_value(client.organizations().get_organizations().await?)?
            }
            ResourceUri::Organization(id) => {
                serde_json::to_value(client.organizations().get_organization(&id).await?)?
            }
            ResourceUri::OrganizationNetworks(id) => serde_json::to_value(
                client.organizations().get_organization_networks(&id).await?,
            )?,
            ResourceUri::OrganizationAlerts(id) => Value::Array(
                client
                    .organizations()
                    .get_organization_assurance_alerts(&id)
                    .await?,
            ),
            ResourceUri::OrganizationFirmware(id) => Value::Array(
                client
                    .organizations()
                    .get_organization_firmware_upgrades(&id)
                    .await?,
            ),
            ResourceUri::NetworksHelp => help(
                "networks://{network_id}",
                "network",
                &["devices", "clients", "wireless/ssids", "vlans"],
            ),
            ResourceUri::Network(id) => {
                serde_json::to_value(client.networks().get_network(&id).await?)?
            }
            ResourceUri::NetworkDevices(id) => {
                serde_json::to_value(client.networks().get_network_devices(&id).await?)?
            }
            ResourceUri::NetworkClients(id) => {
                serde_json::to_value(client.networks().get_network_clients(&id, None).await?)?
            }
            ResourceUri::NetworkSsids(id) => {
                Value::Array(client.wireless().get_network_wireless_ssids(&id).await?)
            }
            ResourceUri::NetworkVlans(id) => {
                Value::Array(client.appliance().get_network_appliance_vlans(&id).await?)
            }
            ResourceUri::DevicesHelp => help("devices://{serial}", "device", &["switch/ports"]),
            ResourceUri::Device(serial) => {
                serde_json::to_value(client.devices().get_device(&serial).await?)?
            }
            ResourceUri::DeviceSwitchPorts(serial) => {
                Value::Array(client.switch().get_device_switch_ports(&serial).await?)
            }
        };
        Ok(value)
    }
}

fn help(template: &str, noun: &str, children: &[&str]) -> Value {
    json!({
        "description": format!("Use {} to read a {}", template, noun),
        "subresources": children
            .iter()
            .map(|c| format!("{}/{}", template, c))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use meraki_sdk::RetryConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> ResourceProvider {
        ResourceProvider::new(Arc::new(
            DashboardClient::builder()
                .api_key("test-key")
                .base_url(format!("{}/api/v1", server.uri()))
                .retry_config(RetryConfig::no_retry())
                .build()
                .unwrap(),
        ))
    }

    #[test]
    fn test_parse_uris() {
        assert_eq!(
            ResourceUri::parse("organizations://"),
            Some(ResourceUri::Organizations)
        );
        assert_eq!(
            ResourceUri::parse("organizations://123/networks"),
            Some(ResourceUri::OrganizationNetworks("123".to_string()))
        );
        assert_eq!(
            ResourceUri::parse("networks://N_1/wireless/ssids"),
            Some(ResourceUri::NetworkSsids("N_1".to_string()))
        );
        assert_eq!(
            ResourceUri::parse("devices://Q2XX/switch/ports"),
            Some(ResourceUri::DeviceSwitchPorts("Q2XX".to_string()))
        );
        assert_eq!(
            ResourceUri::parse("organizations://1/firmware"),
            Some(ResourceUri::OrganizationFirmware("1".to_string()))
        );
        assert_eq!(ResourceUri::parse("networks://N_1/unknown"), None);
        assert_eq!(ResourceUri::parse("ftp://x"), None);
        assert_eq!(ResourceUri::parse("no-scheme"), None);
    }

    #[test]
    fn test_templates_all_parse() {
        let server_less = ResourceProvider::new(Arc::new(
            DashboardClient::builder().api_key("k").build().unwrap(),
        ));
        for template in server_less.templates() {
            let concrete = template
                .uri_template
                .replace("{org_id}", "1")
                .replace("{network_id}", "N_1")
                .replace("{serial}", "Q2XX");
            assert!(ResourceUri::parse(&concrete).is_some(), "{}", concrete);
        }
        assert_eq!(server_less.list().len(), 3);
    }

    #[tokio::test]
    async fn test_read_network_devices() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/devices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"serial": "Q2XX", "model": "MS120-8"}])),
            )
            .mount(&server)
            .await;

        let result = provider_for(&server)
            .read("networks://N_1/devices")
            .await
            .unwrap();
        let contents = &result.contents[0];
        assert_eq!(contents.mime_type.as_deref(), Some(JSON_MIME));
        let parsed: Value = serde_json::from_str(&contents.text).unwrap();
        assert_eq!(parsed[0]["serial"], "Q2XX");
        assert!(contents.text.contains('\n'));
    }

    #[tokio::test]
    async fn test_read_organization_alerts_and_firmware() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/organizations/1/assurance/alerts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "a1", "severity": "critical", "title": "Device offline"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/organizations/1/firmware/upgrades"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"upgradeId": "u1", "status": "Completed"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let alerts = provider.read("organizations://1/alerts").await.unwrap();
        let parsed: Value = serde_json::from_str(&alerts.contents[0].text).unwrap();
        assert_eq!(parsed[0]["severity"], "critical");
        assert_eq!(alerts.contents[0].uri, "organizations://1/alerts");

        let firmware = provider.read("organizations://1/firmware").await.unwrap();
        let parsed: Value = serde_json::from_str(&firmware.contents[0].text).unwrap();
        assert_eq!(parsed[0]["upgradeId"], "u1");
    }

    #[tokio::test]
    async fn test_read_alerts_api_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/organizations/9/assurance/alerts"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["Not found"]})))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .read("organizations://9/alerts")
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::Api(_)));
    }

    #[tokio::test]
    async fn test_read_help_and_unknown() {
        let server = MockServer::start().await;
        let provider = provider_for(&server);

        let result = provider.read("devices://").await.unwrap();
        assert!(result.contents[0].text.contains("devices://{serial}/switch/ports"));

        let err = provider.read("devices://Q2XX/bogus").await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
    }
}

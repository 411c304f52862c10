// Find a client or device by IP address, and pin clients to addresses

use super::{
    json_schema_integer, json_schema_object, json_schema_string, tool_error, Tool, ToolTier,
};
use crate::protocol::{CallToolResult, ToolAnnotations, ToolSchema};
use anyhow::{anyhow, bail, Context, Result};
use meraki_sdk::{DashboardClient, Device, NetworkClient};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::fmt::Write;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

pub const FIND_DEVICE_BY_IP: &str = "find_device_by_ip";
pub const CREATE_DHCP_RESERVATION_FROM_IP: &str = "create_dhcp_reservation_from_ip";

/// Seven days of client history
const DEFAULT_TIMESPAN_SECS: u64 = 7 * 24 * 60 * 60;
/// The clients endpoint looks back at most 31 days
const MAX_TIMESPAN_SECS: u64 = 31 * 24 * 60 * 60;

pub struct FindDeviceByIpTool {
    client: Arc<DashboardClient>,
}

impl FindDeviceByIpTool {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct FindDeviceByIpArgs {
    network_id: String,
    ip_address: String,
    #[serde(default)]
    timespan: Option<u64>,
}

#[async_trait::async_trait]
impl Tool for FindDeviceByIpTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: FIND_DEVICE_BY_IP.to_string(),
            description: "🎯 Find a client or Meraki device in a network by its IP address"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "network_id": json_schema_string("Network ID to search"),
                    "ip_address": json_schema_string("IP address to find, e.g. 10.0.5.146"),
                    "timespan": json_schema_integer(
                        "Client history to search, in seconds (default 7 days)",
                        Some(1),
                        Some(MAX_TIMESPAN_SECS as i64),
                    )
                }),
                vec!["network_id", "ip_address"],
            ),
            annotations: Some(ToolAnnotations {
                read_only_hint: true,
                destructive_hint: false,
            }),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        match self.find(arguments).await {
            Ok(report) => Ok(CallToolResult::text(report)),
            Err(e) => Ok(tool_error(FIND_DEVICE_BY_IP, format!("{:#}", e))),
        }
    }
}

impl FindDeviceByIpTool {
    async fn find(&self, arguments: Value) -> Result<String> {
        let args: FindDeviceByIpArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for find_device_by_ip")?;

        let ip = parse_ip(&args.ip_address)?.to_string();

        let timespan = args.timespan.unwrap_or(DEFAULT_TIMESPAN_SECS);
        if timespan == 0 || timespan > MAX_TIMESPAN_SECS {
            bail!("timespan must be between 1 and {}", MAX_TIMESPAN_SECS);
        }

        let networks = self.client.networks();
        let clients = networks
            .get_network_clients(&args.network_id, Some(timespan))
            .await?;

        if let Some(client) = clients.iter().find(|c| c.ip.as_deref() == Some(ip.as_str())) {
            tracing::debug!(ip = %ip, client = %client.id, "IP matched a network client");
            return Ok(render_client(&ip, client, clients.len(), timespan));
        }

        let devices = networks.get_network_devices(&args.network_id).await?;
        if let Some(device) = devices.iter().find(|d| d.ips().any(|addr| addr == ip)) {
            tracing::debug!(ip = %ip, serial = %device.serial, "IP matched a device");
            return Ok(render_device(&ip, device));
        }

        Ok(render_not_found(
            &ip,
            &args.network_id,
            clients.len(),
            devices.len(),
            timespan,
        ))
    }
}

fn parse_ip(raw: &str) -> Result<IpAddr> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow!("{} is not a valid IP address", raw))
}

/// Whether an IPv4 CIDR subnet (`192.168.10.0/24`) contains `ip`
fn subnet_contains(subnet: &str, ip: Ipv4Addr) -> bool {
    let Some((network, prefix)) = subnet.split_once('/') else {
        return false;
    };
    let (Ok(network), Ok(prefix)) = (network.parse::<Ipv4Addr>(), prefix.parse::<u32>()) else {
        return false;
    };
    if prefix > 32 {
        return false;
    }
    let mask = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
    u32::from(network) & mask == u32::from(ip) & mask
}

fn fixed_ip_of(assignment: &Value) -> Option<&str> {
    assignment.get("ip").and_then(Value::as_str)
}

/// Reserve a new address for the client currently using another one
pub struct CreateDhcpReservationFromIpTool {
    client: Arc<DashboardClient>,
}

impl CreateDhcpReservationFromIpTool {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CreateDhcpReservationArgs {
    current_ip: String,
    new_ip: String,
    network_id: String,
    #[serde(default)]
    name: Option<String>,
}

#[async_trait::async_trait]
impl Tool for CreateDhcpReservationFromIpTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: CREATE_DHCP_RESERVATION_FROM_IP.to_string(),
            description: "📌 Find the client using an IP and reserve a fixed address for it on the MX VLAN"
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "current_ip": json_schema_string("IP the client uses now"),
                    "new_ip": json_schema_string("IP to reserve for the client"),
                    "network_id": json_schema_string("Network ID of the MX appliance"),
                    "name": json_schema_string("Reservation name (defaults to the client description)")
                }),
                vec!["current_ip", "new_ip", "network_id"],
            ),
            annotations: Some(ToolAnnotations {
                read_only_hint: false,
                destructive_hint: false,
            }),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        match self.reserve(arguments).await {
            Ok(report) => Ok(CallToolResult::text(report)),
            Err(e) => Ok(tool_error(CREATE_DHCP_RESERVATION_FROM_IP, format!("{:#}", e))),
        }
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Tier1
    }
}

impl CreateDhcpReservationFromIpTool {
    async fn reserve(&self, arguments: Value) -> Result<String> {
        let args: CreateDhcpReservationArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for create_dhcp_reservation_from_ip")?;

        let current_ip = parse_ip(&args.current_ip)?.to_string();
        let new_ip = match parse_ip(&args.new_ip)? {
            IpAddr::V4(ip) => ip,
            IpAddr::V6(_) => bail!("DHCP reservations need an IPv4 address, got {}", args.new_ip),
        };

        let clients = self
            .client
            .networks()
            .get_network_clients(&args.network_id, Some(DEFAULT_TIMESPAN_SECS))
            .await?;
        let found = clients
            .iter()
            .find(|c| c.ip.as_deref() == Some(current_ip.as_str()))
            .ok_or_else(|| {
                anyhow!(
                    "no client with IP {} in network {} over the last {} days",
                    current_ip,
                    args.network_id,
                    days(DEFAULT_TIMESPAN_SECS)
                )
            })?;
        let mac = found
            .mac
            .as_deref()
            .ok_or_else(|| anyhow!("client {} has no MAC address to reserve", current_ip))?
            .to_lowercase();

        let appliance = self.client.appliance();
        let vlans = appliance.get_network_appliance_vlans(&args.network_id).await?;
        let vlan = vlans
            .iter()
            .find(|v| {
                v.get("subnet")
                    .and_then(Value::as_str)
                    .is_some_and(|subnet| subnet_contains(subnet, new_ip))
            })
            .ok_or_else(|| {
                anyhow!(
                    "{} is not inside any VLAN subnet of network {}",
                    new_ip,
                    args.network_id
                )
            })?;
        let vlan_id = match vlan.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => bail!("VLAN containing {} has no id", new_ip),
        };

        let mut assignments: Map<String, Value> = vlan
            .get("fixedIpAssignments")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let new_ip_text = new_ip.to_string();
        if let Some((holder, _)) = assignments.iter().find(|(holder, assignment)| {
            !holder.eq_ignore_ascii_case(&mac) && fixed_ip_of(assignment) == Some(new_ip_text.as_str())
        }) {
            bail!("{} is already reserved for {}", new_ip, holder);
        }

        let name = args
            .name
            .or_else(|| found.description.clone())
            .unwrap_or_else(|| format!("Reserved {}", mac));
        assignments.retain(|holder, _| !holder.eq_ignore_ascii_case(&mac));
        assignments.insert(mac.clone(), json!({"ip": new_ip_text, "name": name}));

        appliance
            .update_network_appliance_vlan(
                &args.network_id,
                &vlan_id,
                json!({ "fixedIpAssignments": assignments }),
            )
            .await?;
        tracing::info!(mac = %mac, ip = %new_ip, vlan = %vlan_id, "Created DHCP reservation");

        let mut out = String::from("# ✅ DHCP Reservation Created

");
        let _ = writeln!(out, "## Client");
        let _ = writeln!(out, "- **Current IP**: {}", current_ip);
        let _ = writeln!(out, "- **MAC**: {}", mac);
        if let Some(description) = &found.description {
            let _ = writeln!(out, "- **Description**: {}", description);
        }
        let _ = writeln!(out, "
## Reservation");
        let _ = writeln!(out, "- **Reserved IP**: {}", new_ip);
        let _ = writeln!(out, "- **Name**: {}", name);
        let _ = writeln!(out, "- **VLAN**: {}", vlan_id);
        let _ = writeln!(out, "
The client receives the new address at its next DHCP renewal.");
        Ok(out)
    }
}

fn days(timespan: u64) -> String {
    let days = timespan as f64 / 86_400.0;
    if days.fract() == 0.0 {
        format!("{}", days as u64)
    } else {
        format!("{:.1}", days)
    }
}

fn render_client(ip: &str, client: &NetworkClient, searched: usize, timespan: u64) -> String {
    let mut out = format!("# 🎯 Device Found: {}\n\n", ip);
    let _ = writeln!(out, "**Source**: Network client\n");

    let vlan = client.vlan.as_ref().map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    });
    let connected = match (&client.recent_device_name, &client.recent_device_serial) {
        (Some(name), Some(serial)) => Some(format!("{} ({})", name, serial)),
        (Some(name), None) => Some(name.clone()),
        (None, Some(serial)) => Some(serial.clone()),
        (None, None) => None,
    };

    let fields = [
        ("Description", client.description.clone()),
        ("MAC", client.mac.clone()),
        ("Manufacturer", client.manufacturer.clone()),
        ("OS", client.os.clone()),
        ("VLAN", vlan),
        ("Status", client.status.clone()),
        ("Connected To", connected),
        ("Switch Port", client.switchport.clone()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(out, "- **{}**: {}", label, value);
        }
    }

    let _ = writeln!(
        out,
        "\nSearched {} clients over the last {} days.",
        searched,
        days(timespan)
    );
    out
}

fn render_device(ip: &str, device: &Device) -> String {
    let mut out = format!("# 🎯 Device Found: {}\n\n", ip);
    let _ = writeln!(out, "**Source**: Meraki device\n");
    let _ = writeln!(out, "- **Name**: {}", device.display_name());
    let _ = writeln!(out, "- **Serial**: {}", device.serial);

    let fields = [
        ("Model", &device.model),
        ("MAC", &device.mac),
        ("LAN IP", &device.lan_ip),
        ("WAN 1 IP", &device.wan1_ip),
        ("WAN 2 IP", &device.wan2_ip),
        ("Status", &device.status),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(out, "- **{}**: {}", label, value);
        }
    }
    out
}

fn render_not_found(
    ip: &str,
    network_id: &str,
    clients: usize,
    devices: usize,
    timespan: u64,
) -> String {
    let mut out = format!("# ❌ Not Found: {}\n\n", ip);
    let _ = writeln!(
        out,
        "Searched {} clients (last {} days) and {} devices in network {}.\n",
        clients,
        days(timespan),
        devices,
        network_id
    );
    let _ = writeln!(out, "- The device might be offline or its IP changed recently");
    let _ = writeln!(out, "- Try a longer timespan or another network");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use meraki_sdk::RetryConfig;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Arc<DashboardClient> {
        Arc::new(
            DashboardClient::builder()
                .api_key("test-key")
                .base_url(format!("{}/api/v1", server.uri()))
                .retry_config(RetryConfig::no_retry())
                .build()
                .unwrap(),
        )
    }

    async fn mount_clients(server: &MockServer, clients: Value) {
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/clients"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clients))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_finds_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/clients"))
            .and(query_param("timespan", "604800"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "k1", "ip": "10.0.5.1", "mac": "aa:aa:aa:aa:aa:01"},
                {"id": "k2", "ip": "10.0.5.146", "mac": "aa:aa:aa:aa:aa:02",
                 "description": "Printer", "vlan": 5, "recentDeviceName": "Core",
                 "recentDeviceSerial": "Q2XX", "switchport": "7"}
            ])))
            .mount(&server)
            .await;

        let tool = FindDeviceByIpTool::new(client_for(&server));
        let result = tool
            .execute(json!({"network_id": "N_1", "ip_address": "10.0.5.146"}))
            .await
            .unwrap();
        let text = result.text_content();

        assert!(text.starts_with("# 🎯 Device Found: 10.0.5.146"));
        assert!(text.contains("- **Description**: Printer"));
        assert!(text.contains("- **VLAN**: 5"));
        assert!(text.contains("- **Connected To**: Core (Q2XX)"));
        assert!(text.contains("Searched 2 clients over the last 7 days."));
    }

    #[tokio::test]
    async fn test_falls_back_to_devices() {
        let server = MockServer::start().await;
        mount_clients(&server, json!([])).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"serial": "Q2MX", "model": "MX68", "wan1Ip": "203.0.113.9", "name": "Edge"}
            ])))
            .mount(&server)
            .await;

        let tool = FindDeviceByIpTool::new(client_for(&server));
        let result = tool
            .execute(json!({"network_id": "N_1", "ip_address": "203.0.113.9"}))
            .await
            .unwrap();
        let text = result.text_content();
        assert!(text.contains("**Source**: Meraki device"));
        assert!(text.contains("- **Name**: Edge"));
        assert!(text.contains("- **WAN 1 IP**: 203.0.113.9"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start().await;
        mount_clients(&server, json!([{"id": "k1", "ip": "10.0.0.1"}])).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let tool = FindDeviceByIpTool::new(client_for(&server));
        let result = tool
            .execute(json!({"network_id": "N_1", "ip_address": "10.9.9.9", "timespan": 86400}))
            .await
            .unwrap();
        assert!(!result.is_error());
        assert!(result
            .text_content()
            .contains("Searched 1 clients (last 1 days) and 0 devices in network N_1."));
    }

    #[tokio::test]
    async fn test_invalid_ip_is_error() {
        let server = MockServer::start().await;
        let tool = FindDeviceByIpTool::new(client_for(&server));
        let result = tool
            .execute(json!({"network_id": "N_1", "ip_address": "10.0.5"}))
            .await
            .unwrap();
        assert!(result.is_error());
        assert_eq!(
            result.text_content(),
            "❌ Error in find_device_by_ip: 10.0.5 is not a valid IP address"
        );
    }

    fn vlan_routes() -> Value {
        json!([
            {"id": 10, "name": "Data", "subnet": "10.0.10.0/24"},
            {"id": 20, "name": "Voice", "subnet": "10.0.20.0/24",
             "fixedIpAssignments": {"bb:bb:bb:bb:bb:bb": {"ip": "10.0.20.5", "name": "Phone"}}}
        ])
    }

    #[tokio::test]
    async fn test_reservation_merges_fixed_assignments() {
        let server = MockServer::start().await;
        mount_clients(
            &server,
            json!([{"id": "k1", "ip": "10.0.20.77", "mac": "AA:AA:AA:AA:AA:AA", "description": "Printer"}]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/appliance/vlans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vlan_routes()))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/networks/N_1/appliance/vlans/20"))
            .and(body_json(json!({"fixedIpAssignments": {
                "bb:bb:bb:bb:bb:bb": {"ip": "10.0.20.5", "name": "Phone"},
                "aa:aa:aa:aa:aa:aa": {"ip": "10.0.20.50", "name": "Printer"}
            }})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 20})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = CreateDhcpReservationFromIpTool::new(client_for(&server));
        assert_eq!(tool.tier(), ToolTier::Tier1);
        let result = tool
            .execute(json!({"current_ip": "10.0.20.77", "new_ip": "10.0.20.50", "network_id": "N_1"}))
            .await
            .unwrap();
        let text = result.text_content();

        assert!(!result.is_error(), "{}", text);
        assert!(text.starts_with("# ✅ DHCP Reservation Created"));
        assert!(text.contains("- **MAC**: aa:aa:aa:aa:aa:aa"));
        assert!(text.contains("- **Reserved IP**: 10.0.20.50"));
        assert!(text.contains("- **VLAN**: 20"));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_reservation_rejects_taken_address() {
        let server = MockServer::start().await;
        mount_clients(&server, json!([{"id": "k1", "ip": "10.0.20.77", "mac": "aa:aa:aa:aa:aa:aa"}])).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/appliance/vlans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vlan_routes()))
            .mount(&server)
            .await;

        let tool = CreateDhcpReservationFromIpTool::new(client_for(&server));
        let result = tool
            .execute(json!({"current_ip": "10.0.20.77", "new_ip": "10.0.20.5", "network_id": "N_1"}))
            .await
            .unwrap();
        assert!(result.is_error());
        assert_eq!(
            result.text_content(),
            "❌ Error in create_dhcp_reservation_from_ip: 10.0.20.5 is already reserved for bb:bb:bb:bb:bb:bb"
        );

        let result = tool
            .execute(json!({"current_ip": "10.0.20.77", "new_ip": "192.168.1.5", "network_id": "N_1"}))
            .await
            .unwrap();
        assert!(result
            .text_content()
            .contains("192.168.1.5 is not inside any VLAN subnet of network N_1"));
    }

    #[tokio::test]
    async fn test_reservation_needs_known_client() {
        let server = MockServer::start().await;
        mount_clients(&server, json!([{"id": "k1", "ip": "10.0.20.8"}])).await;

        let tool = CreateDhcpReservationFromIpTool::new(client_for(&server));
        let result = tool
            .execute(json!({"current_ip": "10.0.20.77", "new_ip": "10.0.20.50", "network_id": "N_1"}))
            .await
            .unwrap();
        assert!(result.is_error());
        assert!(result
            .text_content()
            .contains("no client with IP 10.0.20.77 in network N_1"));

        let result = tool
            .execute(json!({"current_ip": "10.0.20.8", "new_ip": "10.0.20.50", "network_id": "N_1"}))
            .await
            .unwrap();
        assert!(result.text_content().contains("client 10.0.20.8 has no MAC address"));
    }

    #[test]
    fn test_subnet_contains() {
        let ip: Ipv4Addr = "10.0.20.50".parse().unwrap();
        assert!(subnet_contains("10.0.20.0/24", ip));
        assert!(subnet_contains("0.0.0.0/0", ip));
        assert!(!subnet_contains("10.0.10.0/24", ip));
        assert!(!subnet_contains("10.0.20.0", ip));
        assert!(!subnet_contains("10.0.20.0/40", ip));
    }
}

// One MCP tool per catalogued Dashboard operation

use super::args::{build_call_args, input_schema, is_confirmed};
use super::{tool_error, Tool, ToolTier};
use crate::format::format_response;
use crate::protocol::{CallToolResult, ToolAnnotations, ToolSchema};
use anyhow::Result;
use meraki_sdk::{DashboardClient, Endpoint, HttpMethod, SdkCategory};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Fixed reply for destructive tools called without confirmation
pub const CONFIRMATION_REQUIRED: &str = "⚠️ This operation requires confirmed=true to execute";

pub struct DashboardTool {
    client: Arc<DashboardClient>,
    endpoint: &'static Endpoint,
    name: String,
}

impl DashboardTool {
    pub fn new(client: Arc<DashboardClient>, endpoint: &'static Endpoint) -> Self {
        Self {
            client,
            endpoint,
            name: endpoint.tool_name(),
        }
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    fn description(&self) -> String {
        let mut description = format!(
            "{} {}: {}",
            verb_emoji(self.endpoint.verb()),
            self.endpoint.title(),
            self.endpoint.summary
        );
        if self.endpoint.is_destructive() {
            description.push_str(" Requires confirmed=true.");
        }
        description
    }
}

/// Leading emoji for a tool description, by operation verb
fn verb_emoji(verb: &str) -> &'static str {
    match verb {
        "get" => "📋",
        "create" => "➕",
        "update" => "✏️",
        "delete" | "remove" => "🗑️",
        "reboot" | "cycle" => "🔄",
        "wipe" | "unenroll" | "revoke" => "⚠️",
        "bind" | "unbind" | "claim" | "release" => "🔗",
        _ => "⚙️",
    }
}

#[async_trait::async_trait]
impl Tool for DashboardTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name.clone(),
            description: self.description(),
            input_schema: input_schema(self.endpoint),
            annotations: Some(ToolAnnotations {
                read_only_hint: self.endpoint.method == HttpMethod::Get,
                destructive_hint: self.endpoint.is_destructive(),
            }),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args = match arguments {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => return Ok(tool_error(&self.name, "arguments must be an object")),
        };

        if self.endpoint.is_destructive() && !is_confirmed(&args) {
            tracing::info!(tool = %self.name, "Destructive tool called without confirmation");
            return Ok(CallToolResult::text(CONFIRMATION_REQUIRED));
        }

        let call_args = match build_call_args(self.endpoint, &args) {
            Ok(call_args) => call_args,
            Err(e) => return Ok(tool_error(&self.name, format!("{:#}", e))),
        };

        tracing::debug!(
            tool = %self.name,
            operation = self.endpoint.operation_id,
            "Invoking Dashboard operation"
        );

        match self
            .client
            .category(self.endpoint.category)
            .invoke(self.endpoint.operation_id, call_args)
            .await
        {
            Ok(value) => Ok(CallToolResult::text(format_response(self.endpoint, &value))),
            Err(e) => {
                tracing::warn!(tool = %self.name, error = %e, "Dashboard call failed");
                Ok(tool_error(&self.name, e))
            }
        }
    }

    fn tier(&self) -> ToolTier {
        if self.endpoint.is_destructive() {
            ToolTier::Tier2
        } else if self.endpoint.method == HttpMethod::Get {
            ToolTier::Tier0
        } else {
            ToolTier::Tier1
        }
    }

    fn operation(&self) -> Option<(SdkCategory, &'static str)> {
        Some((self.endpoint.category, self.endpoint.operation_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meraki_sdk::{catalog, RetryConfig};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
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

    fn tool(client: Arc<DashboardClient>, category: SdkCategory, op: &str) -> DashboardTool {
        DashboardTool::new(client, catalog::find(category, op).unwrap())
    }

    #[tokio::test]
    async fn test_destructive_without_confirmation_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202))
            .expect(0)
            .mount(&server)
            .await;

        let tool = tool(client_for(&server), SdkCategory::Devices, "rebootDevice");
        assert_eq!(tool.tier(), ToolTier::Tier2);

        for args in [json!({"serial": "Q2XX"}), json!({"serial": "Q2XX", "confirmed": false})] {
            let result = tool.execute(args).await.unwrap();
            assert_eq!(result.text_content(), CONFIRMATION_REQUIRED);
            assert!(!result.is_error());
        }
    }

    #[tokio::test]
    async fn test_destructive_with_confirmation_calls_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/devices/Q2XX/reboot"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = tool(client_for(&server), SdkCategory::Devices, "rebootDevice");
        let result = tool
            .execute(json!({"serial": "Q2XX", "confirmed": true}))
            .await
            .unwrap();
        assert!(!result.is_error());
        assert!(result.text_content().contains("- **success**: true"));
    }

    #[tokio::test]
    async fn test_validation_failure_is_error_text() {
        let server = MockServer::start().await;
        let tool = tool(client_for(&server), SdkCategory::Switch, "updateDeviceSwitchPort");
        assert_eq!(tool.tier(), ToolTier::Tier1);

        let result = tool
            .execute(json!({"serial": "Q2XX", "port_id": "3", "vlan": 9999}))
            .await
            .unwrap();
        assert!(result.is_error());
        assert_eq!(
            result.text_content(),
            "❌ Error in update_device_switch_port: vlan must be between 1 and 4094"
        );
    }

    #[tokio::test]
    async fn test_api_failure_is_error_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"errors": ["Invalid network"]})),
            )
            .mount(&server)
            .await;

        let tool = tool(client_for(&server), SdkCategory::Networks, "getNetwork");
        let result = tool.execute(json!({"network_id": "N_1"})).await.unwrap();
        assert!(result.is_error());
        assert!(result.text_content().starts_with("❌ Error in get_network: "));
        assert!(result.text_content().contains("Invalid network"));
    }

    #[tokio::test]
    async fn test_update_sends_wire_body_and_formats() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/devices/Q2XX/switch/ports/3"))
            .and(body_json(json!({"vlan": 30, "poeEnabled": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"portId": "3", "vlan": 30, "poeEnabled": true}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let tool = tool(client_for(&server), SdkCategory::Switch, "updateDeviceSwitchPort");
        let result = tool
            .execute(json!({"serial": "Q2XX", "port_id": "3", "vlan": 30, "poe_enabled": true}))
            .await
            .unwrap();

        let text = result.text_content();
        assert!(text.starts_with("# 🔌 Update Device Switch Port"));
        assert!(text.contains("- **poeEnabled**: ✅"));
    }

    #[test]
    fn test_schema_and_operation() {
        let client = Arc::new(DashboardClient::builder().api_key("k").build().unwrap());
        let tool = tool(client, SdkCategory::Wireless, "getNetworkWirelessSsids");

        let schema = tool.schema();
        assert_eq!(schema.name, "get_network_wireless_ssids");
        assert!(schema.description.starts_with("📋 Get Network Wireless Ssids"));
        assert_eq!(schema.annotations.map(|a| a.read_only_hint), Some(true));
        assert_eq!(
            tool.operation(),
            Some((SdkCategory::Wireless, "getNetworkWirelessSsids"))
        );
        assert_eq!(tool.tier(), ToolTier::Tier0);
    }
}

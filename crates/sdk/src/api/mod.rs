//! Category APIs, one per Dashboard SDK namespace.
//!
//! [`CategoryApi`] dispatches any catalogued operation by id; the typed
//! wrappers add conveniences for the calls the MCP helpers and resources
//! make directly.

mod appliance;
mod devices;
mod networks;
mod organizations;
mod switch;
mod wireless;

pub use appliance::ApplianceApi;
pub use devices::DevicesApi;
pub use networks::NetworksApi;
pub use organizations::OrganizationsApi;
pub use switch::SwitchApi;
pub use wireless::WirelessApi;

use crate::args::CallArgs;
use crate::catalog;
use crate::client::DashboardClient;
use crate::endpoint::Endpoint;
use crate::error::{MerakiError, MerakiResult};
use meraki_mcp_core::SdkCategory;
use serde_json::Value;

/// Generic access to one category's operations.
#[derive(Clone, Copy)]
pub struct CategoryApi<'a> {
    client: &'a DashboardClient,
    category: SdkCategory,
}

impl<'a> CategoryApi<'a> {
    pub(crate) fn new(client: &'a DashboardClient, category: SdkCategory) -> Self {
        Self { client, category }
    }

    pub fn category(&self) -> SdkCategory {
        self.category
    }

    /// Endpoints available in this category.
    pub fn endpoints(&self) -> &'static [Endpoint] {
        catalog::endpoints(self.category)
    }

    /// Operation ids available in this category.
    pub fn methods(&self) -> Vec<&'static str> {
        self.endpoints().iter().map(|e| e.operation_id).collect()
    }

    /// Invoke an operation by its SDK operation id.
    pub async fn invoke(&self, operation_id: &str, args: CallArgs) -> MerakiResult<Value> {
        let endpoint = catalog::find(self.category, operation_id).ok_or_else(|| {
            MerakiError::UnknownOperation {
                category: self.category.to_string(),
                operation: operation_id.to_string(),
            }
        })?;
        self.client.call(endpoint, args).await
    }

    /// Invoke an operation and decode the result into `T`.
    pub(crate) async fn invoke_as<T: serde::de::DeserializeOwned>(
        &self,
        operation_id: &str,
        args: CallArgs,
    ) -> MerakiResult<T> {
        let value = self.invoke(operation_id, args).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Decode a JSON array response, treating `null` as empty.
pub(crate) fn into_list(value: Value) -> MerakiResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(MerakiError::InvalidInput(format!(
            "expected a list response, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> DashboardClient {
        DashboardClient::builder()
            .api_key("test-key")
            .base_url(format!("{}/api/v1", server.uri()))
            .retry_config(crate::config::RetryConfig::no_retry())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_invoke_renders_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/devices/Q2XX-AAAA-BBBB/switch/ports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"portId": "1"}])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .category(SdkCategory::Switch)
            .invoke(
                "getDeviceSwitchPorts",
                CallArgs::new().path("serial", "Q2XX-AAAA-BBBB"),
            )
            .await
            .unwrap();
        assert_eq!(result[0]["portId"], "1");
    }

    #[tokio::test]
    async fn test_invoke_unknown_operation() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        let result = client
            .category(SdkCategory::Camera)
            .invoke("getDeviceSwitchPorts", CallArgs::new())
            .await;
        assert!(matches!(result, Err(MerakiError::UnknownOperation { .. })));
    }

    #[tokio::test]
    async fn test_invoke_missing_path_param() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        let result = client
            .category(SdkCategory::Networks)
            .invoke("getNetwork", CallArgs::new())
            .await;
        assert!(matches!(result, Err(MerakiError::InvalidInput(_))));
    }

    #[test]
    fn test_methods_lists_catalog() {
        let client = DashboardClient::builder().api_key("k").build().unwrap();
        let methods = client.category(SdkCategory::Wireless).methods();
        assert!(methods.contains(&"getNetworkWirelessSsids"));
        assert!(!methods.contains(&"getNetworkApplianceVlans"));
    }

    #[test]
    fn test_into_list() {
        assert_eq!(into_list(Value::Null).unwrap(), Vec::<Value>::new());
        assert_eq!(into_list(json!([1, 2])).unwrap().len(), 2);
        assert!(into_list(json!({"a": 1})).is_err());
    }
}

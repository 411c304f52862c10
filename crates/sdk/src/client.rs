//! Main client for the Dashboard API.

use crate::api::*;
use crate::args::CallArgs;
use crate::config::{ClientConfig, RetryConfig};
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::{MerakiError, MerakiResult};
use crate::transport::HttpTransport;
use meraki_mcp_core::config::{MerakiConfig, DEFAULT_BASE_URL};
use meraki_mcp_core::SdkCategory;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Dashboard API.
#[derive(Clone)]
pub struct DashboardClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl DashboardClient {
    /// Create a new client builder.
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> MerakiResult<Self> {
        if config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(MerakiError::Config(
                "Dashboard API key is required (set MERAKI_API_KEY)".to_string(),
            ));
        }

        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Create a client from the `[meraki]` section of the server
    /// configuration.
    pub fn from_settings(settings: &MerakiConfig) -> MerakiResult<Self> {
        Self::from_config(ClientConfig::from_settings(settings)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generic access to any category.
    pub fn category(&self, category: SdkCategory) -> CategoryApi<'_> {
        CategoryApi::new(self, category)
    }

    /// Execute one catalogued operation.
    pub async fn call(&self, endpoint: &Endpoint, args: CallArgs) -> MerakiResult<Value> {
        let path = endpoint.render_path(&args.path)?;

        match endpoint.method {
            HttpMethod::Get if endpoint.paginated => {
                self.http
                    .get_pages(&path, &args.query, args.total_pages.unwrap_or(1))
                    .await
            }
            method => {
                self.http
                    .request(method, &path, &args.query, args.body.as_ref())
                    .await
            }
        }
    }

    /// Get the organizations API.
    pub fn organizations(&self) -> OrganizationsApi<'_> {
        OrganizationsApi::new(self)
    }

    /// Get the networks API.
    pub fn networks(&self) -> NetworksApi<'_> {
        NetworksApi::new(self)
    }

    /// Get the devices API.
    pub fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    /// Get the switch API.
    pub fn switch(&self) -> SwitchApi<'_> {
        SwitchApi::new(self)
    }

    /// Get the wireless API.
    pub fn wireless(&self) -> WirelessApi<'_> {
        WirelessApi::new(self)
    }

    /// Get the appliance API.
    pub fn appliance(&self) -> ApplianceApi<'_> {
        ApplianceApi::new(self)
    }

    pub fn camera(&self) -> CategoryApi<'_> {
        self.category(SdkCategory::Camera)
    }

    pub fn cellular_gateway(&self) -> CategoryApi<'_> {
        self.category(SdkCategory::CellularGateway)
    }

    pub fn sensor(&self) -> CategoryApi<'_> {
        self.category(SdkCategory::Sensor)
    }

    pub fn sm(&self) -> CategoryApi<'_> {
        self.category(SdkCategory::Sm)
    }

    pub fn licensing(&self) -> CategoryApi<'_> {
        self.category(SdkCategory::Licensing)
    }

    pub fn insight(&self) -> CategoryApi<'_> {
        self.category(SdkCategory::Insight)
    }

    pub fn administered(&self) -> CategoryApi<'_> {
        self.category(SdkCategory::Administered)
    }
}

/// Builder for creating a DashboardClient.
pub struct DashboardClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    retry_config: RetryConfig,
    wait_on_rate_limit: bool,
    max_pages: u32,
}

impl DashboardClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(60),
            retry_config: RetryConfig::default(),
            wait_on_rate_limit: true,
            max_pages: 100,
        }
    }

    /// Set the base URL; defaults to the global Dashboard endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the Dashboard API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Sleep for `Retry-After` on 429 responses instead of failing.
    pub fn wait_on_rate_limit(mut self, wait: bool) -> Self {
        self.wait_on_rate_limit = wait;
        self
    }

    /// Cap on pages followed when fetching all pages.
    pub fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages.max(1);
        self
    }

    /// Build the client.
    pub fn build(self) -> MerakiResult<DashboardClient> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            base_url,
            api_key: self.api_key,
            timeout: self.timeout,
            retry_config: self.retry_config,
            wait_on_rate_limit: self.wait_on_rate_limit,
            max_pages: self.max_pages,
        };

        DashboardClient::from_config(config)
    }
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DashboardClient {
        DashboardClient::builder()
            .api_key("test-key")
            .base_url(format!("{}/api/v1", server.uri()))
            .retry_config(RetryConfig::no_retry())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = DashboardClient::builder().api_key("k").build().unwrap();
        assert_eq!(client.config().base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.config().timeout, Duration::from_secs(60));
        assert!(client.config().wait_on_rate_limit);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = DashboardClient::builder().build();
        assert!(matches!(result, Err(MerakiError::Config(_))));

        let result = DashboardClient::builder().api_key("   ").build();
        assert!(matches!(result, Err(MerakiError::Config(_))));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = DashboardClient::builder()
            .api_key("k")
            .base_url("::not a url")
            .build();
        assert!(matches!(result, Err(MerakiError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_typed_organizations() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "1", "name": "Acme", "url": "https://n1.meraki.com/o/x"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let orgs = client.organizations().get_organizations().await.unwrap();
        assert_eq!(orgs.len(), 1);
        assert_eq!(orgs[0].name, "Acme");
    }

    #[tokio::test]
    async fn test_typed_network_clients_with_timespan() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/networks/N_1/clients"))
            .and(query_param("timespan", "3600"))
            .and(query_param("perPage", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "k1", "ip": "10.0.0.5", "mac": "aa:bb:cc:dd:ee:ff", "vlan": 10}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let clients = client
            .networks()
            .get_network_clients("N_1", Some(3600))
            .await
            .unwrap();
        assert_eq!(clients[0].ip.as_deref(), Some("10.0.0.5"));
    }

    #[tokio::test]
    async fn test_typed_wrapper_derefs_to_invoke() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/devices/Q2XX/reboot"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .devices()
            .invoke("rebootDevice", CallArgs::new().path("serial", "Q2XX"))
            .await
            .unwrap();
        assert_eq!(result["success"], true);
    }
}

// MCP server: JSON-RPC dispatch plus the newline-delimited stdio transport

use crate::protocol::*;
use crate::resources::{ResourceError, ResourceProvider};
use crate::tools::{build_registry, tool_error, ToolRegistry};
use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use meraki_mcp_core::profile::RESOURCES_MODULE;
use meraki_mcp_core::McpConfig;
use meraki_sdk::DashboardClient;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};

/// Largest single message accepted on stdio
const MAX_MESSAGE_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    resources: Option<Arc<ResourceProvider>>,
    info: ServerInfo,
    instructions: Option<String>,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            resources: None,
            info: ServerInfo {
                name: "meraki-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: None,
        }
    }

    /// Build the client, tools and resources a configuration selects
    pub fn from_config(config: &McpConfig) -> Result<Self> {
        let client = Arc::new(
            DashboardClient::from_settings(&config.meraki)
                .context("Failed to create Dashboard client")?,
        );
        let selection = config.module_selection();
        let registry = build_registry(client.clone(), &selection);

        let mut server = Self::new(registry)
            .with_name(config.server.name.clone())
            .with_instructions(format!(
                "Cisco Meraki Dashboard tools ({} profile). Destructive operations require confirmed=true.",
                selection.profile
            ));
        if selection.should_load(RESOURCES_MODULE) {
            server = server.with_resources(ResourceProvider::new(client));
        }
        Ok(server)
    }

    pub fn with_resources(mut self, provider: ResourceProvider) -> Self {
        self.resources = Some(Arc::new(provider));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one raw JSON-RPC message; `None` when no response is due
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Unparseable message");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        if value.is_array() {
            return Some(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError {
                    data: Some(json!("Batch requests are not supported")),
                    ..JsonRpcError::invalid_request()
                },
            ));
        }

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(_) => Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return request
                .id
                .map(|id| JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        let JsonRpcRequest {
            id, method, params, ..
        } = request;
        tracing::debug!(method = %method, "Handling request");
        let result = self.dispatch(&method, params).await;

        match id {
            Some(id) => Some(match result {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(error) => JsonRpcResponse::error(id, error),
            }),
            None => {
                if let Err(error) = result {
                    tracing::debug!(method = %method, error = %error.message, "Notification failed");
                }
                None
            }
        }
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, JsonRpcError> {
        match method {
            "initialize" => self.initialize(params),
            "ping" => Ok(json!({})),
            "tools/list" => to_result(ListToolsResult {
                tools: self.registry.list_schemas(),
            }),
            "tools/call" => self.call_tool(params).await,
            "resources/list" => to_result(ListResourcesResult {
                resources: self.resources.as_ref().map(|r| r.list()).unwrap_or_default(),
            }),
            "resources/templates/list" => to_result(ListResourceTemplatesResult {
                resource_templates: self
                    .resources
                    .as_ref()
                    .map(|r| r.templates())
                    .unwrap_or_default(),
            }),
            "resources/read" => self.read_resource(params).await,
            m if m.starts_with("notifications/") => Ok(Value::Null),
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?,
            None => InitializeParams::default(),
        };

        let protocol_version = params
            .protocol_version
            .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(&v.as_str()))
            .unwrap_or_else(|| LATEST_PROTOCOL_VERSION.to_string());

        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                version = %client.version,
                protocol = %protocol_version,
                "Client initialized"
            );
        }

        to_result(InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
                resources: self.resources.as_ref().map(|_| ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
            instructions: self.instructions.clone(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)))?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        let started = Instant::now();
        let result = match tool.execute(params.arguments).await {
            Ok(result) => result,
            Err(e) => tool_error(&params.name, format!("{:#}", e)),
        };

        tracing::info!(
            tool = %params.name,
            is_error = result.is_error(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Tool call finished"
        );

        to_result(result)
    }

    async fn read_resource(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: ReadResourceParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid resources/read params: {}", e)))?;

        let provider = self
            .resources
            .as_ref()
            .ok_or_else(|| JsonRpcError::invalid_params("Resources are not enabled"))?;

        match provider.read(&params.uri).await {
            Ok(result) => to_result(result),
            Err(e @ ResourceError::NotFound(_)) => Err(JsonRpcError::invalid_params(e.to_string())),
            Err(e) => {
                tracing::warn!(uri = %params.uri, error = %e, "Resource read failed");
                Err(JsonRpcError::internal_error(e.to_string()))
            }
        }
    }

    /// Serve newline-delimited JSON-RPC until the reader closes
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_MESSAGE_BYTES));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());

        while let Some(line) = lines.next().await {
            let response = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_message(&line).await,
                Err(LinesCodecError::MaxLineLengthExceeded) => {
                    tracing::warn!(max_bytes = MAX_MESSAGE_BYTES, "Message too large, discarded");
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
                Err(LinesCodecError::Io(e)) => return Err(e.into()),
            };

            if let Some(response) = response {
                sink.send(serde_json::to_string(&response)?).await?;
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Serve over the process's stdin and stdout
    pub async fn serve_stdio(&self) -> Result<()> {
        tracing::info!(
            tools = self.registry.len(),
            resources = self.resources.is_some(),
            "MCP server listening on stdio"
        );
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }
}

fn to_result(value: impl Serialize) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Tool;
    use meraki_mcp_core::config::MerakiConfig;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    struct EchoTool;

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: "echo".to_string(),
                description: "Echo the message".to_string(),
                input_schema: json!({"type": "object"}),
                annotations: None,
            }
        }

        async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
            match arguments.get("message").and_then(Value::as_str) {
                Some(message) => Ok(CallToolResult::text(message)),
                None => anyhow::bail!("message is required"),
            }
        }
    }

    fn server() -> McpServer {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        McpServer::new(registry)
    }

    async fn call(server: &McpServer, raw: Value) -> JsonRpcResponse {
        server.handle_message(&raw.to_string()).await.unwrap()
    }

    #[tokio::test]
    async fn test_initialize_negotiates_version() {
        let server = server();
        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
                   "params": {"protocolVersion": "2024-11-05", "capabilities": {},
                              "clientInfo": {"name": "test", "version": "1"}}}),
        )
        .await;
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "meraki-mcp");
        assert!(result["capabilities"].get("resources").is_none());

        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 2, "method": "initialize",
                   "params": {"protocolVersion": "1999-01-01"}}),
        )
        .await;
        assert_eq!(resp.result.unwrap()["protocolVersion"], LATEST_PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let server = server();
        let raw = json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string();
        assert!(server.handle_message(&raw).await.is_none());
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let server = server();

        let resp = server.handle_message("{not json").await.unwrap();
        assert_eq!(resp.error.unwrap().code, JsonRpcError::PARSE_ERROR);

        let resp = call(&server, json!({"jsonrpc": "2.0", "id": 3, "method": "bogus"})).await;
        assert_eq!(resp.error.unwrap().code, JsonRpcError::METHOD_NOT_FOUND);

        let resp = call(&server, json!({"jsonrpc": "1.0", "id": 4, "method": "ping"})).await;
        assert_eq!(resp.error.unwrap().code, JsonRpcError::INVALID_REQUEST);

        let resp = call(&server, json!({"id": 5})).await;
        assert_eq!(resp.id, json!(5));
        assert_eq!(resp.error.unwrap().code, JsonRpcError::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = server();
        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call",
                   "params": {"name": "nope", "arguments": {}}}),
        )
        .await;
        let error = resp.error.unwrap();
        assert_eq!(error.code, JsonRpcError::INVALID_PARAMS);
        assert_eq!(error.message, "Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_tool_failure_is_content() {
        let server = server();
        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 7, "method": "tools/call",
                   "params": {"name": "echo", "arguments": {}}}),
        )
        .await;
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "❌ Error in echo: message is required"
        );

        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 8, "method": "tools/call",
                   "params": {"name": "echo", "arguments": {"message": "hi"}}}),
        )
        .await;
        assert_eq!(resp.result.unwrap()["content"][0]["text"], "hi");
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = server();
        let resp = call(&server, json!({"jsonrpc": "2.0", "id": 9, "method": "tools/list"})).await;
        let result = resp.result.unwrap();
        assert_eq!(result["tools"][0]["name"], "echo");
        assert!(result["tools"][0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn test_resources() {
        let client = Arc::new(DashboardClient::builder().api_key("k").build().unwrap());
        let server = server().with_resources(ResourceProvider::new(client));

        let resp = call(&server, json!({"jsonrpc": "2.0", "id": 10, "method": "resources/list"})).await;
        assert_eq!(resp.result.unwrap()["resources"].as_array().unwrap().len(), 3);

        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 11, "method": "resources/templates/list"}),
        )
        .await;
        assert!(!resp.result.unwrap()["resourceTemplates"]
            .as_array()
            .unwrap()
            .is_empty());

        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 12, "method": "resources/read",
                   "params": {"uri": "networks://"}}),
        )
        .await;
        let result = resp.result.unwrap();
        assert_eq!(result["contents"][0]["mimeType"], "application/json");

        let resp = call(
            &server,
            json!({"jsonrpc": "2.0", "id": 13, "method": "resources/read",
                   "params": {"uri": "widgets://1"}}),
        )
        .await;
        assert_eq!(resp.error.unwrap().code, JsonRpcError::INVALID_PARAMS);
    }

    #[test]
    fn test_from_config() {
        let mut config = McpConfig::default();
        assert!(McpServer::from_config(&config).is_err());

        config.meraki = MerakiConfig {
            api_key: Some("k".to_string()),
            ..MerakiConfig::default()
        };
        config.server.profile = "minimal".to_string();
        config.server.exclude = vec![RESOURCES_MODULE.to_string()];
        let server = McpServer::from_config(&config).unwrap();
        assert!(server.registry().contains("get_network"));
        assert!(!server.registry().contains("get_device_switch_ports"));
        assert!(server.resources.is_none());
    }

    #[tokio::test]
    async fn test_serve_over_lines() {
        let server = server();
        let (mut client_io, server_io) = tokio::io::duplex(4096);
        let (server_read, server_write) = tokio::io::split(server_io);

        let handle = tokio::spawn(async move { server.serve(server_read, server_write).await });

        let input = [
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}).to_string(),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string(),
            String::new(),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}).to_string(),
        ]
        .join("\n")
            + "\n";
        client_io.write_all(input.as_bytes()).await.unwrap();

        let mut reader = BufReader::new(&mut client_io);
        let mut first = String::new();
        reader.read_line(&mut first).await.unwrap();
        let mut second = String::new();
        reader.read_line(&mut second).await.unwrap();

        let first: Value = serde_json::from_str(&first).unwrap();
        let second: Value = serde_json::from_str(&second).unwrap();
        assert_eq!(first["id"], 1);
        assert_eq!(first["result"], json!({}));
        assert_eq!(second["id"], 2);

        drop(reader);
        drop(client_io);
        handle.await.unwrap().unwrap();
    }
}

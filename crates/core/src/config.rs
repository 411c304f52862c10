// Server configuration: TOML file with environment overrides

use crate::error::{CoreError, CoreResult};
use crate::profile::{parse_module_list, ModuleSelection, Profile};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub meraki: MerakiConfig,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub http: HttpSection,
}

/// Dashboard API client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerakiConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_true")]
    pub wait_on_rate_limit: bool,

    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

/// MCP server identity and tool selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_profile")]
    pub profile: String,

    #[serde(default)]
    pub modules: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

/// HTTP transport bind address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

fn default_max_pages() -> u32 {
    100
}

fn default_server_name() -> String {
    "meraki-mcp".to_string()
}

fn default_profile() -> String {
    Profile::Full.as_str().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for MerakiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            wait_on_rate_limit: true,
            max_pages: default_max_pages(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            profile: default_profile(),
            modules: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl McpConfig {
    /// Load the configuration file if it exists, otherwise use defaults,
    /// then apply environment overrides.
    pub fn load(config_path: &Path) -> CoreResult<Self> {
        let mut config = Self::from_file(config_path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(config_path: &Path) -> CoreResult<Self> {
        if !config_path.exists() {
            tracing::info!(
                path = %config_path.display(),
                "Configuration file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| CoreError::ConfigRead {
            path: config_path.display().to_string(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| CoreError::ConfigParse {
            path: config_path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides from `MERAKI_API_KEY`, `MERAKI_BASE_URL`,
    /// `MERAKI_TIMEOUT`, `MCP_PROFILE`, `MCP_MODULES` and `MCP_EXCLUDE`.
    pub fn apply_env<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("MERAKI_API_KEY") {
            self.meraki.api_key = Some(key);
        }
        if let Some(url) = non_empty("MERAKI_BASE_URL") {
            self.meraki.base_url = url;
        }
        if let Some(timeout) = non_empty("MERAKI_TIMEOUT") {
            self.meraki.timeout_secs =
                timeout
                    .trim()
                    .parse()
                    .map_err(|_| CoreError::InvalidValue {
                        key: "MERAKI_TIMEOUT".to_string(),
                        message: format!("expected seconds, got {:?}", timeout),
                    })?;
        }
        if let Some(profile) = non_empty("MCP_PROFILE") {
            self.server.profile = profile;
        }
        if let Some(modules) = non_empty("MCP_MODULES") {
            self.server.modules = parse_module_list(&modules);
        }
        if let Some(exclude) = non_empty("MCP_EXCLUDE") {
            self.server.exclude = parse_module_list(&exclude);
        }

        Ok(())
    }

    pub fn profile(&self) -> Profile {
        Profile::from_name(&self.server.profile)
    }

    pub fn module_selection(&self) -> ModuleSelection {
        let modules = parse_module_list(&self.server.modules.join(","));
        let exclude = parse_module_list(&self.server.exclude.join(","));

        ModuleSelection::new(self.profile())
            .with_custom_modules(modules)
            .with_excluded_modules(exclude)
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::SdkCategory;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = McpConfig::default();

        assert!(config.meraki.api_key.is_none());
        assert_eq!(config.meraki.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.meraki.timeout_secs, 60);
        assert!(config.meraki.wait_on_rate_limit);
        assert_eq!(config.profile(), Profile::Full);
        assert_eq!(config.http_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = McpConfig::from_toml(
            r#"
            [meraki]
            api_key = "abc123"
            max_retries = 5

            [server]
            profile = "wireless"
            "#,
        )
        .unwrap();

        assert_eq!(config.meraki.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.meraki.max_retries, 5);
        assert_eq!(config.meraki.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.profile(), Profile::Wireless);
        assert_eq!(config.http.port, 8000);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = McpConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.name, "meraki-mcp");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[meraki\napi_key = ").unwrap();

        let result = McpConfig::from_file(&path);
        assert!(matches!(result, Err(CoreError::ConfigParse { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("MERAKI_API_KEY", "env-key"),
            ("MERAKI_TIMEOUT", "15"),
            ("MCP_PROFILE", "NETWORK"),
            ("MCP_EXCLUDE", "SDK_appliance"),
            ("MERAKI_BASE_URL", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = McpConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.meraki.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.meraki.timeout_secs, 15);
        // blank values are ignored
        assert_eq!(config.meraki.base_url, DEFAULT_BASE_URL);

        let selection = config.module_selection();
        assert_eq!(selection.profile, Profile::Network);
        assert!(selection.should_load_category(SdkCategory::Switch));
        assert!(!selection.should_load_category(SdkCategory::Appliance));
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let mut config = McpConfig::default();
        let result = config.apply_env(|key| (key == "MERAKI_TIMEOUT").then(|| "soon".to_string()));
        assert!(matches!(result, Err(CoreError::InvalidValue { .. })));
    }

    #[test]
    fn test_module_groups_in_config() {
        let config = McpConfig::from_toml(
            r#"
            [server]
            modules = ["device_management"]
            "#,
        )
        .unwrap();

        let selection = config.module_selection();
        assert!(selection.should_load_category(SdkCategory::Camera));
        assert!(!selection.should_load_category(SdkCategory::Wireless));
    }
}

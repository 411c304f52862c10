//! Configuration types for the Dashboard client.

use meraki_mcp_core::config::{MerakiConfig, DEFAULT_BASE_URL};
use std::time::Duration;
use url::Url;

/// Configuration for the Dashboard client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Dashboard API, including the `/api/v1` prefix.
    pub base_url: Url,
    /// Dashboard API key, sent as a bearer token.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry_config: RetryConfig,
    /// Sleep for the server-provided `Retry-After` on 429 responses.
    pub wait_on_rate_limit: bool,
    /// Upper bound on pages fetched when a caller asks for all pages.
    pub max_pages: u32,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: Duration::from_secs(60),
            retry_config: RetryConfig::default(),
            wait_on_rate_limit: true,
            max_pages: 100,
        }
    }

    /// Build a client configuration from the `[meraki]` section of the
    /// server configuration.
    pub fn from_settings(settings: &MerakiConfig) -> Result<Self, url::ParseError> {
        let base_url = if settings.base_url.trim().is_empty() {
            Url::parse(DEFAULT_BASE_URL)?
        } else {
            Url::parse(settings.base_url.trim())?
        };

        Ok(Self {
            base_url,
            api_key: settings.api_key.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            retry_config: RetryConfig {
                max_retries: settings.max_retries,
                ..Default::default()
            },
            wait_on_rate_limit: settings.wait_on_rate_limit,
            max_pages: settings.max_pages.max(1),
        })
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries.
    pub max_retries: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration, also caps `Retry-After` sleeps.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
    /// HTTP status codes to retry on.
    pub retry_on_status_codes: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            retry_on_status_codes: vec![429, 500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Calculate backoff duration for a given attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff_ms = self.initial_backoff.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        let backoff = Duration::from_millis(backoff_ms as u64);
        std::cmp::min(backoff, self.max_backoff)
    }

    /// Backoff for a rate-limited attempt: the server's `Retry-After` when
    /// present, otherwise the exponential schedule.
    pub fn backoff_for_rate_limit(&self, attempt: u32, retry_after_secs: Option<u64>) -> Duration {
        match retry_after_secs {
            Some(secs) => std::cmp::min(Duration::from_secs(secs), self.max_backoff),
            None => self.backoff_for_attempt(attempt),
        }
    }

    /// Check if a status code should trigger a retry.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status_codes.contains(&status)
    }
}

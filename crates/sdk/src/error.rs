//! Error types for the Dashboard client.

use serde::Deserialize;

/// Result type for SDK operations.
pub type MerakiResult<T> = Result<T, MerakiError>;

/// Error types that can occur when calling the Dashboard API.
#[derive(Debug, thiserror::Error)]
pub enum MerakiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("Dashboard API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// API key rejected.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited and retries exhausted.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation id not present in the endpoint catalog.
    #[error("Unknown operation {category}.{operation}")]
    UnknownOperation { category: String, operation: String },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl MerakiError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an error from a non-success status and the response body.
    ///
    /// The Dashboard reports failures as `{"errors": ["..."]}`; the
    /// messages are joined with `"; "`.
    pub fn from_response(status: u16, body: &str, retry_after_secs: Option<u64>) -> Self {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(response) if !response.errors.is_empty() => response.errors.join("; "),
            _ if body.trim().is_empty() => format!("HTTP {}", status),
            _ => body.trim().to_string(),
        };

        match status {
            401 | 403 => Self::Authentication(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimited { retry_after_secs },
            _ => Self::Api { status, message },
        }
    }
}

/// Error body returned by the Dashboard API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_joins_errors() {
        let error = MerakiError::from_response(
            400,
            r#"{"errors":["VLAN already exists","Subnet overlaps"]}"#,
            None,
        );
        match error {
            MerakiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "VLAN already exists; Subnet overlaps");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_response_status_mapping() {
        assert!(matches!(
            MerakiError::from_response(401, r#"{"errors":["Invalid API key"]}"#, None),
            MerakiError::Authentication(m) if m == "Invalid API key"
        ));
        assert!(matches!(
            MerakiError::from_response(404, "", None),
            MerakiError::NotFound(m) if m == "HTTP 404"
        ));
        assert!(matches!(
            MerakiError::from_response(429, "", Some(3)),
            MerakiError::RateLimited { retry_after_secs: Some(3) }
        ));
    }

    #[test]
    fn test_from_response_plain_body() {
        let error = MerakiError::from_response(502, "Bad Gateway\n", None);
        assert!(error.is_retryable());
        assert_eq!(error.to_string(), "Dashboard API error (status 502): Bad Gateway");
    }
}

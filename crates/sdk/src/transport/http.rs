//! HTTP transport for the Dashboard API.

use crate::config::ClientConfig;
use crate::endpoint::HttpMethod;
use crate::error::{MerakiError, MerakiResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("meraki-mcp/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> MerakiResult<Self> {
        let mut headers = header::HeaderMap::new();

        if let Some(ref api_key) = config.api_key {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .map_err(|_| MerakiError::Config("Invalid API key format".to_string()))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path, keeping the base URL's own path
    /// prefix (`/api/v1`).
    pub fn build_url(&self, path: &str) -> MerakiResult<Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    /// Execute a request with retries.
    ///
    /// Rate-limited responses sleep for the server's `Retry-After` when
    /// `wait_on_rate_limit` is set; other retryable statuses and timeouts
    /// use exponential backoff.
    async fn execute_with_retry(&self, request_builder: RequestBuilder) -> MerakiResult<Response> {
        let retry_config = &self.config.retry_config;
        let mut attempts = 0;

        loop {
            let request = request_builder
                .try_clone()
                .ok_or_else(|| MerakiError::Config("Request cannot be cloned".to_string()))?;

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if response.status().is_success() {
                        return Ok(response);
                    }

                    let retry_after = retry_after_secs(response.headers());
                    let rate_limited = status == 429;
                    let may_retry = attempts < retry_config.max_retries
                        && retry_config.should_retry_status(status)
                        && (!rate_limited || self.config.wait_on_rate_limit);

                    if may_retry {
                        let backoff = if rate_limited {
                            retry_config.backoff_for_rate_limit(attempts, retry_after)
                        } else {
                            retry_config.backoff_for_attempt(attempts)
                        };
                        warn!(
                            status = status,
                            attempt = attempts + 1,
                            backoff_ms = backoff.as_millis(),
                            "Request failed, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(MerakiError::from_response(status, &body, retry_after));
                }
                Err(e) => {
                    if attempts < retry_config.max_retries && (e.is_timeout() || e.is_connect()) {
                        let backoff = retry_config.backoff_for_attempt(attempts);
                        warn!(
                            attempt = attempts + 1,
                            backoff_ms = backoff.as_millis(),
                            error = %e,
                            "Request did not complete, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        continue;
                    }
                    if e.is_timeout() {
                        return Err(MerakiError::Timeout);
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Execute a request and return the decoded JSON body; empty bodies
    /// (e.g. `204 No Content`) decode as `Value::Null`.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> MerakiResult<Value> {
        let url = self.build_url(path)?;
        debug!(method = %method, url = %url, "Dashboard request");

        let mut builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = self.execute_with_retry(builder).await?;
        read_json(response).await
    }

    /// GET a paginated collection, following `Link: <...>; rel=next`.
    ///
    /// `total_pages` of `1` fetches only the first page; `-1` follows every
    /// page up to the configured `max_pages`. Pages are concatenated into a
    /// single array.
    pub async fn get_pages(
        &self,
        path: &str,
        query: &[(String, String)],
        total_pages: i64,
    ) -> MerakiResult<Value> {
        let url = self.build_url(path)?;
        let max_pages = i64::from(self.config.max_pages.max(1));
        let limit = if total_pages < 0 {
            max_pages
        } else {
            total_pages.clamp(1, max_pages)
        };
        debug!(url = %url, pages = limit, "Dashboard paginated request");

        let mut builder = self.client.get(url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = self.execute_with_retry(builder).await?;
        let mut next = next_link(response.headers());

        let mut items = match read_json(response).await? {
            Value::Array(items) => items,
            other => return Ok(other),
        };

        let mut pages = 1;
        while pages < limit {
            let Some(link) = next.take() else { break };
            debug!(url = %link, page = pages + 1, "Following next page");

            let response = self.execute_with_retry(self.client.get(link)).await?;
            next = next_link(response.headers());
            match read_json(response).await? {
                Value::Array(page) if page.is_empty() => break,
                Value::Array(page) => items.extend(page),
                _ => {
                    warn!(page = pages + 1, "Non-array page in paginated response, stopping");
                    break;
                }
            }
            pages += 1;
        }

        if next.is_some() && total_pages < 0 {
            warn!(max_pages = max_pages, "Stopped following pages at the page cap");
        }

        Ok(Value::Array(items))
    }
}

async fn read_json(response: Response) -> MerakiResult<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

fn retry_after_secs(headers: &header::HeaderMap) -> Option<u64> {
    headers
        .get(header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Extract the `rel=next` target from a `Link` header
fn next_link(headers: &header::HeaderMap) -> Option<Url> {
    headers
        .get_all(header::LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(|entry| {
            let mut parts = entry.split(';');
            let target = parts.next()?.trim();
            let is_next = parts.any(|param| {
                let param = param.trim().replace('"', "");
                param.eq_ignore_ascii_case("rel=next")
            });
            if !is_next {
                return None;
            }
            let target = target.strip_prefix('<')?.strip_suffix('>')?;
            Url::parse(target).ok()
        })
}

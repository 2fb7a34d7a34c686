//! Default HTTP collaborator backed by `reqwest`.
//!
//! This module provides the [`HttpClient`] type, the crate's default
//! [`Transport`] implementation. It owns transport policy — URL joining,
//! default headers, and bounded retry for transient failures — so the
//! resource layer never has to.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_response::ResponseEnvelope;
use crate::clients::transport::Transport;
use crate::config::ClientConfig;

/// Fixed retry wait time in seconds when the server does not say otherwise.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml, advertised in the User-Agent header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
}

/// HTTP client for making requests against a tree-shaped REST API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - Optional bounded retry for 429 and 500 responses
///
/// Non-2xx responses surface as [`HttpError::Response`]; the resource layer
/// only ever receives successful envelopes.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use canopy_rest::{BaseUrl, ClientConfig};
/// use canopy_rest::clients::{HttpClient, Transport};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()?;
///
/// let client: Arc<dyn Transport> = Arc::new(HttpClient::new(&config));
/// let envelope = client.get("/2010-04-01/Accounts", None, false).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.example.com`), no trailing slash.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Try budget per request; 1 means no retries.
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}canopy-rest v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            tries: config.tries(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&HashMap<String, String>>,
        body: Option<&serde_json::Value>,
        absolute: bool,
    ) -> Result<ResponseEnvelope, HttpError> {
        // A continuation URI is used verbatim; a regular path is normalized
        // to carry exactly one leading slash.
        let url = if absolute {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        };

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match method {
                Method::Get => self.client.get(&url),
                Method::Post => self.client.post(&url),
            };

            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = query {
                if !query.is_empty() {
                    req_builder = req_builder.query(query);
                }
            }

            if let Some(body) = body {
                req_builder = req_builder.json(body);
            }

            tracing::debug!(%url, method = ?method, tries, "sending request");

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // For 5xx errors, keep the raw body for diagnosis
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let envelope = ResponseEnvelope::new(code, res_headers, body);

            if envelope.is_ok() {
                return Ok(envelope);
            }

            let error_message = Self::serialize_error(&envelope);

            let should_retry = code == 429 || code == 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference: envelope.request_id().map(String::from),
                }));
            }

            if tries >= self.tries {
                if self.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        error_reference: envelope.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: self.tries,
                    message: error_message,
                    error_reference: envelope.request_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&envelope, code);
            tracing::warn!(%url, code, tries, "transient failure, retrying");
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(envelope: &ResponseEnvelope, status: u16) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise the fixed delay.
        // For 500: always the fixed delay.
        if status == 429 {
            if let Some(retry_after) = envelope.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes an error response body to a compact JSON message.
    fn serialize_error(envelope: &ResponseEnvelope) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "message", "more_info"] {
            if let Some(value) = envelope.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if error_body.is_empty() {
            return envelope.body.to_string();
        }

        if let Some(request_id) = envelope.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
        absolute: bool,
    ) -> Result<ResponseEnvelope, HttpError> {
        self.execute(Method::Get, path, query, None, absolute).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ResponseEnvelope, HttpError> {
        self.execute(Method::Post, path, None, Some(body), false)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;
    use serde_json::json;

    fn test_config() -> ClientConfig {
        ClientConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let client = HttpClient::new(&test_config());
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.tries, 1);
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("canopy-rest v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&test_config());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_serialize_error_picks_known_fields() {
        let envelope = ResponseEnvelope::new(
            400,
            HashMap::new(),
            json!({"message": "bad", "status": 400, "more_info": "https://docs"}),
        );
        let message = HttpClient::serialize_error(&envelope);
        assert!(message.contains("bad"));
        assert!(message.contains("https://docs"));
        assert!(!message.contains("\"status\""));
    }

    #[test]
    fn test_serialize_error_falls_back_to_whole_body() {
        let envelope = ResponseEnvelope::new(400, HashMap::new(), json!({"weird": true}));
        let message = HttpClient::serialize_error(&envelope);
        assert!(message.contains("weird"));
    }

    #[test]
    fn test_retry_delay_uses_retry_after_for_429() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["3".to_string()]);
        let envelope = ResponseEnvelope::new(429, headers, json!({}));

        let delay = HttpClient::calculate_retry_delay(&envelope, 429);
        assert_eq!(delay, std::time::Duration::from_secs(3));
    }

    #[test]
    fn test_retry_delay_fixed_for_500() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["30".to_string()]);
        let envelope = ResponseEnvelope::new(500, headers, json!({}));

        let delay = HttpClient::calculate_retry_delay(&envelope, 500);
        assert_eq!(delay, std::time::Duration::from_secs(RETRY_WAIT_TIME));
    }
}

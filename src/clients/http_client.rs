//! Authenticated HTTP transport for the Admin API.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Delay between retries when Shopify gives no `Retry-After`.
pub const RETRY_WAIT_TIME: Duration = Duration::from_secs(1);

/// Crate version, reported in the User-Agent header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends requests to one shop's Admin API.
///
/// The client owns the connection pool, the resolved base URL and the
/// default headers (`User-Agent`, `Accept`, `X-Shopify-Access-Token`).
/// Responses with status 429 or 500 are retried up to the request's
/// `tries`; every other non-2xx status becomes [`HttpError::Response`].
///
/// `HttpClient` is `Send + Sync`.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for `session`, rooted at `base_path`
    /// (e.g. `/admin/api/2025-10`).
    ///
    /// When the configuration has an `api_host`, requests go to that origin
    /// and the shop domain is sent in the `Host` header.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be
    /// initialized.
    pub fn new(
        base_path: impl Into<String>,
        session: &Session,
        config: &ShopifyConfig,
    ) -> Result<Self, HttpError> {
        let shop = session.shop.as_ref();
        let base_uri = config
            .api_host()
            .map_or_else(|| format!("https://{shop}"), |host| host.origin().to_string());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or_else(String::new, |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Custom Collections v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            session.access_token.as_ref().to_string(),
        );
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// Returns the origin requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the path prefix of every request.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `request`, retrying 429 and 500 responses while attempts remain.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] on connection or body read failures
    /// - [`HttpError::Json`] when a 2xx body is not valid JSON
    /// - [`HttpError::Response`] for a non-2xx status
    /// - [`HttpError::MaxRetries`] when every attempt was throttled or failed
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let mut builder = self.client.request(request.http_method.into(), &url);
            for (key, value) in &headers {
                builder = builder.header(key, value);
            }
            if let Some(query) = &request.query {
                builder = builder.query(query);
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.to_string());
            }

            let res = builder.send().await?;
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let response = HttpResponse::new(code, res_headers, Self::parse_body(code, &body_text)?);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    path = %request.path,
                    reason,
                    "Deprecated request to the Shopify Admin API"
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let message = Self::serialize_error(&response);
            let error_reference = response.request_id().map(String::from);
            let retryable = code == 429 || code == 500;

            if !retryable || request.tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference,
                }));
            }
            if attempt >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message,
                    error_reference,
                }));
            }

            let delay = Self::retry_delay(&response);
            tracing::debug!(
                path = %request.path,
                status = code,
                attempt,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying Shopify Admin API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(name.as_str().to_lowercase()).or_default().push(value);
        }
        result
    }

    // Only a successful response must carry valid JSON; error bodies are
    // kept for the error message when they can be.
    fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, serde_json::Error> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        match serde_json::from_str(body_text) {
            Ok(body) => Ok(body),
            Err(e) if (200..300).contains(&code) => Err(e),
            Err(_) if code >= 500 => Ok(serde_json::json!({ "raw_body": body_text })),
            Err(_) => Ok(serde_json::json!({})),
        }
    }

    // 429 honors a representable Retry-After; everything else waits the fixed delay.
    fn retry_delay(response: &HttpResponse) -> Duration {
        match response.retry_request_after {
            Some(seconds) if response.code == 429 => {
                Duration::try_from_secs_f64(seconds).unwrap_or(RETRY_WAIT_TIME)
            }
            _ => RETRY_WAIT_TIME,
        }
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }
        if response.body.get("error").is_some() {
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}

//! REST client for the versioned Admin API.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// Client for the Admin REST API of one shop and one API version.
///
/// Paths passed to [`get`](Self::get), [`post`](Self::post),
/// [`put`](Self::put) and [`delete`](Self::delete) are resolved against
/// `/admin/api/{version}/` and always end in `.json`. A leading `admin/`
/// is accepted and folded into that base, so `custom_collections/42` and
/// `admin/custom_collections/42.json` address the same endpoint.
///
/// `RestClient` is `Send + Sync`; share it by reference or in an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_custom_collections::{RestClient, Session, ShopifyConfig};
///
/// let session = Session::from_parts("my-store", "shpat_123")?;
/// let client = RestClient::new(&session, &ShopifyConfig::default())?;
///
/// let response = client.get("admin/custom_collections/count", None).await?;
/// println!("{}", response.body["count"]);
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP transport cannot be built.
    pub fn new(session: &Session, config: &ShopifyConfig) -> Result<Self, RestError> {
        Self::create_client(session, config, *config.api_version())
    }

    /// Creates a client pinned to `version`, ignoring the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP transport cannot be built.
    pub fn with_version(
        session: &Session,
        config: &ShopifyConfig,
        version: ApiVersion,
    ) -> Result<Self, RestError> {
        let configured = config.api_version();
        if &version == configured {
            tracing::debug!(
                "REST client has a redundant API version override to the default {}",
                configured
            );
        } else {
            tracing::debug!(
                "REST client overriding default API version {} with {}",
                configured,
                version
            );
        }

        Self::create_client(session, config, version)
    }

    fn create_client(
        session: &Session,
        config: &ShopifyConfig,
        api_version: ApiVersion,
    ) -> Result<Self, RestError> {
        if api_version.is_deprecated() {
            tracing::warn!(
                version = %api_version,
                minimum = %ApiVersion::minimum_supported(),
                "API version is no longer supported by Shopify; requests will be served by the oldest supported version"
            );
        }

        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, session, config)?;

        Ok(Self {
            http_client,
            api_version,
            tries: config.tries(),
        })
    }

    /// Returns the API version requests are sent to.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport and status errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport and status errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport and status errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for transport and status errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path).tries(self.tries);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
        Ok(self.http_client.request(request).await?)
    }
}

/// Normalizes a REST path relative to `/admin/api/{version}/`.
///
/// Strips leading `/`, one leading `admin/` and one trailing `.json`, then
/// appends `.json`.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_prefix("admin/").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}

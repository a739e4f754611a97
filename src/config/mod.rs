//! Client configuration.
//!
//! [`ShopifyConfig`] carries the settings shared by every request: the API
//! version, an optional host override, a User-Agent prefix and the number
//! of attempts made for retryable responses. Shop and credentials live on
//! the [`Session`](crate::Session) instead, so one configuration can serve
//! many shops.
//!
//! # Example
//!
//! ```rust
//! use shopify_custom_collections::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_07)
//!     .user_agent_prefix("CatalogSync/2.1")
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Settings shared by every request a client sends.
///
/// `ShopifyConfig` is cheap to clone and `Send + Sync`.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl ShopifyConfig {
    /// Creates a builder with every option at its default.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::default()
    }

    /// Returns the API version requests are sent to.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host override, if configured.
    ///
    /// When set, requests are sent to this origin instead of the shop's
    /// `myshopify.com` domain, and the shop domain is passed in the `Host`
    /// header.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted when Shopify answers
    /// with 429 or 500.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::latest(),
            api_host: None,
            user_agent_prefix: None,
            tries: 1,
        }
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl ShopifyConfigBuilder {
    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests to `host` instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of attempts for retryable responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTries`] when `tries` was set to zero.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(ShopifyConfig {
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ShopifyConfig::builder().build().unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.tries(), 1);
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = ShopifyConfig::builder()
            .api_version(ApiVersion::V2025_04)
            .api_host(HostUrl::new("http://localhost:9000").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .tries(4)
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2025_04);
        assert_eq!(config.api_host().unwrap().origin(), "http://localhost:9000");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.tries(), 4);
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = ShopifyConfig::builder().tries(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidTries { tries: 0 });
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let built = ShopifyConfig::builder().build().unwrap();
        let default = ShopifyConfig::default();

        assert_eq!(built.api_version(), default.api_version());
        assert_eq!(built.tries(), default.tries());
    }
}

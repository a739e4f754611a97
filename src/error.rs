//! Configuration error types.
//!
//! [`ConfigError`] is returned whenever a configuration value or a session
//! credential fails validation. Messages are written to be shown to the
//! developer wiring up the client.

use thiserror::Error;

/// Errors raised while validating configuration values.
///
/// # Example
///
/// ```rust
/// use shopify_custom_collections::{ConfigError, ShopDomain};
///
/// let result = ShopDomain::new("not a shop");
/// assert!(matches!(result, Err(ConfigError::InvalidShopDomain { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token was empty.
    #[error("Access token cannot be empty. Provide the Admin API access token for the shop.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' with a quarterly month (e.g., '2025-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// API host URL is invalid.
    #[error("Invalid host URL '{url}'. Provide a URL with scheme and host (e.g., 'http://localhost:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The configured number of request attempts was zero.
    #[error("Invalid tries value {tries}. At least one attempt is required.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_shop_domain_error_message() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_invalid_tries_error_message() {
        let message = ConfigError::InvalidTries { tries: 0 }.to_string();
        assert!(message.contains('0'));
        assert!(message.contains("At least one attempt"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}

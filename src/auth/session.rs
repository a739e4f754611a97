//! Shop session used to authenticate Admin API requests.

use crate::config::{AccessToken, ShopDomain};
use crate::error::ConfigError;

/// The shop a client talks to and the token it authenticates with.
///
/// Sessions are plain values; obtaining the access token (OAuth, custom
/// app credentials) happens outside this crate.
///
/// # Example
///
/// ```rust
/// use shopify_custom_collections::Session;
///
/// let session = Session::from_parts("my-store", "shpat_123").unwrap();
/// assert_eq!(session.shop.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The Admin API access token, sent as `X-Shopify-Access-Token`.
    pub access_token: AccessToken,
}

impl Session {
    /// Creates a session from validated parts.
    #[must_use]
    pub const fn new(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self { shop, access_token }
    }

    /// Validates a raw shop domain and token and builds a session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] or
    /// [`ConfigError::EmptyAccessToken`] when either part is invalid.
    pub fn from_parts(
        shop: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ShopDomain::new(shop)?,
            AccessToken::new(access_token)?,
        ))
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_normalizes_shop() {
        let session = Session::from_parts("My-Store", "token").unwrap();
        assert_eq!(session.shop.shop_name(), "my-store");
        assert_eq!(session.access_token.as_ref(), "token");
    }

    #[test]
    fn test_from_parts_rejects_invalid_values() {
        assert!(matches!(
            Session::from_parts("bad shop", "token"),
            Err(ConfigError::InvalidShopDomain { .. })
        ));
        assert_eq!(
            Session::from_parts("my-store", ""),
            Err(ConfigError::EmptyAccessToken)
        );
    }

    #[test]
    fn test_debug_output_hides_token() {
        let session = Session::from_parts("my-store", "shpat_secret").unwrap();
        let debug = format!("{session:?}");
        assert!(debug.contains("my-store.myshopify.com"));
        assert!(!debug.contains("shpat_secret"));
    }
}

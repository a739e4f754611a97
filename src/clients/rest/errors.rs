//! REST client error type.

use crate::clients::HttpError;
use thiserror::Error;

/// Errors raised by [`RestClient`](crate::clients::RestClient).
///
/// # Example
///
/// ```rust
/// use shopify_custom_collections::RestError;
///
/// let error = RestError::InvalidPath { path: "/.json".to_string() };
/// assert!(error.to_string().contains("Invalid REST API path"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path was empty after normalization.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The path as given by the caller.
        path: String,
    },

    /// The transport failed or Shopify returned an error status.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_message_includes_path() {
        let error = RestError::InvalidPath {
            path: "admin/".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: 'admin/'");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_http_error_is_transparent() {
        let error = RestError::from(HttpError::Response(HttpResponseError {
            code: 503,
            message: r#"{"errors":"Unavailable"}"#.to_string(),
            error_reference: None,
        }));
        assert_eq!(error.to_string(), r#"{"errors":"Unavailable"}"#);
        assert_eq!(error.status(), Some(503));
    }
}

//! Transport error types.
//!
//! - [`HttpResponseError`]: Shopify answered with a non-2xx status
//! - [`MaxHttpRetriesExceededError`]: every configured attempt hit 429 or 500
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`HttpError`]: the union of the above plus network and JSON failures

use thiserror::Error;

/// A non-2xx response.
///
/// `message` holds a compact JSON object with whichever of `errors`,
/// `error`, `error_description` and `error_reference` the response carried,
/// so callers can re-parse it.
///
/// # Example
///
/// ```rust
/// use shopify_custom_collections::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":"Not Found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// Serialized error body.
    pub message: String,
    /// The `X-Request-Id` of the failed response.
    pub error_reference: Option<String>,
}

/// Every attempt of a retried request failed with 429 or 500.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// Status code of the last response.
    pub code: u16,
    /// Number of attempts made.
    pub tries: u32,
    /// Serialized error body of the last response.
    pub message: String,
    /// The `X-Request-Id` of the last response.
    pub error_reference: Option<String>,
}

/// A request that failed validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The method that requires a body.
        method: String,
    },
}

/// Any failure raised by [`HttpClient`](crate::clients::HttpClient).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retries exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response whose body is not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) | Self::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"errors":"Throttled"}"#.to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains("Exceeded maximum retry count of 3"));
        assert!(message.contains("Throttled"));
    }

    #[test]
    fn test_invalid_request_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "put".to_string()
            }
            .to_string(),
            "Cannot use put without specifying data."
        );
    }

    #[test]
    fn test_status_reports_response_codes() {
        let error = HttpError::from(HttpResponseError {
            code: 422,
            message: String::new(),
            error_reference: None,
        });
        assert_eq!(error.status(), Some(422));

        let error = HttpError::from(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        assert_eq!(error.status(), None);
    }
}

//! Errors returned by resource operations.
//!
//! Status codes with a meaning for a single resource are lifted out of the
//! transport error:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - anything else: [`ResourceError::Http`], unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_custom_collections::rest::{ResourceError, RestResource};
//! use shopify_custom_collections::rest::resources::v2025_10::CustomCollection;
//!
//! match CustomCollection::find(&client, 841564295, None).await {
//!     Ok(collection) => println!("{:?}", collection.title),
//!     Err(ResourceError::NotFound { resource, id }) => println!("{resource} {id} is gone"),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => println!("{errors:?}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError, RestError};

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Shopify has no entity with this id (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Resource name, e.g. `CustomCollection`.
        resource: &'static str,
        /// The requested id, or `unknown` for list-level requests.
        id: String,
    },

    /// Shopify rejected the entity (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Messages per field. Unkeyed messages are stored under `base`.
        errors: HashMap<String, Vec<String>>,
        /// The `X-Request-Id` of the response.
        request_id: Option<String>,
    },

    /// The entity has no server-assigned id, so the operation has no target.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// Resource name.
        resource: &'static str,
        /// The attempted operation.
        operation: &'static str,
    },

    /// No entry in the path table can be built from the known ids.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// Resource name.
        resource: &'static str,
        /// The attempted operation.
        operation: &'static str,
    },

    /// An entity or parameter set could not be converted to or from JSON.
    #[error("JSON error for {resource}: {source}")]
    Json {
        /// Resource name.
        resource: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A successful response did not have the expected shape.
    #[error("Unexpected response for {resource}: {message}")]
    UnexpectedResponse {
        /// Resource name.
        resource: &'static str,
        /// What was missing or malformed.
        message: String,
        /// The `X-Request-Id` of the response.
        request_id: Option<String>,
    },

    /// Any other HTTP failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST client failure that is not an HTTP error.
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(e) => Self::Http(e),
            other => Self::Rest(other),
        }
    }
}

impl ResourceError {
    /// Maps a status code and error body to a resource error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_custom_collections::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     422,
    ///     &json!({"errors": {"title": ["can't be blank"]}}),
    ///     "CustomCollection",
    ///     None,
    ///     Some("req-1"),
    /// );
    /// assert!(matches!(error, ResourceError::ValidationFailed { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Converts a client error raised while operating on `resource`.
    ///
    /// 404 and 422 responses become [`NotFound`](Self::NotFound) and
    /// [`ValidationFailed`](Self::ValidationFailed), and an undecodable
    /// success body becomes [`Json`](Self::Json). Every other error is
    /// passed through.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) if matches!(e.code, 404 | 422) => {
                let body = serde_json::from_str(&e.message).unwrap_or(Value::Null);
                Self::from_http_response(e.code, &body, resource, id, e.error_reference.as_deref())
            }
            RestError::Http(HttpError::Json(source)) => Self::Json { resource, source },
            other => other.into(),
        }
    }

    /// Returns the `X-Request-Id` of the failed response, when known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. }
            | Self::UnexpectedResponse { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Flattens Shopify's `errors` field into messages per field.
///
/// Accepts `{"errors": {"field": ["msg"]}}`, `{"errors": ["msg"]}` and
/// `{"errors": "msg"}`.
fn parse_validation_errors(body: &Value) -> HashMap<String, Vec<String>> {
    let strings = |values: &[Value]| -> Vec<String> {
        values
            .iter()
            .filter_map(|v| v.as_str().map(ToString::to_string))
            .collect()
    };

    let mut result = HashMap::new();
    match body.get("errors") {
        Some(Value::Object(map)) => {
            for (field, messages) in map {
                let messages = match messages {
                    Value::Array(arr) => strings(arr),
                    Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                result.insert(field.clone(), messages);
            }
        }
        Some(Value::Array(arr)) => {
            let messages = strings(arr);
            if !messages.is_empty() {
                result.insert("base".to_string(), messages);
            }
        }
        Some(Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }
    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

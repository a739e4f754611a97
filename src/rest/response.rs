//! Response wrapper for resource reads.
//!
//! [`ResourceResponse<T>`] holds the unwrapped envelope payload together
//! with the pagination cursors, rate limit and request id of the response.
//! It derefs to `T`:
//!
//! ```rust,ignore
//! let collections = CustomCollection::all(&client, None).await?;
//! for collection in collections.iter() {
//!     println!("{:?}", collection.title);
//! }
//! if let Some(cursor) = collections.next_page_info() {
//!     // pass `cursor` back as `page_info` to fetch the next page
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};
use crate::rest::ResourceError;

/// Unwrapped payload plus response metadata.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<PaginationInfo>,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Wraps `data` with explicit metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Takes ownership of the payload.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Borrows the payload.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if Shopify reported a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_info().is_some()
    }

    /// Returns `true` if Shopify reported a previous page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.prev_page_info().is_some()
    }

    /// Cursor of the next page.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_page_info.as_deref())
    }

    /// Cursor of the previous page.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.prev_page_info.as_deref())
    }

    /// Both cursors, when the response was paginated.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Rate limit state after this request.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// The `X-Request-Id` of the response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Transforms the payload, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Unwraps the envelope `key` of `response` and deserializes it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedResponse`] when the key is absent
    /// and [`ResourceError::Json`] when its value does not deserialize.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
        key: &str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let HttpResponse {
            mut body,
            pagination,
            api_call_limit,
            ..
        } = response;

        let value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::UnexpectedResponse {
                resource,
                message: format!("missing key '{key}' in response body"),
                request_id: request_id.clone(),
            })?;

        let data: T =
            serde_json::from_value(value).map_err(|source| ResourceError::Json { resource, source })?;

        Ok(Self {
            data,
            pagination: pagination.is_paginated().then_some(pagination),
            rate_limit: api_call_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
        title: String,
    }

    fn http_response(body: serde_json::Value, headers: &[(&str, &str)]) -> HttpResponse {
        let headers: HashMap<String, Vec<String>> = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect();
        HttpResponse::new(200, headers, body)
    }

    #[test]
    fn test_unwraps_single_envelope() {
        let response = http_response(
            json!({"item": {"id": 1, "title": "Summer"}}),
            &[("x-request-id", "req-1")],
        );
        let parsed: ResourceResponse<Item> =
            ResourceResponse::from_http_response(response, "Item", "item").unwrap();

        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.title, "Summer");
        assert_eq!(parsed.request_id(), Some("req-1"));
        assert!(parsed.pagination().is_none());
    }

    #[test]
    fn test_unwraps_list_envelope_in_order_with_pagination() {
        let response = http_response(
            json!({"items": [{"id": 3, "title": "c"}, {"id": 1, "title": "a"}]}),
            &[
                ("link", "<https://s.myshopify.com/x.json?page_info=abc>; rel=\"next\""),
                ("x-shopify-shop-api-call-limit", "1/40"),
            ],
        );
        let parsed: ResourceResponse<Vec<Item>> =
            ResourceResponse::from_http_response(response, "Item", "items").unwrap();

        let ids: Vec<u64> = parsed.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(parsed.has_next_page());
        assert!(!parsed.has_prev_page());
        assert_eq!(parsed.next_page_info(), Some("abc"));
        assert_eq!(parsed.rate_limit().unwrap().bucket_size, 40);
    }

    #[test]
    fn test_missing_key_is_unexpected_response() {
        let response = http_response(json!({"other": {}}), &[("x-request-id", "req-2")]);
        let error =
            ResourceResponse::<Item>::from_http_response(response, "Item", "item").unwrap_err();

        assert!(matches!(error, ResourceError::UnexpectedResponse { resource: "Item", .. }));
        assert_eq!(error.request_id(), Some("req-2"));
    }

    #[test]
    fn test_malformed_payload_is_json_error() {
        let response = http_response(json!({"item": {"id": "not a number"}}), &[]);
        let error =
            ResourceResponse::<Item>::from_http_response(response, "Item", "item").unwrap_err();

        assert!(matches!(error, ResourceError::Json { resource: "Item", .. }));
    }

    #[test]
    fn test_map_keeps_metadata() {
        let response = ResourceResponse::new(
            vec![1, 2, 3],
            None,
            Some(ApiCallLimit {
                request_count: 1,
                bucket_size: 40,
            }),
            Some("req".to_string()),
        );
        let mapped = response.map(|v| v.len());

        assert_eq!(*mapped, 3);
        assert_eq!(mapped.request_id(), Some("req"));
        assert!(mapped.rate_limit().is_some());
    }
}

//! Parsed HTTP responses and the Shopify-specific headers they carry.

use std::collections::HashMap;

/// Rate limit state from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// # Example
///
/// ```rust
/// use shopify_custom_collections::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("32/40").unwrap();
/// assert_eq!(limit.request_count, 32);
/// assert_eq!(limit.bucket_size, 40);
/// assert_eq!(limit.remaining(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently counted against the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses an `X/Y` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Cursor pagination state from the `Link` header.
///
/// Values are percent-decoded, ready to be passed back as the `page_info`
/// list parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Cursor of the previous page.
    pub prev_page_info: Option<String>,
    /// Cursor of the next page.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses a header of the form `<url>; rel="next", <url>; rel="previous"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_custom_collections::PaginationInfo;
    ///
    /// let info = PaginationInfo::parse_link_header(
    ///     r#"<https://s.myshopify.com/admin/api/2025-10/custom_collections.json?limit=2&page_info=abc%3D>; rel="next""#,
    /// );
    /// assert_eq!(info.next_page_info.as_deref(), Some("abc="));
    /// assert!(info.prev_page_info.is_none());
    /// ```
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts
                .next()
                .map(|u| u.trim_start_matches('<').trim_end_matches('>'))
            else {
                continue;
            };
            let rel = parts.find_map(|p| p.strip_prefix("rel=").map(|r| r.trim_matches('"')));

            let Some(page_info) = Self::extract_page_info(url) else {
                continue;
            };
            match rel {
                Some("next") => result.next_page_info = Some(page_info),
                Some("previous") => result.prev_page_info = Some(page_info),
                _ => {}
            }
        }

        result
    }

    /// Returns `true` if either cursor is present.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.prev_page_info.is_some() || self.next_page_info.is_some()
    }

    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "page_info")
            .map(|(_, value)| {
                urlencoding::decode(value).map_or_else(|_| value.to_string(), |v| v.into_owned())
            })
    }
}

/// A response from the Admin API.
///
/// Header names are lowercased. The body is parsed as JSON; an empty body
/// becomes `{}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// Parsed JSON body.
    pub body: serde_json::Value,
    /// Pagination cursors.
    pub pagination: PaginationInfo,
    /// Rate limit state.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds to wait before retrying, from `Retry-After`.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Builds a response and parses `Link`, `X-Shopify-Shop-Api-Call-Limit`
    /// and `Retry-After`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let pagination = first("link")
            .map(|link| PaginationInfo::parse_link_header(link))
            .unwrap_or_default();
        let api_call_limit = first("x-shopify-shop-api-call-limit")
            .and_then(|value| ApiCallLimit::parse(value));
        let retry_request_after = first("retry-after").and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_api_call_limit_parse() {
        assert_eq!(
            ApiCallLimit::parse("40/80"),
            Some(ApiCallLimit {
                request_count: 40,
                bucket_size: 80
            })
        );
        assert!(ApiCallLimit::parse("40").is_none());
        assert!(ApiCallLimit::parse("a/b").is_none());
        assert_eq!(ApiCallLimit::parse("90/80").unwrap().remaining(), 0);
    }

    #[test]
    fn test_link_header_with_both_directions() {
        let header = concat!(
            "<https://s.myshopify.com/admin/api/2025-10/custom_collections.json?page_info=prev123&limit=5>; rel=\"previous\", ",
            "<https://s.myshopify.com/admin/api/2025-10/custom_collections.json?limit=5&page_info=next456>; rel=\"next\""
        );
        let info = PaginationInfo::parse_link_header(header);

        assert_eq!(info.prev_page_info.as_deref(), Some("prev123"));
        assert_eq!(info.next_page_info.as_deref(), Some("next456"));
        assert!(info.is_paginated());
    }

    #[test]
    fn test_link_header_without_page_info_is_ignored() {
        let info = PaginationInfo::parse_link_header(
            "<https://s.myshopify.com/admin/api/2025-10/custom_collections.json?limit=5>; rel=\"next\"",
        );
        assert_eq!(info, PaginationInfo::default());
        assert!(!info.is_paginated());
    }

    #[test]
    fn test_response_parses_shopify_headers() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("x-shopify-shop-api-call-limit", "3/40"),
                ("x-request-id", "req-1"),
                ("retry-after", "2.5"),
                (
                    "link",
                    "<https://s.myshopify.com/x.json?page_info=n1>; rel=\"next\"",
                ),
            ]),
            json!({}),
        );

        assert!(response.is_ok());
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.api_call_limit.unwrap().request_count, 3);
        assert_eq!(response.retry_request_after, Some(2.5));
        assert_eq!(response.pagination.next_page_info.as_deref(), Some("n1"));
        assert!(response.deprecation_reason().is_none());
    }

    #[test]
    fn test_response_status_ranges() {
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_deprecation_reason() {
        let response = HttpResponse::new(
            200,
            headers(&[(
                "x-shopify-api-deprecated-reason",
                "https://shopify.dev/changelog",
            )]),
            json!({}),
        );
        assert_eq!(
            response.deprecation_reason(),
            Some("https://shopify.dev/changelog")
        );
    }
}

//! Integration tests for the HTTP transport.
//!
//! These tests run the full path from session and config to a request
//! against a mock server: headers, query strings, retries and response
//! header parsing.

use serde_json::json;
use shopify_custom_collections::{
    HostUrl, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError, RestClient,
    Session, ShopifyConfig,
};
use wiremock::matchers::{body_json, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test session with the given shop domain.
fn create_test_session(shop: &str, access_token: &str) -> Session {
    Session::from_parts(shop, access_token).unwrap()
}

fn client_for(server: &MockServer, tries: u32) -> HttpClient {
    let config = ShopifyConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("CollectionsSync/2.1")
        .tries(tries)
        .build()
        .unwrap();
    HttpClient::new(
        "/admin/api/2025-10",
        &create_test_session("test-shop", "test-token"),
        &config,
    )
    .unwrap()
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_request_sends_auth_and_user_agent_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .and(header_regex(
            "User-Agent",
            r"^CollectionsSync/2\.1 \| Shopify Custom Collections v",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"custom_collections": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let request = HttpRequest::builder(HttpMethod::Get, "custom_collections.json")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_request_with_query_body_and_extra_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/custom_collections.json"))
        .and(query_param("fields", "id"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-Trace", "abc"))
        .and(body_json(json!({"custom_collection": {"title": "Sale"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "custom_collection": {"id": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let request = HttpRequest::builder(HttpMethod::Post, "custom_collections.json")
        .body(json!({"custom_collection": {"title": "Sale"}}))
        .query_param("fields", "id")
        .header("X-Trace", "abc")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["custom_collection"]["id"], 1);
}

#[test]
fn test_put_without_body_is_invalid() {
    let error = HttpRequest::builder(HttpMethod::Put, "custom_collections/1.json")
        .build()
        .unwrap_err();

    assert!(matches!(
        error,
        InvalidHttpRequestError::MissingBody { ref method } if method == "put"
    ));
}

// ============================================================================
// Response Parsing Tests
// ============================================================================

#[tokio::test]
async fn test_response_parses_shopify_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-123")
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "39/40")
                .insert_header(
                    "X-Shopify-API-Deprecated-Reason",
                    "https://shopify.dev/api/usage/versioning",
                )
                .insert_header(
                    "Link",
                    "<https://test-shop.myshopify.com/admin/api/2025-10/custom_collections.json?page_info=prev%3D>; rel=\"previous\"",
                )
                .set_body_json(json!({"custom_collections": []})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let request = HttpRequest::builder(HttpMethod::Get, "custom_collections.json")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.request_id(), Some("req-123"));
    let limit = response.api_call_limit.unwrap();
    assert_eq!(limit.remaining(), 1);
    assert_eq!(
        response.deprecation_reason(),
        Some("https://shopify.dev/api/usage/versioning")
    );
    assert_eq!(response.pagination.prev_page_info.as_deref(), Some("prev="));
    assert!(response.pagination.next_page_info.is_none());
}

#[tokio::test]
async fn test_empty_body_parses_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/custom_collections/1.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let request = HttpRequest::builder(HttpMethod::Delete, "custom_collections/1.json")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.body, json!({}));
}

// ============================================================================
// Retry Tests
// ============================================================================

#[tokio::test]
async fn test_throttled_request_is_retried_after_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections/count.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let request = HttpRequest::builder(HttpMethod::Get, "custom_collections/count.json")
        .tries(3)
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.body["count"], 3);
}

#[tokio::test]
async fn test_oversized_retry_after_falls_back_to_default_wait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections/count.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "1e300")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ShopifyConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .tries(2)
        .build()
        .unwrap();
    let client = RestClient::new(&create_test_session("test-shop", "test-token"), &config).unwrap();
    let count = client.custom_collections().count(None).await.unwrap();

    assert_eq!(count, 4);
}

#[tokio::test]
async fn test_retries_exhausted_reports_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .insert_header("X-Request-Id", "req-429")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let request = HttpRequest::builder(HttpMethod::Get, "custom_collections.json")
        .tries(2)
        .build()
        .unwrap();
    let error = client.request(request).await.unwrap_err();

    match error {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 2);
            assert_eq!(e.error_reference.as_deref(), Some("req-429"));
        }
        other => panic!("expected MaxRetries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_errors_are_never_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/custom_collections/9.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 5);
    let request = HttpRequest::builder(HttpMethod::Get, "custom_collections/9.json")
        .tries(5)
        .build()
        .unwrap();
    let error = client.request(request).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
}

// ============================================================================
// Multi-tenant Tests
// ============================================================================

#[test]
fn test_clients_for_different_shops_are_independent() {
    let config = ShopifyConfig::default();
    let one = HttpClient::new(
        "/admin/api/2025-10",
        &create_test_session("shop-one", "token-1"),
        &config,
    )
    .unwrap();
    let two = HttpClient::new(
        "/admin/api/2025-07",
        &create_test_session("shop-two.myshopify.com", "token-2"),
        &config,
    )
    .unwrap();

    assert_eq!(one.base_uri(), "https://shop-one.myshopify.com");
    assert_eq!(two.base_uri(), "https://shop-two.myshopify.com");
    assert_eq!(two.base_path(), "/admin/api/2025-07");
    assert_eq!(
        one.default_headers().get("X-Shopify-Access-Token"),
        Some(&"token-1".to_string())
    );
}

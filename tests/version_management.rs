//! Integration tests for API version management.

use shopify_custom_collections::{ApiVersion, ConfigError, RestClient, Session, ShopifyConfig};

// =============================================================================
// Version Lifecycle Tests
// =============================================================================

#[test]
fn test_minimum_supported_version() {
    let minimum = ApiVersion::minimum_supported();

    assert!(!minimum.is_deprecated());
    assert!(ApiVersion::latest() >= minimum);
}

#[test]
fn test_deprecated_versions() {
    // 2024 releases are past the support window
    assert!(ApiVersion::V2024_01.is_deprecated());
    assert!(ApiVersion::V2024_04.is_deprecated());
    assert!(ApiVersion::V2024_07.is_deprecated());
    assert!(ApiVersion::V2024_10.is_deprecated());

    assert!(!ApiVersion::V2025_01.is_deprecated());
    assert!(!ApiVersion::V2025_10.is_deprecated());

    assert!(!ApiVersion::Unstable.is_deprecated());
    assert!(!"2026-04".parse::<ApiVersion>().unwrap().is_deprecated());
}

#[test]
fn test_version_ordering() {
    assert!(ApiVersion::V2024_01 < ApiVersion::V2024_04);
    assert!(ApiVersion::V2024_10 < ApiVersion::V2025_01);
    assert!(ApiVersion::V2025_07 < ApiVersion::V2025_10);
    assert!(ApiVersion::V2025_10 < "2026-01".parse().unwrap());
    assert!("2099-10".parse::<ApiVersion>().unwrap() < ApiVersion::Unstable);

    let mut versions = vec![
        ApiVersion::Unstable,
        ApiVersion::V2025_04,
        ApiVersion::V2024_07,
        ApiVersion::V2025_10,
    ];
    versions.sort();
    assert_eq!(
        versions,
        vec![
            ApiVersion::V2024_07,
            ApiVersion::V2025_04,
            ApiVersion::V2025_10,
            ApiVersion::Unstable,
        ]
    );
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_version_round_trips_through_display() {
    for text in ["2024-01", "2025-04", "2025-10", "unstable"] {
        let version: ApiVersion = text.parse().unwrap();
        assert_eq!(version.to_string(), text);
    }
}

#[test]
fn test_invalid_versions_are_rejected() {
    for text in ["", "2025", "2025-02", "2025-13", "25-01", "2025-1", "latest"] {
        let result = text.parse::<ApiVersion>();
        assert!(
            matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
            "{text} should be rejected"
        );
    }
}

// =============================================================================
// Client Integration Tests
// =============================================================================

#[test]
fn test_config_version_flows_into_client_base_path() {
    let session = Session::from_parts("test-shop", "test-token").unwrap();
    let config = ShopifyConfig::builder()
        .api_version("2025-07".parse().unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&session, &config).unwrap();

    assert_eq!(client.http_client().base_path(), "/admin/api/2025-07");
}

#[test]
fn test_deprecated_version_is_still_usable() {
    let session = Session::from_parts("test-shop", "test-token").unwrap();
    let config = ShopifyConfig::builder()
        .api_version(ApiVersion::V2024_04)
        .build()
        .unwrap();
    let client = RestClient::new(&session, &config).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::V2024_04);
    assert_eq!(client.http_client().base_path(), "/admin/api/2024-04");
}

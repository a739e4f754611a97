//! # Shopify custom collections
//!
//! A typed binding for the custom collection resource of the Shopify Admin
//! REST API, including the metafields attached to each collection.
//!
//! ## Overview
//!
//! - Validated configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - A [`Session`] holding the shop domain and access token
//! - An async HTTP transport with retries and rate limit parsing ([`HttpClient`])
//! - A REST client that resolves paths against the versioned admin API ([`RestClient`])
//! - [`CustomCollection`](rest::resources::v2025_10::CustomCollection) with
//!   list, count, get, create, update and delete, plus metafield operations
//!
//! Every operation is one request. Nothing is cached and pagination cursors
//! are returned to the caller rather than followed.
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_custom_collections::{ApiVersion, Session, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_10)
//!     .tries(3)
//!     .build()
//!     .unwrap();
//! let session = Session::from_parts("my-store", "shpat_example").unwrap();
//!
//! assert_eq!(session.shop.as_ref(), "my-store.myshopify.com");
//! assert_eq!(config.tries(), 3);
//! ```
//!
//! ## Working with collections
//!
//! ```rust,ignore
//! use shopify_custom_collections::RestClient;
//! use shopify_custom_collections::rest::resources::v2025_10::{CustomCollection, Metafield};
//!
//! let client = RestClient::new(&session, &config)?;
//! let collections = client.custom_collections();
//!
//! let created = collections
//!     .create(&CustomCollection {
//!         title: Some("Summer".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let id = created.id.unwrap_or_default();
//! collections
//!     .create_metafield(id, &Metafield {
//!         namespace: Some("custom".to_string()),
//!         key: Some("season".to_string()),
//!         value: Some("summer".to_string()),
//!         metafield_type: Some("single_line_text_field".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! collections.delete(id).await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (deprecation warnings, retries and
//! resource operations) and leaves subscriber setup to the application.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use auth::Session;
pub use config::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    PaginationInfo,
};
pub use clients::{RestClient, RestError};

pub use rest::{
    HasMetafields, MetafieldBinding, ResourceBinding, ResourceError, ResourceResponse,
    RestResource,
};

//! `CustomCollection` resource.
//!
//! Custom collections are curated by hand: products join them through
//! collects rather than through rules. The resource supports the six
//! Admin REST operations plus metafields owned by the collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_custom_collections::rest::resources::v2025_10::{
//!     CustomCollection, CustomCollectionListParams, SortOrder,
//! };
//!
//! let collections = client.custom_collections();
//!
//! let page = collections
//!     .list(Some(CustomCollectionListParams {
//!         ids: Some(vec![841_564_295, 395_646_240]),
//!         ..Default::default()
//!     }))
//!     .await?;
//!
//! let created = collections
//!     .create(&CustomCollection {
//!         title: Some("Macbooks".to_string()),
//!         sort_order: Some(SortOrder::AlphaAsc),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let notes = collections.list_metafields(created.id.unwrap_or_default(), None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{HasMetafields, ResourceBinding, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::{CollectionImage, MetafieldOwner, SortOrder};
use super::Metafield;

/// A manually curated collection of products.
///
/// `id`, `updated_at` and `admin_graphql_api_id` are assigned by Shopify;
/// only `admin_graphql_api_id` is never sent back. `metafields` can be sent on create to attach metafields in the same
/// request; the key is left out of the body when the list is empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// URL-safe name. Generated from the title when not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description, in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Suffix of the Liquid template used for the collection page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CollectionImage>,

    /// Whether the collection is visible. Only honored on write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// `web` or `global`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// Sent when set; Shopify ignores it on write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metafields: Vec<Metafield>,
}

impl RestResource for CustomCollection {
    type Id = u64;
    type FindParams = CustomCollectionFindParams;
    type AllParams = CustomCollectionListParams;
    type CountParams = CustomCollectionCountParams;

    const NAME: &'static str = "CustomCollection";
    const KEY: &'static str = "custom_collection";
    const PLURAL: &'static str = "custom_collections";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "admin/custom_collections",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "admin/custom_collections/count",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "admin/custom_collections/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "admin/custom_collections",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "admin/custom_collections/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "admin/custom_collections/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.filter(|id| *id != 0)
    }
}

impl HasMetafields for CustomCollection {
    const METAFIELD_OWNER: MetafieldOwner = MetafieldOwner::Collection;
}

impl RestClient {
    /// Custom collection operations on this client.
    #[must_use]
    pub const fn custom_collections(&self) -> ResourceBinding<'_, CustomCollection> {
        ResourceBinding::new(self)
    }
}

/// Publication filter for listing and counting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PublishedStatus {
    Published,
    Unpublished,
    #[default]
    Any,
}

/// Query parameters for fetching one custom collection.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomCollectionFindParams {
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query parameters for listing custom collections.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomCollectionListParams {
    /// Restrict to these ids. Sent comma-joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Only collections containing this product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<PublishedStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Cursor from a previous response's `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Query parameters for counting custom collections.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CustomCollectionCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<PublishedStatus>,
}

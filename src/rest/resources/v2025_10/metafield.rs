//! `Metafield` resource.
//!
//! Metafields hang off an owner resource. The path table carries both the
//! owner-scoped paths (`admin/{owner}/{owner_id}/metafields...`) and the
//! shop-level paths (`admin/metafields...`); path selection picks the
//! owner-scoped variant whenever `owner` and `owner_id` are supplied.
//!
//! Going through [`RestResource`] directly addresses shop metafields. For
//! metafields of a specific owner use [`MetafieldBinding`](crate::rest::MetafieldBinding).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_custom_collections::rest::resources::v2025_10::Metafield;
//!
//! let metafield = Metafield {
//!     namespace: Some("inventory".to_string()),
//!     key: Some("warehouse".to_string()),
//!     value: Some("A-15".to_string()),
//!     metafield_type: Some("single_line_text_field".to_string()),
//!     ..Default::default()
//! };
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

/// A key/value annotation on a Shopify resource.
///
/// `namespace` and `key` identify the metafield within its owner. The
/// `metafield_type` field is sent as `type` and tells Shopify how to read
/// `value` (`single_line_text_field`, `number_integer`, `json`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// Server-assigned id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Value as text, in the format implied by `metafield_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Sent as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Id of the owning resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// Owner kind as reported by Shopify, e.g. `collection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    type Id = u64;
    type FindParams = MetafieldFindParams;
    type AllParams = MetafieldListParams;
    type CountParams = MetafieldCountParams;

    const NAME: &'static str = "Metafield";
    const KEY: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    const PATHS: &'static [ResourcePath] = &[
        // Owner-scoped
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["owner", "owner_id"],
            "admin/{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["owner", "owner_id"],
            "admin/{owner}/{owner_id}/metafields/count",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["owner", "owner_id", "id"],
            "admin/{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["owner", "owner_id"],
            "admin/{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["owner", "owner_id", "id"],
            "admin/{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["owner", "owner_id", "id"],
            "admin/{owner}/{owner_id}/metafields/{id}",
        ),
        // Shop
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "admin/metafields"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "admin/metafields/count",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "admin/metafields/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "admin/metafields"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "admin/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "admin/metafields/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.filter(|id| *id != 0)
    }
}

/// Query parameters for fetching one metafield.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetafieldFindParams {
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query parameters for listing metafields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetafieldListParams {
    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Cursor from a previous response's `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Query parameters for counting metafields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetafieldCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

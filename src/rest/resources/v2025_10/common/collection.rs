//! Types embedded in collection payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The image shown for a collection.
///
/// Set `src` to a public URL (or `attachment` to base64 data) when creating
/// or replacing an image; Shopify fills in the dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionImage {
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Base64-encoded image data for uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,

    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// How products are ordered within a collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Alphabetically, A to Z.
    AlphaAsc,
    /// Alphabetically, Z to A.
    AlphaDesc,
    /// By number of sales.
    #[default]
    BestSelling,
    /// By creation date, oldest first.
    Created,
    /// By creation date, newest first.
    CreatedDesc,
    /// In the order set by the merchant.
    Manual,
    /// By price, lowest first.
    PriceAsc,
    /// By price, highest first.
    PriceDesc,
}

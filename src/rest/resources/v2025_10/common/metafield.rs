//! Owner resources for scoped metafield paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of resource a metafield is attached to.
///
/// Each owner maps to the path segment its metafields live under, e.g.
/// `admin/collections/{id}/metafields`. Shop metafields have no owner
/// segment and live at `admin/metafields`.
///
/// # Example
///
/// ```rust
/// use shopify_custom_collections::rest::resources::v2025_10::common::MetafieldOwner;
///
/// assert_eq!(MetafieldOwner::Collection.path_segment(), Some("collections"));
/// assert_eq!(MetafieldOwner::Shop.path_segment(), None);
/// assert_eq!(MetafieldOwner::Collection.to_string(), "collection");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldOwner {
    /// A product.
    Product,
    /// A product variant.
    Variant,
    /// A customer.
    Customer,
    /// An order.
    Order,
    /// A custom or smart collection.
    Collection,
    /// An online store page.
    Page,
    /// A blog.
    Blog,
    /// A blog article.
    Article,
    /// The shop itself.
    Shop,
}

impl MetafieldOwner {
    /// Plural path segment of the owner, `None` for the shop.
    #[must_use]
    pub const fn path_segment(&self) -> Option<&'static str> {
        match self {
            Self::Product => Some("products"),
            Self::Variant => Some("variants"),
            Self::Customer => Some("customers"),
            Self::Order => Some("orders"),
            Self::Collection => Some("collections"),
            Self::Page => Some("pages"),
            Self::Blog => Some("blogs"),
            Self::Article => Some("articles"),
            Self::Shop => None,
        }
    }

    /// The `owner_resource` value Shopify reports on metafields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Variant => "variant",
            Self::Customer => "customer",
            Self::Order => "order",
            Self::Collection => "collection",
            Self::Page => "page",
            Self::Blog => "blog",
            Self::Article => "article",
            Self::Shop => "shop",
        }
    }
}

impl fmt::Display for MetafieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments() {
        assert_eq!(MetafieldOwner::Product.path_segment(), Some("products"));
        assert_eq!(MetafieldOwner::Variant.path_segment(), Some("variants"));
        assert_eq!(MetafieldOwner::Collection.path_segment(), Some("collections"));
        assert_eq!(MetafieldOwner::Article.path_segment(), Some("articles"));
        assert_eq!(MetafieldOwner::Shop.path_segment(), None);
    }

    #[test]
    fn test_serde_matches_display() {
        for owner in [
            MetafieldOwner::Product,
            MetafieldOwner::Collection,
            MetafieldOwner::Shop,
        ] {
            let json = serde_json::to_value(owner).unwrap();
            assert_eq!(json, serde_json::json!(owner.to_string()));
        }
    }
}

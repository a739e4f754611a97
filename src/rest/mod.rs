//! Typed REST resources.
//!
//! - [`RestResource`]: the six Admin REST operations, implemented once for
//!   any resource that supplies a path table and envelope keys
//! - [`ResourceBinding`]: a resource bound to one [`RestClient`](crate::RestClient)
//! - [`MetafieldBinding`] and [`HasMetafields`]: metafields scoped to an owner
//! - [`ResourceResponse`]: response data plus pagination and rate limit info
//! - [`ResourcePath`] and [`ResourceOperation`]: path tables
//! - [`ResourceError`]: resource-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_custom_collections::{RestClient, Session, ShopifyConfig};
//! use shopify_custom_collections::rest::RestResource;
//! use shopify_custom_collections::rest::resources::v2025_10::CustomCollection;
//!
//! let session = Session::from_parts("my-store", "shpat_...")?;
//! let client = RestClient::new(&session, &ShopifyConfig::default())?;
//!
//! // Through the handle
//! let collection = client.custom_collections().get(841_564_295, None).await?;
//! println!("{}", collection.title.as_deref().unwrap_or_default());
//!
//! // Or through the trait
//! let total = CustomCollection::count(&client, None).await?;
//!
//! // Cursor pagination is left to the caller
//! let page = client.custom_collections().list(None).await?;
//! if let Some(cursor) = page.next_page_info() {
//!     // pass `cursor` back as `page_info`
//! }
//! ```

mod binding;
mod errors;
mod metafields;
mod path;
mod resource;
mod response;

pub mod resources;

pub use binding::ResourceBinding;
pub use errors::ResourceError;
pub use metafields::{HasMetafields, MetafieldBinding};
pub use path::{build_path, get_path, resolve_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;

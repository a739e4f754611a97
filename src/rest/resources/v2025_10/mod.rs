//! Resources for API version 2025-10.
//!
//! - [`CustomCollection`] with [`CustomCollectionListParams`],
//!   [`CustomCollectionCountParams`] and [`CustomCollectionFindParams`]
//! - [`Metafield`] with [`MetafieldListParams`], [`MetafieldCountParams`]
//!   and [`MetafieldFindParams`]
//!
//! Embedded and shared types live in [`common`].

pub mod common;

mod custom_collection;
mod metafield;

pub use common::{CollectionImage, MetafieldOwner, SortOrder};
pub use custom_collection::{
    CustomCollection, CustomCollectionCountParams, CustomCollectionFindParams,
    CustomCollectionListParams, PublishedStatus,
};
pub use metafield::{Metafield, MetafieldCountParams, MetafieldFindParams, MetafieldListParams};

//! Types shared between resources.

mod collection;
mod metafield;

pub use collection::{CollectionImage, SortOrder};
pub use metafield::MetafieldOwner;

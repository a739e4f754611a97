//! Versioned resource definitions.
//!
//! Each submodule holds the entity structs, params structs and path tables
//! for one API version. The latest version is re-exported here.

pub mod v2025_10;

pub use v2025_10::*;

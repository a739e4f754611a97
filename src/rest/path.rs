//! Path tables for REST resources.
//!
//! A resource declares one [`ResourcePath`] per operation and id shape.
//! [`get_path`] picks the most specific template whose ids are all known,
//! and [`build_path`] fills in the placeholders.
//!
//! # Example
//!
//! ```rust
//! use shopify_custom_collections::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use shopify_custom_collections::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "admin/custom_collections/{id}"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "admin/custom_collections"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
//! let ids = HashMap::from([("id", 42)]);
//! assert_eq!(build_path(path.template, &ids), "admin/custom_collections/42");
//! ```

use crate::clients::HttpMethod;
use crate::rest::ResourceError;
use std::collections::HashMap;
use std::fmt::Display;

/// The operations a resource binding performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// GET one entity by id.
    Find,
    /// GET a list.
    All,
    /// POST a new entity.
    Create,
    /// PUT an existing entity.
    Update,
    /// DELETE an entity.
    Delete,
    /// GET the number of entities.
    Count,
}

impl ResourceOperation {
    /// The HTTP method Shopify uses for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::Count => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Lowercase operation name, used in errors and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

impl std::fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a resource's path table.
///
/// Templates use `{name}` placeholders, one for each entry of `ids`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// HTTP method of the request.
    pub http_method: HttpMethod,
    /// Operation served by this path.
    pub operation: ResourceOperation,
    /// Placeholder names that must be known to use this path.
    pub ids: &'static [&'static str],
    /// Path template, without the `.json` suffix.
    pub template: &'static str,
}

impl ResourcePath {
    /// Declares a path. `const` so tables can be `static`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Number of placeholders the template needs.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if every placeholder is in `available_ids`.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Picks the path for `operation` that uses the most of `available_ids`.
///
/// Returns `None` when no path for the operation can be satisfied.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation && p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces each `{name}` in `template` with its value from `ids`.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    ids.iter().fold(template.to_string(), |path, (key, value)| {
        path.replace(&format!("{{{key}}}"), &value.to_string())
    })
}

/// Selects and fills the path for `operation` in one step.
///
/// # Errors
///
/// Returns [`ResourceError::PathResolutionFailed`] when no path of the
/// table can be built from `ids`.
#[allow(clippy::implicit_hasher)]
pub fn resolve_path(
    paths: &[ResourcePath],
    resource: &'static str,
    operation: ResourceOperation,
    ids: &HashMap<&str, String>,
) -> Result<String, ResourceError> {
    let available: Vec<&str> = ids.keys().copied().collect();
    get_path(paths, operation, &available)
        .map(|path| build_path(path.template, ids))
        .ok_or(ResourceError::PathResolutionFailed {
            resource,
            operation: operation.as_str(),
        })
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

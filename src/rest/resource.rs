//! The generic resource binding.
//!
//! [`RestResource`] implements the six Admin REST operations once, driven
//! by a handful of associated items:
//!
//! - `NAME`: resource name used in errors and logs
//! - `KEY` / `PLURAL`: envelope keys for one entity and for a list
//! - `PATHS`: the path table
//! - `FindParams` / `AllParams` / `CountParams`: typed query parameters
//!
//! # Implementing a resource
//!
//! ```rust,ignore
//! use shopify_custom_collections::rest::{ResourceOperation, ResourcePath, RestResource};
//! use shopify_custom_collections::HttpMethod;
//!
//! impl RestResource for SmartCollection {
//!     type Id = u64;
//!     type FindParams = SmartCollectionFindParams;
//!     type AllParams = SmartCollectionListParams;
//!     type CountParams = SmartCollectionCountParams;
//!
//!     const NAME: &'static str = "SmartCollection";
//!     const KEY: &'static str = "smart_collection";
//!     const PLURAL: &'static str = "smart_collections";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "admin/smart_collections"),
//!         // ...
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id.filter(|id| *id != 0)
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{resolve_path, ResourceError, ResourceOperation, ResourcePath, ResourceResponse};

/// A REST resource with list, count, find, create, update and delete.
///
/// Every operation is a single request. Failures keep the transport error
/// unless the status is 404 ([`ResourceError::NotFound`]) or 422
/// ([`ResourceError::ValidationFailed`]).
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Identifier type.
    type Id: Display + Clone + Send + Sync;

    /// Query parameters for [`find`](Self::find).
    type FindParams: Serialize + Default + Send + Sync;

    /// Query parameters for [`all`](Self::all).
    type AllParams: Serialize + Default + Send + Sync;

    /// Query parameters for [`count`](Self::count).
    type CountParams: Serialize + Default + Send + Sync;

    /// Resource name, e.g. `CustomCollection`.
    const NAME: &'static str;

    /// Envelope key of a single entity, e.g. `custom_collection`.
    const KEY: &'static str;

    /// Envelope key of a list, e.g. `custom_collections`.
    const PLURAL: &'static str;

    /// Path table.
    const PATHS: &'static [ResourcePath];

    /// Returns the server-assigned id, or `None` for an unsaved entity.
    fn get_id(&self) -> Option<Self::Id>;

    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no entity has this id.
    async fn find(
        client: &RestClient,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.to_string();
        let path = resolve_path(
            Self::PATHS,
            Self::NAME,
            ResourceOperation::Find,
            &HashMap::from([("id", id.clone())]),
        )?;
        let query = query_from(Self::NAME, params.as_ref())?;

        fetch_one(client, Self::NAME, Self::KEY, &path, query, Some(&id)).await
    }

    /// Lists entities, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport and status errors.
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let path = resolve_path(Self::PATHS, Self::NAME, ResourceOperation::All, &HashMap::new())?;
        let query = query_from(Self::NAME, params.as_ref())?;

        fetch_list(client, Self::NAME, Self::PLURAL, &path, query).await
    }

    /// Counts entities matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedResponse`] if the body has no
    /// numeric `count`.
    async fn count(
        client: &RestClient,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let path = resolve_path(Self::PATHS, Self::NAME, ResourceOperation::Count, &HashMap::new())?;
        let query = query_from(Self::NAME, params.as_ref())?;

        fetch_count(client, Self::NAME, &path, query).await
    }

    /// Creates the entity and returns it as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    async fn create(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let path = resolve_path(Self::PATHS, Self::NAME, ResourceOperation::Create, &HashMap::new())?;

        send_entity(client, HttpMethod::Post, Self::NAME, Self::KEY, &path, self, None).await
    }

    /// Updates the entity at its id and returns it as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending a request when
    /// the entity has no id, [`ResourceError::NotFound`] when the id does not
    /// exist and [`ResourceError::ValidationFailed`] on rejected fields.
    async fn update(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self
            .get_id()
            .ok_or(ResourceError::MissingId {
                resource: Self::NAME,
                operation: ResourceOperation::Update.as_str(),
            })?
            .to_string();
        let path = resolve_path(
            Self::PATHS,
            Self::NAME,
            ResourceOperation::Update,
            &HashMap::from([("id", id.clone())]),
        )?;

        send_entity(client, HttpMethod::Put, Self::NAME, Self::KEY, &path, self, Some(&id)).await
    }

    /// Creates the entity when it has no id, updates it otherwise.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        if self.get_id().is_some() {
            self.update(client).await
        } else {
            self.create(client).await
        }
    }

    /// Deletes this entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending a request when
    /// the entity has no id.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.get_id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: ResourceOperation::Delete.as_str(),
        })?;
        Self::delete_by_id(client, id).await
    }

    /// Deletes the entity with `id`. Only success or failure is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no entity has this id.
    async fn delete_by_id(client: &RestClient, id: Self::Id) -> Result<(), ResourceError> {
        let id = id.to_string();
        let path = resolve_path(
            Self::PATHS,
            Self::NAME,
            ResourceOperation::Delete,
            &HashMap::from([("id", id.clone())]),
        )?;

        remove(client, Self::NAME, &path, Some(&id)).await
    }
}

/// GETs `path` and unwraps the single-entity envelope `key`.
pub(crate) async fn fetch_one<T: DeserializeOwned>(
    client: &RestClient,
    resource: &'static str,
    key: &str,
    path: &str,
    query: Option<HashMap<String, String>>,
    id: Option<&str>,
) -> Result<ResourceResponse<T>, ResourceError> {
    tracing::debug!(resource, operation = "find", path, "Fetching resource");

    let response = client
        .get(path, query)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, resource, id))?;
    ResourceResponse::from_http_response(response, resource, key)
}

/// GETs `path` and unwraps the list envelope `key`, preserving order.
pub(crate) async fn fetch_list<T: DeserializeOwned>(
    client: &RestClient,
    resource: &'static str,
    key: &str,
    path: &str,
    query: Option<HashMap<String, String>>,
) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
    tracing::debug!(resource, operation = "all", path, "Listing resources");

    let response = client
        .get(path, query)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, resource, None))?;
    ResourceResponse::from_http_response(response, resource, key)
}

/// GETs a count path and reads the scalar `count` field.
pub(crate) async fn fetch_count(
    client: &RestClient,
    resource: &'static str,
    path: &str,
    query: Option<HashMap<String, String>>,
) -> Result<u64, ResourceError> {
    tracing::debug!(resource, operation = "count", path, "Counting resources");

    let response = client
        .get(path, query)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, resource, None))?;

    response
        .body
        .get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| ResourceError::UnexpectedResponse {
            resource,
            message: "missing numeric 'count' in response body".to_string(),
            request_id: response.request_id().map(ToString::to_string),
        })
}

/// POSTs or PUTs `entity` wrapped in `{key: entity}` and unwraps the reply.
pub(crate) async fn send_entity<T: Serialize + DeserializeOwned>(
    client: &RestClient,
    method: HttpMethod,
    resource: &'static str,
    key: &str,
    path: &str,
    entity: &T,
    id: Option<&str>,
) -> Result<T, ResourceError> {
    let value = serde_json::to_value(entity).map_err(|source| ResourceError::Json { resource, source })?;
    let mut envelope = serde_json::Map::new();
    envelope.insert(key.to_string(), value);
    let body = Value::Object(envelope);

    tracing::debug!(resource, method = %method, path, "Sending resource");

    let result = match method {
        HttpMethod::Put => client.put(path, body, None).await,
        _ => client.post(path, body, None).await,
    };
    let response = result.map_err(|e| ResourceError::from_rest_error(e, resource, id))?;

    ResourceResponse::from_http_response(response, resource, key).map(ResourceResponse::into_inner)
}

/// DELETEs `path`. The response body is ignored.
pub(crate) async fn remove(
    client: &RestClient,
    resource: &'static str,
    path: &str,
    id: Option<&str>,
) -> Result<(), ResourceError> {
    tracing::debug!(resource, operation = "delete", path, "Deleting resource");

    client
        .delete(path, None)
        .await
        .map(drop)
        .map_err(|e| ResourceError::from_rest_error(e, resource, id))
}

/// Serializes optional params into a query map. Empty maps become `None`.
pub(crate) fn query_from<P: Serialize>(
    resource: &'static str,
    params: Option<&P>,
) -> Result<Option<HashMap<String, String>>, ResourceError> {
    params
        .map(|p| serialize_to_query(p).map_err(|source| ResourceError::Json { resource, source }))
        .transpose()
        .map(|query| query.filter(|q| !q.is_empty()))
}

/// Flattens a params struct into query pairs.
///
/// `null` fields are skipped, arrays are joined with commas and nested
/// objects are sent as JSON text.
fn serialize_to_query<T: Serialize>(params: &T) -> Result<HashMap<String, String>, serde_json::Error> {
    let Value::Object(map) = serde_json::to_value(params)? else {
        return Ok(HashMap::new());
    };

    let mut query = HashMap::new();
    for (key, value) in map {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => {
                let items: Vec<String> = items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if items.is_empty() {
                    continue;
                }
                items.join(",")
            }
            object @ Value::Object(_) => object.to_string(),
        };
        query.insert(key, rendered);
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Widget {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        name: String,
    }

    #[derive(Debug, Default, Serialize)]
    struct WidgetParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        ids: Option<Vec<u64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<String>,
        published: Option<bool>,
    }

    impl RestResource for Widget {
        type Id = u64;
        type FindParams = ();
        type AllParams = WidgetParams;
        type CountParams = ();

        const NAME: &'static str = "Widget";
        const KEY: &'static str = "widget";
        const PLURAL: &'static str = "widgets";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "admin/widgets"),
            ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "admin/widgets/{id}"),
        ];

        fn get_id(&self) -> Option<u64> {
            self.id.filter(|id| *id != 0)
        }
    }

    #[test]
    fn test_serialize_to_query_flattens_values() {
        let params = WidgetParams {
            ids: Some(vec![1, 2, 3]),
            limit: Some(50),
            fields: Some("id,title".to_string()),
            published: Some(true),
        };
        let query = serialize_to_query(&params).unwrap();

        assert_eq!(query.get("ids"), Some(&"1,2,3".to_string()));
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("fields"), Some(&"id,title".to_string()));
        assert_eq!(query.get("published"), Some(&"true".to_string()));
    }

    #[test]
    fn test_serialize_to_query_skips_nulls_and_empty_arrays() {
        let params = WidgetParams {
            ids: Some(vec![]),
            ..WidgetParams::default()
        };
        let query = serialize_to_query(&params).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_query_from_returns_none_for_empty_params() {
        assert!(query_from::<WidgetParams>("Widget", None).unwrap().is_none());
        assert!(query_from("Widget", Some(&WidgetParams::default()))
            .unwrap()
            .is_none());
        assert!(query_from("Widget", Some(&())).unwrap().is_none());

        let query = query_from(
            "Widget",
            Some(&WidgetParams {
                limit: Some(1),
                ..WidgetParams::default()
            }),
        )
        .unwrap()
        .unwrap();
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_get_id_treats_zero_as_unsaved() {
        let unsaved = Widget {
            id: Some(0),
            name: "w".to_string(),
        };
        assert!(unsaved.get_id().is_none());

        let saved = Widget {
            id: Some(9),
            name: "w".to_string(),
        };
        assert_eq!(saved.get_id(), Some(9));
    }

    #[test]
    fn test_missing_paths_fail_resolution() {
        let error =
            resolve_path(Widget::PATHS, Widget::NAME, ResourceOperation::Count, &HashMap::new())
                .unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                resource: "Widget",
                operation: "count"
            }
        ));
    }
}

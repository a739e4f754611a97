//! Metafields scoped to one owner instance.
//!
//! [`MetafieldBinding`] addresses the metafields of a single (owner kind,
//! owner id) pair. [`HasMetafields`] hangs the same six operations off any
//! resource that can own metafields, so a collection's metafields are
//! reached as `CustomCollection::list_metafields(&client, id, None)` or
//! `client.custom_collections().list_metafields(id, None)`.

use std::collections::HashMap;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resource::{fetch_count, fetch_list, fetch_one, query_from, remove, send_entity};
use crate::rest::resources::v2025_10::common::MetafieldOwner;
use crate::rest::resources::v2025_10::{
    Metafield, MetafieldCountParams, MetafieldFindParams, MetafieldListParams,
};
use crate::rest::{
    resolve_path, ResourceBinding, ResourceError, ResourceOperation, ResourceResponse, RestResource,
};

/// Metafield operations for one owner instance.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_custom_collections::rest::MetafieldBinding;
/// use shopify_custom_collections::rest::resources::v2025_10::common::MetafieldOwner;
///
/// let metafields = MetafieldBinding::new(&client, MetafieldOwner::Collection, 841_564_295);
/// let page = metafields.list(None).await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetafieldBinding<'a> {
    client: &'a RestClient,
    owner: MetafieldOwner,
    owner_id: u64,
}

impl<'a> MetafieldBinding<'a> {
    /// Scopes metafield requests to `owner` with id `owner_id`.
    ///
    /// For [`MetafieldOwner::Shop`] the id is ignored.
    #[must_use]
    pub const fn new(client: &'a RestClient, owner: MetafieldOwner, owner_id: u64) -> Self {
        Self {
            client,
            owner,
            owner_id,
        }
    }

    #[must_use]
    pub const fn owner(&self) -> MetafieldOwner {
        self.owner
    }

    #[must_use]
    pub const fn owner_id(&self) -> u64 {
        self.owner_id
    }

    /// Lists the owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for transport and status errors.
    pub async fn list(
        &self,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        let path = self.path(ResourceOperation::All, None)?;
        let query = query_from(Metafield::NAME, params.as_ref())?;

        fetch_list(self.client, Metafield::NAME, Metafield::PLURAL, &path, query).await
    }

    /// Counts the owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedResponse`] if the body has no
    /// numeric `count`.
    pub async fn count(&self, params: Option<MetafieldCountParams>) -> Result<u64, ResourceError> {
        let path = self.path(ResourceOperation::Count, None)?;
        let query = query_from(Metafield::NAME, params.as_ref())?;

        fetch_count(self.client, Metafield::NAME, &path, query).await
    }

    /// Fetches one of the owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the owner has no such metafield.
    pub async fn get(
        &self,
        id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Metafield>, ResourceError> {
        let path = self.path(ResourceOperation::Find, Some(id))?;
        let query = query_from(Metafield::NAME, params.as_ref())?;
        let id = id.to_string();

        fetch_one(self.client, Metafield::NAME, Metafield::KEY, &path, query, Some(&id)).await
    }

    /// Attaches a new metafield to the owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        let path = self.path(ResourceOperation::Create, None)?;

        send_entity(
            self.client,
            HttpMethod::Post,
            Metafield::NAME,
            Metafield::KEY,
            &path,
            metafield,
            None,
        )
        .await
    }

    /// Updates an existing metafield of the owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending a request when
    /// `metafield` has no id.
    pub async fn update(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        let id = metafield.get_id().ok_or(ResourceError::MissingId {
            resource: Metafield::NAME,
            operation: ResourceOperation::Update.as_str(),
        })?;
        let path = self.path(ResourceOperation::Update, Some(id))?;
        let id = id.to_string();

        send_entity(
            self.client,
            HttpMethod::Put,
            Metafield::NAME,
            Metafield::KEY,
            &path,
            metafield,
            Some(&id),
        )
        .await
    }

    /// Deletes one of the owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the owner has no such metafield.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        let path = self.path(ResourceOperation::Delete, Some(id))?;
        let id = id.to_string();

        remove(self.client, Metafield::NAME, &path, Some(&id)).await
    }

    fn path(&self, operation: ResourceOperation, id: Option<u64>) -> Result<String, ResourceError> {
        let mut ids = HashMap::new();
        if let Some(segment) = self.owner.path_segment() {
            ids.insert("owner", segment.to_string());
            ids.insert("owner_id", self.owner_id.to_string());
        }
        if let Some(id) = id {
            ids.insert("id", id.to_string());
        }

        resolve_path(Metafield::PATHS, Metafield::NAME, operation, &ids)
    }
}

/// A resource that owns metafields.
///
/// Implementors only name their [`MetafieldOwner`]; every operation
/// delegates to a [`MetafieldBinding`] scoped to `(METAFIELD_OWNER, owner_id)`.
#[allow(async_fn_in_trait)]
pub trait HasMetafields: RestResource<Id = u64> {
    /// Owner kind used in metafield paths.
    const METAFIELD_OWNER: MetafieldOwner;

    /// Returns the metafield binding for the entity with `owner_id`.
    fn metafields(client: &RestClient, owner_id: u64) -> MetafieldBinding<'_> {
        MetafieldBinding::new(client, Self::METAFIELD_OWNER, owner_id)
    }

    /// See [`MetafieldBinding::list`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    async fn list_metafields(
        client: &RestClient,
        owner_id: u64,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        Self::metafields(client, owner_id).list(params).await
    }

    /// See [`MetafieldBinding::count`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    async fn count_metafields(
        client: &RestClient,
        owner_id: u64,
        params: Option<MetafieldCountParams>,
    ) -> Result<u64, ResourceError> {
        Self::metafields(client, owner_id).count(params).await
    }

    /// See [`MetafieldBinding::get`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    async fn get_metafield(
        client: &RestClient,
        owner_id: u64,
        id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Metafield>, ResourceError> {
        Self::metafields(client, owner_id).get(id, params).await
    }

    /// See [`MetafieldBinding::create`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    async fn create_metafield(
        client: &RestClient,
        owner_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        Self::metafields(client, owner_id).create(metafield).await
    }

    /// See [`MetafieldBinding::update`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    async fn update_metafield(
        client: &RestClient,
        owner_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        Self::metafields(client, owner_id).update(metafield).await
    }

    /// See [`MetafieldBinding::delete`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    async fn delete_metafield(
        client: &RestClient,
        owner_id: u64,
        id: u64,
    ) -> Result<(), ResourceError> {
        Self::metafields(client, owner_id).delete(id).await
    }
}

impl<'a, R: HasMetafields> ResourceBinding<'a, R> {
    /// Metafield binding for the entity with `owner_id`.
    #[must_use]
    pub fn metafields(&self, owner_id: u64) -> MetafieldBinding<'a> {
        R::metafields(self.client(), owner_id)
    }

    /// Lists the entity's metafields.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn list_metafields(
        &self,
        owner_id: u64,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        self.metafields(owner_id).list(params).await
    }

    /// Counts the entity's metafields.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn count_metafields(
        &self,
        owner_id: u64,
        params: Option<MetafieldCountParams>,
    ) -> Result<u64, ResourceError> {
        self.metafields(owner_id).count(params).await
    }

    /// Fetches one of the entity's metafields.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn get_metafield(
        &self,
        owner_id: u64,
        id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Metafield>, ResourceError> {
        self.metafields(owner_id).get(id, params).await
    }

    /// Attaches a metafield to the entity.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn create_metafield(
        &self,
        owner_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(owner_id).create(metafield).await
    }

    /// Updates one of the entity's metafields.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn update_metafield(
        &self,
        owner_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(owner_id).update(metafield).await
    }

    /// Deletes one of the entity's metafields.
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn delete_metafield(&self, owner_id: u64, id: u64) -> Result<(), ResourceError> {
        self.metafields(owner_id).delete(id).await
    }
}

//! A client-bound handle over one resource type.

use std::fmt;
use std::marker::PhantomData;

use crate::clients::RestClient;
use crate::rest::{ResourceError, ResourceResponse, RestResource};

/// Borrowed handle exposing a resource's operations on one client.
///
/// The handle holds only `&RestClient`, so it is `Copy` and can be used
/// from concurrent tasks without locking. Every method forwards to the
/// matching [`RestResource`] operation.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_custom_collections::rest::resources::v2025_10::{
///     CustomCollection, CustomCollectionListParams,
/// };
///
/// let collections = client.custom_collections();
/// let page = collections
///     .list(Some(CustomCollectionListParams { limit: Some(50), ..Default::default() }))
///     .await?;
/// let total = collections.count(None).await?;
/// ```
pub struct ResourceBinding<'a, R> {
    client: &'a RestClient,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: RestResource> ResourceBinding<'a, R> {
    /// Binds resource `R` to `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// The client requests are sent through.
    #[must_use]
    pub const fn client(&self) -> &'a RestClient {
        self.client
    }

    /// Lists entities. See [`RestResource::all`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn list(
        &self,
        params: Option<R::AllParams>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
        R::all(self.client, params).await
    }

    /// Counts entities. See [`RestResource::count`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the request.
    pub async fn count(&self, params: Option<R::CountParams>) -> Result<u64, ResourceError> {
        R::count(self.client, params).await
    }

    /// Fetches one entity. See [`RestResource::find`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no entity has this id.
    pub async fn get(
        &self,
        id: R::Id,
        params: Option<R::FindParams>,
    ) -> Result<ResourceResponse<R>, ResourceError> {
        R::find(self.client, id, params).await
    }

    /// Creates `entity`. See [`RestResource::create`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create(&self, entity: &R) -> Result<R, ResourceError> {
        entity.create(self.client).await
    }

    /// Updates `entity` at its id. See [`RestResource::update`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `entity` has no id.
    pub async fn update(&self, entity: &R) -> Result<R, ResourceError> {
        entity.update(self.client).await
    }

    /// Deletes the entity with `id`. See [`RestResource::delete_by_id`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no entity has this id.
    pub async fn delete(&self, id: R::Id) -> Result<(), ResourceError> {
        R::delete_by_id(self.client, id).await
    }
}

impl<R> Clone for ResourceBinding<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceBinding<'_, R> {}

impl<R: RestResource> fmt::Debug for ResourceBinding<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBinding")
            .field("resource", &R::NAME)
            .field("api_version", self.client.api_version())
            .finish()
    }
}

impl RestClient {
    /// Returns a handle for resource `R` on this client.
    #[must_use]
    pub const fn resource<R: RestResource>(&self) -> ResourceBinding<'_, R> {
        ResourceBinding::new(self)
    }
}

// Verify the handle is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceBinding<'static, crate::rest::resources::v2025_10::CustomCollection>>();
};

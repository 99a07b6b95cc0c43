//! # DomainClient Trait
//!
//! Common interface for store-specific clients: default `get` and `list` built on top of the
//! generic [`StoreClient`], with framework errors mapped into the store's own error type.
use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use store_framework::{DomainClient, StoreClient, StoreEntity, StoreError};
///
/// #[derive(Clone, Debug)] struct Loaf { id: u32 }
/// #[derive(Debug)] struct LoafCreate;
/// #[derive(Debug)] enum LoafAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct LoafError(String);
///
/// impl StoreEntity for Loaf {
///     type Id = u32;
///     type Create = LoafCreate;
///     type Action = LoafAction;
///     type ActionResult = ();
///     type Error = LoafError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: LoafCreate) -> Result<Self, LoafError> { Ok(Self { id }) }
///     fn handle_action(&mut self, action: LoafAction) -> Result<(), LoafError> { match action {} }
/// }
///
/// struct LoafClient { inner: StoreClient<Loaf> }
///
/// impl DomainClient<Loaf> for LoafClient {
///     type Error = LoafError;
///     fn inner(&self) -> &StoreClient<Loaf> { &self.inner }
///     fn map_error(e: StoreError) -> LoafError { LoafError(e.to_string()) }
/// }
///
/// async fn usage(client: LoafClient) {
///     // get() and list() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait DomainClient<T: StoreEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of the full collection in store order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}

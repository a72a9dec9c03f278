//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list` and
//! `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Driver { id: u32, active: bool }
/// #[derive(Debug)] struct DriverCreate;
/// #[derive(Debug)] struct DriverUpdate;
/// #[derive(Debug, Clone)] enum DriverAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct DriverError(String);
///
/// impl From<String> for DriverError {
///     fn from(s: String) -> Self { DriverError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Driver {
///     type Id = u32;
///     type Create = DriverCreate;
///     type Update = DriverUpdate;
///     type Action = DriverAction;
///     type ActionResult = ();
///     type Query = bool;
///     type Key = ();
///     type Context = ();
///     type Error = DriverError;
///
///     fn from_create_params(id: u32, _: DriverCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, active: true })
///     }
///     fn matches(&self, active: &bool) -> bool { self.active == *active }
///     async fn on_update(&mut self, _: DriverUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: DriverAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct DriverClient {
///     inner: ResourceClient<Driver>,
/// }
///
/// impl ActorClient<Driver> for DriverClient {
///     type Error = DriverError;
///
///     fn inner(&self) -> &ResourceClient<Driver> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         DriverError(e.to_string())
///     }
/// }
///
/// async fn usage(client: DriverClient) {
///     // get(), list() and delete() are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.list(true).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching the query.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

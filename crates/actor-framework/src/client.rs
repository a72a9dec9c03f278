//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Reconciled, ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for interacting with a `ResourceActor<T>`.
/// It forwards requests over a Tokio mpsc channel and returns results via oneshot channels.
/// The client holds only a sender, so it is cheap to clone and share across tasks.
///
/// A send on a closed channel yields [`FrameworkError::ActorClosed`]; a reply channel dropped
/// before answering yields [`FrameworkError::ActorDropped`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Every entity matching `query`, ordered by id.
    pub async fn list(&self, query: T::Query) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { query, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Removes every entity matching `query` and returns them.
    pub async fn delete_where(&self, query: T::Query) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::DeleteWhere { query, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Applies all actions or none of them. Results come back in request order.
    pub async fn perform_many(
        &self,
        actions: Vec<(T::Id, T::Action)>,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::ActionMany {
            actions,
            respond_to,
        })
        .await
    }

    /// Applies `action` to every entity matching `query`, all or nothing.
    pub async fn perform_where(
        &self,
        query: T::Query,
        action: T::Action,
    ) -> Result<Vec<(T::Id, T::ActionResult)>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::ActionWhere {
            query,
            action,
            respond_to,
        })
        .await
    }

    /// Inserts the candidate, or lets the entity holding its natural key decide what happens.
    pub async fn reconcile(&self, params: T::Create) -> Result<Reconciled<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Reconcile { params, respond_to })
            .await
    }
}

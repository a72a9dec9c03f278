//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Outcome of a reconcile request.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled<T> {
    /// No entity held the key; the candidate was inserted.
    Created(T),
    /// The existing entity kept its place (possibly modified).
    Updated(T),
    /// The existing entity was removed.
    Removed(T),
}

impl<T> Reconciled<T> {
    /// The entity the outcome refers to, whatever happened to it.
    pub fn entity(&self) -> &T {
        match self {
            Reconciled::Created(e) | Reconciled::Updated(e) | Reconciled::Removed(e) => e,
        }
    }
}

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages a specific type of resource (the [`ActorEntity`]). Instead of defining
/// ad-hoc messages for every operation, we standardize around a set of lifecycle operations
/// that apply to almost any persistent resource.
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get (Read)**: Retrieval by ID.
/// - **List**: Retrieval of every resource matching an [`ActorEntity::Query`].
/// - **Update**: State mutation. Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete** / **DeleteWhere**: Lifecycle end for one resource or every match.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
/// - **ActionMany** / **ActionWhere**: All-or-nothing batches of actions.
/// - **Reconcile**: Upsert keyed by [`ActorEntity::Key`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DeleteWhere {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    ActionMany {
        actions: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
    ActionWhere {
        query: T::Query,
        action: T::Action,
        respond_to: Response<Vec<(T::Id, T::ActionResult)>>,
    },
    Reconcile {
        params: T::Create,
        respond_to: Response<Reconciled<T>>,
    },
}

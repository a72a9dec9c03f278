//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Restaurant, Order, Reaction, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types for IDs,
//! DTOs, actions, queries, natural keys, context, and errors, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`, `reconcile`).
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all resource types must satisfy, we can write the
//! `ResourceActor` logic *once* and reuse it everywhere.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Comment` entity requires a `CommentCreate` payload, and you can't accidentally send it
//! a `DishCreate` payload.
//!
//! # Provided Methods (Hooks)
//! This trait includes **Provided Methods** (methods with default implementations):
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::key`]
//! - [`ActorEntity::reconcile`]
//!
//! You do **not** need to implement these methods unless you want to customize behavior.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// What an existing entity wants to happen after a [`ActorEntity::reconcile`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Keep the (possibly modified) existing entity.
    Retain,
    /// Remove the existing entity from the store.
    Remove,
}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
///
/// # Natural Keys
/// Entities that must be unique by something other than their id (a customer's email, a
/// reaction's `(customer, comment)` pair) return it from [`ActorEntity::key`]. The actor keeps an
/// index over those keys, rejects duplicates with [`FrameworkError::Conflict`](crate::FrameworkError),
/// and serves [`ResourceClient::reconcile`](crate::ResourceClient::reconcile) against it.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Advance`).
    /// `Clone` so one action can be applied to every entity matching a query.
    type Action: Clone + Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter accepted by `list`, `delete_where` and `perform_where`.
    type Query: Send + Sync + Debug;

    /// Natural unique key. Use `()` when the entity has none.
    type Key: Eq + Hash + Clone + Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor) rather than
    /// **Per-Message Error Types**. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) with
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity satisfies the given filter.
    fn matches(&self, query: &Self::Query) -> bool;

    /// The natural key this entity must be unique by, if any.
    fn key(&self) -> Option<Self::Key> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called on the stored entity when a reconcile request arrives whose candidate has the
    /// same natural key. The entity may modify itself and decides whether it survives.
    ///
    /// The default keeps the existing entity untouched.
    async fn reconcile(
        &mut self,
        _incoming: Self,
        _ctx: &Self::Context,
    ) -> Result<Reconcile, Self::Error> {
        Ok(Reconcile::Retain)
    }
}

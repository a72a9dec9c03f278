//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::{ActorEntity, Reconcile};
use crate::error::FrameworkError;
use crate::message::{Reconciled, ResourceRequest};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`), the natural key
/// index (`keys`) and the receiver end of the channel.
///
/// Each actor processes its own messages *sequentially* in a loop, so the store needs no
/// `Mutex` or `RwLock`. Every request observes the effects of all requests processed before it.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug, Clone)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Query = ();
///     type Key = String;
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: u32, p: TagCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, label: p.label })
///     }
///     fn matches(&self, _: &()) -> bool { true }
///     fn key(&self) -> Option<String> { Some(self.label.clone()) }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: TagAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.create(TagCreate { label: "spicy".into() }).await.unwrap();
///     // Same natural key: rejected.
///     assert!(client.create(TagCreate { label: "spicy".into() }).await.is_err());
/// }
/// ```
///
/// # Staging
///
/// `Update`, `Action` and the batch variants run the entity hooks on a *clone* of the stored
/// entity. The clone replaces the stored entity only after every hook in the request succeeded,
/// so a failed request leaves the store exactly as it was. `ActionMany` and `ActionWhere` stage
/// the whole batch and commit it in one step, or commit nothing.
///
/// # Natural Keys
///
/// Entities whose [`ActorEntity::key`] returns `Some` are indexed. Create, update and action
/// requests that would give two entities the same key fail with [`FrameworkError::Conflict`].
/// `Reconcile` looks the candidate's key up in the index and either inserts the candidate or
/// hands it to the stored entity's [`ActorEntity::reconcile`] hook.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    keys: HashMap<T::Key, T::Id>,
    next_id: u32,
    entity_type: &'static str,
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // Just the type name ("Order" instead of "restaurant_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            keys: HashMap::new(),
            next_id: 1,
            entity_type,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .matching_ids(&query)
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(id, update, &context).await);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let _ = respond_to.send(self.delete(id, &context).await);
                }
                ResourceRequest::DeleteWhere { query, respond_to } => {
                    debug!(entity_type, ?query, "DeleteWhere");
                    let _ = respond_to.send(self.delete_where(query, &context).await);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self
                        .apply_batch(vec![(id, action)], &context)
                        .await
                        .and_then(|mut results| {
                            results
                                .pop()
                                .map(|(_, result)| result)
                                .ok_or(FrameworkError::ActorDropped)
                        });
                    let _ = respond_to.send(result);
                }
                ResourceRequest::ActionMany {
                    actions,
                    respond_to,
                } => {
                    debug!(entity_type, count = actions.len(), "ActionMany");
                    let result = self.apply_batch(actions, &context).await.map(|results| {
                        results.into_iter().map(|(_, result)| result).collect()
                    });
                    let _ = respond_to.send(result);
                }
                ResourceRequest::ActionWhere {
                    query,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, ?query, ?action, "ActionWhere");
                    let actions = self
                        .matching_ids(&query)
                        .into_iter()
                        .map(|id| (id, action.clone()))
                        .collect();
                    let _ = respond_to.send(self.apply_batch(actions, &context).await);
                }
                ResourceRequest::Reconcile { params, respond_to } => {
                    debug!(entity_type, ?params, "Reconcile");
                    let _ = respond_to.send(self.reconcile(params, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = self.entity_type;
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            entity_error(e)
        })?;
        self.ensure_key_free(&item, None)?;
        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(entity_error(e));
        }
        self.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        let mut staged = self.staged(&id)?;
        if let Err(e) = staged.on_update(update, ctx).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(entity_error(e));
        }
        self.ensure_key_free(&staged, Some(&id))?;
        self.insert(id.clone(), staged.clone());
        info!(entity_type, %id, "Updated");
        Ok(staged)
    }

    async fn delete(&mut self, id: T::Id, ctx: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = self.entity_type;
        let item = self.store.get(&id).ok_or_else(|| self.not_found(&id))?;
        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(entity_error(e));
        }
        self.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    /// Removes every match, or nothing if any `on_delete` hook refuses.
    async fn delete_where(
        &mut self,
        query: T::Query,
        ctx: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        let entity_type = self.entity_type;
        let ids = self.matching_ids(&query);
        for id in &ids {
            if let Some(item) = self.store.get(id) {
                if let Err(e) = item.on_delete(ctx).await {
                    warn!(entity_type, %id, error = %e, "on_delete failed");
                    return Err(entity_error(e));
                }
            }
        }
        let removed: Vec<T> = ids.iter().filter_map(|id| self.remove(id)).collect();
        info!(
            entity_type,
            removed = removed.len(),
            size = self.store.len(),
            "Deleted matching"
        );
        Ok(removed)
    }

    /// Runs every action against staged clones and commits them together.
    ///
    /// Several actions may target the same id; each sees the effects of the ones before it.
    async fn apply_batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        ctx: &T::Context,
    ) -> Result<Vec<(T::Id, T::ActionResult)>, FrameworkError> {
        let entity_type = self.entity_type;
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let current = self.store.get(&id).cloned().ok_or_else(|| self.not_found(&id))?;
                    entry.insert(current)
                }
            };
            match item.handle_action(action, ctx).await {
                Ok(result) => results.push((id, result)),
                Err(e) => {
                    warn!(entity_type, %id, error = %e, "Action failed");
                    return Err(entity_error(e));
                }
            }
        }

        self.ensure_batch_keys(&staged)?;
        let touched = staged.len();
        for (id, item) in staged {
            self.insert(id, item);
        }
        info!(entity_type, touched, "Action ok");
        Ok(results)
    }

    async fn reconcile(
        &mut self,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<Reconciled<T>, FrameworkError> {
        let entity_type = self.entity_type;
        let candidate_id = T::Id::from(self.next_id);
        let mut candidate = T::from_create_params(candidate_id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Reconcile rejected");
            entity_error(e)
        })?;

        let owner = candidate
            .key()
            .and_then(|key| self.keys.get(&key).cloned());
        let Some(owner) = owner else {
            if let Err(e) = candidate.on_create(ctx).await {
                warn!(entity_type, error = %e, "on_create failed");
                return Err(entity_error(e));
            }
            self.next_id += 1;
            self.insert(candidate_id.clone(), candidate.clone());
            info!(entity_type, id = %candidate_id, size = self.store.len(), "Reconciled: created");
            return Ok(Reconciled::Created(candidate));
        };

        let mut staged = self.staged(&owner)?;
        let decision = staged.reconcile(candidate, ctx).await.map_err(|e| {
            warn!(entity_type, id = %owner, error = %e, "Reconcile failed");
            entity_error(e)
        })?;
        match decision {
            Reconcile::Retain => {
                self.ensure_key_free(&staged, Some(&owner))?;
                self.insert(owner.clone(), staged.clone());
                info!(entity_type, id = %owner, "Reconciled: updated");
                Ok(Reconciled::Updated(staged))
            }
            Reconcile::Remove => {
                if let Err(e) = staged.on_delete(ctx).await {
                    warn!(entity_type, id = %owner, error = %e, "on_delete failed");
                    return Err(entity_error(e));
                }
                self.remove(&owner);
                info!(entity_type, id = %owner, size = self.store.len(), "Reconciled: removed");
                Ok(Reconciled::Removed(staged))
            }
        }
    }

    // --- Store helpers ---

    fn matching_ids(&self, query: &T::Query) -> Vec<T::Id> {
        let mut ids: Vec<T::Id> = self
            .store
            .iter()
            .filter(|(_, item)| item.matches(query))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    fn staged(&self, id: &T::Id) -> Result<T, FrameworkError> {
        self.store.get(id).cloned().ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: &T::Id) -> FrameworkError {
        warn!(entity_type = self.entity_type, %id, "Not found");
        FrameworkError::NotFound(id.to_string())
    }

    fn conflict(&self, key: &T::Key, holder: &T::Id) -> FrameworkError {
        warn!(entity_type = self.entity_type, ?key, %holder, "Duplicate key");
        FrameworkError::Conflict(format!("{:?} is already held by {}", key, holder))
    }

    /// `owner` is the id the entity is (or will be) stored under, if it is already stored.
    fn ensure_key_free(&self, item: &T, owner: Option<&T::Id>) -> Result<(), FrameworkError> {
        if let Some(key) = item.key() {
            if let Some(holder) = self.keys.get(&key) {
                if Some(holder) != owner {
                    return Err(self.conflict(&key, holder));
                }
            }
        }
        Ok(())
    }

    fn ensure_batch_keys(&self, staged: &HashMap<T::Id, T>) -> Result<(), FrameworkError> {
        let mut claimed: HashMap<T::Key, &T::Id> = HashMap::new();
        for (id, item) in staged {
            let Some(key) = item.key() else { continue };
            if let Some(other) = claimed.insert(key.clone(), id) {
                return Err(self.conflict(&key, other));
            }
            if let Some(holder) = self.keys.get(&key) {
                // A holder that is part of the batch may be giving the key up.
                let holder_keeps_it = staged
                    .get(holder)
                    .map_or(true, |h| h.key().as_ref() == Some(&key));
                if holder != id && holder_keeps_it {
                    return Err(self.conflict(&key, holder));
                }
            }
        }
        Ok(())
    }

    fn insert(&mut self, id: T::Id, item: T) {
        if let Some(old_key) = self.store.get(&id).and_then(|old| old.key()) {
            if self.keys.get(&old_key) == Some(&id) {
                self.keys.remove(&old_key);
            }
        }
        if let Some(key) = item.key() {
            self.keys.insert(key, id.clone());
        }
        self.store.insert(id, item);
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        let item = self.store.remove(id)?;
        if let Some(key) = item.key() {
            if self.keys.get(&key) == Some(id) {
                self.keys.remove(&key);
            }
        }
        Some(item)
    }
}

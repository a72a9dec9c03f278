//! [`ActorEntity`] implementation for [`Reaction`].
//!
//! Reactions are keyed by `(customer, comment)`, so the actor's key index holds the
//! at-most-one invariant. `react` goes through `reconcile`: the lookup, the policy decision
//! and the write happen in one actor step, so concurrent reacts on the same pair serialize.

use super::policy::ReactionPolicy;
use super::ReactionError;
use crate::clients::{CommentClient, CustomerClient};
use crate::model::{
    CommentId, CustomerId, NoAction, Reaction, ReactionCreate, ReactionId, ReactionQuery,
    ReactionUpdate,
};
use actor_framework::{ActorEntity, Reconcile};
use async_trait::async_trait;
use chrono::Utc;

/// Built by [`ReactionActor::run`](super::ReactionActor::run) from the policy given to
/// [`new`](super::new), so the decision and the reported outcome never disagree.
pub struct ReactionContext {
    pub(crate) policy: ReactionPolicy,
    pub(crate) comments: CommentClient,
    pub(crate) customers: CustomerClient,
}

impl ReactionContext {
    /// The comment must exist and be active; the customer must exist.
    async fn ensure_targets(&self, customer: CustomerId, comment: CommentId) -> Result<(), ReactionError> {
        let found = self.comments.fetch(comment).await?;
        if !found.is_active {
            return Err(ReactionError::NotFound(format!("{} is inactive", comment)));
        }
        self.customers.fetch(customer).await?;
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Reaction {
    type Id = ReactionId;
    type Create = ReactionCreate;
    type Update = ReactionUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Query = ReactionQuery;
    type Key = (CustomerId, CommentId);
    type Context = ReactionContext;
    type Error = ReactionError;

    fn from_create_params(id: ReactionId, params: ReactionCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            customer: params.customer,
            comment: params.comment,
            is_like: params.is_like,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &ReactionQuery) -> bool {
        query.matches(self)
    }

    fn key(&self) -> Option<Self::Key> {
        Some((self.customer, self.comment))
    }

    async fn on_create(&mut self, ctx: &ReactionContext) -> Result<(), Self::Error> {
        ctx.ensure_targets(self.customer, self.comment).await
    }

    async fn on_update(&mut self, update: ReactionUpdate, _ctx: &ReactionContext) -> Result<(), Self::Error> {
        if let Some(is_like) = update.is_like {
            self.is_like = is_like;
            self.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &ReactionContext) -> Result<(), Self::Error> {
        match action {}
    }

    async fn reconcile(&mut self, incoming: Reaction, ctx: &ReactionContext) -> Result<Reconcile, Self::Error> {
        ctx.ensure_targets(incoming.customer, incoming.comment).await?;
        Ok(ctx.policy.resolve(self, incoming.is_like))
    }
}

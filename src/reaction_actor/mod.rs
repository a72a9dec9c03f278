//! # Reaction Ledger
//!
//! Likes and dislikes on comments: at most one per customer and comment, toggled according
//! to a configurable [`ReactionPolicy`], and counted on read.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) for [`Reaction`], keyed by `(customer, comment)`
//! - [`policy`] - [`ReactionPolicy`]: what a repeat reaction does
//! - [`error`] - [`ReactionError`]
//!
//! Callers go through [`ReactionClient::react`] and [`ReactionClient::tally`].

pub mod entity;
pub mod error;
pub mod policy;

pub use entity::ReactionContext;
pub use error::*;
pub use policy::ReactionPolicy;

use crate::clients::{CommentClient, CustomerClient, ReactionClient};
use crate::model::Reaction;
use actor_framework::ResourceActor;

/// The ledger actor, bound to the policy its client reports outcomes under.
pub struct ReactionActor {
    inner: ResourceActor<Reaction>,
    policy: ReactionPolicy,
}

impl ReactionActor {
    pub fn policy(&self) -> ReactionPolicy {
        self.policy
    }

    /// Runs the ledger until every [`ReactionClient`] is dropped.
    pub async fn run(self, comments: CommentClient, customers: CustomerClient) {
        let ctx = ReactionContext {
            policy: self.policy,
            comments,
            customers,
        };
        self.inner.run(ctx).await
    }
}

/// Creates a new Reaction actor and its client, both under `policy`.
pub fn new(buffer_size: usize, policy: ReactionPolicy) -> (ReactionActor, ReactionClient) {
    let (inner, client) = ResourceActor::new(buffer_size);
    (ReactionActor { inner, policy }, ReactionClient::new(client, policy))
}

use crate::model::{
    CommentId, CustomerId, ReactOutcome, Reaction, ReactionCreate, ReactionQuery, ReactionTally,
};
use crate::reaction_actor::{ReactionError, ReactionPolicy};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for the reaction ledger.
///
/// Holds the policy only to name outcomes; the decision itself is made inside the actor.
#[derive(Clone)]
pub struct ReactionClient {
    inner: ResourceClient<Reaction>,
    policy: ReactionPolicy,
}

impl ReactionClient {
    pub fn new(inner: ResourceClient<Reaction>, policy: ReactionPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> ReactionPolicy {
        self.policy
    }

    /// Records a like (`is_like`) or dislike by `customer` on `comment`, toggling any
    /// earlier reaction by the same customer according to the policy.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        customer: CustomerId,
        comment: CommentId,
        is_like: bool,
    ) -> Result<ReactOutcome, ReactionError> {
        debug!("Sending request");
        let params = ReactionCreate {
            customer,
            comment,
            is_like,
        };
        let reconciled = self.inner.reconcile(params).await?;
        let outcome = self.policy.outcome(&reconciled);
        info!(status = %outcome.status, "Reaction recorded");
        Ok(outcome)
    }

    /// Counts likes and dislikes on `comment` as the ledger stands now.
    #[instrument(skip(self))]
    pub async fn tally(&self, comment: CommentId) -> Result<ReactionTally, ReactionError> {
        let reactions = self.inner.list(ReactionQuery::on_comment(comment)).await?;
        let likes = reactions.iter().filter(|r| r.is_like).count();
        Ok(ReactionTally {
            comment_id: comment,
            likes,
            dislikes: reactions.len() - likes,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete_where(&self, query: ReactionQuery) -> Result<Vec<Reaction>, ReactionError> {
        Ok(self.inner.delete_where(query).await?)
    }
}

impl ActorClient<Reaction> for ReactionClient {
    type Error = ReactionError;

    fn inner(&self) -> &ResourceClient<Reaction> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ReactionError::from(e)
    }
}

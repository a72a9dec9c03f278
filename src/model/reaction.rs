//! The reaction ledger's records and the shapes `react` and `tally` answer with.

use super::{CommentId, CustomerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

define_id!(Reaction, "reaction");

/// A like (`is_like == true`) or dislike by one customer on one comment.
///
/// At most one reaction exists per `(customer, comment)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: ReactionId,
    pub customer: CustomerId,
    pub comment: CommentId,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReactionCreate {
    pub customer: CustomerId,
    pub comment: CommentId,
    pub is_like: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ReactionUpdate {
    pub is_like: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ReactionQuery {
    pub customer: Option<CustomerId>,
    pub comment: Option<CommentId>,
}

impl ReactionQuery {
    pub fn on_comment(comment: CommentId) -> Self {
        Self {
            comment: Some(comment),
            ..Self::default()
        }
    }

    pub fn matches(&self, r: &Reaction) -> bool {
        self.customer.map_or(true, |c| c == r.customer)
            && self.comment.map_or(true, |c| c == r.comment)
    }
}

/// What a `react` call did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionStatus {
    Created,
    Updated,
    Removed,
    Liked,
    Disliked,
}

impl ReactionStatus {
    /// Whether a new ledger row was written.
    pub fn is_creation(self) -> bool {
        matches!(
            self,
            ReactionStatus::Created | ReactionStatus::Liked | ReactionStatus::Disliked
        )
    }
}

impl Display for ReactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReactionStatus::Created => "created",
            ReactionStatus::Updated => "updated",
            ReactionStatus::Removed => "removed",
            ReactionStatus::Liked => "liked",
            ReactionStatus::Disliked => "disliked",
        };
        f.write_str(s)
    }
}

/// Result of `react`. `is_like` is absent when the reaction was removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactOutcome {
    pub status: ReactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_like: Option<bool>,
}

/// Like/dislike counts for one comment, read from the ledger at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionTally {
    pub comment_id: CommentId,
    pub likes: usize,
    pub dislikes: usize,
}

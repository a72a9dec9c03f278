//! Error types for the Reaction actor.

use crate::comment_actor::CommentError;
use crate::customer_actor::CustomerError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReactionError {
    /// The comment (or an active comment) or the customer was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Reaction validation error: {0}")]
    ValidationError(String),

    /// A second reaction for the same customer and comment.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl_actor_error!(ReactionError);
impl_error_from!(ReactionError <- CommentError, CustomerError);

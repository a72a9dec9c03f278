//! Error types for the Payment actor.

use crate::order_actor::{InvalidTransition, OrderError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The payment or its order was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payment validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The payment already completed or failed.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl_actor_error!(PaymentError, rules: [InvalidTransition]);
impl_error_from!(PaymentError <- OrderError);

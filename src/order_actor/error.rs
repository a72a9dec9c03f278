//! Error types for the Order actor.

use super::lifecycle::InvalidTransition;
use crate::customer_actor::CustomerError;
use crate::restaurant_actor::RestaurantError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order, or an entity it refers to, was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The order or its delivery cannot move to the requested status.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl_actor_error!(OrderError, rules: [InvalidTransition]);
impl_error_from!(OrderError <- CustomerError, RestaurantError);

use crate::restaurant_actor::RestaurantError;
use thiserror::Error;

/// Errors that can occur during customer and address operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer or address (or an entity it refers to) was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The data provided is invalid.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Another customer already uses the email address.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl_actor_error!(CustomerError);
impl_error_from!(CustomerError <- RestaurantError);

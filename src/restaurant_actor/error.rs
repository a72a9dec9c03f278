//! Error types for the catalog actors (restaurants, menus, dishes, drivers).

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The requested restaurant, menu, dish or driver was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The data provided is invalid.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A uniqueness rule was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl_actor_error!(RestaurantError);

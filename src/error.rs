//! Crate-wide error type for operations that span several actors (cascades, HTTP handlers).

use crate::comment_actor::CommentError;
use crate::customer_actor::CustomerError;
use crate::order_actor::OrderError;
use crate::payment_actor::PaymentError;
use crate::reaction_actor::ReactionError;
use crate::restaurant_actor::RestaurantError;

/// How a failure should be reported to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Conflict,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Restaurant(#[from] RestaurantError),
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Comment(#[from] CommentError),
    #[error(transparent)]
    Reaction(#[from] ReactionError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Restaurant(e) => e.kind(),
            Error::Customer(e) => e.kind(),
            Error::Order(e) => e.kind(),
            Error::Payment(e) => e.kind(),
            Error::Comment(e) => e.kind(),
            Error::Reaction(e) => e.kind(),
        }
    }
}

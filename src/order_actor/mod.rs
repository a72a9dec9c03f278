//! # Order Actor
//!
//! Orders together with their line items and delivery, plus the status machines in
//! [`lifecycle`] that payments share.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) for [`Order`] and its [`OrderContext`]
//! - [`actions`] - [`OrderAction`]: status changes, delivery progress and reference detaching
//! - [`lifecycle`] - transition functions for order, delivery and payment statuses
//! - [`error`] - [`OrderError`]

pub mod actions;
pub mod entity;
pub mod error;
pub mod lifecycle;

pub use actions::OrderAction;
pub use entity::OrderContext;
pub use error::*;
pub use lifecycle::InvalidTransition;

use crate::clients::{DishClient, OrderClient};
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// The client prices new orders from `dishes`; the actor must be run with an [`OrderContext`].
pub fn new(buffer_size: usize, dishes: DishClient) -> (ResourceActor<Order>, OrderClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(client, dishes))
}

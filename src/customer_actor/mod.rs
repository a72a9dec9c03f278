//! # Customer Actors
//!
//! Customers and their addresses. Customers are keyed by email (case-insensitive), so the
//! actor rejects a second customer with the same address as a `Conflict`.
//!
//! Addresses may belong to a customer or a restaurant; whichever owner is named must exist
//! when the address is created.

pub mod address;
pub mod customer;
pub mod error;

pub use error::*;

use crate::clients::{AddressClient, CustomerClient};
use crate::model::{Address, Customer};
use actor_framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(client))
}

/// Creates a new Address actor and its client.
pub fn new_addresses(buffer_size: usize) -> (ResourceActor<Address>, AddressClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, AddressClient::new(client))
}

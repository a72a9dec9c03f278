//! Typed clients over [`ResourceClient`](actor_framework::ResourceClient), one per entity.
//!
//! Most are generated by `entity_client!` and add a few domain calls on top; the order and
//! reaction clients carry extra state and are written out by hand.
//!
//! Errors are each actor's own enum. The standard `get`, `list` and `delete` calls come from
//! [`ActorClient`](actor_framework::ActorClient), so bring that trait into scope to use them.

pub mod comment_client;
pub mod customer_client;
pub mod order_client;
pub mod payment_client;
pub mod reaction_client;
pub mod restaurant_client;

pub use comment_client::*;
pub use customer_client::*;
pub use order_client::*;
pub use payment_client::*;
pub use reaction_client::*;
pub use restaurant_client::*;

//! # Actor Framework
//!
//! This crate provides the foundational building blocks for creating type-safe, concurrent
//! actor systems in Rust. It implements a **Resource-Oriented Architecture (ROA)** pattern
//! on top of the **Actor Model**, providing a clean abstraction for managing stateful entities.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard operations (Create, Read, List, Update, Delete) on well-defined resources
//! - Predictable lifecycle management
//! - Clean, uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! Each resource type (Restaurant, Order, Reaction) gets its own actor with isolated state.
//! When resources need to interact (a reaction checking that its comment is still active), the
//! entity hook calls the other actor's client, which the actor received as its context.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`]) - Type-safe communication
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dish { id: u32, name: String, available: bool }
//!
//! #[derive(Debug)] struct DishCreate { name: String }
//! #[derive(Debug)] struct DishUpdate { available: Option<bool> }
//! #[derive(Debug, Clone)] enum DishAction { Rename(String) }
//! #[derive(Debug)] struct DishQuery { available: Option<bool> }
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Update = DishUpdate;
//!     type Action = DishAction;
//!     type ActionResult = ();
//!     type Query = DishQuery;
//!     type Key = ();
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name, available: true })
//!     }
//!
//!     fn matches(&self, q: &DishQuery) -> bool {
//!         q.available.map_or(true, |a| a == self.available)
//!     }
//!
//!     async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(available) = update.available { self.available = available; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: DishAction, _: &()) -> Result<(), Self::Error> {
//!         match action { DishAction::Rename(name) => self.name = name }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(DishCreate { name: "Pho".into() }).await.unwrap();
//!     client.update(id, DishUpdate { available: Some(false) }).await.unwrap();
//!     let sold_out = client.list(DishQuery { available: Some(false) }).await.unwrap();
//!     assert_eq!(sold_out.len(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! All actors are created first, then each is spawned with the clients it needs. This "late
//! binding" lets actors depend on each other without construction-order cycles.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//! - Batches (`perform_many`, `perform_where`) are staged and committed as one message, so no
//!   other request ever observes half a batch
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which answers a real `ResourceClient<T>` from a
//! queue of expectations so client-side logic can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Reconcile};
pub use error::FrameworkError;
pub use message::{Reconciled, ResourceRequest, Response};

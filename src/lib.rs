//! # Restaurant Orders
//!
//! A restaurant-ordering service built from resource-oriented actors: restaurants, menus,
//! dishes, drivers, customers, addresses, orders with their delivery, payments, comments and
//! the like/dislike ledger on comments.
//!
//! ## 🏗️ Design
//!
//! Every entity type lives in its own [`ResourceActor`](actor_framework::ResourceActor), a
//! Tokio task that owns the entities and processes one request at a time. Requests that need
//! to check other entities (an order's customer, a reaction's comment) do so from the
//! entity's lifecycle hooks, through clients injected as the actor's context. Serializing
//! per actor is what makes a `react` call's read-decide-write atomic and a bulk status update
//! all-or-nothing.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Data ([`model`])
//! Entities, their create/update/query shapes and typed ids.
//!
//! ### 2. Actors ([`restaurant_actor`], [`customer_actor`], [`order_actor`], [`payment_actor`], [`comment_actor`], [`reaction_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) impls and each actor's error type.
//! - [`order_actor::lifecycle`] holds the order, delivery and payment status machines.
//! - [`reaction_actor::policy`] decides what a repeated reaction does.
//!
//! ### 3. Clients ([`clients`])
//! Typed wrappers over [`ResourceClient`](actor_framework::ResourceClient), e.g.
//! [`OrderClient::bulk_set_status`](clients::OrderClient::bulk_set_status) and
//! [`ReactionClient::react`](clients::ReactionClient::react).
//!
//! ### 4. Orchestration ([`lifecycle`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) spawns and wires the actors; cascading
//! deletes live on [`Clients`](lifecycle::Clients).
//!
//! ### 5. Surface ([`api`], [`config`])
//! The axum router and the YAML/environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RESTAURANT__REACTIONS__POLICY=toggle_only RESTAURANT__AUTH__ADMIN_TOKEN=s3cret cargo run
//! ```

#[macro_use]
mod macros;

pub mod api;
pub mod clients;
pub mod comment_actor;
pub mod config;
pub mod customer_actor;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment_actor;
pub mod reaction_actor;
pub mod restaurant_actor;

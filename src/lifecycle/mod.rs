//! Runtime wiring: spawning the actors, handing out their clients, cascading deletes
//! across them, and shutting them down.

pub mod cascade;
pub mod system;

pub use cascade::CascadeReport;
pub use system::{Clients, RestaurantSystem};

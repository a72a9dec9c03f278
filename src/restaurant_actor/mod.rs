//! # Restaurant Actors
//!
//! The catalog side of the system: restaurants, their menus, dishes and drivers. Each entity
//! type gets its own [`ResourceActor`]; all four share [`RestaurantError`].
//!
//! ## Structure
//!
//! - [`restaurant`] - [`ActorEntity`](actor_framework::ActorEntity) for [`Restaurant`], no dependencies
//! - [`menu`] - `Menu`, checks its restaurant exists (`Context = RestaurantClient`)
//! - [`dish`] - `Dish`, checks its menu exists and belongs to the same restaurant (`Context = MenuClient`)
//! - [`driver`] - `Driver`, checks its restaurant if it has one (`Context = RestaurantClient`)
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_orders::restaurant_actor;
//! use restaurant_orders::model::{MenuCreate, RestaurantCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (restaurant_actor, restaurants) = restaurant_actor::new(32);
//!     let (menu_actor, menus) = restaurant_actor::new_menus(32);
//!     tokio::spawn(restaurant_actor.run(()));
//!     tokio::spawn(menu_actor.run(restaurants.clone()));
//!
//!     let id = restaurants
//!         .create(RestaurantCreate { name: "Pho 24".into(), ..Default::default() })
//!         .await?;
//!     menus
//!         .create(MenuCreate { restaurant: id, name: "Lunch".into(), description: None })
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod dish;
pub mod driver;
pub mod error;
pub mod menu;
pub mod restaurant;

pub use error::*;

use crate::clients::{DishClient, DriverClient, MenuClient, RestaurantClient};
use crate::model::{Dish, Driver, Menu, Restaurant};
use actor_framework::ResourceActor;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(client))
}

/// Creates a new Menu actor and its client.
pub fn new_menus(buffer_size: usize) -> (ResourceActor<Menu>, MenuClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(client))
}

/// Creates a new Dish actor and its client.
pub fn new_dishes(buffer_size: usize) -> (ResourceActor<Dish>, DishClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, DishClient::new(client))
}

/// Creates a new Driver actor and its client.
pub fn new_drivers(buffer_size: usize) -> (ResourceActor<Driver>, DriverClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, DriverClient::new(client))
}

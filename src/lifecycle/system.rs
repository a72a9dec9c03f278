use crate::clients::*;
use crate::config::AppConfig;
use crate::order_actor::OrderContext;
use crate::{
    comment_actor, customer_actor, order_actor, payment_actor, reaction_actor, restaurant_actor,
};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// One client per entity actor.
///
/// Cheap to clone; the HTTP layer keeps a copy as its state. Cross-entity operations such as
/// [`delete_restaurant`](Clients::delete_restaurant) live here too.
#[derive(Clone)]
pub struct Clients {
    pub restaurants: RestaurantClient,
    pub menus: MenuClient,
    pub dishes: DishClient,
    pub drivers: DriverClient,
    pub customers: CustomerClient,
    pub addresses: AddressClient,
    pub orders: OrderClient,
    pub payments: PaymentClient,
    pub comments: CommentClient,
    pub reactions: ReactionClient,
}

/// The running actor system.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting every entity actor and stopping them again
/// - **Dependency Wiring**: giving each actor the clients its hooks consult
///
/// # Dependencies
///
/// ```text
/// restaurant  <- menu <- dish
/// restaurant  <- driver
/// customer, restaurant <- address, comment
/// customer, restaurant, address, driver <- order <- payment
/// comment, customer <- reaction
/// ```
///
/// The graph is acyclic, so once the outside clients are dropped each actor stops after
/// the actors holding its client have stopped.
///
/// # Example
///
/// ```rust
/// use restaurant_orders::config::AppConfig;
/// use restaurant_orders::lifecycle::RestaurantSystem;
/// use restaurant_orders::model::RestaurantCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RestaurantSystem::new(&AppConfig::default());
///     let id = system
///         .clients
///         .restaurants
///         .create(RestaurantCreate { name: "Pho 24".into(), ..Default::default() })
///         .await?;
///     system.clients.delete_restaurant(id).await?;
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RestaurantSystem {
    pub clients: Clients,
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Spawns every actor with its context. Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let buffer = config.actors.buffer_size;
        let policy = config.reactions.policy;

        let (restaurant_actor, restaurants) = restaurant_actor::new(buffer);
        let (menu_actor, menus) = restaurant_actor::new_menus(buffer);
        let (dish_actor, dishes) = restaurant_actor::new_dishes(buffer);
        let (driver_actor, drivers) = restaurant_actor::new_drivers(buffer);
        let (customer_actor, customers) = customer_actor::new(buffer);
        let (address_actor, addresses) = customer_actor::new_addresses(buffer);
        let (order_actor, orders) = order_actor::new(buffer, dishes.clone());
        let (payment_actor, payments) = payment_actor::new(buffer);
        let (comment_actor, comments) = comment_actor::new(buffer);
        let (reaction_actor, reactions) = reaction_actor::new(buffer, policy);

        let handles = vec![
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(menu_actor.run(restaurants.clone())),
            tokio::spawn(dish_actor.run(menus.clone())),
            tokio::spawn(driver_actor.run(restaurants.clone())),
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(address_actor.run((customers.clone(), restaurants.clone()))),
            tokio::spawn(order_actor.run(OrderContext {
                customers: customers.clone(),
                restaurants: restaurants.clone(),
                addresses: addresses.clone(),
                drivers: drivers.clone(),
            })),
            tokio::spawn(payment_actor.run(orders.clone())),
            tokio::spawn(comment_actor.run((customers.clone(), restaurants.clone()))),
            tokio::spawn(reaction_actor.run(comments.clone(), customers.clone())),
        ];
        info!(actors = handles.len(), ?policy, "System started");

        Self {
            clients: Clients {
                restaurants,
                menus,
                dishes,
                drivers,
                customers,
                addresses,
                orders,
                payments,
                comments,
                reactions,
            },
            handles,
        }
    }

    /// Drops the clients and waits for every actor to finish.
    ///
    /// Clones of [`Clients`] handed out earlier must be dropped first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.clients);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

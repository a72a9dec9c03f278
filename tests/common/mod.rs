#![allow(dead_code)]

use restaurant_orders::config::AppConfig;
use restaurant_orders::lifecycle::RestaurantSystem;
use restaurant_orders::model::*;
use restaurant_orders::reaction_actor::ReactionPolicy;
use rust_decimal::Decimal;

/// A running system with one restaurant's worth of data.
pub struct Fixture {
    pub system: RestaurantSystem,
    pub restaurant: RestaurantId,
    pub menu: MenuId,
    /// 9.50 USD
    pub pho: DishId,
    /// 4.25 USD
    pub rolls: DishId,
    pub customer: CustomerId,
    pub address: AddressId,
    pub driver: DriverId,
    pub comment: CommentId,
}

pub fn config(policy: ReactionPolicy) -> AppConfig {
    let mut config = AppConfig::default();
    config.actors.buffer_size = 16;
    config.reactions.policy = policy;
    config
}

pub async fn fixture() -> Fixture {
    fixture_with(config(ReactionPolicy::default())).await
}

pub async fn fixture_with(config: AppConfig) -> Fixture {
    let system = RestaurantSystem::new(&config);
    let c = &system.clients;

    let restaurant = c
        .restaurants
        .create(RestaurantCreate {
            name: "Pho 24".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let menu = c
        .menus
        .create(MenuCreate {
            restaurant,
            name: "All day".into(),
            description: None,
        })
        .await
        .unwrap();
    let pho = add_dish(&system, restaurant, menu, "Pho bo", Decimal::new(950, 2)).await;
    let rolls = add_dish(&system, restaurant, menu, "Spring rolls", Decimal::new(425, 2)).await;
    let customer = add_customer(&system, "An", "an@example.com").await;
    let address = c
        .addresses
        .create(AddressCreate {
            customer: Some(customer),
            street: "12 Ly Tu Trong".into(),
            city: Some("Saigon".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let driver = c
        .drivers
        .create(DriverCreate {
            restaurant: Some(restaurant),
            first_name: "Linh".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let comment = c
        .comments
        .create(CommentCreate {
            customer,
            restaurant,
            text: "Best broth in town".into(),
            rating: Some(5),
        })
        .await
        .unwrap();

    Fixture {
        system,
        restaurant,
        menu,
        pho,
        rolls,
        customer,
        address,
        driver,
        comment,
    }
}

pub async fn add_dish(
    system: &RestaurantSystem,
    restaurant: RestaurantId,
    menu: MenuId,
    name: &str,
    price: Decimal,
) -> DishId {
    system
        .clients
        .dishes
        .create(DishCreate {
            menu,
            restaurant,
            name: name.into(),
            description: None,
            price,
            currency: None,
            prep_time_minutes: None,
        })
        .await
        .unwrap()
}

pub async fn add_customer(system: &RestaurantSystem, name: &str, email: &str) -> CustomerId {
    system
        .clients
        .customers
        .create(CustomerCreate {
            first_name: name.into(),
            email: Some(email.into()),
            ..Default::default()
        })
        .await
        .unwrap()
}

pub fn order_request(f: &Fixture, items: &[(DishId, u32)]) -> PlaceOrder {
    PlaceOrder {
        customer: f.customer,
        restaurant: f.restaurant,
        delivery_address: Some(f.address),
        currency: None,
        notes: None,
        expected_total: None,
        items: items
            .iter()
            .map(|&(dish, quantity)| OrderLine { dish, quantity })
            .collect(),
    }
}

pub async fn place(f: &Fixture, items: &[(DishId, u32)]) -> Order {
    f.system
        .clients
        .orders
        .place_order(order_request(f, items))
        .await
        .unwrap()
}

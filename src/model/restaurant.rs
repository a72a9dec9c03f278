//! Restaurants and their catalog: menus and dishes.

use super::contains_ci;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

define_id!(Restaurant, "restaurant");
define_id!(Menu, "menu");
define_id!(Dish, "dish");

/// A restaurant. Owns its menus, dishes, drivers, addresses, comments and orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    /// 0.00 to 5.00.
    pub rating: Option<Decimal>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub rating: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub rating: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// `search` matches name, description, phone and email, ignoring case.
#[derive(Debug, Clone, Default)]
pub struct RestaurantQuery {
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl RestaurantQuery {
    pub fn matches(&self, r: &Restaurant) -> bool {
        let search_ok = self.search.as_deref().map_or(true, |term| {
            let term = term.to_lowercase();
            contains_ci(Some(&r.name), &term)
                || contains_ci(r.description.as_deref(), &term)
                || contains_ci(r.phone.as_deref(), &term)
                || contains_ci(r.email.as_deref(), &term)
        });
        search_ok && self.is_active.map_or(true, |a| a == r.is_active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: MenuId,
    pub restaurant: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub restaurant: RestaurantId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct MenuQuery {
    pub restaurant: Option<RestaurantId>,
}

impl MenuQuery {
    pub fn matches(&self, m: &Menu) -> bool {
        self.restaurant.map_or(true, |r| r == m.restaurant)
    }
}

/// A dish on a menu. `restaurant` always equals the menu's restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    pub menu: MenuId,
    pub restaurant: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
    pub is_available: bool,
    pub prep_time_minutes: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCreate {
    pub menu: MenuId,
    pub restaurant: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: Option<String>,
    pub prep_time_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
    pub prep_time_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct DishQuery {
    pub restaurant: Option<RestaurantId>,
    pub menu: Option<MenuId>,
    pub is_available: Option<bool>,
}

impl DishQuery {
    pub fn matches(&self, d: &Dish) -> bool {
        self.restaurant.map_or(true, |r| r == d.restaurant)
            && self.menu.map_or(true, |m| m == d.menu)
            && self.is_available.map_or(true, |a| a == d.is_available)
    }
}

//! Orders, their line items and their delivery.
//!
//! Items and the delivery are embedded in the [`Order`]: an order always has exactly one
//! delivery, and line items never outlive their order.

use super::{AddressId, CustomerId, DishId, DriverId, RestaurantId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

define_id!(Order, "order");

/// `Pending → Processing → Delivered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
}

impl OrderStatus {
    /// Legacy integer code, for reporting only.
    pub fn code(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Delivered => 2,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(s)
    }
}

/// `Waiting → Assigned → Picked → Delivered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    #[default]
    Waiting,
    Assigned,
    Picked,
    Delivered,
}

impl DeliveryStatus {
    /// Legacy integer code, for reporting only.
    pub fn code(self) -> u8 {
        match self {
            DeliveryStatus::Waiting => 0,
            DeliveryStatus::Assigned => 1,
            DeliveryStatus::Picked => 2,
            DeliveryStatus::Delivered => 3,
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DeliveryStatus::Waiting => "waiting",
            DeliveryStatus::Assigned => "assigned",
            DeliveryStatus::Picked => "picked",
            DeliveryStatus::Delivered => "delivered",
        };
        f.write_str(s)
    }
}

/// A line of an order. Name and unit price are copied from the dish when the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// `None` once the dish has been removed from the catalog.
    pub dish: Option<DishId>,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub driver: Option<DriverId>,
    pub status: DeliveryStatus,
    pub assigned_at: Option<DateTime<Utc>>,
    pub picked_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub eta_minutes: Option<u32>,
    /// Free-form payload from the courier integration.
    pub tracking_info: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Delivery {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            driver: None,
            status: DeliveryStatus::Waiting,
            assigned_at: None,
            picked_at: None,
            delivered_at: None,
            eta_minutes: None,
            tracking_info: None,
            created_at: at,
            updated_at: at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: CustomerId,
    pub restaurant: RestaurantId,
    pub delivery_address: Option<AddressId>,
    pub items: Vec<OrderItem>,
    /// Sum of the item totals at placement. Stored, never re-derived.
    pub total_amount: Decimal,
    pub currency: String,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub delivery: Delivery,
    pub placed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One requested line: which dish and how many.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(rename = "dishId")]
    pub dish: DishId,
    pub quantity: u32,
}

/// An order as a customer submits it.
///
/// Prices are not part of the request; they are read from the dishes. When `expected_total`
/// is given it must match the computed total exactly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    #[serde(rename = "customerId")]
    pub customer: CustomerId,
    #[serde(rename = "restaurantId")]
    pub restaurant: RestaurantId,
    #[serde(rename = "deliveryAddressId")]
    pub delivery_address: Option<AddressId>,
    pub currency: Option<String>,
    pub notes: Option<String>,
    pub expected_total: Option<Decimal>,
    pub items: Vec<OrderLine>,
}

/// A line with the dish's name and price copied in.
#[derive(Debug, Clone)]
pub struct PricedLine {
    pub dish: DishId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Create payload for the order actor: a [`PlaceOrder`] after its dishes were priced.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: CustomerId,
    pub restaurant: RestaurantId,
    pub delivery_address: Option<AddressId>,
    pub currency: String,
    pub notes: Option<String>,
    pub expected_total: Option<Decimal>,
    pub lines: Vec<PricedLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub notes: Option<String>,
    #[serde(rename = "deliveryAddressId")]
    pub delivery_address: Option<AddressId>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub customer: Option<CustomerId>,
    pub restaurant: Option<RestaurantId>,
    pub status: Option<OrderStatus>,
    /// Orders with at least one item referencing the dish.
    pub dish: Option<DishId>,
    pub driver: Option<DriverId>,
    pub delivery_address: Option<AddressId>,
}

impl OrderQuery {
    pub fn matches(&self, o: &Order) -> bool {
        self.customer.map_or(true, |c| c == o.customer)
            && self.restaurant.map_or(true, |r| r == o.restaurant)
            && self.status.map_or(true, |s| s == o.status)
            && self
                .dish
                .map_or(true, |d| o.items.iter().any(|i| i.dish == Some(d)))
            && self.driver.map_or(true, |d| o.delivery.driver == Some(d))
            && self
                .delivery_address
                .map_or(true, |a| o.delivery_address == Some(a))
    }
}

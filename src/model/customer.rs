//! Customers and the addresses orders are delivered to.

use super::{contains_ci, RestaurantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_id!(Customer, "customer");
define_id!(Address, "address");

/// A customer. `email`, when present, is unique ignoring case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

/// `search` matches first name, last name, email and phone, ignoring case.
#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl CustomerQuery {
    pub fn matches(&self, c: &Customer) -> bool {
        let search_ok = self.search.as_deref().map_or(true, |term| {
            let term = term.to_lowercase();
            contains_ci(Some(&c.first_name), &term)
                || contains_ci(c.last_name.as_deref(), &term)
                || contains_ci(c.email.as_deref(), &term)
                || contains_ci(c.phone.as_deref(), &term)
        });
        search_ok && self.is_active.map_or(true, |a| a == c.is_active)
    }
}

/// A postal address belonging to a customer, a restaurant, or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub customer: Option<CustomerId>,
    pub restaurant: Option<RestaurantId>,
    pub label: Option<String>,
    pub street: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreate {
    pub customer: Option<CustomerId>,
    pub restaurant: Option<RestaurantId>,
    pub label: Option<String>,
    pub street: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    pub label: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct AddressQuery {
    pub customer: Option<CustomerId>,
    pub restaurant: Option<RestaurantId>,
}

impl AddressQuery {
    pub fn matches(&self, a: &Address) -> bool {
        self.customer.map_or(true, |c| a.customer == Some(c))
            && self.restaurant.map_or(true, |r| a.restaurant == Some(r))
    }
}

use super::RestaurantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_id!(Driver, "driver");

/// A delivery driver, optionally attached to a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: DriverId,
    pub restaurant: Option<RestaurantId>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_info: Option<String>,
    pub is_active: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCreate {
    pub restaurant: Option<RestaurantId>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_info: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_info: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct DriverQuery {
    pub restaurant: Option<RestaurantId>,
    pub is_active: Option<bool>,
}

impl DriverQuery {
    pub fn matches(&self, d: &Driver) -> bool {
        self.restaurant.map_or(true, |r| d.restaurant == Some(r))
            && self.is_active.map_or(true, |a| a == d.is_active)
    }
}

/// Custom actions for drivers.
#[derive(Debug, Clone)]
pub enum DriverAction {
    /// Records the driver's current position.
    UpdateLocation { latitude: f64, longitude: f64 },
}

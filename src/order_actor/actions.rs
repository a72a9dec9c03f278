//! Custom actions for the Order actor.
//!
//! Every action that changes state carries its timestamp so that a batch applied through
//! `perform_many` stamps all of its orders identically.

use crate::model::{AddressId, DishId, DriverId, OrderStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to `status`. Delivering the order also completes its delivery.
    SetStatus {
        status: OrderStatus,
        at: DateTime<Utc>,
    },
    /// Puts a driver on the delivery. The order must be `Processing` and the driver active.
    AssignDriver { driver: DriverId, at: DateTime<Utc> },
    MarkPicked { at: DateTime<Utc> },
    /// Completes the delivery and the order with it.
    MarkDelivered { at: DateTime<Utc> },
    /// Replaces the ETA and tracking payload. `None` leaves a field unchanged.
    UpdateTracking {
        eta_minutes: Option<u32>,
        tracking_info: Option<serde_json::Value>,
        at: DateTime<Utc>,
    },
    /// The dish left the catalog; items keep their snapshot but lose the reference.
    DetachDish(DishId),
    DetachDriver(DriverId),
    DetachAddress(AddressId),
}

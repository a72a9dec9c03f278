use super::OrderId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

define_id!(Payment, "payment");

/// `Pending → Completed | Failed`. Both outcomes are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    /// Legacy integer code, for reporting only.
    pub fn code(self) -> u8 {
        match self {
            PaymentStatus::Pending => 0,
            PaymentStatus::Completed => 1,
            PaymentStatus::Failed => 2,
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A payment attempt for an order. Retries create new payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub order: OrderId,
    pub provider: String,
    pub amount: Decimal,
    pub currency: String,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub order: OrderId,
    pub provider: String,
    pub amount: Decimal,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentQuery {
    pub order: Option<OrderId>,
    pub status: Option<PaymentStatus>,
}

impl PaymentQuery {
    pub fn for_order(order: OrderId) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    pub fn matches(&self, p: &Payment) -> bool {
        self.order.map_or(true, |o| o == p.order) && self.status.map_or(true, |s| s == p.status)
    }
}

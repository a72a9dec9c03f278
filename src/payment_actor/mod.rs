//! # Payment Actor
//!
//! Payments against orders. An order can collect several payments (one per attempt); each
//! payment settles exactly once, as completed or failed.

pub mod error;

pub use error::*;

use crate::clients::{OrderClient, PaymentClient};
use crate::model::{
    check_money, normalize_currency, required, Payment, PaymentCreate, PaymentId, PaymentQuery,
    PaymentStatus, PaymentUpdate, DEFAULT_CURRENCY, TOTAL_DIGITS,
};
use crate::order_actor::lifecycle::payment_transition;
use actor_framework::{ActorEntity, ResourceActor};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Settles a pending payment.
#[derive(Debug, Clone)]
pub enum PaymentAction {
    /// Stamps `paid_at` and records the provider's transaction id.
    Complete {
        transaction_id: Option<String>,
        at: DateTime<Utc>,
    },
    Fail { at: DateTime<Utc> },
}

/// Creates a new Payment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Payment>, PaymentClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, PaymentClient::new(client))
}

#[async_trait]
impl ActorEntity for Payment {
    type Id = PaymentId;
    type Create = PaymentCreate;
    type Update = PaymentUpdate;
    type Action = PaymentAction;
    type ActionResult = Payment;
    type Query = PaymentQuery;
    type Key = ();
    type Context = OrderClient;
    type Error = PaymentError;

    fn from_create_params(id: PaymentId, params: PaymentCreate) -> Result<Self, Self::Error> {
        if params.amount <= Decimal::ZERO {
            return Err(PaymentError::ValidationError(format!(
                "amount must be positive, got {}",
                params.amount
            )));
        }
        let currency = normalize_currency(params.currency.as_deref().unwrap_or(DEFAULT_CURRENCY))
            .map_err(PaymentError::ValidationError)?;
        let now = Utc::now();
        Ok(Self {
            id,
            order: params.order,
            provider: required("provider", &params.provider).map_err(PaymentError::ValidationError)?,
            amount: check_money("amount", params.amount, TOTAL_DIGITS)
                .map_err(PaymentError::ValidationError)?,
            currency,
            status: PaymentStatus::Pending,
            transaction_id: None,
            paid_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &PaymentQuery) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, orders: &OrderClient) -> Result<(), Self::Error> {
        orders.fetch(self.order).await?;
        Ok(())
    }

    async fn on_update(&mut self, update: PaymentUpdate, _ctx: &OrderClient) -> Result<(), Self::Error> {
        if self.status != PaymentStatus::Pending {
            return Err(PaymentError::ValidationError(format!(
                "{} is {} and can no longer be edited",
                self.id, self.status
            )));
        }
        if let Some(provider) = update.provider {
            self.provider = required("provider", &provider).map_err(PaymentError::ValidationError)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PaymentAction,
        _ctx: &OrderClient,
    ) -> Result<Payment, Self::Error> {
        match action {
            PaymentAction::Complete { transaction_id, at } => {
                self.status = payment_transition(self.status, PaymentStatus::Completed)?;
                self.transaction_id = transaction_id;
                self.paid_at = Some(at);
                self.updated_at = at;
            }
            PaymentAction::Fail { at } => {
                self.status = payment_transition(self.status, PaymentStatus::Failed)?;
                self.updated_at = at;
            }
        }
        Ok(self.clone())
    }
}

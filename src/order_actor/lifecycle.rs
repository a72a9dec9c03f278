//! Status machines for orders, deliveries and payments.
//!
//! Each function takes the current and requested status and either returns the new status
//! or an [`InvalidTransition`]. The matches are written out per state so adding a status
//! forces every machine to be revisited.

use crate::model::{DeliveryStatus, OrderStatus, PaymentStatus};
use std::fmt::Display;
use thiserror::Error;

/// A status change the machine does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} cannot move from {from} to {to}")]
pub struct InvalidTransition {
    pub entity: &'static str,
    pub from: String,
    pub to: String,
}

impl InvalidTransition {
    fn new(entity: &'static str, from: impl Display, to: impl Display) -> Self {
        Self {
            entity,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// `Pending → Processing → Delivered`. Re-applying the current status is allowed.
pub fn order_transition(from: OrderStatus, to: OrderStatus) -> Result<OrderStatus, InvalidTransition> {
    use OrderStatus::*;
    match (from, to) {
        (Pending, Pending) | (Processing, Processing) | (Delivered, Delivered) => Ok(to),
        (Pending, Processing) | (Processing, Delivered) => Ok(to),
        (Pending, Delivered) | (Processing, Pending) | (Delivered, Pending | Processing) => {
            Err(InvalidTransition::new("order", from, to))
        }
    }
}

/// `Waiting → Assigned → Picked → Delivered`, one step at a time.
pub fn delivery_transition(
    from: DeliveryStatus,
    to: DeliveryStatus,
) -> Result<DeliveryStatus, InvalidTransition> {
    use DeliveryStatus::*;
    match (from, to) {
        (Waiting, Assigned) | (Assigned, Picked) | (Picked, Delivered) => Ok(to),
        (Waiting, Waiting | Picked | Delivered)
        | (Assigned, Waiting | Assigned | Delivered)
        | (Picked, Waiting | Assigned | Picked)
        | (Delivered, _) => Err(InvalidTransition::new("delivery", from, to)),
    }
}

/// `Pending → Completed | Failed`. Both outcomes are final.
pub fn payment_transition(
    from: PaymentStatus,
    to: PaymentStatus,
) -> Result<PaymentStatus, InvalidTransition> {
    use PaymentStatus::*;
    match (from, to) {
        (Pending, Completed | Failed) => Ok(to),
        (Pending, Pending) | (Completed | Failed, _) => {
            Err(InvalidTransition::new("payment", from, to))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_moves_forward_one_step() {
        assert_eq!(
            order_transition(OrderStatus::Pending, OrderStatus::Processing),
            Ok(OrderStatus::Processing)
        );
        assert_eq!(
            order_transition(OrderStatus::Processing, OrderStatus::Delivered),
            Ok(OrderStatus::Delivered)
        );
    }

    #[test]
    fn order_status_can_be_reapplied() {
        for s in [OrderStatus::Pending, OrderStatus::Processing, OrderStatus::Delivered] {
            assert_eq!(order_transition(s, s), Ok(s));
        }
    }

    #[test]
    fn order_cannot_skip_or_go_back() {
        let err = order_transition(OrderStatus::Pending, OrderStatus::Delivered).unwrap_err();
        assert_eq!(err.to_string(), "order cannot move from pending to delivered");
        assert!(order_transition(OrderStatus::Delivered, OrderStatus::Processing).is_err());
        assert!(order_transition(OrderStatus::Processing, OrderStatus::Pending).is_err());
    }

    #[test]
    fn delivery_is_strictly_sequential() {
        use DeliveryStatus::*;
        let all = [Waiting, Assigned, Picked, Delivered];
        for from in all {
            for to in all {
                let allowed = to.code() == from.code() + 1;
                assert_eq!(delivery_transition(from, to).is_ok(), allowed, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn payment_outcomes_are_final() {
        use PaymentStatus::*;
        assert_eq!(payment_transition(Pending, Completed), Ok(Completed));
        assert_eq!(payment_transition(Pending, Failed), Ok(Failed));
        assert!(payment_transition(Completed, Failed).is_err());
        assert!(payment_transition(Failed, Completed).is_err());
        assert!(payment_transition(Pending, Pending).is_err());
    }
}

use crate::model::*;
use crate::payment_actor::{PaymentAction, PaymentError};
use chrono::Utc;
use tracing::{info, instrument};

entity_client!(Payment, PaymentError);

impl PaymentClient {
    #[instrument(skip(self))]
    pub async fn complete(
        &self,
        id: PaymentId,
        transaction_id: Option<String>,
    ) -> Result<Payment, PaymentError> {
        let action = PaymentAction::Complete {
            transaction_id,
            at: Utc::now(),
        };
        let payment = self.inner.perform_action(id, action).await?;
        info!(%id, order = %payment.order, "Payment completed");
        Ok(payment)
    }

    #[instrument(skip(self))]
    pub async fn fail(&self, id: PaymentId) -> Result<Payment, PaymentError> {
        let payment = self
            .inner
            .perform_action(id, PaymentAction::Fail { at: Utc::now() })
            .await?;
        info!(%id, order = %payment.order, "Payment failed");
        Ok(payment)
    }

    /// Every payment attempt for `order`, oldest first.
    #[instrument(skip(self))]
    pub async fn for_order(&self, order: OrderId) -> Result<Vec<Payment>, PaymentError> {
        Ok(self.inner.list(PaymentQuery::for_order(order)).await?)
    }
}

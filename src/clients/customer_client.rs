use crate::customer_actor::CustomerError;
use crate::model::*;
use tracing::instrument;

entity_client!(Customer, CustomerError);
entity_client!(Address, CustomerError);

impl CustomerClient {
    /// Customers whose name, email or phone contains `term`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Customer>, CustomerError> {
        let query = CustomerQuery {
            search: Some(term.to_string()),
            is_active: None,
        };
        Ok(self.inner.list(query).await?)
    }
}

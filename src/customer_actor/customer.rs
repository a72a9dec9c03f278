//! [`ActorEntity`] implementation for [`Customer`].

use super::CustomerError;
use crate::model::{required, Customer, CustomerCreate, CustomerId, CustomerQuery, CustomerUpdate, NoAction};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn normalize_email(email: &str) -> Result<String, CustomerError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email.to_string()),
        _ => Err(CustomerError::ValidationError(format!("invalid email '{}'", email))),
    }
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Query = CustomerQuery;
    /// Lower-cased email.
    type Key = String;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            first_name: required("first name", &params.first_name)
                .map_err(CustomerError::ValidationError)?,
            last_name: params.last_name,
            phone: params.phone,
            email: params.email.as_deref().map(normalize_email).transpose()?,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &CustomerQuery) -> bool {
        query.matches(self)
    }

    fn key(&self) -> Option<String> {
        self.email.as_ref().map(|e| e.to_lowercase())
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(first_name) = update.first_name {
            self.first_name =
                required("first name", &first_name).map_err(CustomerError::ValidationError)?;
        }
        if let Some(email) = update.email {
            self.email = Some(normalize_email(&email)?);
        }
        if let Some(last_name) = update.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_key_ignores_case() {
        let c = Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                first_name: "An".into(),
                email: Some(" An.Nguyen@Example.com ".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(c.email.as_deref(), Some("An.Nguyen@Example.com"));
        assert_eq!(c.key().as_deref(), Some("an.nguyen@example.com"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["nobody", "@example.com", "a@localhost"] {
            let err = Customer::from_create_params(
                CustomerId(1),
                CustomerCreate {
                    first_name: "An".into(),
                    email: Some(email.into()),
                    ..Default::default()
                },
            );
            assert!(matches!(err, Err(CustomerError::ValidationError(_))), "{email}");
        }
    }

    #[test]
    fn customers_without_email_have_no_key() {
        let c = Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                first_name: "Binh".into(),
                last_name: Some("Tran".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(c.key(), None);
        assert_eq!(c.full_name(), "Binh Tran");
    }
}

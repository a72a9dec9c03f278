//! [`ActorEntity`] implementation for [`Restaurant`].

use super::RestaurantError;
use crate::model::{
    required, NoAction, Restaurant, RestaurantCreate, RestaurantId, RestaurantQuery,
    RestaurantUpdate,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

fn validate_rating(rating: Decimal) -> Result<Decimal, RestaurantError> {
    if rating < Decimal::ZERO || rating > Decimal::from(5) {
        return Err(RestaurantError::ValidationError(format!(
            "rating must be between 0 and 5, got {}",
            rating
        )));
    }
    Ok(rating.round_dp(2))
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Query = RestaurantQuery;
    type Key = ();
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        let name = required("name", &params.name).map_err(RestaurantError::ValidationError)?;
        let rating = params.rating.map(validate_rating).transpose()?;
        let now = Utc::now();
        Ok(Self {
            id,
            name,
            phone: params.phone,
            email: params.email,
            description: params.description,
            rating,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &RestaurantQuery) -> bool {
        query.matches(self)
    }

    async fn on_update(
        &mut self,
        update: RestaurantUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = required("name", &name).map_err(RestaurantError::ValidationError)?;
        }
        if let Some(rating) = update.rating {
            self.rating = Some(validate_rating(rating)?);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: NoAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

//! [`ActorEntity`] implementation for [`Menu`].

use super::RestaurantError;
use crate::clients::RestaurantClient;
use crate::model::{required, Menu, MenuCreate, MenuId, MenuQuery, MenuUpdate, NoAction};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Menu {
    type Id = MenuId;
    type Create = MenuCreate;
    type Update = MenuUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Query = MenuQuery;
    type Key = ();
    type Context = RestaurantClient;
    type Error = RestaurantError;

    fn from_create_params(id: MenuId, params: MenuCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            restaurant: params.restaurant,
            name: required("name", &params.name).map_err(RestaurantError::ValidationError)?,
            description: params.description,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &MenuQuery) -> bool {
        query.matches(self)
    }

    /// The owning restaurant must exist.
    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        restaurants.fetch(self.restaurant).await?;
        Ok(())
    }

    async fn on_update(&mut self, update: MenuUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = required("name", &name).map_err(RestaurantError::ValidationError)?;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match action {}
    }
}

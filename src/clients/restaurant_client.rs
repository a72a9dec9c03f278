use crate::model::*;
use crate::restaurant_actor::RestaurantError;
use tracing::instrument;

entity_client!(Restaurant, RestaurantError);
entity_client!(Menu, RestaurantError);
entity_client!(Dish, RestaurantError);
entity_client!(Driver, RestaurantError);

impl RestaurantClient {
    /// Restaurants whose name, description, phone or email contains `term`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Restaurant>, RestaurantError> {
        let query = RestaurantQuery {
            search: Some(term.to_string()),
            is_active: None,
        };
        Ok(self.inner.list(query).await?)
    }
}

impl DriverClient {
    #[instrument(skip(self))]
    pub async fn update_location(
        &self,
        id: DriverId,
        latitude: f64,
        longitude: f64,
    ) -> Result<Driver, RestaurantError> {
        let action = DriverAction::UpdateLocation {
            latitude,
            longitude,
        };
        Ok(self.inner.perform_action(id, action).await?)
    }
}

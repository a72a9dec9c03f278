//! [`ActorEntity`] implementation for [`Driver`].

use super::RestaurantError;
use crate::clients::RestaurantClient;
use crate::model::{required, Driver, DriverAction, DriverCreate, DriverId, DriverQuery, DriverUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Driver {
    type Id = DriverId;
    type Create = DriverCreate;
    type Update = DriverUpdate;
    type Action = DriverAction;
    type ActionResult = Driver;
    type Query = DriverQuery;
    type Key = ();
    type Context = RestaurantClient;
    type Error = RestaurantError;

    fn from_create_params(id: DriverId, params: DriverCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            restaurant: params.restaurant,
            first_name: required("first name", &params.first_name)
                .map_err(RestaurantError::ValidationError)?,
            last_name: params.last_name,
            phone: params.phone,
            vehicle_info: params.vehicle_info,
            is_active: true,
            latitude: None,
            longitude: None,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &DriverQuery) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        if let Some(restaurant) = self.restaurant {
            restaurants.fetch(restaurant).await?;
        }
        Ok(())
    }

    async fn on_update(&mut self, update: DriverUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if let Some(first_name) = update.first_name {
            self.first_name =
                required("first name", &first_name).map_err(RestaurantError::ValidationError)?;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(vehicle_info) = update.vehicle_info {
            self.vehicle_info = Some(vehicle_info);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    /// # Actions
    /// - `UpdateLocation`: stores a new position after checking coordinate bounds
    async fn handle_action(
        &mut self,
        action: DriverAction,
        _ctx: &Self::Context,
    ) -> Result<Driver, Self::Error> {
        match action {
            DriverAction::UpdateLocation { latitude, longitude } => {
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(RestaurantError::ValidationError(format!(
                        "coordinates out of range: ({}, {})",
                        latitude, longitude
                    )));
                }
                self.latitude = Some(latitude);
                self.longitude = Some(longitude);
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    fn driver() -> Driver {
        Driver::from_create_params(
            DriverId(1),
            DriverCreate {
                first_name: "Linh".into(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn location_is_bounds_checked() {
        let mock = MockClient::<crate::model::Restaurant>::new();
        let ctx = RestaurantClient::new(mock.client());
        let mut d = driver();

        let moved = d
            .handle_action(
                DriverAction::UpdateLocation {
                    latitude: 10.77,
                    longitude: 106.70,
                },
                &ctx,
            )
            .await
            .unwrap();
        assert_eq!(moved.latitude, Some(10.77));

        let err = d
            .handle_action(
                DriverAction::UpdateLocation {
                    latitude: 91.0,
                    longitude: 0.0,
                },
                &ctx,
            )
            .await;
        assert!(matches!(err, Err(RestaurantError::ValidationError(_))));
        assert_eq!(d.longitude, Some(106.70));
    }
}

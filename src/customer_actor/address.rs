//! [`ActorEntity`] implementation for [`Address`].

use super::CustomerError;
use crate::clients::{CustomerClient, RestaurantClient};
use crate::model::{required, Address, AddressCreate, AddressId, AddressQuery, AddressUpdate, NoAction};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

/// Owners an address can point at.
pub type AddressContext = (CustomerClient, RestaurantClient);

fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), CustomerError> {
    let lat_ok = latitude.map_or(true, |l| (-90.0..=90.0).contains(&l));
    let lon_ok = longitude.map_or(true, |l| (-180.0..=180.0).contains(&l));
    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(CustomerError::ValidationError(format!(
            "coordinates out of range: ({:?}, {:?})",
            latitude, longitude
        )))
    }
}

#[async_trait]
impl ActorEntity for Address {
    type Id = AddressId;
    type Create = AddressCreate;
    type Update = AddressUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Query = AddressQuery;
    type Key = ();
    type Context = AddressContext;
    type Error = CustomerError;

    fn from_create_params(id: AddressId, params: AddressCreate) -> Result<Self, Self::Error> {
        check_coordinates(params.latitude, params.longitude)?;
        Ok(Self {
            id,
            customer: params.customer,
            restaurant: params.restaurant,
            label: params.label,
            street: required("street", &params.street).map_err(CustomerError::ValidationError)?,
            city: params.city,
            region: params.region,
            postal_code: params.postal_code,
            country: params.country,
            latitude: params.latitude,
            longitude: params.longitude,
            created_at: Utc::now(),
        })
    }

    fn matches(&self, query: &AddressQuery) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, ctx: &AddressContext) -> Result<(), Self::Error> {
        let (customers, restaurants) = ctx;
        if let Some(customer) = self.customer {
            customers.fetch(customer).await?;
        }
        if let Some(restaurant) = self.restaurant {
            restaurants.fetch(restaurant).await?;
        }
        Ok(())
    }

    async fn on_update(&mut self, update: AddressUpdate, _ctx: &AddressContext) -> Result<(), Self::Error> {
        if let Some(street) = update.street {
            self.street = required("street", &street).map_err(CustomerError::ValidationError)?;
        }
        if update.latitude.is_some() || update.longitude.is_some() {
            let latitude = update.latitude.or(self.latitude);
            let longitude = update.longitude.or(self.longitude);
            check_coordinates(latitude, longitude)?;
            self.latitude = latitude;
            self.longitude = longitude;
        }
        if let Some(label) = update.label {
            self.label = Some(label);
        }
        if let Some(city) = update.city {
            self.city = Some(city);
        }
        if let Some(region) = update.region {
            self.region = Some(region);
        }
        if let Some(postal_code) = update.postal_code {
            self.postal_code = Some(postal_code);
        }
        if let Some(country) = update.country {
            self.country = Some(country);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &AddressContext) -> Result<(), Self::Error> {
        match action {}
    }
}

//! [`ActorEntity`] implementation for [`Dish`].
//!
//! A dish records both its menu and its restaurant so orders can check ownership without a
//! second lookup. [`on_create`](ActorEntity::on_create) keeps the two consistent.

use super::RestaurantError;
use crate::clients::MenuClient;
use crate::model::{
    check_money, normalize_currency, required, Dish, DishCreate, DishId, DishQuery, DishUpdate,
    NoAction, DEFAULT_CURRENCY, PRICE_DIGITS,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

fn validate_price(price: Decimal) -> Result<Decimal, RestaurantError> {
    if price <= Decimal::ZERO {
        return Err(RestaurantError::ValidationError(format!(
            "price must be positive, got {}",
            price
        )));
    }
    check_money("price", price, PRICE_DIGITS).map_err(RestaurantError::ValidationError)
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Query = DishQuery;
    type Key = ();
    type Context = MenuClient;
    type Error = RestaurantError;

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, Self::Error> {
        let currency = normalize_currency(params.currency.as_deref().unwrap_or(DEFAULT_CURRENCY))
            .map_err(RestaurantError::ValidationError)?;
        let now = Utc::now();
        Ok(Self {
            id,
            menu: params.menu,
            restaurant: params.restaurant,
            name: required("name", &params.name).map_err(RestaurantError::ValidationError)?,
            description: params.description,
            price: validate_price(params.price)?,
            currency,
            is_available: true,
            prep_time_minutes: params.prep_time_minutes,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &DishQuery) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, menus: &MenuClient) -> Result<(), Self::Error> {
        let menu = menus.fetch(self.menu).await?;
        if menu.restaurant != self.restaurant {
            return Err(RestaurantError::ValidationError(format!(
                "{} belongs to {}, not {}",
                menu.id, menu.restaurant, self.restaurant
            )));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = required("name", &name).map_err(RestaurantError::ValidationError)?;
        }
        if let Some(price) = update.price {
            self.price = validate_price(price)?;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(is_available) = update.is_available {
            self.is_available = is_available;
        }
        if let Some(minutes) = update.prep_time_minutes {
            self.prep_time_minutes = Some(minutes);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuId, RestaurantId};

    fn params(price: Decimal, currency: Option<&str>) -> DishCreate {
        DishCreate {
            menu: MenuId(1),
            restaurant: RestaurantId(1),
            name: "Bun cha".into(),
            description: None,
            price,
            currency: currency.map(str::to_string),
            prep_time_minutes: Some(12),
        }
    }

    #[test]
    fn currency_defaults_and_normalizes() {
        let dish = Dish::from_create_params(DishId(1), params(Decimal::new(950, 2), None)).unwrap();
        assert_eq!(dish.currency, "USD");
        assert!(dish.is_available);

        let dish = Dish::from_create_params(DishId(2), params(Decimal::ONE, Some("vnd"))).unwrap();
        assert_eq!(dish.currency, "VND");
    }

    #[test]
    fn price_must_be_positive() {
        for price in [Decimal::ZERO, Decimal::from(-3)] {
            let err = Dish::from_create_params(DishId(1), params(price, None));
            assert!(matches!(err, Err(RestaurantError::ValidationError(_))));
        }
    }

    #[test]
    fn price_fits_ten_digits_with_cents() {
        let max = Decimal::new(99_999_999_99, 2);
        assert!(Dish::from_create_params(DishId(1), params(max, None)).is_ok());
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000, 0);
        for price in [Decimal::from(100_000_000), Decimal::new(5, 3), huge] {
            let err = Dish::from_create_params(DishId(1), params(price, None));
            assert!(matches!(err, Err(RestaurantError::ValidationError(_))), "{price}");
        }
    }
}

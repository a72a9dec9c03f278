use crate::clients::DishClient;
use crate::model::{
    normalize_currency, AddressId, DishId, DriverId, Order, OrderCreate, OrderId, OrderQuery,
    OrderStatus, OrderUpdate, PlaceOrder, PricedLine, DEFAULT_CURRENCY,
};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use chrono::Utc;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Placing an order prices it here, from the dish catalog; reference checks on customer,
/// restaurant and address happen in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    dishes: DishClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, dishes: DishClient) -> Self {
        Self { inner, dishes }
    }

    /// Places an order and returns it as stored.
    ///
    /// Each dish must belong to the ordering restaurant, be available, and share one
    /// currency. The currency defaults to that of the first dish.
    #[instrument(skip(self, request), fields(customer = %request.customer, restaurant = %request.restaurant))]
    pub async fn place_order(&self, request: PlaceOrder) -> Result<Order, OrderError> {
        debug!(?request, "place_order called");
        let mut currency = request
            .currency
            .as_deref()
            .map(normalize_currency)
            .transpose()
            .map_err(OrderError::ValidationError)?;

        let mut lines = Vec::with_capacity(request.items.len());
        for line in &request.items {
            let dish = self.dishes.fetch(line.dish).await?;
            if dish.restaurant != request.restaurant {
                return Err(OrderError::ValidationError(format!(
                    "{} is not served by {}",
                    dish.id, request.restaurant
                )));
            }
            if !dish.is_available {
                return Err(OrderError::ValidationError(format!("{} is not available", dish.id)));
            }
            let order_currency = currency.get_or_insert_with(|| dish.currency.clone());
            if *order_currency != dish.currency {
                return Err(OrderError::ValidationError(format!(
                    "{} is priced in {}, the order is in {}",
                    dish.id, dish.currency, order_currency
                )));
            }
            lines.push(PricedLine {
                dish: dish.id,
                name: dish.name,
                unit_price: dish.price,
                quantity: line.quantity,
            });
        }

        let create = OrderCreate {
            customer: request.customer,
            restaurant: request.restaurant,
            delivery_address: request.delivery_address,
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            notes: request.notes,
            expected_total: request.expected_total,
            lines,
        };
        let id = self.inner.create(create).await?;
        info!(%id, "Order placed");
        self.fetch(id).await
    }

    /// Like `get`, but a missing order is an error.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: OrderId) -> Result<Order, OrderError> {
        self.inner
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let action = OrderAction::SetStatus {
            status,
            at: Utc::now(),
        };
        Ok(self.inner.perform_action(id, action).await?)
    }

    /// Moves every order in `ids` to `status` in one atomic step and returns how many were
    /// updated. Duplicates count once. If any order is missing or refuses the transition,
    /// nothing changes.
    #[instrument(skip(self))]
    pub async fn bulk_set_status(&self, ids: &[OrderId], status: OrderStatus) -> Result<usize, OrderError> {
        let ids: BTreeSet<OrderId> = ids.iter().copied().collect();
        if ids.is_empty() {
            return Ok(0);
        }
        let at = Utc::now();
        let actions = ids
            .into_iter()
            .map(|id| (id, OrderAction::SetStatus { status, at }))
            .collect();
        let updated = self.inner.perform_many(actions).await?;
        info!(count = updated.len(), %status, "Bulk status update committed");
        Ok(updated.len())
    }

    #[instrument(skip(self))]
    pub async fn assign_driver(&self, id: OrderId, driver: DriverId) -> Result<Order, OrderError> {
        let action = OrderAction::AssignDriver {
            driver,
            at: Utc::now(),
        };
        Ok(self.inner.perform_action(id, action).await?)
    }

    #[instrument(skip(self))]
    pub async fn mark_picked(&self, id: OrderId) -> Result<Order, OrderError> {
        let action = OrderAction::MarkPicked { at: Utc::now() };
        Ok(self.inner.perform_action(id, action).await?)
    }

    #[instrument(skip(self))]
    pub async fn mark_delivered(&self, id: OrderId) -> Result<Order, OrderError> {
        let action = OrderAction::MarkDelivered { at: Utc::now() };
        Ok(self.inner.perform_action(id, action).await?)
    }

    #[instrument(skip(self, tracking_info))]
    pub async fn update_tracking(
        &self,
        id: OrderId,
        eta_minutes: Option<u32>,
        tracking_info: Option<serde_json::Value>,
    ) -> Result<Order, OrderError> {
        let action = OrderAction::UpdateTracking {
            eta_minutes,
            tracking_info,
            at: Utc::now(),
        };
        Ok(self.inner.perform_action(id, action).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_where(&self, query: OrderQuery) -> Result<Vec<Order>, OrderError> {
        Ok(self.inner.delete_where(query).await?)
    }

    /// Clears `dish` from every order item referencing it; returns the number of orders touched.
    #[instrument(skip(self))]
    pub async fn detach_dish(&self, dish: DishId) -> Result<usize, OrderError> {
        let query = OrderQuery {
            dish: Some(dish),
            ..Default::default()
        };
        self.detach(query, OrderAction::DetachDish(dish)).await
    }

    #[instrument(skip(self))]
    pub async fn detach_driver(&self, driver: DriverId) -> Result<usize, OrderError> {
        let query = OrderQuery {
            driver: Some(driver),
            ..Default::default()
        };
        self.detach(query, OrderAction::DetachDriver(driver)).await
    }

    #[instrument(skip(self))]
    pub async fn detach_address(&self, address: AddressId) -> Result<usize, OrderError> {
        let query = OrderQuery {
            delivery_address: Some(address),
            ..Default::default()
        };
        self.detach(query, OrderAction::DetachAddress(address)).await
    }

    async fn detach(&self, query: OrderQuery, action: OrderAction) -> Result<usize, OrderError> {
        Ok(self.inner.perform_where(query, action).await?.len())
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

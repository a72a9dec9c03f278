//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placement arrives already priced (see [`OrderClient::place_order`](crate::clients::OrderClient::place_order)).
//! Here the lines are checked, totalled and, when the caller named one, compared against the
//! expected total. The delivery is created together with the order and only ever changes
//! through [`OrderAction`]s.

use super::actions::OrderAction;
use super::lifecycle::{delivery_transition, order_transition};
use super::OrderError;
use crate::clients::{AddressClient, CustomerClient, DriverClient, RestaurantClient};
use crate::model::{
    check_money, normalize_currency, Delivery, DeliveryStatus, DishId, Order, OrderCreate,
    OrderId, OrderItem, OrderQuery, OrderStatus, OrderUpdate, TOTAL_DIGITS,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Clients the order actor consults to validate references.
#[derive(Clone)]
pub struct OrderContext {
    pub customers: CustomerClient,
    pub restaurants: RestaurantClient,
    pub addresses: AddressClient,
    pub drivers: DriverClient,
}

impl Order {
    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn set_status(&mut self, status: OrderStatus, at: DateTime<Utc>) -> Result<(), OrderError> {
        self.status = order_transition(self.status, status)?;
        if self.status == OrderStatus::Delivered && self.delivery.status != DeliveryStatus::Delivered {
            self.delivery.status = DeliveryStatus::Delivered;
            self.delivery.delivered_at = Some(at);
            self.delivery.updated_at = at;
        }
        self.touch(at);
        Ok(())
    }

    fn advance_delivery(&mut self, to: DeliveryStatus, at: DateTime<Utc>) -> Result<(), OrderError> {
        self.delivery.status = delivery_transition(self.delivery.status, to)?;
        self.delivery.updated_at = at;
        self.touch(at);
        Ok(())
    }
}

fn too_large(dish: DishId) -> OrderError {
    OrderError::ValidationError(format!("total for {} is too large", dish))
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Query = OrderQuery;
    type Key = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(OrderError::ValidationError("an order needs at least one item".into()));
        }

        let mut items = Vec::with_capacity(params.lines.len());
        let mut total_amount = Decimal::ZERO;
        for line in params.lines {
            if line.quantity < 1 {
                return Err(OrderError::ValidationError(format!(
                    "quantity for {} must be at least 1",
                    line.dish
                )));
            }
            let total_price = line
                .unit_price
                .checked_mul(Decimal::from(line.quantity))
                .ok_or_else(|| too_large(line.dish))?;
            let total_price = check_money("item total", total_price, TOTAL_DIGITS)
                .map_err(OrderError::ValidationError)?;
            total_amount = total_amount
                .checked_add(total_price)
                .ok_or_else(|| too_large(line.dish))?;
            items.push(OrderItem {
                dish: Some(line.dish),
                total_price,
                name: line.name,
                unit_price: line.unit_price,
                quantity: line.quantity,
            });
        }
        let total_amount = check_money("order total", total_amount, TOTAL_DIGITS)
            .map_err(OrderError::ValidationError)?;

        if let Some(expected) = params.expected_total {
            if expected != total_amount {
                return Err(OrderError::ValidationError(format!(
                    "expected total {} does not match computed total {}",
                    expected, total_amount
                )));
            }
        }

        let now = Utc::now();
        Ok(Self {
            id,
            customer: params.customer,
            restaurant: params.restaurant,
            delivery_address: params.delivery_address,
            items,
            total_amount,
            currency: normalize_currency(&params.currency).map_err(OrderError::ValidationError)?,
            status: OrderStatus::Pending,
            notes: params.notes,
            delivery: Delivery::new(now),
            placed_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        query.matches(self)
    }

    /// Customer, restaurant and delivery address must all exist.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        ctx.customers.fetch(self.customer).await?;
        ctx.restaurants.fetch(self.restaurant).await?;
        if let Some(address) = self.delivery_address {
            ctx.addresses.fetch(address).await?;
        }
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, ctx: &OrderContext) -> Result<(), Self::Error> {
        if let Some(address) = update.delivery_address {
            ctx.addresses.fetch(address).await?;
            self.delivery_address = Some(address);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.touch(Utc::now());
        Ok(())
    }

    /// # Actions
    /// - `SetStatus`: order status machine; delivering also completes the delivery
    /// - `AssignDriver` / `MarkPicked` / `MarkDelivered`: delivery status machine
    /// - `UpdateTracking`: ETA and courier payload
    /// - `Detach*`: clears references to a removed dish, driver or address
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::SetStatus { status, at } => self.set_status(status, at)?,
            OrderAction::AssignDriver { driver, at } => {
                if self.status != OrderStatus::Processing {
                    return Err(OrderError::ValidationError(format!(
                        "a driver can only be assigned to a processing order; {} is {}",
                        self.id, self.status
                    )));
                }
                let found = ctx.drivers.fetch(driver).await?;
                if !found.is_active {
                    return Err(OrderError::ValidationError(format!("{} is not active", driver)));
                }
                self.advance_delivery(DeliveryStatus::Assigned, at)?;
                self.delivery.driver = Some(driver);
                self.delivery.assigned_at = Some(at);
            }
            OrderAction::MarkPicked { at } => {
                self.advance_delivery(DeliveryStatus::Picked, at)?;
                self.delivery.picked_at = Some(at);
            }
            OrderAction::MarkDelivered { at } => {
                self.advance_delivery(DeliveryStatus::Delivered, at)?;
                self.delivery.delivered_at = Some(at);
                self.set_status(OrderStatus::Delivered, at)?;
            }
            OrderAction::UpdateTracking {
                eta_minutes,
                tracking_info,
                at,
            } => {
                if eta_minutes.is_some() {
                    self.delivery.eta_minutes = eta_minutes;
                }
                if tracking_info.is_some() {
                    self.delivery.tracking_info = tracking_info;
                }
                self.delivery.updated_at = at;
                self.touch(at);
            }
            OrderAction::DetachDish(dish) => {
                for item in self.items.iter_mut().filter(|i| i.dish == Some(dish)) {
                    item.dish = None;
                }
                self.touch(Utc::now());
            }
            OrderAction::DetachDriver(driver) => {
                if self.delivery.driver == Some(driver) {
                    self.delivery.driver = None;
                    self.delivery.updated_at = Utc::now();
                }
                self.touch(Utc::now());
            }
            OrderAction::DetachAddress(address) => {
                if self.delivery_address == Some(address) {
                    self.delivery_address = None;
                }
                self.touch(Utc::now());
            }
        }
        Ok(self.clone())
    }
}

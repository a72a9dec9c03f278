//! Deletes that follow ownership across actors.
//!
//! The root is deleted first, so a missing root fails with `NotFound` before anything else
//! is touched. Children are then removed owner by owner, and orders that merely referenced a
//! removed dish, driver or address keep their snapshot and lose the reference.
//!
//! Each step is atomic inside its own actor. A cascade as a whole is not: a failure midway
//! leaves the earlier steps applied.

use super::Clients;
use crate::error::Error;
use crate::model::*;
use actor_framework::ActorClient;
use serde::Serialize;
use tracing::{info, instrument};

/// How many entities a delete removed or detached, per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeReport {
    pub restaurants: usize,
    pub menus: usize,
    pub dishes: usize,
    pub drivers: usize,
    pub customers: usize,
    pub addresses: usize,
    pub orders: usize,
    pub payments: usize,
    pub comments: usize,
    pub reactions: usize,
    /// Orders that lost a reference to a removed dish, driver or address.
    pub orders_detached: usize,
}

impl CascadeReport {
    /// Total entities removed, not counting detached orders.
    pub fn removed(&self) -> usize {
        self.restaurants
            + self.menus
            + self.dishes
            + self.drivers
            + self.customers
            + self.addresses
            + self.orders
            + self.payments
            + self.comments
            + self.reactions
    }
}

impl Clients {
    /// Removes a restaurant with its comments (and their reactions), orders (and their
    /// payments), menus, dishes, drivers and addresses.
    #[instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<CascadeReport, Error> {
        self.restaurants.delete(id).await?;
        let mut report = CascadeReport {
            restaurants: 1,
            ..Default::default()
        };

        let comments = self
            .comments
            .delete_where(CommentQuery {
                restaurant: Some(id),
                ..Default::default()
            })
            .await?;
        self.remove_reactions(&comments, &mut report).await?;

        let orders = self
            .orders
            .delete_where(OrderQuery {
                restaurant: Some(id),
                ..Default::default()
            })
            .await?;
        self.remove_payments(&orders, &mut report).await?;

        let dishes = self
            .dishes
            .delete_where(DishQuery {
                restaurant: Some(id),
                ..Default::default()
            })
            .await?;
        self.detach_dishes(&dishes, &mut report).await?;

        report.menus = self
            .menus
            .delete_where(MenuQuery {
                restaurant: Some(id),
            })
            .await?
            .len();

        let drivers = self
            .drivers
            .delete_where(DriverQuery {
                restaurant: Some(id),
                ..Default::default()
            })
            .await?;
        report.drivers = drivers.len();
        for driver in &drivers {
            report.orders_detached += self.orders.detach_driver(driver.id).await?;
        }

        let addresses = self
            .addresses
            .delete_where(AddressQuery {
                restaurant: Some(id),
                ..Default::default()
            })
            .await?;
        self.detach_addresses(&addresses, &mut report).await?;

        info!(?report, "Restaurant deleted");
        Ok(report)
    }

    /// Removes a customer with their orders (and payments), comments (and their reactions),
    /// own reactions and addresses.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<CascadeReport, Error> {
        self.customers.delete(id).await?;
        let mut report = CascadeReport {
            customers: 1,
            ..Default::default()
        };

        let orders = self
            .orders
            .delete_where(OrderQuery {
                customer: Some(id),
                ..Default::default()
            })
            .await?;
        self.remove_payments(&orders, &mut report).await?;

        let comments = self
            .comments
            .delete_where(CommentQuery {
                customer: Some(id),
                ..Default::default()
            })
            .await?;
        self.remove_reactions(&comments, &mut report).await?;

        report.reactions += self
            .reactions
            .delete_where(ReactionQuery {
                customer: Some(id),
                ..Default::default()
            })
            .await?
            .len();

        let addresses = self
            .addresses
            .delete_where(AddressQuery {
                customer: Some(id),
                ..Default::default()
            })
            .await?;
        self.detach_addresses(&addresses, &mut report).await?;

        info!(?report, "Customer deleted");
        Ok(report)
    }

    /// Removes an order and its payments. Items and delivery go with the order.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<CascadeReport, Error> {
        self.orders.delete(id).await?;
        let mut report = CascadeReport {
            orders: 1,
            ..Default::default()
        };
        report.payments = self.payments.delete_where(PaymentQuery::for_order(id)).await?.len();
        info!(?report, "Order deleted");
        Ok(report)
    }

    /// Removes a menu and its dishes; order items keep their snapshot.
    #[instrument(skip(self))]
    pub async fn delete_menu(&self, id: MenuId) -> Result<CascadeReport, Error> {
        self.menus.delete(id).await?;
        let mut report = CascadeReport {
            menus: 1,
            ..Default::default()
        };
        let dishes = self
            .dishes
            .delete_where(DishQuery {
                menu: Some(id),
                ..Default::default()
            })
            .await?;
        self.detach_dishes(&dishes, &mut report).await?;
        info!(?report, "Menu deleted");
        Ok(report)
    }

    #[instrument(skip(self))]
    pub async fn delete_dish(&self, id: DishId) -> Result<CascadeReport, Error> {
        self.dishes.delete(id).await?;
        let report = CascadeReport {
            dishes: 1,
            orders_detached: self.orders.detach_dish(id).await?,
            ..Default::default()
        };
        info!(?report, "Dish deleted");
        Ok(report)
    }

    #[instrument(skip(self))]
    pub async fn delete_driver(&self, id: DriverId) -> Result<CascadeReport, Error> {
        self.drivers.delete(id).await?;
        let report = CascadeReport {
            drivers: 1,
            orders_detached: self.orders.detach_driver(id).await?,
            ..Default::default()
        };
        info!(?report, "Driver deleted");
        Ok(report)
    }

    #[instrument(skip(self))]
    pub async fn delete_address(&self, id: AddressId) -> Result<CascadeReport, Error> {
        self.addresses.delete(id).await?;
        let report = CascadeReport {
            addresses: 1,
            orders_detached: self.orders.detach_address(id).await?,
            ..Default::default()
        };
        info!(?report, "Address deleted");
        Ok(report)
    }

    /// Hard-deletes a comment and its reactions. Customers deactivate instead; this is for
    /// moderation.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: CommentId) -> Result<CascadeReport, Error> {
        self.comments.delete(id).await?;
        let report = CascadeReport {
            comments: 1,
            reactions: self
                .reactions
                .delete_where(ReactionQuery::on_comment(id))
                .await?
                .len(),
            ..Default::default()
        };
        info!(?report, "Comment deleted");
        Ok(report)
    }

    async fn remove_reactions(&self, comments: &[Comment], report: &mut CascadeReport) -> Result<(), Error> {
        report.comments += comments.len();
        for comment in comments {
            report.reactions += self
                .reactions
                .delete_where(ReactionQuery::on_comment(comment.id))
                .await?
                .len();
        }
        Ok(())
    }

    async fn remove_payments(&self, orders: &[Order], report: &mut CascadeReport) -> Result<(), Error> {
        report.orders += orders.len();
        for order in orders {
            report.payments += self
                .payments
                .delete_where(PaymentQuery::for_order(order.id))
                .await?
                .len();
        }
        Ok(())
    }

    async fn detach_dishes(&self, dishes: &[Dish], report: &mut CascadeReport) -> Result<(), Error> {
        report.dishes += dishes.len();
        for dish in dishes {
            report.orders_detached += self.orders.detach_dish(dish.id).await?;
        }
        Ok(())
    }

    async fn detach_addresses(&self, addresses: &[Address], report: &mut CascadeReport) -> Result<(), Error> {
        report.addresses += addresses.len();
        for address in addresses {
            report.orders_detached += self.orders.detach_address(address.id).await?;
        }
        Ok(())
    }
}

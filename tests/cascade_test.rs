mod common;

use actor_framework::ActorClient;
use common::{add_customer, add_dish, fixture, place};
use restaurant_orders::error::{Error, ErrorKind};
use restaurant_orders::model::*;
use rust_decimal::Decimal;

#[tokio::test]
async fn deleting_a_restaurant_removes_everything_it_owns() {
    let f = fixture().await;
    let c = &f.system.clients;

    let order = place(&f, &[(f.pho, 1), (f.rolls, 2)]).await;
    c.payments
        .create(PaymentCreate {
            order: order.id,
            provider: "cash".into(),
            amount: order.total_amount,
            currency: None,
        })
        .await
        .unwrap();
    c.reactions.react(f.customer, f.comment, true).await.unwrap();
    c.addresses
        .create(AddressCreate {
            restaurant: Some(f.restaurant),
            street: "1 Dong Khoi".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    // A second restaurant that must survive.
    let other = c
        .restaurants
        .create(RestaurantCreate {
            name: "Banh Mi Huynh Hoa".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let other_menu = c
        .menus
        .create(MenuCreate {
            restaurant: other,
            name: "Street".into(),
            description: None,
        })
        .await
        .unwrap();
    add_dish(&f.system, other, other_menu, "Banh mi", Decimal::new(300, 2)).await;

    let report = c.delete_restaurant(f.restaurant).await.unwrap();
    assert_eq!(report.restaurants, 1);
    assert_eq!(report.menus, 1);
    assert_eq!(report.dishes, 2);
    assert_eq!(report.drivers, 1);
    assert_eq!(report.addresses, 1);
    assert_eq!(report.orders, 1);
    assert_eq!(report.payments, 1);
    assert_eq!(report.comments, 1);
    assert_eq!(report.reactions, 1);
    assert_eq!(report.removed(), 10);

    assert!(c.restaurants.get(f.restaurant).await.unwrap().is_none());
    assert!(c.orders.list(OrderQuery::default()).await.unwrap().is_empty());
    assert!(c.payments.list(PaymentQuery::default()).await.unwrap().is_empty());
    assert!(c.reactions.list(ReactionQuery::default()).await.unwrap().is_empty());
    assert!(c.comments.list(CommentQuery::default()).await.unwrap().is_empty());

    // Customer-owned data and the other restaurant stay.
    assert!(c.addresses.get(f.address).await.unwrap().is_some());
    assert!(c.customers.get(f.customer).await.unwrap().is_some());
    let remaining = c.dishes.list(DishQuery::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].restaurant, other);
}

#[tokio::test]
async fn deleting_a_missing_restaurant_deletes_nothing() {
    let f = fixture().await;
    let c = &f.system.clients;

    let err = c.delete_restaurant(RestaurantId(99)).await.unwrap_err();
    assert!(matches!(err, Error::Restaurant(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(c.dishes.list(DishQuery::default()).await.unwrap().len(), 2);
    assert_eq!(c.comments.list(CommentQuery::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn removed_catalog_entries_are_detached_from_orders() {
    let f = fixture().await;
    let c = &f.system.clients;
    let order = place(&f, &[(f.pho, 1), (f.rolls, 1)]).await;
    c.orders.set_status(order.id, OrderStatus::Processing).await.unwrap();
    c.orders.assign_driver(order.id, f.driver).await.unwrap();

    let report = c.delete_dish(f.pho).await.unwrap();
    assert_eq!((report.dishes, report.orders_detached), (1, 1));

    let report = c.delete_driver(f.driver).await.unwrap();
    assert_eq!((report.drivers, report.orders_detached), (1, 1));

    let report = c.delete_address(f.address).await.unwrap();
    assert_eq!((report.addresses, report.orders_detached), (1, 1));

    let stored = c.orders.fetch(order.id).await.unwrap();
    assert_eq!(stored.items[0].dish, None);
    assert_eq!(stored.items[0].name, "Pho bo");
    assert_eq!(stored.items[1].dish, Some(f.rolls));
    assert_eq!(stored.delivery.driver, None);
    assert_eq!(stored.delivery.status, DeliveryStatus::Assigned);
    assert_eq!(stored.delivery_address, None);
    assert_eq!(stored.total_amount, order.total_amount);
}

#[tokio::test]
async fn deleting_a_customer_takes_their_orders_comments_and_reactions() {
    let f = fixture().await;
    let c = &f.system.clients;
    let bao = add_customer(&f.system, "Bao", "bao@example.com").await;

    let order = place(&f, &[(f.pho, 1)]).await;
    c.payments
        .create(PaymentCreate {
            order: order.id,
            provider: "card".into(),
            amount: order.total_amount,
            currency: None,
        })
        .await
        .unwrap();
    c.reactions.react(bao, f.comment, false).await.unwrap();
    c.reactions.react(f.customer, f.comment, true).await.unwrap();
    let bao_comment = c
        .comments
        .create(CommentCreate {
            customer: bao,
            restaurant: f.restaurant,
            text: "Too salty".into(),
            rating: Some(2),
        })
        .await
        .unwrap();
    c.reactions.react(f.customer, bao_comment, true).await.unwrap();

    let report = c.delete_customer(f.customer).await.unwrap();
    assert_eq!(report.customers, 1);
    assert_eq!(report.orders, 1);
    assert_eq!(report.payments, 1);
    assert_eq!(report.comments, 1);
    // Two on the removed comment (Bao's and their own), one on Bao's comment.
    assert_eq!(report.reactions, 3);
    assert_eq!(report.addresses, 1);

    let left = c.reactions.list(ReactionQuery::default()).await.unwrap();
    assert!(left.is_empty());
    assert!(c.comments.get(bao_comment).await.unwrap().is_some());
    assert!(c.customers.get(bao).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_an_order_removes_its_payments() {
    let f = fixture().await;
    let c = &f.system.clients;
    let keep = place(&f, &[(f.rolls, 1)]).await;
    let drop_me = place(&f, &[(f.pho, 1)]).await;
    for order in [&keep, &drop_me] {
        c.payments
            .create(PaymentCreate {
                order: order.id,
                provider: "cash".into(),
                amount: order.total_amount,
                currency: None,
            })
            .await
            .unwrap();
    }

    let report = c.delete_order(drop_me.id).await.unwrap();
    assert_eq!((report.orders, report.payments), (1, 1));
    let left = c.payments.list(PaymentQuery::default()).await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].order, keep.id);
}

#[tokio::test]
async fn deleting_a_menu_or_comment_cascades_one_level() {
    let f = fixture().await;
    let c = &f.system.clients;
    c.reactions.react(f.customer, f.comment, true).await.unwrap();

    let report = c.delete_comment(f.comment).await.unwrap();
    assert_eq!((report.comments, report.reactions), (1, 1));

    let report = c.delete_menu(f.menu).await.unwrap();
    assert_eq!((report.menus, report.dishes), (1, 2));
    assert!(c.dishes.list(DishQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_customer_email_is_a_conflict() {
    let f = fixture().await;
    let err = f
        .system
        .clients
        .customers
        .create(CustomerCreate {
            first_name: "Imposter".into(),
            email: Some("AN@example.com".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(Error::from(err).kind(), ErrorKind::Conflict);
}

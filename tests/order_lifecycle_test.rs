mod common;

use actor_framework::ActorClient;
use common::{add_dish, fixture, order_request, place};
use restaurant_orders::model::*;
use restaurant_orders::order_actor::OrderError;
use restaurant_orders::payment_actor::PaymentError;
use restaurant_orders::restaurant_actor::RestaurantError;
use rust_decimal::Decimal;

#[tokio::test]
async fn placing_an_order_snapshots_dish_prices() {
    let f = fixture().await;
    let order = place(&f, &[(f.pho, 2), (f.rolls, 1)]).await;

    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].name, "Pho bo");
    assert_eq!(order.items[0].total_price, Decimal::new(1900, 2));
    assert_eq!(order.total_amount, Decimal::new(2325, 2));
    assert_eq!(order.currency, "USD");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.delivery.status, DeliveryStatus::Waiting);

    f.system
        .clients
        .dishes
        .update(
            f.pho,
            DishUpdate {
                price: Some(Decimal::new(1200, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let stored = f.system.clients.orders.fetch(order.id).await.unwrap();
    assert_eq!(stored.total_amount, Decimal::new(2325, 2));
    assert_eq!(stored.items[0].unit_price, Decimal::new(950, 2));
}

#[tokio::test]
async fn expected_total_is_checked_at_placement() {
    let f = fixture().await;
    let orders = &f.system.clients.orders;

    let mut request = order_request(&f, &[(f.pho, 1)]);
    request.expected_total = Some(Decimal::new(950, 2));
    assert!(orders.place_order(request).await.is_ok());

    let mut request = order_request(&f, &[(f.pho, 1)]);
    request.expected_total = Some(Decimal::new(900, 2));
    let err = orders.place_order(request).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");
}

#[tokio::test]
async fn oversized_orders_are_rejected_and_ordering_continues() {
    let f = fixture().await;
    let c = &f.system.clients;

    let err = c
        .dishes
        .create(DishCreate {
            menu: f.menu,
            restaurant: f.restaurant,
            name: "Gold leaf pho".into(),
            description: None,
            price: Decimal::from_i128_with_scale(50_000_000_000_000_000_000, 0),
            currency: None,
            prep_time_minutes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::ValidationError(_)), "{err:?}");

    let priciest = add_dish(&f.system, f.restaurant, f.menu, "Banquet", Decimal::new(99_999_999_99, 2)).await;
    let err = c
        .orders
        .place_order(order_request(&f, &[(priciest, 4_000_000_000)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");

    let order = place(&f, &[(f.pho, 1)]).await;
    assert_eq!(order.total_amount, Decimal::new(950, 2));
    assert_eq!(c.orders.list(OrderQuery::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn placement_rejects_bad_lines_and_references() {
    let f = fixture().await;
    let c = &f.system.clients;

    let other = c
        .restaurants
        .create(RestaurantCreate {
            name: "Sushi Hokkaido".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let other_menu = c
        .menus
        .create(MenuCreate {
            restaurant: other,
            name: "Lunch".into(),
            description: None,
        })
        .await
        .unwrap();
    let salmon = add_dish(&f.system, other, other_menu, "Salmon", Decimal::new(700, 2)).await;
    let err = c.orders.place_order(order_request(&f, &[(salmon, 1)])).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");

    c.dishes
        .update(
            f.rolls,
            DishUpdate {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let err = c.orders.place_order(order_request(&f, &[(f.rolls, 1)])).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");

    let mut request = order_request(&f, &[(f.pho, 1)]);
    request.currency = Some("eur".into());
    let err = c.orders.place_order(request).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");

    let err = c.orders.place_order(order_request(&f, &[(f.pho, 0)])).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");

    let err = c.orders.place_order(order_request(&f, &[])).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");

    let err = c.orders.place_order(order_request(&f, &[(DishId(99), 1)])).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)), "{err:?}");

    let mut request = order_request(&f, &[(f.pho, 1)]);
    request.customer = CustomerId(99);
    let err = c.orders.place_order(request).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)), "{err:?}");

    assert!(c.orders.list(OrderQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn bulk_status_updates_every_order_with_one_stamp() {
    let f = fixture().await;
    let orders = &f.system.clients.orders;
    let ids = [
        place(&f, &[(f.pho, 1)]).await.id,
        place(&f, &[(f.rolls, 2)]).await.id,
        place(&f, &[(f.pho, 3)]).await.id,
    ];

    let count = orders
        .bulk_set_status(&[ids[0], ids[1], ids[2], ids[0]], OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(count, 3);

    let updated = orders.list(OrderQuery::default()).await.unwrap();
    assert!(updated.iter().all(|o| o.status == OrderStatus::Processing));
    assert!(updated.iter().all(|o| o.updated_at == updated[0].updated_at));

    assert_eq!(orders.bulk_set_status(&[], OrderStatus::Delivered).await.unwrap(), 0);
}

#[tokio::test]
async fn bulk_status_is_all_or_nothing() {
    let f = fixture().await;
    let orders = &f.system.clients.orders;
    let a = place(&f, &[(f.pho, 1)]).await.id;
    let b = place(&f, &[(f.pho, 1)]).await.id;
    orders.set_status(a, OrderStatus::Processing).await.unwrap();

    // `b` is still pending and cannot jump to delivered.
    let err = orders
        .bulk_set_status(&[a, b], OrderStatus::Delivered)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)), "{err:?}");
    assert_eq!(orders.fetch(a).await.unwrap().status, OrderStatus::Processing);

    let err = orders
        .bulk_set_status(&[b, OrderId(99)], OrderStatus::Processing)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)), "{err:?}");
    assert_eq!(orders.fetch(b).await.unwrap().status, OrderStatus::Pending);
}

#[tokio::test]
async fn delivery_progresses_with_the_order() {
    let f = fixture().await;
    let orders = &f.system.clients.orders;
    let id = place(&f, &[(f.pho, 1)]).await.id;

    let err = orders.assign_driver(id, f.driver).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");
    let err = orders.mark_picked(id).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)), "{err:?}");

    orders.set_status(id, OrderStatus::Processing).await.unwrap();
    let order = orders.assign_driver(id, f.driver).await.unwrap();
    assert_eq!(order.delivery.status, DeliveryStatus::Assigned);
    assert_eq!(order.delivery.driver, Some(f.driver));
    assert!(order.delivery.assigned_at.is_some());

    let order = orders
        .update_tracking(id, Some(15), Some(serde_json::json!({ "lat": 10.77, "lng": 106.70 })))
        .await
        .unwrap();
    assert_eq!(order.delivery.eta_minutes, Some(15));

    orders.mark_picked(id).await.unwrap();
    let order = orders.mark_delivered(id).await.unwrap();
    assert_eq!(order.delivery.status, DeliveryStatus::Delivered);
    assert_eq!(order.status, OrderStatus::Delivered);
    assert_eq!(order.delivery.delivered_at, Some(order.updated_at));
}

#[tokio::test]
async fn delivering_the_order_closes_an_open_delivery() {
    let f = fixture().await;
    let orders = &f.system.clients.orders;
    let id = place(&f, &[(f.rolls, 1)]).await.id;

    let err = orders.set_status(id, OrderStatus::Delivered).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)), "{err:?}");

    orders.set_status(id, OrderStatus::Processing).await.unwrap();
    let order = orders.set_status(id, OrderStatus::Delivered).await.unwrap();
    assert_eq!(order.delivery.status, DeliveryStatus::Delivered);
    assert!(order.delivery.delivered_at.is_some());

    let err = orders.set_status(id, OrderStatus::Pending).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)), "{err:?}");
}

#[tokio::test]
async fn inactive_drivers_cannot_be_assigned() {
    let f = fixture().await;
    let c = &f.system.clients;
    let id = place(&f, &[(f.pho, 1)]).await.id;
    c.orders.set_status(id, OrderStatus::Processing).await.unwrap();
    c.drivers
        .update(
            f.driver,
            DriverUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = c.orders.assign_driver(id, f.driver).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)), "{err:?}");
    let err = c.orders.assign_driver(id, DriverId(99)).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)), "{err:?}");
    assert_eq!(
        c.orders.fetch(id).await.unwrap().delivery.status,
        DeliveryStatus::Waiting
    );
}

#[tokio::test]
async fn payments_settle_once() {
    let f = fixture().await;
    let payments = &f.system.clients.payments;
    let order = place(&f, &[(f.pho, 2)]).await;

    let failed = payments
        .create(PaymentCreate {
            order: order.id,
            provider: "stripe".into(),
            amount: order.total_amount,
            currency: None,
        })
        .await
        .unwrap();
    payments.fail(failed).await.unwrap();
    let err = payments.complete(failed, Some("tx_1".into())).await.unwrap_err();
    assert!(matches!(err, PaymentError::InvalidTransition(_)), "{err:?}");

    let retry = payments
        .create(PaymentCreate {
            order: order.id,
            provider: "stripe".into(),
            amount: order.total_amount,
            currency: Some("usd".into()),
        })
        .await
        .unwrap();
    let paid = payments.complete(retry, Some("tx_2".into())).await.unwrap();
    assert_eq!(paid.status, PaymentStatus::Completed);
    assert_eq!(paid.transaction_id.as_deref(), Some("tx_2"));
    assert!(paid.paid_at.is_some());

    let history = payments.for_order(order.id).await.unwrap();
    let statuses: Vec<_> = history.iter().map(|p| p.status).collect();
    assert_eq!(statuses, [PaymentStatus::Failed, PaymentStatus::Completed]);

    let err = payments
        .create(PaymentCreate {
            order: OrderId(99),
            provider: "stripe".into(),
            amount: Decimal::ONE,
            currency: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PaymentError::NotFound(_)), "{err:?}");
}

//! Full-system integration tests: every actor is real and wired through
//! [`BackOfHouse`].

use brigade::lifecycle::BackOfHouse;
use brigade::model::{
    EmployeeId, OrderCreateRequest, OrderItemRequest, OrderItemStatus, OrderStatus,
    OrderUpdateRequest, ProductId, TableId,
};
use brigade::order_actor::OrderError;
use rust_decimal::Decimal;

struct Fixture {
    system: BackOfHouse,
    employee_id: EmployeeId,
    table_id: TableId,
    lager: ProductId,
    burger: ProductId,
}

/// Seeds one employee, one table, and two products.
async fn fixture() -> Fixture {
    let system = BackOfHouse::new();
    let employee_id = system
        .employee_client
        .create_employee("Alice", "server")
        .await
        .unwrap();
    let table_id = system.table_client.create_table(4, 6).await.unwrap();
    let lager = system
        .product_client
        .create_product("Lager", Decimal::new(500, 2))
        .await
        .unwrap();
    let burger = system
        .product_client
        .create_product("Burger", Decimal::new(1250, 2))
        .await
        .unwrap();
    Fixture {
        system,
        employee_id,
        table_id,
        lager,
        burger,
    }
}

fn bar_request(fx: &Fixture, items: Vec<OrderItemRequest>) -> OrderCreateRequest {
    OrderCreateRequest::Bar {
        employee_id: fx.employee_id,
        drinks_only: true,
        items,
        customer_name: None,
        notes: None,
    }
}

#[tokio::test]
async fn empty_bar_order_starts_pending_with_zero_total() {
    let fx = fixture().await;

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![]))
        .await
        .unwrap();

    let details = fx.system.order_client.order_details(order_id).await.unwrap();
    assert_eq!(details.status, OrderStatus::Pending);
    assert_eq!(details.total_amount, Decimal::new(0, 2));
    assert!(details.items.is_empty());
    assert!(details.order_number.starts_with("ORD-"));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn item_totals_roll_up_into_the_order_total() {
    let fx = fixture().await;

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(
            &fx,
            vec![
                OrderItemRequest::new(fx.lager, 2),
                OrderItemRequest::new(fx.burger, 1),
            ],
        ))
        .await
        .unwrap();

    // 5.00 × 2 + 12.50 × 1
    let details = fx.system.order_client.order_details(order_id).await.unwrap();
    assert_eq!(details.total_amount, Decimal::new(2250, 2));

    // Removing the lager line leaves the burger.
    let lager_item = details
        .items
        .iter()
        .find(|item| item.product_id == fx.lager)
        .unwrap()
        .id;
    fx.system
        .order_client
        .remove_item_from_order(order_id, lager_item)
        .await
        .unwrap();

    let details = fx.system.order_client.order_details(order_id).await.unwrap();
    assert_eq!(details.items.len(), 1);
    assert_eq!(details.total_amount, Decimal::new(1250, 2));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn item_update_reconciles_by_product() {
    let fx = fixture().await;

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(
            &fx,
            vec![
                OrderItemRequest::new(fx.lager, 2),
                OrderItemRequest::new(fx.burger, 1),
            ],
        ))
        .await
        .unwrap();

    // Bump the lager quantity and drop the burger in one update.
    let details = fx
        .system
        .order_client
        .update_order(
            order_id,
            OrderUpdateRequest::Bar {
                drinks_only: None,
                items: Some(vec![OrderItemRequest::new(fx.lager, 3)]),
                customer_name: Some("Bob".to_string()),
                notes: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(details.items.len(), 1);
    assert_eq!(details.items[0].quantity, 3);
    assert_eq!(details.total_amount, Decimal::new(1500, 2));
    assert_eq!(details.customer_name.as_deref(), Some("Bob"));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn item_update_refreshes_the_price_snapshot() {
    let fx = fixture().await;

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![OrderItemRequest::new(fx.lager, 2)]))
        .await
        .unwrap();

    // Catalog price changes after the snapshot was taken.
    fx.system
        .product_client
        .set_price(fx.lager, Decimal::new(550, 2))
        .await
        .unwrap();

    // A read does not re-sync the snapshot.
    let details = fx.system.order_client.order_details(order_id).await.unwrap();
    assert_eq!(details.items[0].unit_price, Decimal::new(500, 2));

    // Reconciling the line through an update does.
    let details = fx
        .system
        .order_client
        .update_order(
            order_id,
            OrderUpdateRequest::Bar {
                drinks_only: None,
                items: Some(vec![OrderItemRequest::new(fx.lager, 2)]),
                customer_name: None,
                notes: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(details.items[0].unit_price, Decimal::new(550, 2));
    assert_eq!(details.total_amount, Decimal::new(1100, 2));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn status_walks_forward_and_locks_at_terminal() {
    let fx = fixture().await;

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![OrderItemRequest::new(fx.lager, 1)]))
        .await
        .unwrap();

    for status in [
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Served,
    ] {
        assert_eq!(
            fx.system
                .order_client
                .update_status(order_id, status)
                .await
                .unwrap(),
            status
        );
    }

    assert_eq!(
        fx.system.order_client.mark_as_paid(order_id).await.unwrap(),
        OrderStatus::Paid
    );

    // A settled order accepts no further transitions.
    let result = fx
        .system
        .order_client
        .update_status(order_id, OrderStatus::Pending)
        .await;
    assert!(matches!(result, Err(OrderError::InvalidState(_))));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cancelled_order_cannot_be_revived_but_can_be_deleted() {
    let fx = fixture().await;

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![]))
        .await
        .unwrap();

    assert_eq!(
        fx.system.order_client.cancel_order(order_id).await.unwrap(),
        OrderStatus::Cancelled
    );
    assert!(matches!(
        fx.system.order_client.mark_as_paid(order_id).await,
        Err(OrderError::InvalidState(_))
    ));

    // Deletion is exempt from the terminal lock.
    fx.system.order_client.delete_order(order_id).await.unwrap();
    assert!(matches!(
        fx.system.order_client.order_details(order_id).await,
        Err(OrderError::NotFound(_))
    ));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn item_workflow_status_is_independent_of_the_order_status() {
    let fx = fixture().await;

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![OrderItemRequest::new(fx.burger, 1)]))
        .await
        .unwrap();
    let item_id = fx.system.order_client.order_details(order_id).await.unwrap().items[0].id;

    fx.system
        .order_client
        .update_item_status(order_id, item_id, OrderItemStatus::Ready)
        .await
        .unwrap();

    let details = fx.system.order_client.order_details(order_id).await.unwrap();
    assert_eq!(details.items[0].status, OrderItemStatus::Ready);
    assert_eq!(details.status, OrderStatus::Pending);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn queries_filter_the_order_store() {
    let fx = fixture().await;

    let first = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![]))
        .await
        .unwrap();
    let second = fx
        .system
        .order_client
        .create_order(OrderCreateRequest::Dining {
            employee_id: fx.employee_id,
            table_id: fx.table_id,
            items: vec![],
            customer_name: None,
            notes: None,
        })
        .await
        .unwrap();

    fx.system.order_client.cancel_order(first).await.unwrap();

    let cancelled = fx
        .system
        .order_client
        .find_by_status(OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].id, first);

    let by_employee = fx
        .system
        .order_client
        .find_by_employee(fx.employee_id)
        .await
        .unwrap();
    assert_eq!(by_employee.len(), 2);
    assert_eq!(by_employee[0].id, first);
    assert_eq!(by_employee[1].id, second);

    let number = by_employee[1].order_number.clone();
    let by_number = fx
        .system
        .order_client
        .find_by_order_number(&number)
        .await
        .unwrap();
    assert_eq!(by_number.unwrap().id, second);

    assert!(fx
        .system
        .order_client
        .find_by_order_number("ORD-0")
        .await
        .unwrap()
        .is_none());

    let recent = fx
        .system
        .order_client
        .find_recent(chrono::Utc::now() - chrono::Duration::hours(1))
        .await
        .unwrap();
    assert_eq!(recent.len(), 2);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn dining_order_is_refused_for_a_deactivated_table() {
    let fx = fixture().await;

    fx.system.table_client.deactivate(fx.table_id).await.unwrap();

    let result = fx
        .system
        .order_client
        .create_order(OrderCreateRequest::Dining {
            employee_id: fx.employee_id,
            table_id: fx.table_id,
            items: vec![],
            customer_name: None,
            notes: None,
        })
        .await;
    assert!(matches!(result, Err(OrderError::TableNotFound(_))));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn zero_quantity_items_are_rejected_up_front() {
    let fx = fixture().await;

    let result = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![OrderItemRequest::new(fx.lager, 0)]))
        .await;
    assert!(matches!(result, Err(OrderError::InvalidArgument(_))));

    let order_id = fx
        .system
        .order_client
        .create_order(bar_request(&fx, vec![]))
        .await
        .unwrap();
    let result = fx
        .system
        .order_client
        .add_item_to_order(order_id, OrderItemRequest::new(fx.lager, 0))
        .await;
    assert!(matches!(result, Err(OrderError::InvalidArgument(_))));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_order_and_employee_are_reported_as_not_found() {
    let fx = fixture().await;

    let result = fx
        .system
        .order_client
        .order_details(brigade::model::OrderId(404))
        .await;
    assert!(matches!(result, Err(OrderError::NotFound(_))));

    let result = fx
        .system
        .order_client
        .create_order(OrderCreateRequest::Bar {
            employee_id: EmployeeId(404),
            drinks_only: false,
            items: vec![],
            customer_name: None,
            notes: None,
        })
        .await;
    assert!(matches!(result, Err(OrderError::EmployeeNotFound(_))));

    fx.system.shutdown().await.unwrap();
}

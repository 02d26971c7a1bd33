//! Real Order actor with mocked collaborator clients.
//!
//! These tests exercise the order entity hooks (`on_create`, `on_update`,
//! `handle_action`) in isolation: the order actor is real, while the
//! product, employee, and table actors are replaced by scripted mocks.

use brigade::clients::{EmployeeClient, ProductClient, TableClient};
use brigade::model::{
    DiningTable, Employee, EmployeeId, OrderCreateRequest, OrderItemRequest, OrderStatus, Product,
    ProductId, OrderUpdateRequest, TableId,
};
use brigade::order_actor::{OrderContext, OrderError};
use resource_actor::mock::MockClient;

struct Mocks {
    products: MockClient<Product>,
    employees: MockClient<Employee>,
    tables: MockClient<DiningTable>,
}

fn mocks() -> (Mocks, OrderContext) {
    let mocks = Mocks {
        products: MockClient::new(),
        employees: MockClient::new(),
        tables: MockClient::new(),
    };
    let context = OrderContext {
        products: ProductClient::new(mocks.products.client()),
        employees: EmployeeClient::new(mocks.employees.client()),
        tables: TableClient::new(mocks.tables.client()),
    };
    (mocks, context)
}

fn alice() -> Employee {
    Employee::new(EmployeeId(1), "Alice", "server")
}

fn espresso() -> Product {
    Product::new(ProductId(1), "Espresso", rust_decimal::Decimal::new(250, 2))
}

#[tokio::test]
async fn order_create_resolves_collaborators_and_snapshots_prices() {
    let (mut mocks, context) = mocks();

    // on_create resolves the employee, then the product for each item.
    mocks.employees.expect_get(EmployeeId(1)).return_ok(Some(alice()));
    mocks.products.expect_get(ProductId(1)).return_ok(Some(espresso()));

    let (order_actor, order_client) = brigade::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(context));

    let order_id = order_client
        .create_order(OrderCreateRequest::Bar {
            employee_id: EmployeeId(1),
            drinks_only: true,
            items: vec![OrderItemRequest::new(ProductId(1), 2)],
            customer_name: None,
            notes: None,
        })
        .await
        .expect("order creation failed");

    let details = order_client.order_details(order_id).await.unwrap();
    assert_eq!(details.status, OrderStatus::Pending);
    assert_eq!(details.items.len(), 1);
    assert_eq!(details.items[0].unit_price, rust_decimal::Decimal::new(250, 2));
    assert_eq!(details.total_amount, rust_decimal::Decimal::new(500, 2));

    mocks.products.verify();
    mocks.employees.verify();
    mocks.tables.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn missing_product_aborts_the_whole_create() {
    let (mut mocks, context) = mocks();

    mocks.employees.expect_get(EmployeeId(1)).return_ok(Some(alice()));
    mocks.products.expect_get(ProductId(99)).return_ok(None);

    let (order_actor, order_client) = brigade::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(context));

    let result = order_client
        .create_order(OrderCreateRequest::Bar {
            employee_id: EmployeeId(1),
            drinks_only: false,
            items: vec![OrderItemRequest::new(ProductId(99), 1)],
            customer_name: None,
            notes: None,
        })
        .await;
    assert!(matches!(result, Err(OrderError::ProductNotFound(_))));

    // The failed create left nothing behind.
    let orders = order_client.list_orders().await.unwrap();
    assert!(orders.is_empty());

    mocks.products.verify();
    mocks.employees.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn dining_order_requires_an_active_table() {
    let (mut mocks, context) = mocks();

    mocks.employees.expect_get(EmployeeId(1)).return_ok(Some(alice()));
    // Table exists but is out of service.
    let mut table = DiningTable::new(TableId(7), 7, 4);
    table.active = false;
    mocks.tables.expect_get(TableId(7)).return_ok(Some(table));

    let (order_actor, order_client) = brigade::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(context));

    let result = order_client
        .create_order(OrderCreateRequest::Dining {
            employee_id: EmployeeId(1),
            table_id: TableId(7),
            items: vec![],
            customer_name: None,
            notes: None,
        })
        .await;
    assert!(matches!(result, Err(OrderError::TableNotFound(_))));

    mocks.employees.verify();
    mocks.tables.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn update_arm_must_match_the_order_kind() {
    let (mut mocks, context) = mocks();

    mocks.employees.expect_get(EmployeeId(1)).return_ok(Some(alice()));

    let (order_actor, order_client) = brigade::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(context));

    let order_id = order_client
        .create_order(OrderCreateRequest::Bar {
            employee_id: EmployeeId(1),
            drinks_only: true,
            items: vec![],
            customer_name: None,
            notes: None,
        })
        .await
        .unwrap();

    let result = order_client
        .update_order(
            order_id,
            OrderUpdateRequest::Dining {
                table_id: Some(TableId(3)),
                items: None,
                customer_name: None,
                notes: None,
            },
        )
        .await;
    assert!(matches!(result, Err(OrderError::InvalidArgument(_))));

    mocks.employees.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn paid_order_rejects_item_changes_and_stays_intact() {
    let (mut mocks, context) = mocks();

    mocks.employees.expect_get(EmployeeId(1)).return_ok(Some(alice()));
    mocks.products.expect_get(ProductId(1)).return_ok(Some(espresso()));

    let (order_actor, order_client) = brigade::order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(context));

    let order_id = order_client
        .create_order(OrderCreateRequest::Bar {
            employee_id: EmployeeId(1),
            drinks_only: true,
            items: vec![OrderItemRequest::new(ProductId(1), 2)],
            customer_name: None,
            notes: None,
        })
        .await
        .unwrap();

    assert_eq!(
        order_client.mark_as_paid(order_id).await.unwrap(),
        OrderStatus::Paid
    );

    // The terminal lock fires before any product lookup, so no product
    // expectation is scripted here.
    let result = order_client
        .add_item_to_order(order_id, OrderItemRequest::new(ProductId(2), 1))
        .await;
    assert!(matches!(result, Err(OrderError::InvalidState(_))));

    let details = order_client.order_details(order_id).await.unwrap();
    assert_eq!(details.items.len(), 1);
    assert_eq!(details.total_amount, rust_decimal::Decimal::new(500, 2));

    mocks.products.verify();
    mocks.employees.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

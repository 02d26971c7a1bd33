//! Demo binary: spins up the back-of-house system, walks one dining order
//! through its life cycle, and shuts down.

use brigade::lifecycle::BackOfHouse;
use brigade::model::{OrderCreateRequest, OrderItemRequest, OrderStatus};
use resource_actor::tracing::setup_tracing;
use rust_decimal::Decimal;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting back-of-house order system");

    let system = BackOfHouse::new();

    let span = tracing::info_span!("seed_directory");
    let (employee_id, table_id, espresso, burger) = async {
        let employee_id = system
            .employee_client
            .create_employee("Alice", "server")
            .await
            .map_err(|e| e.to_string())?;
        let table_id = system
            .table_client
            .create_table(4, 6)
            .await
            .map_err(|e| e.to_string())?;
        let espresso = system
            .product_client
            .create_product("Espresso", Decimal::new(250, 2))
            .await
            .map_err(|e| e.to_string())?;
        let burger = system
            .product_client
            .create_product("Burger", Decimal::new(1250, 2))
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((employee_id, table_id, espresso, burger))
    }
    .instrument(span)
    .await?;

    info!(%employee_id, %table_id, "Directory seeded");

    let span = tracing::info_span!("order_processing");
    async {
        let order_id = system
            .order_client
            .create_order(OrderCreateRequest::Dining {
                employee_id,
                table_id,
                items: vec![
                    OrderItemRequest::new(espresso, 2),
                    OrderItemRequest::new(burger, 1),
                ],
                customer_name: Some("Bob".to_string()),
                notes: None,
            })
            .await
            .map_err(|e| e.to_string())?;

        let details = system
            .order_client
            .order_details(order_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(
            %order_id,
            order_number = %details.order_number,
            total = %details.total_amount,
            "Order created"
        );

        for status in [
            OrderStatus::InProgress,
            OrderStatus::Ready,
            OrderStatus::Served,
        ] {
            let current = system
                .order_client
                .update_status(order_id, status)
                .await
                .map_err(|e| e.to_string())?;
            info!(%order_id, %current, "Status advanced");
        }

        let paid = system
            .order_client
            .mark_as_paid(order_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(%order_id, %paid, "Order settled");

        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("bar_walkout");
    async {
        let order_id = system
            .order_client
            .create_order(OrderCreateRequest::Bar {
                employee_id,
                drinks_only: true,
                items: vec![OrderItemRequest::new(espresso, 1)],
                customer_name: None,
                notes: Some("tab abandoned".to_string()),
            })
            .await
            .map_err(|e| e.to_string())?;

        let cancelled = system
            .order_client
            .cancel_order(order_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(%order_id, %cancelled, "Order cancelled");

        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let open = system
        .order_client
        .find_by_status(OrderStatus::Paid)
        .await
        .map_err(|e| e.to_string())?;
    info!(settled = open.len(), "Daily summary");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

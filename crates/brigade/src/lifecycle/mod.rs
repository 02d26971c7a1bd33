//! Orchestration layer: starts the actors, wires their dependencies, and
//! shuts them down.

use crate::clients::{EmployeeClient, OrderClient, ProductClient, TableClient};
use crate::order_actor::OrderContext;
use tracing::{error, info};

/// The runtime orchestrator for the back-of-house order system.
///
/// `BackOfHouse` spawns one actor per resource (products, employees, dining
/// tables, orders), injects the collaborator clients into the order actor,
/// and hands out the domain clients.
pub struct BackOfHouse {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    pub employee_client: EmployeeClient,
    pub table_client: TableClient,

    /// Task handles for all running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BackOfHouse {
    /// Creates and starts the whole system.
    ///
    /// Collaborator actors (product, employee, table) have no dependencies
    /// and run with an empty context. The order actor receives clones of
    /// their clients through [`OrderContext`], so its hooks can resolve
    /// employees, tables, and price snapshots.
    pub fn new() -> Self {
        let (product_actor, product_client) = crate::product_actor::new();
        let (employee_actor, employee_client) = crate::employee_actor::new();
        let (table_actor, table_client) = crate::table_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let product_handle = tokio::spawn(product_actor.run(()));
        let employee_handle = tokio::spawn(employee_actor.run(()));
        let table_handle = tokio::spawn(table_actor.run(()));

        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            products: product_client.clone(),
            employees: employee_client.clone(),
            tables: table_client.clone(),
        }));

        Self {
            order_client,
            product_client,
            employee_client,
            table_client,
            handles: vec![
                product_handle,
                employee_handle,
                table_handle,
                order_handle,
            ],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits its loop. The order actor additionally holds
    /// collaborator client clones inside its context, which are dropped when
    /// its own loop ends, so actors wind down in dependency order.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);
        drop(self.employee_client);
        drop(self.table_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {e:?}"));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BackOfHouse {
    fn default() -> Self {
        Self::new()
    }
}

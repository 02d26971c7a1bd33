//! [`ActorEntity`] implementation for [`Order`].
//!
//! Collaborator lookups (employee, table, product catalog) happen in the
//! `on_create`/`on_update`/`handle_action` hooks, inside the actor, so every
//! order mutation is validated and committed on a single task.

use crate::clients::{EmployeeClient, ProductClient, TableClient, TableError};
use crate::model::{
    DiningTable, Order, OrderCreateRequest, OrderId, OrderItem, OrderItemId, OrderItemRequest,
    OrderItemStatus, OrderStatus, OrderUpdateRequest, OrderVariant, Product, ProductId, TableId,
};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, ActorEntity};

/// Collaborator clients injected into the order actor at startup.
#[derive(Clone)]
pub struct OrderContext {
    pub products: ProductClient,
    pub employees: EmployeeClient,
    pub tables: TableClient,
}

/// Domain actions beyond plain field updates.
#[derive(Debug, Clone)]
pub enum OrderAction {
    UpdateStatus(OrderStatus),
    Cancel,
    MarkPaid,
    AddItem(OrderItemRequest),
    RemoveItem(OrderItemId),
    UpdateItemStatus(OrderItemId, OrderItemStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    StatusChanged(OrderStatus),
    ItemAdded(OrderItemId),
    ItemRemoved(OrderItemId),
    ItemStatusChanged(OrderItemId),
}

/// Store-wide order queries.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    All,
    ByStatus(OrderStatus),
    ByEmployee(crate::model::EmployeeId),
    ByOrderNumber(String),
    CreatedSince(DateTime<Utc>),
}

async fn fetch_product(ctx: &OrderContext, id: ProductId) -> Result<Product, OrderError> {
    ctx.products
        .get(id)
        .await
        .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
        .ok_or_else(|| OrderError::ProductNotFound(id.to_string()))
}

async fn resolve_active_table(
    ctx: &OrderContext,
    id: TableId,
) -> Result<DiningTable, OrderError> {
    ctx.tables.find_active(id).await.map_err(|e| match e {
        TableError::NotFound(msg) => OrderError::TableNotFound(msg),
        other => OrderError::ActorCommunicationError(other.to_string()),
    })
}

/// Snapshots the product's current price onto a fresh item and attaches it.
async fn attach_line(
    order: &mut Order,
    ctx: &OrderContext,
    line: &OrderItemRequest,
) -> Result<OrderItemId, OrderError> {
    let product = fetch_product(ctx, line.product_id).await?;
    let item_id = order.next_item_id();
    order.add_item(OrderItem::new(item_id, &product, line.quantity))
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreateRequest;
    type Update = OrderUpdateRequest;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreateRequest) -> Result<Self, OrderError> {
        params.validate()?;
        let (variant, employee_id, items, customer_name, notes) = match params {
            OrderCreateRequest::Bar {
                employee_id,
                drinks_only,
                items,
                customer_name,
                notes,
            } => (
                OrderVariant::Bar { drinks_only },
                employee_id,
                items,
                customer_name,
                notes,
            ),
            OrderCreateRequest::Dining {
                employee_id,
                table_id,
                items,
                customer_name,
                notes,
            } => (
                OrderVariant::Dining { table_id },
                employee_id,
                items,
                customer_name,
                notes,
            ),
        };
        Ok(Order::new(id, variant, customer_name, notes, employee_id).with_pending_items(items))
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::All => true,
            OrderQuery::ByStatus(status) => self.status == *status,
            OrderQuery::ByEmployee(employee_id) => self.employee_id == *employee_id,
            OrderQuery::ByOrderNumber(number) => self.order_number == *number,
            OrderQuery::CreatedSince(since) => self.created_at >= *since,
        }
    }

    /// Order numbers are globally unique; a colliding create is refused
    /// rather than silently overwriting.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.order_number == other.order_number
    }

    /// Resolves the employee, the table for DINING orders, and the price
    /// snapshots for any initial items. Any failure aborts the create.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let employee = ctx
            .employees
            .get(self.employee_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if employee.is_none() {
            return Err(OrderError::EmployeeNotFound(self.employee_id.to_string()));
        }

        if let OrderVariant::Dining { table_id } = self.variant {
            resolve_active_table(ctx, table_id).await?;
        }

        for line in self.take_pending_items() {
            attach_line(self, ctx, &line).await?;
        }
        Ok(())
    }

    /// Field update plus product-keyed item reconciliation. The update arm
    /// must match the order's kind; the kind itself is immutable.
    async fn on_update(
        &mut self,
        update: OrderUpdateRequest,
        ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        if update.kind() != self.kind() {
            return Err(OrderError::InvalidArgument(format!(
                "expected a {} update for {}",
                self.kind(),
                self.id
            )));
        }
        update.validate()?;
        self.ensure_mutable()?;

        match &update {
            OrderUpdateRequest::Bar {
                drinks_only,
                customer_name,
                notes,
                ..
            } => {
                if let Some(flag) = drinks_only {
                    if let OrderVariant::Bar { drinks_only } = &mut self.variant {
                        *drinks_only = *flag;
                    }
                }
                if customer_name.is_some() {
                    self.customer_name = customer_name.clone();
                }
                if notes.is_some() {
                    self.notes = notes.clone();
                }
            }
            OrderUpdateRequest::Dining {
                table_id,
                customer_name,
                notes,
                ..
            } => {
                if let Some(requested) = table_id {
                    let table = resolve_active_table(ctx, *requested).await?;
                    if let OrderVariant::Dining { table_id } = &mut self.variant {
                        *table_id = table.id;
                    }
                }
                if customer_name.is_some() {
                    self.customer_name = customer_name.clone();
                }
                if notes.is_some() {
                    self.notes = notes.clone();
                }
            }
        }

        if let Some(requested) = update.items() {
            // Items whose product no longer appears in the request go away.
            let keep: Vec<ProductId> = requested.iter().map(|line| line.product_id).collect();
            let stale: Vec<OrderItemId> = self
                .items()
                .iter()
                .filter(|item| !keep.contains(&item.product_id))
                .map(|item| item.id)
                .collect();
            for item_id in stale {
                self.remove_item(item_id)?;
            }

            // Surviving lines keep their item identity; the quantity is
            // taken from the request and the price snapshot is refreshed
            // from the live catalog. New lines snapshot from scratch.
            for line in requested {
                match self.item_for_product(line.product_id).map(|item| item.id) {
                    Some(item_id) => {
                        let product = fetch_product(ctx, line.product_id).await?;
                        self.set_item_quantity(item_id, line.quantity)?;
                        self.refresh_item_price(item_id, product.price)?;
                    }
                    None => {
                        attach_line(self, ctx, line).await?;
                    }
                }
            }
        }

        self.recompute_total();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::UpdateStatus(next) => {
                self.transition_to(next)?;
                Ok(OrderActionResult::StatusChanged(self.status))
            }
            OrderAction::Cancel => {
                self.cancel()?;
                Ok(OrderActionResult::StatusChanged(self.status))
            }
            OrderAction::MarkPaid => {
                self.mark_paid()?;
                Ok(OrderActionResult::StatusChanged(self.status))
            }
            OrderAction::AddItem(line) => {
                if line.quantity == 0 {
                    return Err(OrderError::InvalidArgument(format!(
                        "quantity for {} must be at least 1",
                        line.product_id
                    )));
                }
                self.ensure_mutable()?;
                let item_id = attach_line(self, ctx, &line).await?;
                Ok(OrderActionResult::ItemAdded(item_id))
            }
            OrderAction::RemoveItem(item_id) => {
                let removed = self.remove_item(item_id)?;
                Ok(OrderActionResult::ItemRemoved(removed.id))
            }
            OrderAction::UpdateItemStatus(item_id, status) => {
                self.set_item_status(item_id, status)?;
                Ok(OrderActionResult::ItemStatusChanged(item_id))
            }
        }
    }
}

//! Order aggregate.
//!
//! An order exclusively owns its items: they live inside the aggregate, so
//! "which order owns this item" is container membership rather than a stored
//! back-pointer, and there is no dual-write to keep consistent. Every
//! mutation of the item collection funnels through [`Order::recompute_total`]
//! so the derived total always equals the sum of the item totals.

use crate::model::{
    EmployeeId, OrderItem, OrderItemId, OrderItemRequest, OrderItemStatus, OrderStatus, TableId,
};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Discriminator for the two order kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    #[serde(rename = "BAR")]
    Bar,
    #[serde(rename = "DINING")]
    Dining,
}

impl Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderKind::Bar => "BAR",
            OrderKind::Dining => "DINING",
        })
    }
}

/// Variant payload. The payload kind always matches the order kind by
/// construction; dispatch is an exhaustive match, so an unhandled variant is
/// a compile error rather than a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum OrderVariant {
    #[serde(rename = "BAR")]
    Bar { drinks_only: bool },
    #[serde(rename = "DINING")]
    Dining { table_id: TableId },
}

impl OrderVariant {
    pub fn kind(&self) -> OrderKind {
        match self {
            OrderVariant::Bar { .. } => OrderKind::Bar,
            OrderVariant::Dining { .. } => OrderKind::Dining,
        }
    }
}

/// The aggregate root for one customer transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Assigned once at creation, never reassigned. Globally unique; the
    /// order actor refuses to commit a colliding create.
    pub order_number: String,
    pub variant: OrderVariant,
    pub status: OrderStatus,
    /// Derived: always `Σ item.total_price`, scale 2.
    pub total_amount: Decimal,
    pub customer_name: Option<String>,
    pub notes: Option<String>,
    pub employee_id: EmployeeId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    items: Vec<OrderItem>,
    next_item_id: u32,
    /// Initial item requests awaiting price snapshots; drained by the order
    /// actor's `on_create` hook.
    pending_items: Vec<OrderItemRequest>,
}

impl Order {
    pub fn new(
        id: OrderId,
        variant: OrderVariant,
        customer_name: Option<String>,
        notes: Option<String>,
        employee_id: EmployeeId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            order_number: format!("ORD-{}", now.timestamp_micros()),
            variant,
            status: OrderStatus::Pending,
            total_amount: Decimal::ZERO,
            customer_name,
            notes,
            employee_id,
            created_at: now,
            updated_at: now,
            items: Vec::new(),
            next_item_id: 1,
            pending_items: Vec::new(),
        }
    }

    pub fn kind(&self) -> OrderKind {
        self.variant.kind()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn item(&self, item_id: OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// First attached item referencing the given product, if any.
    pub fn item_for_product(&self, product_id: crate::model::ProductId) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub(crate) fn with_pending_items(mut self, items: Vec<OrderItemRequest>) -> Self {
        self.pending_items = items;
        self
    }

    pub(crate) fn take_pending_items(&mut self) -> Vec<OrderItemRequest> {
        std::mem::take(&mut self.pending_items)
    }

    /// Allocates the next item identifier, unique within this order.
    pub fn next_item_id(&mut self) -> OrderItemId {
        let id = OrderItemId(self.next_item_id);
        self.next_item_id += 1;
        id
    }

    /// Rejects any field or item mutation once the status is terminal.
    /// Deletion is the one operation exempt from this lock.
    pub fn ensure_mutable(&self) -> Result<(), OrderError> {
        if self.status.is_terminal() {
            return Err(OrderError::InvalidState(format!(
                "cannot modify a {} order",
                self.status
            )));
        }
        Ok(())
    }

    /// Attaches an item. Idempotent: an item id already on the order is left
    /// alone and the call is a no-op.
    pub fn add_item(&mut self, item: OrderItem) -> Result<OrderItemId, OrderError> {
        self.ensure_mutable()?;
        let item_id = item.id;
        if self.item(item_id).is_none() {
            self.items.push(item);
            self.recompute_total();
        }
        Ok(item_id)
    }

    /// Detaches and returns the item, or `ItemNotFound` if no item with that
    /// id belongs to this order.
    pub fn remove_item(&mut self, item_id: OrderItemId) -> Result<OrderItem, OrderError> {
        self.ensure_mutable()?;
        let idx = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| {
                OrderError::ItemNotFound(format!("{item_id} on {}", self.id))
            })?;
        let removed = self.items.remove(idx);
        self.recompute_total();
        Ok(removed)
    }

    /// Removes all items one by one, reusing [`Order::remove_item`] so each
    /// detach goes through the same path, then recomputes once more.
    pub fn clear_items(&mut self) -> Result<(), OrderError> {
        self.ensure_mutable()?;
        let ids: Vec<OrderItemId> = self.items.iter().map(|i| i.id).collect();
        for id in ids {
            self.remove_item(id)?;
        }
        self.recompute_total();
        Ok(())
    }

    /// Quantity change on an owned item, propagated upward into the order
    /// total.
    pub fn set_item_quantity(
        &mut self,
        item_id: OrderItemId,
        quantity: u32,
    ) -> Result<(), OrderError> {
        self.ensure_mutable()?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| {
                OrderError::ItemNotFound(format!("{item_id} on {}", self.id))
            })?;
        if item.set_quantity(quantity) {
            self.recompute_total();
        }
        Ok(())
    }

    /// Explicit price-refresh path: rewrites the item's snapshot and both
    /// totals only when the catalog price actually differs.
    pub fn refresh_item_price(
        &mut self,
        item_id: OrderItemId,
        current_price: Decimal,
    ) -> Result<bool, OrderError> {
        self.ensure_mutable()?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| {
                OrderError::ItemNotFound(format!("{item_id} on {}", self.id))
            })?;
        if item.refresh_price(current_price) {
            self.recompute_total();
            return Ok(true);
        }
        Ok(false)
    }

    /// Kitchen/bar workflow status for one item.
    pub fn set_item_status(
        &mut self,
        item_id: OrderItemId,
        status: OrderItemStatus,
    ) -> Result<(), OrderError> {
        self.ensure_mutable()?;
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| {
                OrderError::ItemNotFound(format!("{item_id} on {}", self.id))
            })?;
        item.status = status;
        self.touch();
        Ok(())
    }

    /// Recomputes the derived total from the owned items. The single funnel
    /// for the total invariant; an externally supplied total is never
    /// trusted.
    pub fn recompute_total(&mut self) {
        self.total_amount = self
            .items
            .iter()
            .map(|i| i.total_price)
            .sum::<Decimal>()
            .round_dp(2);
        self.touch();
    }

    /// Moves the order to `next` if the state machine allows it.
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidState(format!(
                "cannot change status of a {} order",
                self.status
            )));
        }
        self.status = next;
        self.touch();
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Cancelled)
    }

    pub fn mark_paid(&mut self) -> Result<(), OrderError> {
        self.transition_to(OrderStatus::Paid)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

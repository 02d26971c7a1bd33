//! Order line item.
//!
//! An item snapshots the product's unit price at attach time; the snapshot
//! is never re-synced to the live catalog price except through the explicit
//! refresh path used during order update.

use crate::model::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for an item, unique within its owning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderItemId(pub u32);

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Kitchen/bar workflow status of a single item. This is independent of the
/// order's own life cycle and never gates order mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderItemStatus {
    Pending,
    InProgress,
    Ready,
    Served,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub status: OrderItemStatus,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    /// Price snapshot taken when the item was attached, scale 2.
    pub unit_price: Decimal,
    /// Always `unit_price × quantity`, scale 2.
    pub total_price: Decimal,
}

impl OrderItem {
    /// Builds an item snapshotting the product's current price.
    pub fn new(id: OrderItemId, product: &Product, quantity: u32) -> Self {
        let unit_price = product.price.round_dp(2);
        let mut item = Self {
            id,
            status: OrderItemStatus::Pending,
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            unit_price,
            total_price: Decimal::ZERO,
        };
        item.recompute_total();
        item
    }

    /// Changes the quantity and recomputes the line total. A zero quantity
    /// is a defensive no-op (positive quantity is validated at the request
    /// boundary); returns whether the item changed.
    pub fn set_quantity(&mut self, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        self.quantity = quantity;
        self.recompute_total();
        true
    }

    /// Rewrites the price snapshot only when the current catalog price
    /// differs; returns whether anything changed.
    pub fn refresh_price(&mut self, current: Decimal) -> bool {
        let current = current.round_dp(2);
        if self.unit_price == current {
            return false;
        }
        self.unit_price = current;
        self.recompute_total();
        true
    }

    fn recompute_total(&mut self) {
        self.total_price = (self.unit_price * Decimal::from(self.quantity)).round_dp(2);
    }
}

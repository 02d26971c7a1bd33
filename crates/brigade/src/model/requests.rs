//! Request and response payloads for the order actor.
//!
//! Create and update requests are tagged unions over the order kind, so the
//! set of accepted kinds is closed at the type level: a payload with an
//! unknown `kind` discriminator fails at deserialization instead of reaching
//! the actor.

use crate::model::{
    EmployeeId, Order, OrderItem, OrderKind, OrderStatus, OrderVariant, ProductId, TableId,
};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One requested line: which product and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderItemRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.quantity == 0 {
            return Err(OrderError::InvalidArgument(format!(
                "quantity for {} must be at least 1",
                self.product_id
            )));
        }
        Ok(())
    }
}

/// Payload for creating a new order, one arm per order kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum OrderCreateRequest {
    #[serde(rename = "BAR")]
    Bar {
        employee_id: EmployeeId,
        #[serde(default)]
        drinks_only: bool,
        #[serde(default)]
        items: Vec<OrderItemRequest>,
        #[serde(default)]
        customer_name: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    #[serde(rename = "DINING")]
    Dining {
        employee_id: EmployeeId,
        table_id: TableId,
        #[serde(default)]
        items: Vec<OrderItemRequest>,
        #[serde(default)]
        customer_name: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
}

impl OrderCreateRequest {
    pub fn kind(&self) -> OrderKind {
        match self {
            OrderCreateRequest::Bar { .. } => OrderKind::Bar,
            OrderCreateRequest::Dining { .. } => OrderKind::Dining,
        }
    }

    pub fn employee_id(&self) -> EmployeeId {
        match self {
            OrderCreateRequest::Bar { employee_id, .. }
            | OrderCreateRequest::Dining { employee_id, .. } => *employee_id,
        }
    }

    pub fn items(&self) -> &[OrderItemRequest] {
        match self {
            OrderCreateRequest::Bar { items, .. }
            | OrderCreateRequest::Dining { items, .. } => items,
        }
    }

    /// Every requested line must carry a positive quantity.
    pub fn validate(&self) -> Result<(), OrderError> {
        for item in self.items() {
            item.validate()?;
        }
        Ok(())
    }
}

/// Payload for updating an existing order. The arm must match the order's
/// kind; `None` fields are left unchanged, and `items: Some(..)` replaces the
/// whole item list via product-keyed reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum OrderUpdateRequest {
    #[serde(rename = "BAR")]
    Bar {
        #[serde(default)]
        drinks_only: Option<bool>,
        #[serde(default)]
        items: Option<Vec<OrderItemRequest>>,
        #[serde(default)]
        customer_name: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    #[serde(rename = "DINING")]
    Dining {
        #[serde(default)]
        table_id: Option<TableId>,
        #[serde(default)]
        items: Option<Vec<OrderItemRequest>>,
        #[serde(default)]
        customer_name: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
}

impl OrderUpdateRequest {
    pub fn kind(&self) -> OrderKind {
        match self {
            OrderUpdateRequest::Bar { .. } => OrderKind::Bar,
            OrderUpdateRequest::Dining { .. } => OrderKind::Dining,
        }
    }

    pub fn items(&self) -> Option<&[OrderItemRequest]> {
        match self {
            OrderUpdateRequest::Bar { items, .. }
            | OrderUpdateRequest::Dining { items, .. } => items.as_deref(),
        }
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        for item in self.items().unwrap_or_default() {
            item.validate()?;
        }
        Ok(())
    }
}

/// Serializable read view of an order, returned by the query operations.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetails {
    pub id: crate::model::OrderId,
    pub order_number: String,
    #[serde(flatten)]
    pub variant: OrderVariant,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub customer_name: Option<String>,
    pub notes: Option<String>,
    pub employee_id: EmployeeId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl From<&Order> for OrderDetails {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number.clone(),
            variant: order.variant,
            status: order.status,
            total_amount: order.total_amount,
            customer_name: order.customer_name.clone(),
            notes: order.notes.clone(),
            employee_id: order.employee_id,
            created_at: order.created_at,
            updated_at: order.updated_at,
            items: order.items().to_vec(),
        }
    }
}

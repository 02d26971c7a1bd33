//! Order status state machine.
//!
//! The transition rule is data-driven: every non-terminal status may move to
//! any status (including backward), while the terminal statuses `Paid` and
//! `Cancelled` allow no transitions at all. Call sites consult
//! [`OrderStatus::can_transition_to`] instead of re-encoding the rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life cycle status of an [`Order`](crate::model::Order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Ready,
    Served,
    Paid,
    Cancelled,
}

/// Every status, in declaration order.
pub const ALL_STATUSES: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::InProgress,
    OrderStatus::Ready,
    OrderStatus::Served,
    OrderStatus::Paid,
    OrderStatus::Cancelled,
];

impl OrderStatus {
    /// Terminal statuses lock the order against any further mutation.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled)
    }

    /// The set of statuses this status may transition to.
    pub fn allowed_transitions(self) -> &'static [OrderStatus] {
        if self.is_terminal() {
            &[]
        } else {
            &ALL_STATUSES
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

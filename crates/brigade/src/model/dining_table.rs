//! Dining table directory entry. DINING orders must resolve an *active*
//! table at creation; inactive tables are treated as absent.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for dining tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TableId(pub u32);

impl From<u32> for TableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiningTable {
    pub id: TableId,
    pub number: u32,
    pub capacity: u32,
    pub active: bool,
}

impl DiningTable {
    pub fn new(id: TableId, number: u32, capacity: u32) -> Self {
        Self {
            id,
            number,
            capacity,
            active: true,
        }
    }
}

/// Payload for creating a new dining table.
#[derive(Debug, Clone)]
pub struct TableCreate {
    pub number: u32,
    pub capacity: u32,
}

/// Payload for updating a dining table. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct TableUpdate {
    pub capacity: Option<u32>,
    pub active: Option<bool>,
}

//! Employee directory entry. Every order carries a required, immutable
//! reference to the employee who opened it.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl From<u32> for EmployeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "employee_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Payload for creating a new employee.
#[derive(Debug, Clone)]
pub struct EmployeeCreate {
    pub name: String,
    pub role: String,
}

/// Payload for updating an employee. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
}

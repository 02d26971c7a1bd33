//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order exists but does not own an item with the given id.
    #[error("Order item not found: {0}")]
    ItemNotFound(String),

    /// An item referenced a product that does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The order referenced an employee that does not exist.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    /// The order referenced a dining table that does not exist or is
    /// inactive.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// The request payload is malformed or fails validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the order's current status.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Creating the order would collide with an existing order number.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

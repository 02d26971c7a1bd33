//! Dining table directory actor.

use crate::clients::TableClient;
use crate::model::{DiningTable, TableCreate, TableId, TableUpdate};
use async_trait::async_trait;
use resource_actor::{ActorEntity, ResourceActor};
use thiserror::Error;

/// Errors that can occur during table operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    /// The requested table was not found or is inactive.
    #[error("Table not found: {0}")]
    NotFound(String),

    /// The table data provided is invalid.
    #[error("Table validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TableError {
    fn from(msg: String) -> Self {
        TableError::ActorCommunicationError(msg)
    }
}

#[async_trait]
impl ActorEntity for DiningTable {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = ();
    type Context = ();
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, TableError> {
        if params.capacity == 0 {
            return Err(TableError::ValidationError(
                "capacity must be at least 1".to_string(),
            ));
        }
        Ok(DiningTable::new(id, params.number, params.capacity))
    }

    fn matches(&self, _query: &()) -> bool {
        true
    }

    /// Two tables must not share a table number.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.number == other.number
    }

    async fn on_update(&mut self, update: TableUpdate, _ctx: &()) -> Result<(), TableError> {
        if let Some(capacity) = update.capacity {
            if capacity == 0 {
                return Err(TableError::ValidationError(
                    "capacity must be at least 1".to_string(),
                ));
            }
            self.capacity = capacity;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), TableError> {
        Ok(())
    }
}

/// Creates a new DiningTable actor and its client.
pub fn new() -> (ResourceActor<DiningTable>, TableClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, TableClient::new(generic_client))
}

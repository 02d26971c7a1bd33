//! Employee directory actor.

use crate::clients::EmployeeClient;
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use async_trait::async_trait;
use resource_actor::{ActorEntity, ResourceActor};
use thiserror::Error;

/// Errors that can occur during employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    /// The requested employee was not found.
    #[error("Employee not found: {0}")]
    NotFound(String),

    /// The employee data provided is invalid.
    #[error("Employee validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for EmployeeError {
    fn from(msg: String) -> Self {
        EmployeeError::ActorCommunicationError(msg)
    }
}

#[async_trait]
impl ActorEntity for Employee {
    type Id = EmployeeId;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = ();
    type Context = ();
    type Error = EmployeeError;

    fn from_create_params(id: EmployeeId, params: EmployeeCreate) -> Result<Self, EmployeeError> {
        if params.name.trim().is_empty() {
            return Err(EmployeeError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        Ok(Employee::new(id, params.name, params.role))
    }

    fn matches(&self, _query: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: EmployeeUpdate, _ctx: &()) -> Result<(), EmployeeError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(EmployeeError::ValidationError(
                    "name must not be empty".to_string(),
                ));
            }
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), EmployeeError> {
        Ok(())
    }
}

/// Creates a new Employee actor and its client.
pub fn new() -> (ResourceActor<Employee>, EmployeeClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, EmployeeClient::new(generic_client))
}

//! Client for interacting with the Employee actor.

use crate::employee_actor::EmployeeError;
use crate::model::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for the Employee directory actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl EmployeeClient {
    pub fn new(inner: ResourceClient<Employee>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_employee(
        &self,
        name: impl Into<String> + std::fmt::Debug,
        role: impl Into<String> + std::fmt::Debug,
    ) -> Result<EmployeeId, EmployeeError> {
        self.inner
            .create(EmployeeCreate {
                name: name.into(),
                role: role.into(),
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, EmployeeError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        let mut employees = self.find(()).await?;
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }
}

#[async_trait]
impl ActorClient<Employee> for EmployeeClient {
    type Error = EmployeeError;

    fn inner(&self) -> &ResourceClient<Employee> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> EmployeeError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<EmployeeError>() {
                Ok(domain) => *domain,
                Err(other) => EmployeeError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(msg) => EmployeeError::NotFound(msg),
            other => EmployeeError::ActorCommunicationError(other.to_string()),
        }
    }
}

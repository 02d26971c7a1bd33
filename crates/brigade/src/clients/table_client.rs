//! Client for interacting with the DiningTable actor.

use crate::model::{DiningTable, TableCreate, TableId, TableUpdate};
use crate::table_actor::TableError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

/// Client for the DiningTable directory actor.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<DiningTable>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<DiningTable>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_table(
        &self,
        number: u32,
        capacity: u32,
    ) -> Result<TableId, TableError> {
        self.inner
            .create(TableCreate { number, capacity })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_table(
        &self,
        id: TableId,
        update: TableUpdate,
    ) -> Result<DiningTable, TableError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Resolves a table that exists *and* is active; an inactive table is
    /// treated as absent.
    #[instrument(skip(self))]
    pub async fn find_active(&self, id: TableId) -> Result<DiningTable, TableError> {
        match self.get(id).await? {
            Some(table) if table.active => Ok(table),
            _ => Err(TableError::NotFound(id.to_string())),
        }
    }

    /// Takes a table out of service without deleting it; existing orders
    /// keep referencing it.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: TableId) -> Result<DiningTable, TableError> {
        self.update_table(
            id,
            TableUpdate {
                capacity: None,
                active: Some(false),
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_tables(&self) -> Result<Vec<DiningTable>, TableError> {
        let mut tables = self.find(()).await?;
        tables.sort_by_key(|table| table.id);
        Ok(tables)
    }
}

#[async_trait]
impl ActorClient<DiningTable> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<DiningTable> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> TableError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<TableError>() {
                Ok(domain) => *domain,
                Err(other) => TableError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(msg) => TableError::NotFound(msg),
            FrameworkError::Conflict(msg) => TableError::ValidationError(format!(
                "table number already in use: {msg}"
            )),
            other => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}

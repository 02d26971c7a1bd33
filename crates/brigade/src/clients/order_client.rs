//! Client for interacting with the Order actor.

use crate::model::{
    EmployeeId, Order, OrderCreateRequest, OrderDetails, OrderId, OrderItemId, OrderItemRequest,
    OrderItemStatus, OrderStatus, OrderUpdateRequest,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError, OrderQuery};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the Order actor.
///
/// Collaborator validation (employee, table, product catalog) happens inside
/// the actor's entity hooks; this client only shapes requests and maps
/// errors back into [`OrderError`].
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, request))]
    pub async fn create_order(&self, request: OrderCreateRequest) -> Result<OrderId, OrderError> {
        debug!(kind = %request.kind(), "create_order");
        self.inner.create(request).await.map_err(Self::map_error)
    }

    /// Full read view of one order, or `NotFound`.
    #[instrument(skip(self))]
    pub async fn order_details(&self, id: OrderId) -> Result<OrderDetails, OrderError> {
        self.get(id)
            .await?
            .map(|order| OrderDetails::from(&order))
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, request))]
    pub async fn update_order(
        &self,
        id: OrderId,
        request: OrderUpdateRequest,
    ) -> Result<OrderDetails, OrderError> {
        debug!(%id, kind = %request.kind(), "update_order");
        let updated = self
            .inner
            .update(id, request)
            .await
            .map_err(Self::map_error)?;
        Ok(OrderDetails::from(&updated))
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        self.status_action(id, OrderAction::UpdateStatus(status))
            .await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.status_action(id, OrderAction::Cancel).await
    }

    #[instrument(skip(self))]
    pub async fn mark_as_paid(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.status_action(id, OrderAction::MarkPaid).await
    }

    #[instrument(skip(self))]
    pub async fn add_item_to_order(
        &self,
        id: OrderId,
        item: OrderItemRequest,
    ) -> Result<OrderItemId, OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::AddItem(item))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::ItemAdded(item_id) => Ok(item_id),
            other => Err(OrderError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item_from_order(
        &self,
        id: OrderId,
        item_id: OrderItemId,
    ) -> Result<(), OrderError> {
        self.inner
            .perform_action(id, OrderAction::RemoveItem(item_id))
            .await
            .map_err(Self::map_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_item_status(
        &self,
        id: OrderId,
        item_id: OrderItemId,
        status: OrderItemStatus,
    ) -> Result<(), OrderError> {
        self.inner
            .perform_action(id, OrderAction::UpdateItemStatus(item_id, status))
            .await
            .map_err(Self::map_error)?;
        Ok(())
    }

    /// Deletion is exempt from the terminal-status lock.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderDetails>, OrderError> {
        self.find_details(OrderQuery::All).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<OrderDetails>, OrderError> {
        self.find_details(OrderQuery::ByStatus(status)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<OrderDetails>, OrderError> {
        self.find_details(OrderQuery::ByEmployee(employee_id)).await
    }

    /// Order numbers are unique, so this resolves to at most one order.
    #[instrument(skip(self))]
    pub async fn find_by_order_number(
        &self,
        order_number: &str,
    ) -> Result<Option<OrderDetails>, OrderError> {
        let mut matching = self
            .find_details(OrderQuery::ByOrderNumber(order_number.to_string()))
            .await?;
        Ok(matching.pop())
    }

    /// All orders created at or after `since`.
    #[instrument(skip(self))]
    pub async fn find_recent(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<OrderDetails>, OrderError> {
        self.find_details(OrderQuery::CreatedSince(since)).await
    }

    async fn status_action(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<OrderStatus, OrderError> {
        match self
            .inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::StatusChanged(status) => Ok(status),
            other => Err(OrderError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    }

    /// The store iterates in hash order; present results sorted by id.
    async fn find_details(&self, query: OrderQuery) -> Result<Vec<OrderDetails>, OrderError> {
        let mut orders = self.find(query).await?;
        orders.sort_by_key(|order| order.id);
        Ok(orders.iter().map(OrderDetails::from).collect())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Entity errors travel through the framework boxed; unbox them back
    /// into [`OrderError`] so callers see the domain failure, not a wrapper.
    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(domain) => *domain,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(msg) => OrderError::NotFound(msg),
            FrameworkError::Conflict(msg) => OrderError::Conflict(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

//! Order-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use entity::{OrderAction, OrderActionResult, OrderContext, OrderQuery};
pub use error::OrderError;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client. The actor is inert until
/// [`ResourceActor::run`] is spawned with an [`OrderContext`].
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}

//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to standard CRUD operations, plus `Action` for
/// resource-specific logic and `Find` for store-wide filtered reads. The
/// associated types on [`ActorEntity`] keep every operation type-safe: a
/// request built for one entity type cannot be sent to another entity's
/// actor.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    /// Store-wide read returning every entity matching the query.
    Find {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}

//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Entity-specific
//! failures are carried through `EntityError` and can be downcast back to
//! the entity's own error type by client wrappers.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A freshly created entity collided with an existing one (see
    /// [`ActorEntity::conflicts_with`](crate::ActorEntity::conflicts_with)).
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

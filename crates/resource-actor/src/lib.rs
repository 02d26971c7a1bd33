//! # Resource Actor
//!
//! Foundational building blocks for type-safe, concurrent actor systems on
//! Tokio. Each resource type (an order, a product, an employee, …) gets its
//! own actor owning its state; clients communicate with it through typed
//! messages over channels.
//!
//! ## Architecture
//!
//! The crate separates three layers:
//!
//! 1. **Entity layer** ([`ActorEntity`]) — your domain model and its
//!    lifecycle hooks.
//! 2. **Runtime layer** ([`ResourceActor`]) — the message loop; one task per
//!    resource type, sequential processing, no locks.
//! 3. **Interface layer** ([`ResourceClient`], [`ActorClient`]) — type-safe
//!    async access.
//!
//! ## Operations
//!
//! Every actor supports Create / Get / Update / Delete plus two
//! extensibility points:
//!
//! - **Actions** — entity-specific mutations addressed to one entity (e.g.
//!   a status transition);
//! - **Find** — store-wide filtered reads driven by the entity's `Query`
//!   type.
//!
//! ## Guarantees
//!
//! - Messages for one resource type are processed sequentially; two racing
//!   requests on the same entity are serialized by the actor.
//! - `Update`/`Action` hooks run on a scratch clone that is committed only
//!   on success, so a failing operation leaves no partial state.
//! - Creates consult [`ActorEntity::conflicts_with`] before insertion; a
//!   collision is reported as [`FrameworkError::Conflict`], never silently
//!   overwritten.
//!
//! ## Context injection
//!
//! Dependencies are bound at runtime via `actor.run(context)`, not at
//! construction time. An actor whose entity needs other actors receives
//! their clients as its `Context`:
//!
//! ```ignore
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run(OrderContext { products: product_client }));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] implements the same channel protocol as a real actor
//! but answers from scripted expectations, enabling deterministic tests of
//! client logic and of actors with mocked dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

//! # Brigade
//!
//! A back-of-house order management system built on resource-oriented
//! actors.
//!
//! ## 🏗️ Architecture
//!
//! Every resource (orders, products, employees, dining tables) is owned by
//! one [`resource_actor::ResourceActor`] running in its own Tokio task.
//! Requests are processed sequentially per actor, so an order mutation is
//! validated and committed without locks and without interleaving.
//!
//! - **[model]**: Pure data structures. The [`Order`](model::Order)
//!   aggregate exclusively owns its line items and keeps the derived total
//!   in step with them.
//! - **[order_actor]**, **[product_actor]**, **[employee_actor]**,
//!   **[table_actor]**: `ActorEntity` implementations with the
//!   resource-specific hooks and error types.
//! - **[clients]**: Type-safe wrappers ([`OrderClient`](clients::OrderClient)
//!   and friends) that hide message passing and translate framework errors
//!   back into domain errors.
//! - **[lifecycle]**: The [`BackOfHouse`](lifecycle::BackOfHouse)
//!   orchestrator that spawns and wires the actors.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads
//! RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod employee_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod table_actor;

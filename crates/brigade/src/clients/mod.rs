//! Domain-specific client wrappers around the generic `ResourceClient`.
//!
//! Each wrapper owns the translation from framework errors to its resource's
//! error type and exposes the operations callers actually use, instead of
//! the raw create/get/update/delete surface.

pub mod employee_client;
pub mod order_client;
pub mod product_client;
pub mod table_client;

pub use employee_client::EmployeeClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use table_client::TableClient;

pub use crate::employee_actor::EmployeeError;
pub use crate::product_actor::ProductError;
pub use crate::table_actor::TableError;

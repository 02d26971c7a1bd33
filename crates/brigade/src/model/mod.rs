//! Domain model: the order aggregate, its line items, the collaborator
//! entities it references, and the request/response payloads accepted at the
//! actor boundary.

pub mod dining_table;
pub mod employee;
pub mod order;
pub mod order_item;
pub mod product;
pub mod requests;
pub mod status;

pub use dining_table::{DiningTable, TableCreate, TableId, TableUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
pub use order::{Order, OrderId, OrderKind, OrderVariant};
pub use order_item::{OrderItem, OrderItemId, OrderItemStatus};
pub use product::{Product, ProductCreate, ProductId, ProductUpdate};
pub use requests::{OrderCreateRequest, OrderDetails, OrderItemRequest, OrderUpdateRequest};
pub use status::OrderStatus;

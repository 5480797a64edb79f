//! Domain primitives, use-case services, and ports.
//!
//! Purpose: keep account and order rules independent of HTTP, Diesel, and
//! SMTP. Inbound adapters build validated inputs (`NewAccount`, `Credentials`,
//! `ProfileUpdate`, `NewOrder`) and call the driving ports; outbound adapters
//! implement the driven ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `MatricNumber`, `AccountProfile`, `Account`: account model.
//! - `FoodList`, `NewOrder`, `Order`: order model.
//! - `Notification`: outbound message content.
//! - `AccountService`, `OrderService`: use-case implementations.

pub mod account;
mod account_service;
pub mod auth;
pub mod error;
pub mod notification;
pub mod order;
mod order_service;
pub mod ports;
pub mod trace_id;

pub use self::account::{
    Account, AccountProfile, AccountValidationError, MatricNumber, NewAccount, ProfileUpdate,
};
pub use self::account_service::AccountService;
pub use self::auth::{Credentials, Password};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::notification::{Notification, ORDER_RECEIVED_SUBJECT};
pub use self::order::{FoodList, NewOrder, Order, OrderId, OrderValidationError};
pub use self::order_service::OrderService;
pub use self::trace_id::TraceId;

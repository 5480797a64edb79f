//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: SQLite-backed repositories using Diesel ORM
//! - **notification**: SMTP delivery of order notifications
//!
//! Adapters translate between domain types and infrastructure-specific
//! representations. They contain no business logic.

pub mod notification;
pub mod persistence;

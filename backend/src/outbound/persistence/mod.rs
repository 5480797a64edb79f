//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by a single
//! SQLite file, accessed through `diesel-async`'s sync connection wrapper and
//! `bb8` pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel models
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures are mapped to the domain's
//!   persistence error types.
//!
//! # Example
//!
//! ```no_run
//! use campus_food::outbound::persistence::{
//!     DbPool, DieselAccountRepository, PoolConfig, ensure_schema,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("./database.db")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselAccountRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_account_repository;
mod diesel_basic_error_mapping;
mod diesel_order_repository;
mod json_serializers;
mod models;
mod pool;
mod schema;
mod schema_bootstrap;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use schema_bootstrap::{SchemaError, ensure_schema};

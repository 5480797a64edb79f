//! Port abstraction for order persistence adapters.

use async_trait::async_trait;

use crate::domain::{MatricNumber, NewOrder, Order};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order repository adapters.
    pub enum OrderPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order repository query failed: {message}",
    }
}

/// Driven port over the `orders` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Append an order. The store assigns its identifier.
    async fn insert(&self, order: &NewOrder) -> Result<(), OrderPersistenceError>;

    /// Orders placed by an account, oldest first.
    async fn list_for_account(
        &self,
        matric_number: &MatricNumber,
    ) -> Result<Vec<Order>, OrderPersistenceError>;
}

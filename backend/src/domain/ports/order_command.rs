//! Driving port for order placement.

use async_trait::async_trait;

use crate::domain::{Error, NewOrder};

/// Domain use-case port for orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderCommand: Send + Sync {
    /// Persist an order and schedule its notification.
    ///
    /// Success depends on the store write alone; the notification outcome is
    /// never reported here.
    async fn place_order(&self, order: NewOrder) -> Result<(), Error>;
}

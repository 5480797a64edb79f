//! Order placement: persist first, then notify without waiting.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::ports::{NotificationSender, OrderCommand, OrderPersistenceError, OrderRepository};
use super::{Error, NewOrder, Notification, TraceId};

/// Places orders and fires the matching notification.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    notifier: Arc<dyn NotificationSender>,
}

impl OrderService {
    /// Create a service over the order repository and notification sender.
    pub fn new(orders: Arc<dyn OrderRepository>, notifier: Arc<dyn NotificationSender>) -> Self {
        Self { orders, notifier }
    }

    /// Deliver `notification` on a detached task under the caller's trace id.
    ///
    /// The outcome is only ever logged.
    fn dispatch(&self, notification: Notification) -> JoinHandle<()> {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(TraceId::propagate(async move {
            match notifier.send(&notification).await {
                Ok(()) => info!(subject = notification.subject(), "order notification sent"),
                Err(error) => warn!(%error, "order notification failed"),
            }
        }))
    }
}

fn map_persistence_error(error: OrderPersistenceError) -> Error {
    match error {
        OrderPersistenceError::Connection { message } => Error::service_unavailable(message),
        OrderPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl OrderCommand for OrderService {
    async fn place_order(&self, order: NewOrder) -> Result<(), Error> {
        self.orders
            .insert(&order)
            .await
            .map_err(map_persistence_error)?;

        let _detached = self.dispatch(Notification::order_received(&order));
        Ok(())
    }
}

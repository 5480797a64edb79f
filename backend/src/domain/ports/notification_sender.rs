//! Driven port for outbound notifications.

use async_trait::async_trait;

use crate::domain::Notification;

use super::define_port_error;

define_port_error! {
    /// Failures raised while delivering a notification.
    pub enum NotificationError {
        /// The message could not be assembled (for example an invalid address).
        Message { message: String } => "notification message invalid: {message}",
        /// The transport refused or failed to deliver the message.
        Delivery { message: String } => "notification delivery failed: {message}",
    }
}

/// Sends a single notification, once.
///
/// Callers treat failures as best effort: they are logged, never retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Attempt one delivery of `notification`.
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}

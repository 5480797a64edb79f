//! Notification sender used when no mail account is configured.

use async_trait::async_trait;
use tracing::info;

use crate::domain::Notification;
use crate::domain::ports::{NotificationError, NotificationSender};

/// Logs notifications instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotificationSender;

#[async_trait]
impl NotificationSender for DisabledNotificationSender {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        info!(
            subject = notification.subject(),
            "email not configured; notification dropped"
        );
        Ok(())
    }
}

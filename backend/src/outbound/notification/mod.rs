//! Notification adapters implementing the `NotificationSender` port.

mod disabled;
mod smtp_sender;

pub use disabled::DisabledNotificationSender;
pub use smtp_sender::{SmtpConfig, SmtpNotificationSender};

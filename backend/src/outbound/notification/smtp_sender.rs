//! SMTP-backed `NotificationSender` using `lettre`.
//!
//! Every notification is sent from the configured mailbox to itself; the
//! inbox owner is the canteen operator.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;
use zeroize::Zeroizing;

use crate::domain::Notification;
use crate::domain::ports::{NotificationError, NotificationSender};

/// Connection details for the SMTP relay.
#[derive(Clone)]
pub struct SmtpConfig {
    relay: String,
    user: String,
    password: Zeroizing<String>,
}

impl SmtpConfig {
    /// Credentials for `user` on `relay`.
    pub fn new(
        relay: impl Into<String>,
        user: impl Into<String>,
        password: Zeroizing<String>,
    ) -> Self {
        Self {
            relay: relay.into(),
            user: user.into(),
            password,
        }
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("relay", &self.relay)
            .field("user", &self.user)
            .field("password", &"..")
            .finish()
    }
}

/// Sends notifications through an authenticated SMTP relay.
#[derive(Clone)]
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    mailbox: Mailbox,
}

impl SmtpNotificationSender {
    /// Build a sender for the given relay and account.
    ///
    /// No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Message`] when the account is not a valid
    /// mailbox and [`NotificationError::Delivery`] when the relay cannot be
    /// configured.
    pub fn new(config: SmtpConfig) -> Result<Self, NotificationError> {
        let mailbox = parse_mailbox(&config.user)?;
        let credentials = Credentials::new(config.user, config.password.to_string());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)
            .map_err(|err| NotificationError::delivery(err.to_string()))?
            .credentials(credentials)
            .build();
        Ok(Self { transport, mailbox })
    }

    fn build_message(&self, notification: &Notification) -> Result<Message, NotificationError> {
        compose(&self.mailbox, notification)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse::<Mailbox>()
        .map_err(|err| NotificationError::message(format!("invalid mailbox {address:?}: {err}")))
}

fn compose(mailbox: &Mailbox, notification: &Notification) -> Result<Message, NotificationError> {
    Message::builder()
        .from(mailbox.clone())
        .to(mailbox.clone())
        .subject(notification.subject())
        .header(ContentType::TEXT_PLAIN)
        .body(notification.body().to_owned())
        .map_err(|err| NotificationError::message(err.to_string()))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        let message = self.build_message(notification)?;
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|err| NotificationError::delivery(err.to_string()))?;
        info!(code = %response.code(), "smtp relay accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn message_is_addressed_to_self() {
        let mailbox = parse_mailbox("canteen@example.com").expect("valid mailbox");
        let note = Notification::new("New Order Received", "Order Details:\n\nFoods: rice");

        let message = compose(&mailbox, &note).expect("message builds");
        let envelope = message.envelope();

        assert_eq!(
            envelope.from().map(ToString::to_string),
            Some("canteen@example.com".to_owned())
        );
        assert_eq!(envelope.to().len(), 1);
        assert_eq!(envelope.to()[0].to_string(), "canteen@example.com");

        let raw = String::from_utf8(message.formatted()).expect("utf8");
        assert!(raw.contains("Subject: New Order Received"));
        assert!(raw.contains("Foods: rice"));
    }

    #[rstest]
    fn invalid_mailbox_is_a_message_error() {
        let err = parse_mailbox("not an address").expect_err("invalid");
        assert!(matches!(err, NotificationError::Message { .. }));
    }

    #[rstest]
    fn debug_hides_password() {
        let config = SmtpConfig::new(
            "smtp.example.com",
            "canteen@example.com",
            Zeroizing::new("app-password".to_owned()),
        );
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("app-password"));
    }

    #[tokio::test]
    async fn sender_builds_without_connecting() {
        let config = SmtpConfig::new(
            "smtp.example.com",
            "canteen@example.com",
            Zeroizing::new("app-password".to_owned()),
        );
        SmtpNotificationSender::new(config).expect("sender builds");
    }
}

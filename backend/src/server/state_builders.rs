//! Builders wiring adapters into the domain services behind `HttpState`.

use std::sync::Arc;

use campus_food::domain::ports::{NotificationError, NotificationSender};
use campus_food::domain::{AccountService, OrderService};
use campus_food::inbound::http::state::HttpState;
use campus_food::outbound::notification::{
    DisabledNotificationSender, SmtpConfig, SmtpNotificationSender,
};
use campus_food::outbound::persistence::{DbPool, DieselAccountRepository, DieselOrderRepository};
use campus_food::settings::AppSettings;
use tracing::{info, warn};

/// Build the notification sender: SMTP when both mail variables are set,
/// otherwise a sender that only logs.
///
/// # Errors
///
/// Returns [`NotificationError`] when the configured account or relay is
/// unusable.
pub fn build_notifier(
    settings: &AppSettings,
) -> Result<Arc<dyn NotificationSender>, NotificationError> {
    match settings.email() {
        Some(email) => {
            let relay = settings.smtp_relay();
            info!(%relay, user = %email.user, "order emails enabled");
            let sender =
                SmtpNotificationSender::new(SmtpConfig::new(relay, email.user, email.password))?;
            Ok(Arc::new(sender))
        }
        None => {
            warn!("EMAIL_USER or EMAIL_PASS not set; order emails disabled");
            Ok(Arc::new(DisabledNotificationSender))
        }
    }
}

/// Build the HTTP state from the shared pool and notifier.
pub fn build_http_state(pool: &DbPool, notifier: Arc<dyn NotificationSender>) -> HttpState {
    let accounts = AccountService::new(Arc::new(DieselAccountRepository::new(pool.clone())));
    let orders = OrderService::new(Arc::new(DieselOrderRepository::new(pool.clone())), notifier);
    HttpState::new(Arc::new(accounts), Arc::new(orders))
}

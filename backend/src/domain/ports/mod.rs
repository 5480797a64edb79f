//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod account_repository;
mod notification_sender;
mod order_command;
mod order_repository;

pub use account_command::AccountCommand;
#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_repository::{AccountPersistenceError, AccountRepository};
#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use notification_sender::MockNotificationSender;
pub use notification_sender::{NotificationError, NotificationSender};
#[cfg(test)]
pub use order_command::MockOrderCommand;
pub use order_command::OrderCommand;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderPersistenceError, OrderRepository};

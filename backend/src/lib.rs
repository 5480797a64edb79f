//! Campus food ordering backend.
//!
//! Accounts sign up, sign in, and update their profile; orders are stored
//! and announced to the canteen by email.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;

//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountCommand, OrderCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub orders: Arc<dyn OrderCommand>,
}

impl HttpState {
    /// Bundle the account and order use-cases.
    pub fn new(accounts: Arc<dyn AccountCommand>, orders: Arc<dyn OrderCommand>) -> Self {
        Self { accounts, orders }
    }
}

//! Process configuration loaded via OrthoConfig.
//!
//! Values come from unprefixed environment variables (or the matching
//! command-line flags):
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `3000` |
//! | `BIND_HOST` | `0.0.0.0` |
//! | `DATABASE_PATH` | `./database.db` |
//! | `PUBLIC_DIR` | `./public` |
//! | `EMAIL_USER`, `EMAIL_PASS` | unset (email disabled) |
//! | `SMTP_RELAY` | `smtp.gmail.com` |
//! | `DB_POOL_MAX_SIZE` | `4` |
//! | `DB_POOL_MIN_IDLE` | unset |
//! | `DB_POOL_TIMEOUT_SECS` | `30` |
//!
//! Empty mail variables count as unset.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::outbound::persistence::PoolConfig;

pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATABASE_PATH: &str = "./database.db";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";
pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";

/// Configuration errors reported at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{name} must be {expected}, got {value}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// SMTP account used both as sender and recipient.
#[derive(Clone)]
pub struct EmailSettings {
    pub user: String,
    pub password: Zeroizing<String>,
}

impl std::fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailSettings")
            .field("user", &self.user)
            .field("password", &"..")
            .finish()
    }
}

/// Application settings.
#[derive(Clone, Deserialize, OrthoConfig)]
pub struct AppSettings {
    /// Listen port.
    #[ortho_config(default = 3000, cli_short = 'p')]
    pub port: u16,
    /// Listen address.
    #[ortho_config(cli_short = 'b')]
    pub bind_host: Option<String>,
    /// SQLite database file.
    #[ortho_config(cli_short = 'd')]
    pub database_path: Option<String>,
    /// Directory of static assets.
    #[ortho_config(cli_short = 'a')]
    pub public_dir: Option<PathBuf>,
    /// SMTP relay host.
    #[ortho_config(cli_short = 'r')]
    pub smtp_relay: Option<String>,
    /// SMTP account, also the notification recipient.
    #[ortho_config(cli_short = 'u')]
    pub email_user: Option<String>,
    /// SMTP password.
    #[ortho_config(cli_short = 'w')]
    pub email_pass: Option<String>,
    /// Maximum pooled database connections.
    #[ortho_config(default = 4, cli_short = 'm')]
    pub db_pool_max_size: u32,
    /// Idle connections the pool keeps open.
    #[ortho_config(cli_short = 'i')]
    pub db_pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    #[ortho_config(default = 30, cli_short = 't')]
    pub db_pool_timeout_secs: u64,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("port", &self.port)
            .field("bind_host", &self.bind_host())
            .field("database_path", &self.database_path())
            .field("public_dir", &self.public_dir())
            .field("smtp_relay", &self.smtp_relay())
            .field("email", &self.email())
            .field("db_pool_max_size", &self.db_pool_max_size)
            .field("db_pool_min_idle", &self.db_pool_min_idle)
            .field("db_pool_timeout_secs", &self.db_pool_timeout_secs)
            .finish()
    }
}

impl AppSettings {
    /// Listen address, falling back to all interfaces.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Database file, falling back to `./database.db`.
    pub fn database_path(&self) -> &str {
        self.database_path.as_deref().unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Static asset directory, falling back to `./public`.
    pub fn public_dir(&self) -> &Path {
        self.public_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_PUBLIC_DIR))
    }

    /// SMTP relay, falling back to Gmail.
    pub fn smtp_relay(&self) -> &str {
        self.smtp_relay.as_deref().unwrap_or(DEFAULT_SMTP_RELAY)
    }

    /// Mail account when both `EMAIL_USER` and `EMAIL_PASS` are non-empty.
    pub fn email(&self) -> Option<EmailSettings> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|value| !value.trim().is_empty())
                .map(str::to_owned)
        };
        Some(EmailSettings {
            user: present(&self.email_user)?,
            password: Zeroizing::new(present(&self.email_pass)?),
        })
    }

    /// Pool configuration for the database file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the pool size is zero, the idle
    /// floor exceeds the pool size, or the checkout timeout is zero.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        if self.db_pool_max_size == 0 {
            return Err(SettingsError::Invalid {
                name: "DB_POOL_MAX_SIZE",
                value: self.db_pool_max_size.to_string(),
                expected: "a positive integer",
            });
        }
        if let Some(min_idle) = self
            .db_pool_min_idle
            .filter(|min_idle| *min_idle > self.db_pool_max_size)
        {
            return Err(SettingsError::Invalid {
                name: "DB_POOL_MIN_IDLE",
                value: min_idle.to_string(),
                expected: "at most DB_POOL_MAX_SIZE",
            });
        }
        if self.db_pool_timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                name: "DB_POOL_TIMEOUT_SECS",
                value: self.db_pool_timeout_secs.to_string(),
                expected: "a positive number of seconds",
            });
        }
        Ok(PoolConfig::new(self.database_path())
            .with_max_size(self.db_pool_max_size)
            .with_min_idle(self.db_pool_min_idle)
            .with_connection_timeout(Duration::from_secs(self.db_pool_timeout_secs)))
    }
}

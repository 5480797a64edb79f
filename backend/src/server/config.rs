//! HTTP server configuration object.

use campus_food::inbound::http::pages::PublicDir;
use campus_food::settings::AppSettings;

/// Listener and asset settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_host: String,
    pub(crate) port: u16,
    pub(crate) public_dir: PublicDir,
}

impl ServerConfig {
    /// Take the listener address and public directory from `settings`.
    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            bind_host: settings.bind_host().to_owned(),
            port: settings.port,
            public_dir: PublicDir::new(settings.public_dir().to_path_buf()),
        }
    }

    /// `host:port` the server listens on.
    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.bind_host.clone(), self.port)
    }
}

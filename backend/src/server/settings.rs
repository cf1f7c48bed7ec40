//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CONTACTS_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DATABASE_URL: &str = "contacts.db";

/// Runtime settings for the contacts server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ContactsSettings {
    /// Interface to bind the HTTP listener to.
    pub host: Option<String>,
    /// TCP port for the HTTP listener.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 4)]
    pub max_connections: u32,
}

impl ContactsSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured database path, falling back to `contacts.db`.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Resolve the listener address from host and port.
    ///
    /// # Errors
    /// Returns an [`io::Error`] when the host cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("host {} resolved to no addresses", self.host()),
                )
            })
    }
}

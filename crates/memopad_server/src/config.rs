//! Server configuration from CLI flags and environment.
//!
//! # Responsibility
//! - Collect listen, database, and logging settings in one place.
//!
//! # Invariants
//! - Defaults match the documented external interface: port 8080, bind on all
//!   interfaces.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Memopad REST API server.
#[derive(Debug, Parser)]
#[command(name = "memopad-server", version, about = "REST backend for the Memopad note-taking app")]
pub struct ServerConfig {
    /// Listen port.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file path.
    #[arg(long, env = "MEMOPAD_DB", default_value = "memo_app.db")]
    pub db_path: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults per build mode.
    #[arg(long, env = "MEMOPAD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log directory; stderr-only logging when unset.
    #[arg(long, env = "MEMOPAD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Returns the socket address to bind, on all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Returns the configured log level or the build-mode default.
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| memopad_core::default_log_level())
    }
}

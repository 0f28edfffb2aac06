//! Process configuration from CLI flags and environment.

use camp_core::db::{open_db, open_db_in_memory, DbResult};
use camp_core::{default_log_level, LogDestination};
use clap::Parser;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::path::PathBuf;

const SQLITE_URI_PREFIX: &str = "sqlite:///";
const IN_MEMORY_MARKER: &str = ":memory:";

/// Camp activity signup HTTP service.
#[derive(Debug, Clone, Parser)]
#[command(name = "camp_server", version)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "CAMP_BIND", default_value = "127.0.0.1:5555")]
    pub bind: SocketAddr,

    /// SQLite file path, `sqlite:///<path>` URI, or `:memory:`.
    #[arg(long = "database", env = "DB_URI", default_value = "app.db")]
    pub database: String,

    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "CAMP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when unset.
    #[arg(long, env = "CAMP_LOG_DIR")]
    pub log_dir: Option<String>,
}

/// Where the camp store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    InMemory,
    File(PathBuf),
}

impl StoreLocation {
    /// Parses a path, a `sqlite:///` URI, or the in-memory marker.
    pub fn parse(database: &str) -> Self {
        let trimmed = database.trim();
        let location = trimmed.strip_prefix(SQLITE_URI_PREFIX).unwrap_or(trimmed);
        if location.is_empty() || location == IN_MEMORY_MARKER {
            Self::InMemory
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Opens and migrates the store.
    pub fn open(&self) -> DbResult<Connection> {
        match self {
            Self::InMemory => open_db_in_memory(),
            Self::File(path) => open_db(path),
        }
    }
}

impl ServerConfig {
    pub fn store_location(&self) -> StoreLocation {
        StoreLocation::parse(&self.database)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    pub fn log_destination(&self) -> Result<LogDestination, String> {
        LogDestination::from_dir(self.log_dir.as_deref())
    }
}

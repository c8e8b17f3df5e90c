//! Document store connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string. `postgres://…` selects the Postgres
//!   store, `memory://` the in-process store.
//! - `DATABASE_NAME`: database to use on the server named by the URL
//!   (overrides the database component of the URL when set)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: `10`)

use std::env;
use std::fmt;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: non_empty_var("DATABASE_URL"),
            name: non_empty_var("DATABASE_NAME"),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }

    pub fn has_url(&self) -> bool {
        self.url.is_some()
    }

    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

// The connection string may embed credentials.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

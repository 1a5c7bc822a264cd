//! SQLite database configuration.

use serde::{Deserialize, Serialize};

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the database file (`:memory:` for an in-memory database)
    #[serde(default = "default_path")]
    pub path: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Run embedded migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_path() -> String {
    "dng-booking.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_run_migrations() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
            run_migrations: default_run_migrations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "dng-booking.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
    }
}

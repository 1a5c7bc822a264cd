//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `catalog`: destination route sheet (short codes and fares)
//! - `integrations`: spreadsheet bridge and WhatsApp/MoMo handoff

mod catalog;
mod database;
mod integrations;
mod server;

use serde::{Deserialize, Serialize};

pub use catalog::CatalogConfig;
pub use database::DatabaseConfig;
pub use integrations::{MomoHandoffConfig, SheetsAppConfig};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Destination catalog (defaults to the operator's route sheet)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Spreadsheet bridge configuration; absent disables the remote save
    #[serde(default)]
    pub sheets: Option<SheetsAppConfig>,

    /// WhatsApp/MoMo payment handoff configuration
    #[serde(default)]
    pub momo: MomoHandoffConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., DNG_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("DNG")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

use std::path::PathBuf;

use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

use crate::db_operations;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// Overrides the conventional `flights.db` location.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "flysky=info".into()
}

impl Config {
    /// Reads `flysky.toml` from the working directory (optional), then
    /// `FLYSKY__*` environment variables, e.g. `FLYSKY__DATABASE__PATH`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("flysky").required(false))
                .add_source(config::Environment::with_prefix("FLYSKY").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn database_path(&self) -> PathBuf {
        self.database
            .path
            .clone()
            .unwrap_or_else(db_operations::default_db_path)
    }
}

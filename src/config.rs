//! Configuration management for the library server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Location of each JSON document, keyed by logical collection name
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct JsonPaths {
    pub authors: PathBuf,
    pub books: PathBuf,
    pub book_items: PathBuf,
    pub patrons: PathBuf,
    pub loans: PathBuf,
}

impl JsonPaths {
    /// All five documents under one directory, using the conventional file names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            authors: dir.join("Authors.json"),
            books: dir.join("Books.json"),
            book_items: dir.join("BookItems.json"),
            patrons: dir.join("Patrons.json"),
            loans: dir.join("Loans.json"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoansConfig {
    /// Days added to the due date by a loan extension
    pub extend_by_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub json_paths: JsonPaths,
    #[serde(default)]
    pub loans: LoansConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. LIBRARY_JSON_PATHS__LOANS)
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.loans.validate()?;
        Ok(app)
    }
}

impl LoansConfig {
    /// Longest accepted extension period
    pub const MAX_EXTEND_BY_DAYS: i64 = 3650;

    /// Extensions must move the due date forward, by a bounded number of days
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=Self::MAX_EXTEND_BY_DAYS).contains(&self.extend_by_days) {
            return Err(ConfigError::Message(format!(
                "loans.extend_by_days must be between 1 and {}, got {}",
                Self::MAX_EXTEND_BY_DAYS,
                self.extend_by_days
            )));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for JsonPaths {
    fn default() -> Self {
        Self::in_dir("Json")
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self { extend_by_days: 14 }
    }
}

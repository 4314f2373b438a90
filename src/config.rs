use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_PREFIX: &str = "bq-uploader";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub bigquery: BigQueryConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BigQueryConfig {
    pub project_id: String,
    pub dataset_id: String,
    pub service_email: String,
    /// PEM encoded private key of the service account
    pub private_key_path: PathBuf,
}

impl BigQueryConfig {
    /// Read the raw private key bytes
    pub fn private_key(&self) -> Result<Vec<u8>> {
        fs::read(&self.private_key_path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read private key at {:?}: {}",
                self.private_key_path, e
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("project_id", self.project_id.is_empty()),
            ("dataset_id", self.dataset_id.is_empty()),
            ("service_email", self.service_email.is_empty()),
            (
                "private_key_path",
                self.private_key_path.as_os_str().is_empty(),
            ),
        ]
        .into_iter()
        .filter_map(|(name, empty)| empty.then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "BigQuery {} must be set in config file",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found at {:?}. Please create one.",
                config_path
            )));
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        config.bigquery.validate()?;

        Ok(config)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
            .place_config_file("config.toml")
            .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))
    }
}

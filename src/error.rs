use gcp_bigquery_client::error::BQError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("BigQuery API error: {0}")]
    BigQuery(#[from] BQError),

    /// Per-row failures reported by a streaming insert, serialized as JSON.
    #[error("BigQuery insert errors: {0}")]
    Insert(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

//! CLI error type.

use std::path::PathBuf;

use datatable_lib::error::ConfigError;
use datatable_lib::error::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid records: {0}")]
    Ingest(#[from] IngestError),
    #[error("invalid table config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid table config file: {0}")]
    Json(#[from] serde_json::Error),
}

// src/error.rs
use dotwalk_path::{PathError, TransformError};
use thiserror::Error;

/// Errors surfaced by the `dotwalk` command line tool.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

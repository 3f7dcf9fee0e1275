//! Crate-wide error type

use crate::collections::HeapError;
use thiserror::Error;

/// Errors that can occur in graphkit operations
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Heap error: {0}")]
    Heap(#[from] HeapError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for graphkit operations
pub type GraphResult<T> = Result<T, GraphError>;

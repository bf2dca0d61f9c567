use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Node index {node} is out of range for a topology of {n_nodes} nodes")]
    NodeOutOfRange { node: usize, n_nodes: usize },

    #[error("Scenario directory does not exist: {0}")]
    ScenarioNotFound(PathBuf),

    #[error("Malformed traffic line {line_no} in '{file}': {reason}")]
    MalformedTrafficLine { file: String, line_no: usize, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid run configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid penalty model: {0}")]
    InvalidModel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

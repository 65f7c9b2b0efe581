use crate::validator::ValidationReport;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a strict `TaskFlow` from a flow description.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Malformed flow description: {0}")]
    Malformed(String),

    #[error("Node at position {index} has an empty id")]
    EmptyNodeId { index: usize },

    #[error("Node id '{0}' is declared more than once")]
    DuplicateNodeId(String),

    #[error("Edge at position {index} has an empty condition")]
    EmptyCondition { index: usize },

    #[error("Flow failed validation with {} issue(s)", .0.issues.len())]
    Invalid(ValidationReport),
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::Malformed(err.to_string())
    }
}

/// Errors that can occur when writing a diagram to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No mermaid diagram found in result. There is nothing to save.")]
    NoDiagram,

    #[error("Could not write diagram to '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Error types for argraph
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::GraphError;
use crate::domain::value_objects::{ReferenceKind, UnresolvedReference};

/// Result type alias for argraph operations
pub type ArgraphResult<T> = Result<T, ArgraphError>;

/// Main error type for argraph operations
#[derive(Error, Debug)]
pub enum ArgraphError {
    /// Input is not a graph in the wire schema
    #[error("malformed input: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Graph output could not be serialized
    #[error("failed to serialize graph: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Structural conflict while linking the graph
    #[error("semantic error: {0}")]
    Graph(#[from] GraphError),

    /// A statement reference did not resolve (strict mode only)
    #[error("unresolved {kind} reference '{target}' in '{owner}'")]
    UnresolvedReference {
        kind: ReferenceKind,
        owner: String,
        target: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Configuration names a weighing function that does not exist
    #[error("unknown weighing function '{name}' for scheme '{scheme}' (expected linked, convergent, cumulative or factorized)")]
    UnknownWeighingFunction { scheme: String, name: String },
}

impl From<UnresolvedReference> for ArgraphError {
    fn from(reference: UnresolvedReference) -> Self {
        ArgraphError::UnresolvedReference {
            kind: reference.kind,
            owner: reference.owner,
            target: reference.target,
        }
    }
}

impl ArgraphError {
    /// True for errors caused by the content of the input rather than I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ArgraphError::Malformed(_)
                | ArgraphError::Graph(_)
                | ArgraphError::UnresolvedReference { .. }
        )
    }
}

//! Error types for the riftpath-engine crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Vertex not found: {key}")]
    VertexNotFound { key: String },

    #[error("No path from {start} to {goal}")]
    Unreachable { start: String, goal: String },

    #[error("Champion {id} has no tags")]
    MissingTags { id: String },

    #[error("Dataset contains no champions")]
    EmptyDataset,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

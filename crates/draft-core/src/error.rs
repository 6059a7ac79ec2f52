//! Error types for draft-core.

use thiserror::Error;

/// Result type for draft-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while ingesting a scene.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The scene JSON could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scene decoded but violates a structural rule.
    #[error("invalid scene: {0}")]
    InvalidScene(String),
}

//! Error types for draft-host.

use draft_codegen::CodegenError;
use draft_core::CoreError;
use thiserror::Error;

/// Result type for draft-host operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors surfaced by a host session.
#[derive(Debug, Error)]
pub enum HostError {
    /// Generation needs exactly one selected root node.
    #[error("expected exactly one selected node, found {count}")]
    InvalidSelection { count: usize },

    /// The selected root is hidden, so there is nothing to render.
    #[error("selected node `{name}` is not visible")]
    InvisibleRoot { name: String },

    /// The settings store is unreadable or holds malformed data.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl HostError {
    /// Text shown to the user in the host's notification area.
    pub fn notice(&self) -> String {
        match self {
            Self::InvalidSelection { count: 0 } => "Please select a node".to_string(),
            Self::InvalidSelection { .. } => "Please select only 1 node".to_string(),
            Self::InvisibleRoot { .. } => "Please select a visible node".to_string(),
            other => other.to_string(),
        }
    }
}

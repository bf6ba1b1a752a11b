use thiserror::Error;

/// Malformed input at the engine boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown document category: {0}")]
    UnknownCategory(String),

    #[error("Unknown document status: {0}")]
    UnknownDocumentStatus(String),

    #[error("Unknown project status: {0}")]
    UnknownProjectStatus(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

use thiserror::Error;

/// Errors raised by a persistence binding
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access course data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode course data: {0}")]
    Serde(#[from] serde_json::Error),
}

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors crossing the JSON boundary.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A violated business rule; the message is safe to show verbatim.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MicrError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MicrError {
    fn from(e: serde_json::Error) -> Self {
        MicrError::SerializationError(e.to_string())
    }
}

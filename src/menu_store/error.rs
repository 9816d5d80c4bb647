use thiserror::Error;

/// Errors that can occur while reading or writing the menu table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Menu database error: {0}")]
    DatabaseError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

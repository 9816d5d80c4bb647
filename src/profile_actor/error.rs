use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during profile operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProfileError {
    fn from(e: FrameworkError) -> Self {
        ProfileError::ActorCommunicationError(e.to_string())
    }
}

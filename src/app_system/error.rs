use thiserror::Error;

use crate::menu_store::StoreError;
use crate::menu_sync::SyncError;
use crate::profile_actor::ProfileError;
use super::config::ConfigError;

/// Top-level error of the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("Actor task failed: {0}")]
    Task(String),
}

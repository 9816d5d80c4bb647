use thiserror::Error;

use crate::menu_store::StoreError;

/// Why a menu sync did not populate the store.
///
/// `Network` and `HttpStatus` together cover every failure to get a body from
/// the remote: transport errors, timeouts and non-2xx answers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SyncError {
    #[error("Menu request failed: {0}")]
    Network(String),
    #[error("Menu endpoint answered with HTTP status {0}")]
    HttpStatus(u16),
    #[error("Menu document could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

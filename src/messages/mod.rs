use tokio::sync::oneshot;
use crate::domain::{MenuItem, RemoteMenuItem};
use crate::menu_store::StoreError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enum for the menu store actor. Each variant includes parameters
/// and a oneshot channel for responses.
#[derive(Debug)]
pub enum MenuStoreRequest {
    IsMenuEmpty {
        respond_to: ServiceResponse<bool, StoreError>,
    },
    GetAll {
        respond_to: ServiceResponse<Vec<MenuItem>, StoreError>,
    },
    InsertAll {
        items: Vec<RemoteMenuItem>,
        respond_to: ServiceResponse<usize, StoreError>,
    },
    Shutdown,
}

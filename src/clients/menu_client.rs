use tokio::sync::{mpsc, watch};
use crate::domain::{MenuItem, RemoteMenuItem};
use crate::messages::MenuStoreRequest;
use crate::menu_store::StoreError;

/// Client for interacting with the menu store actor.
#[derive(Clone)]
pub struct MenuClient {
    sender: mpsc::Sender<MenuStoreRequest>,
    menu: watch::Receiver<Vec<MenuItem>>,
}

impl MenuClient {
    pub fn new(sender: mpsc::Sender<MenuStoreRequest>, menu: watch::Receiver<Vec<MenuItem>>) -> Self {
        Self { sender, menu }
    }

    /// Full stored menu in storage order, updated after every committed write.
    pub fn subscribe(&self) -> watch::Receiver<Vec<MenuItem>> {
        self.menu.clone()
    }

    pub async fn shutdown(&self) -> Result<(), StoreError> {
        self.sender
            .send(MenuStoreRequest::Shutdown)
            .await
            .map_err(|_| StoreError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(MenuClient => fn is_menu_empty() -> bool as MenuStoreRequest::IsMenuEmpty, Error = StoreError);
client_method!(MenuClient => fn get_all() -> Vec<MenuItem> as MenuStoreRequest::GetAll, Error = StoreError);
client_method!(MenuClient => fn insert_all(items: Vec<RemoteMenuItem>) -> usize as MenuStoreRequest::InsertAll, Error = StoreError);

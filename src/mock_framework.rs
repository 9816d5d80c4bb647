//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] or [`create_mock_menu_client`] to get a client and a receiver.
//! Then use helpers like [`expect_update`] or [`expect_is_menu_empty`] to assert behavior.
//! [`FakeMenuSource`] stands in for the remote menu endpoint and counts fetches.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::{mpsc, watch};

use crate::actor_framework::{Entity, Response, StateClient, StateRequest};
use crate::clients::MenuClient;
use crate::domain::{MenuItem, RemoteMenuItem};
use crate::menu_source::MenuSource;
use crate::menu_store::StoreError;
use crate::menu_sync::SyncError;
use crate::messages::{MenuStoreRequest, ServiceResponse};

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it inspects each request arriving on `receiver`
/// and answers through the request's responder, so success, failure and
/// delays are all deterministic.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
    initial: T,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_snapshots, snapshot_rx) = watch::channel(initial);
    (StateClient::new(sender, snapshot_rx), receiver)
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(T::Patch, Response<T>)> {
    match receiver.recv().await {
        Some(StateRequest::Update { patch, respond_to }) => Some((patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Menu client wired to a channel the test controls.
pub fn create_mock_menu_client(
    buffer_size: usize,
) -> (MenuClient, mpsc::Receiver<MenuStoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_menu, menu_rx) = watch::channel(Vec::<MenuItem>::new());
    (MenuClient::new(sender, menu_rx), receiver)
}

/// Helper to verify that the next message is an IsMenuEmpty request
pub async fn expect_is_menu_empty(
    receiver: &mut mpsc::Receiver<MenuStoreRequest>,
) -> Option<ServiceResponse<bool, StoreError>> {
    match receiver.recv().await {
        Some(MenuStoreRequest::IsMenuEmpty { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an InsertAll request
pub async fn expect_insert_all(
    receiver: &mut mpsc::Receiver<MenuStoreRequest>,
) -> Option<(Vec<RemoteMenuItem>, ServiceResponse<usize, StoreError>)> {
    match receiver.recv().await {
        Some(MenuStoreRequest::InsertAll { items, respond_to }) => Some((items, respond_to)),
        _ => None,
    }
}

/// Remote menu stand-in that always answers with the same result.
pub struct FakeMenuSource {
    result: Result<Vec<RemoteMenuItem>, SyncError>,
    calls: AtomicUsize,
}

impl FakeMenuSource {
    pub fn serving(items: Vec<RemoteMenuItem>) -> Self {
        Self { result: Ok(items), calls: AtomicUsize::new(0) }
    }

    pub fn failing(error: SyncError) -> Self {
        Self { result: Err(error), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuSource for FakeMenuSource {
    async fn fetch_remote_menu(&self) -> Result<Vec<RemoteMenuItem>, SyncError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub fn remote_item(title: &str, category: &str, price: &str) -> RemoteMenuItem {
    RemoteMenuItem {
        title: title.to_string(),
        description: format!("{title} from the kitchen"),
        price: Decimal::from_str(price).expect("test price"),
        category: category.to_string(),
        image_url: format!("https://example.com/{}.jpg", title.to_lowercase().replace(' ', "_")),
    }
}

/// The three-item menu used across filter tests.
pub fn sample_menu() -> Vec<MenuItem> {
    [
        ("Greek salad", "starters"),
        ("Lemon dessert", "desserts"),
        ("Bruschetta", "starters"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, category), id)| MenuItem {
        id,
        title: title.to_string(),
        description: String::new(),
        price: Decimal::from(5),
        category: category.to_string(),
        image_url: String::new(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProfilePatch, UserProfile};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<UserProfile>(10, UserProfile::default());

        let update_task = tokio::spawn(async move {
            let patch = ProfilePatch { first_name: Some("Test".to_string()), ..ProfilePatch::default() };
            client.update(patch).await
        });

        let (patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(patch.first_name.as_deref(), Some("Test"));
        let updated = UserProfile { first_name: "Test".to_string(), ..UserProfile::default() };
        responder.send(Ok(updated.clone())).unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Ok(updated));
    }
}

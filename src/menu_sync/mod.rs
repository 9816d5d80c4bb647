//! One-time population of the local menu from the remote document.

pub mod error;

pub use error::*;

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, Instrument};

use crate::clients::MenuClient;
use crate::menu_source::MenuSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The store already held a menu; nothing was fetched.
    AlreadyPopulated,
    Populated { inserted: usize },
}

/// Last known state of the menu sync, for screens that need to show
/// "menu unavailable" and offer a retry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Ready(SyncOutcome),
    Failed(SyncError),
}

/// Fills an empty menu store from a [`MenuSource`].
///
/// Never retries by itself; calling [`MenuSync::sync_if_needed`] again is the retry.
#[derive(Clone)]
pub struct MenuSync {
    source: Arc<dyn MenuSource>,
    store: MenuClient,
    status: Arc<watch::Sender<SyncStatus>>,
    // Held across check-fetch-insert so concurrent callers cannot double insert.
    in_flight: Arc<Mutex<()>>,
}

impl MenuSync {
    pub fn new(source: Arc<dyn MenuSource>, store: MenuClient) -> Self {
        let (status, _) = watch::channel(SyncStatus::default());
        Self {
            source,
            store,
            status: Arc::new(status),
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    #[allow(dead_code)]
    pub fn status(&self) -> watch::Receiver<SyncStatus> {
        self.status.subscribe()
    }

    #[instrument(skip(self))]
    pub async fn sync_if_needed(&self) -> Result<SyncOutcome, SyncError> {
        let _guard = self.in_flight.lock().await;
        self.status.send_replace(SyncStatus::Syncing);

        let result = self.populate_if_empty().await;
        match &result {
            Ok(outcome) => {
                info!(?outcome, "Menu sync finished");
                self.status.send_replace(SyncStatus::Ready(outcome.clone()));
            }
            Err(e) => {
                error!(error = %e, "Menu sync failed, menu stays unavailable until retried");
                self.status.send_replace(SyncStatus::Failed(e.clone()));
            }
        }
        result
    }

    async fn populate_if_empty(&self) -> Result<SyncOutcome, SyncError> {
        if !self.store.is_menu_empty().await? {
            debug!("Menu already stored, skipping fetch");
            return Ok(SyncOutcome::AlreadyPopulated);
        }

        let items = self.source.fetch_remote_menu().await?;
        let inserted = self.store.insert_all(items).await?;
        Ok(SyncOutcome::Populated { inserted })
    }

    /// Runs the sync in the background. Abort the handle to cancel it.
    pub fn spawn(&self) -> JoinHandle<Result<SyncOutcome, SyncError>> {
        let sync = self.clone();
        tokio::spawn(
            async move { sync.sync_if_needed().await }.instrument(tracing::info_span!("menu_sync")),
        )
    }
}

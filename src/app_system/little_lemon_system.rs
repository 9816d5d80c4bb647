use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::StateActor;
use crate::clients::{MenuClient, ProfileClient};
use crate::domain::UserProfile;
use crate::menu_source::{HttpMenuSource, MenuSource};
use crate::menu_store::MenuStore;
use crate::menu_sync::MenuSync;
use crate::menu_view::MenuView;
use super::config::AppConfig;
use super::error::AppError;

/// The application system that owns every actor.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct LittleLemonSystem {
    pub menu_client: MenuClient,
    pub profile_client: ProfileClient,
    pub menu_sync: MenuSync,
    handles: Vec<JoinHandle<()>>,
}

impl LittleLemonSystem {
    /// Opens the durable menu store and the HTTP menu source described by `config`.
    pub fn start(config: &AppConfig) -> Result<Self, AppError> {
        info!(
            database = %config.database_path.display(),
            menu_url = %config.menu_url,
            "Starting Little Lemon system"
        );
        let store = MenuStore::open(&config.database_path, config.channel_capacity)?;
        let source = Arc::new(HttpMenuSource::new(config)?);
        Ok(Self::with_parts(store, source, config.channel_capacity))
    }

    /// Wires an already opened store and any menu source.
    pub fn with_parts(
        (store, menu_client): (MenuStore, MenuClient),
        source: Arc<dyn MenuSource>,
        channel_capacity: usize,
    ) -> Self {
        let store_handle = store.spawn();

        let (profile_actor, profile_state) = StateActor::new(channel_capacity, UserProfile::default());
        let profile_client = ProfileClient::new(profile_state);
        let profile_handle = tokio::spawn(profile_actor.run());

        let menu_sync = MenuSync::new(source, menu_client.clone());

        Self {
            menu_client,
            profile_client,
            menu_sync,
            handles: vec![store_handle, profile_handle],
        }
    }

    /// A fresh menu screen subscribed to the store.
    pub fn menu_view(&self) -> MenuView {
        MenuView::spawn(self.menu_client.subscribe())
    }

    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        // Explicit stop messages: sync tasks or screens may still hold client clones.
        self.menu_client.shutdown().await?;
        self.profile_client.shutdown().await?;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AppError::Task(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

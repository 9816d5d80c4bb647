mod domain;
mod clients;
mod messages;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod menu_source;
mod menu_store;
mod menu_sync;
mod menu_view;
mod profile_actor;

use std::time::Duration;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, AppConfig, AppError, LittleLemonSystem};
use crate::domain::{MenuCategory, MenuItem, ProfileStage};
use crate::menu_view::MenuView;

/// Waits for the view to show `expected`, falling back to whatever it shows now.
async fn shown_by(view: &MenuView, expected: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut displayed = view.displayed();
    let shown = match tokio::time::timeout(Duration::from_secs(1), displayed.wait_for(|items| *items == expected)).await {
        Ok(Ok(items)) => items.clone(),
        _ => {
            warn!("Menu view did not settle, showing last computed list");
            view.current()
        }
    };
    shown
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env()?;
    let system = LittleLemonSystem::start(&config)?;

    // Menu sync runs in the background while the user goes through onboarding
    let sync_task = system.menu_sync.spawn();

    let span = tracing::info_span!("onboarding");
    let stage = async {
        info!("Filling in onboarding form");
        system.profile_client.update_first_name("Tilly").await?;
        system.profile_client.update_last_name("Doe").await?;
        system.profile_client.update_email("tilly@littlelemon.com").await?;
        Ok::<_, AppError>(ProfileStage::Onboarding.register())
    }
    .instrument(span)
    .await?;

    let profile = system.profile_client.profile().await?;
    info!(?stage, first_name = %profile.first_name, email = %profile.email, "User registered");

    match sync_task.await {
        Ok(Ok(outcome)) => info!(?outcome, "Menu ready"),
        Ok(Err(e)) => warn!(error = %e, "Menu unavailable, showing empty menu"),
        Err(e) => error!(error = %e, "Menu sync task failed"),
    }

    let view = system.menu_view();
    let menu = system.menu_client.subscribe();
    for category in MenuCategory::CHOICES {
        view.select_category(category);
        let expected = view.filter().apply(&menu.borrow());
        let shown = shown_by(&view, expected).await;
        info!(%category, count = shown.len(), "Category selected");
        for item in &shown {
            info!(title = %item.title, price = %item.price_label(), "  menu item");
        }
    }

    view.select_category(MenuCategory::All);
    view.set_search_query("lemon");
    let expected = view.filter().apply(&menu.borrow());
    let matches = shown_by(&view, expected).await;
    info!(query = "lemon", count = matches.len(), "Searched menu");
    drop(view);

    let stage = system.profile_client.log_out().await?;
    info!(?stage, "Back to onboarding");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

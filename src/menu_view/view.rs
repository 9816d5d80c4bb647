use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::domain::{MenuCategory, MenuItem};
use super::filter::MenuFilter;

/// Reactive menu screen state.
///
/// Owns the filter selection and keeps `displayed` equal to the filter applied
/// to the latest stored menu. Dropping the view unsubscribes from the store.
pub struct MenuView {
    filter: watch::Sender<MenuFilter>,
    displayed: watch::Receiver<Vec<MenuItem>>,
    task: JoinHandle<()>,
}

impl MenuView {
    pub fn spawn(menu: watch::Receiver<Vec<MenuItem>>) -> Self {
        let (filter, filter_rx) = watch::channel(MenuFilter::default());
        let initial = filter_rx.borrow().apply(&menu.borrow());
        let (displayed_tx, displayed) = watch::channel(initial);
        let task = tokio::spawn(recompute(menu, filter_rx, displayed_tx));
        Self { filter, displayed, task }
    }

    pub fn select_category(&self, category: MenuCategory) {
        self.filter.send_modify(|filter| filter.category = category);
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.filter.send_modify(|filter| filter.search_query = query);
    }

    pub fn filter(&self) -> MenuFilter {
        self.filter.borrow().clone()
    }

    pub fn displayed(&self) -> watch::Receiver<Vec<MenuItem>> {
        self.displayed.clone()
    }

    pub fn current(&self) -> Vec<MenuItem> {
        self.displayed.borrow().clone()
    }
}

impl Drop for MenuView {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[instrument(name = "menu_view", skip_all)]
async fn recompute(
    mut menu: watch::Receiver<Vec<MenuItem>>,
    mut filter: watch::Receiver<MenuFilter>,
    displayed: watch::Sender<Vec<MenuItem>>,
) {
    // A closed store keeps its last menu; filter changes still apply to it.
    let mut menu_open = true;
    loop {
        tokio::select! {
            changed = menu.changed(), if menu_open => {
                if changed.is_err() {
                    debug!("Menu store closed, following filter changes only");
                    menu_open = false;
                    continue;
                }
            }
            changed = filter.changed() => if changed.is_err() { break },
        }
        let next = filter.borrow_and_update().apply(&menu.borrow_and_update());
        debug!(shown = next.len(), "Displayed menu recomputed");
        displayed.send_replace(next);
    }
}

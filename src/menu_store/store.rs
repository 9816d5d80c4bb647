use std::path::Path;
use std::str::FromStr;

use rusqlite::types::Type;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use crate::clients::MenuClient;
use crate::domain::{MenuItem, RemoteMenuItem};
use crate::messages::{MenuStoreRequest, ServiceResponse};
use super::error::StoreError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS menu_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        price TEXT NOT NULL,
        category TEXT NOT NULL,
        image_url TEXT NOT NULL
    );
";

/// Menu store actor. Sole writer of the `menu_items` table.
///
/// SQLite calls block, so the loop runs on a blocking thread (see [`MenuStore::spawn`]).
/// After every committed write the full ordered menu is published to subscribers.
pub struct MenuStore {
    receiver: mpsc::Receiver<MenuStoreRequest>,
    conn: Connection,
    menu: watch::Sender<Vec<MenuItem>>,
}

impl MenuStore {
    /// Opens (or creates) the menu database at `path`.
    pub fn open(path: &Path, buffer_size: usize) -> Result<(Self, MenuClient), StoreError> {
        info!(path = %path.display(), "Opening menu database");
        Self::with_connection(Connection::open(path)?, buffer_size)
    }

    /// Non-durable store, for tests and previews.
    #[allow(dead_code)]
    pub fn open_in_memory(buffer_size: usize) -> Result<(Self, MenuClient), StoreError> {
        Self::with_connection(Connection::open_in_memory()?, buffer_size)
    }

    fn with_connection(conn: Connection, buffer_size: usize) -> Result<(Self, MenuClient), StoreError> {
        conn.execute_batch(SCHEMA)?;
        let initial = load_all(&conn)?;
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (menu, menu_rx) = watch::channel(initial);
        let store = Self { receiver, conn, menu };
        Ok((store, MenuClient::new(sender, menu_rx)))
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::task::spawn_blocking(move || self.run())
    }

    /// Blocking actor loop. Must not be called from an async context.
    pub fn run(mut self) {
        info!("MenuStore starting");
        while let Some(msg) = self.receiver.blocking_recv() {
            match msg {
                MenuStoreRequest::IsMenuEmpty { respond_to } => {
                    self.handle_is_menu_empty(respond_to);
                }
                MenuStoreRequest::GetAll { respond_to } => {
                    self.handle_get_all(respond_to);
                }
                MenuStoreRequest::InsertAll { items, respond_to } => {
                    self.handle_insert_all(items, respond_to);
                }
                MenuStoreRequest::Shutdown => {
                    info!("MenuStore shutting down");
                    break;
                }
            }
        }
        info!("MenuStore stopped");
    }

    #[instrument(skip_all)]
    fn handle_is_menu_empty(&self, respond_to: ServiceResponse<bool, StoreError>) {
        debug!("Processing is_menu_empty request");
        let result = self
            .conn
            .query_row("SELECT NOT EXISTS (SELECT 1 FROM menu_items)", [], |row| row.get::<_, bool>(0))
            .map_err(StoreError::from);
        let _ = respond_to.send(result);
    }

    #[instrument(skip_all)]
    fn handle_get_all(&self, respond_to: ServiceResponse<Vec<MenuItem>, StoreError>) {
        debug!("Processing get_all request");
        let _ = respond_to.send(load_all(&self.conn));
    }

    #[instrument(fields(item_count = items.len()), skip(self, items, respond_to))]
    fn handle_insert_all(&mut self, items: Vec<RemoteMenuItem>, respond_to: ServiceResponse<usize, StoreError>) {
        debug!("Processing insert_all request");
        let result = self.insert_all(&items).and_then(|inserted| {
            let menu = load_all(&self.conn)?;
            self.menu.send_replace(menu);
            Ok(inserted)
        });
        match &result {
            Ok(inserted) => info!(inserted, "Menu items stored"),
            Err(e) => error!(error = %e, "Failed to store menu items"),
        }
        let _ = respond_to.send(result);
    }

    /// Appends all items in one transaction; nothing is written if any row fails.
    fn insert_all(&mut self, items: &[RemoteMenuItem]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO menu_items (title, description, price, category, image_url)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for item in items {
                stmt.execute(params![
                    item.title,
                    item.description,
                    item.price.to_string(),
                    item.category,
                    item.image_url,
                ])?;
            }
        }
        tx.commit()?;
        Ok(items.len())
    }
}

fn load_all(conn: &Connection) -> Result<Vec<MenuItem>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, price, category, image_url FROM menu_items ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        let price: String = row.get(3)?;
        let price = Decimal::from_str(&price)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
        Ok(MenuItem {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            price,
            category: row.get(4)?,
            image_url: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
}

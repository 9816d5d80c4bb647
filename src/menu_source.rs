//! Where the menu comes from: the remote JSON document.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, instrument};

use crate::app_system::AppConfig;
use crate::domain::{MenuDocument, RemoteMenuItem};
use crate::menu_sync::SyncError;

/// Published menu of the Little Lemon restaurant.
pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/menu.json";

#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_remote_menu(&self) -> Result<Vec<RemoteMenuItem>, SyncError>;
}

/// Fetches the menu document over HTTP with a single GET.
#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    http_client: HttpClient,
    url: String,
}

impl HttpMenuSource {
    pub fn new(config: &AppConfig) -> Result<Self, SyncError> {
        let mut builder = HttpClient::builder().user_agent(concat!("little-lemon/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| SyncError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            url: config.menu_url.clone(),
        })
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    #[instrument(fields(url = %self.url), skip(self))]
    async fn fetch_remote_menu(&self) -> Result<Vec<RemoteMenuItem>, SyncError> {
        debug!("Fetching remote menu");
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::HttpStatus(status.as_u16()));
        }

        // Served as text/plain, so decode the body ourselves rather than by content type.
        let text = response.text().await.map_err(|e| SyncError::Network(e.to_string()))?;
        decode_menu_document(&text)
    }
}

pub fn decode_menu_document(text: &str) -> Result<Vec<RemoteMenuItem>, SyncError> {
    let document: MenuDocument =
        serde_json::from_str(text).map_err(|e| SyncError::Decode(e.to_string()))?;
    debug!(item_count = document.menu.len(), "Decoded menu document");
    Ok(document.menu)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::menu_store::MenuStore;
    use crate::menu_sync::{MenuSync, SyncOutcome};

    const TWO_ITEM_MENU: &str = r#"{"menu":[
        {"id":1,"title":"Greek Salad","description":"The famous greek salad","price":"10","image":"greekSalad.jpg","category":"starters"},
        {"id":2,"title":"Lemonade","description":"Freshly squeezed","price":3.5,"image":"lemonade.jpg","category":"drinks"}
    ]}"#;

    /// Answers a single GET with a canned response and returns the URL to hit.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{status_line}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/menu.json")
    }

    /// Runs a full sync against `url` into a fresh store; returns the result and the stored count.
    async fn sync_from(url: String) -> (Result<SyncOutcome, SyncError>, usize) {
        let config = AppConfig {
            menu_url: url,
            ..AppConfig::default()
        };
        let source = Arc::new(HttpMenuSource::new(&config).unwrap());
        let (store, client) = MenuStore::open_in_memory(10).unwrap();
        store.spawn();
        let sync = MenuSync::new(source, client.clone());

        let result = sync.sync_if_needed().await;
        let stored = client.get_all().await.unwrap().len();
        (result, stored)
    }

    #[test]
    fn test_decode_menu_document() {
        let body = r#"{"menu":[
            {"id":1,"title":"Greek Salad","description":"The famous greek salad","price":"10","image":"https://example.com/greekSalad.jpg","category":"starters"},
            {"id":2,"title":"Lemon Desert","description":"Traditional homemade Italian Lemon Ricotta Cake.","price":"10","image":"https://example.com/lemonDessert.jpg","category":"desserts"}
        ]}"#;

        let items = decode_menu_document(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Greek Salad");
        assert_eq!(items[1].category, "desserts");
        assert_eq!(items[1].image_url, "https://example.com/lemonDessert.jpg");
    }

    #[test]
    fn test_malformed_document_is_a_decode_error() {
        for body in ["not json", r#"{"items": []}"#, r#"{"menu": [{"title": 3}]}"#] {
            let err = decode_menu_document(body).unwrap_err();
            assert!(matches!(err, SyncError::Decode(_)), "{body}: {err:?}");
        }
    }

    #[test]
    fn test_empty_menu_decodes() {
        assert_eq!(decode_menu_document(r#"{"menu": []}"#).unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let config = AppConfig {
            // Nothing listens on the loopback discard port.
            menu_url: "http://127.0.0.1:9/menu.json".to_string(),
            ..AppConfig::default()
        };
        let source = HttpMenuSource::new(&config).unwrap();

        let err = source.fetch_remote_menu().await.unwrap_err();
        assert!(matches!(err, SyncError::Network(_)));
    }

    #[tokio::test]
    async fn test_plain_text_json_body_populates_store() {
        let url = serve_once("HTTP/1.1 200 OK", TWO_ITEM_MENU).await;

        let (result, stored) = sync_from(url).await;
        assert_eq!(result, Ok(SyncOutcome::Populated { inserted: 2 }));
        assert_eq!(stored, 2);
    }

    #[tokio::test]
    async fn test_malformed_body_leaves_store_empty() {
        let url = serve_once("HTTP/1.1 200 OK", "{not json").await;

        let (result, stored) = sync_from(url).await;
        assert!(matches!(result, Err(SyncError::Decode(_))), "{result:?}");
        assert_eq!(stored, 0);
    }

    #[tokio::test]
    async fn test_error_status_leaves_store_empty() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "down for maintenance").await;

        let (result, stored) = sync_from(url).await;
        assert_eq!(result, Err(SyncError::HttpStatus(503)));
        assert_eq!(stored, 0);
    }
}

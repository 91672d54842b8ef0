#![cfg(not(target_arch = "wasm32"))]

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use cardcompare_web::{FileSource, HttpSource, LoadError, load_catalog};
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let body = json!({
            "lastUpdated": "2025-02-01",
            "logoDevToken": "pk_live",
            "cards": [
                { "id": "a", "name": "Alpha", "issuer": "Bank A", "annualFee": 500 },
                { "id": "b", "name": "Beta", "issuer": "Bank B", "annualFee": "Lifetime free" }
            ]
        })
        .to_string();

        let app = Router::new()
            .route("/data/cards.json", get(move || {
                let body = body.clone();
                async move { body }
            }))
            .route("/data/broken.json", get(|| async { "{ not json" }))
            .route(
                "/data/dupes.json",
                get(|| async { r#"{"cards":[{"id":"a"},{"id":"a"}]}"# }),
            )
            .route("/data/down.json", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn source(&self, path: &str) -> HttpSource {
        HttpSource::new(format!("{}{}", self.base_url, path))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn loads_catalog_over_http() {
    let srv = TestServer::spawn().await;
    let catalog = load_catalog(&srv.source("/data/cards.json")).await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.last_updated(), "2025-02-01");
    assert_eq!(catalog.logo_token(), Some("pk_live"));
    assert_eq!(catalog.products()[1].name, "Beta");
}

#[tokio::test]
async fn missing_document_reports_status() {
    let srv = TestServer::spawn().await;
    let err = load_catalog(&srv.source("/data/nope.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::Status(404)));
    assert_eq!(err.to_string(), "Failed to load card data (HTTP 404)");

    let err = load_catalog(&srv.source("/data/down.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::Status(503)));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let srv = TestServer::spawn().await;
    let err = load_catalog(&srv.source("/data/broken.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
}

#[tokio::test]
async fn duplicate_ids_fail_validation() {
    let srv = TestServer::spawn().await;
    let err = load_catalog(&srv.source("/data/dupes.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::Invalid(_)));
    assert_eq!(err.to_string(), "duplicate product id: a");
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = load_catalog(&HttpSource::new(format!("http://{addr}/data/cards.json")))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Network(_)));
}

#[tokio::test]
async fn loads_catalog_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.json");
    std::fs::write(&path, r#"{"cards":[{"id":"only","name":"Only"}],"lastUpdated":"today"}"#).unwrap();

    let catalog = load_catalog(&FileSource::new(&path)).await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.logo_token(), None);

    let err = load_catalog(&FileSource::new(dir.path().join("absent.json")))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

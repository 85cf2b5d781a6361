pub mod builders;
pub mod memory;

use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use salus::{api::create_router, AppState, Config};
use tower::ServiceExt as _;

// Re-export commonly used items
pub use builders::*;
pub use memory::MemoryFacilityStore;

/// A router wired to an in-memory store, exercised via `oneshot` without
/// binding a socket.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryFacilityStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryFacilityStore::new())
    }

    pub fn with_store(store: MemoryFacilityStore) -> Self {
        Self::with_config(test_config(), store)
    }

    pub fn with_config(config: Config, store: MemoryFacilityStore) -> Self {
        let store = Arc::new(store);
        let state = AppState::with_store(config, store.clone());
        let router = create_router(state);
        Self { router, store }
    }

    pub async fn get(
        &self,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path_and_query)
            .header("host", "example.org")
            .header("accept", "application/json")
            .body(Body::empty())
            .context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }

    pub async fn get_json(
        &self,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, serde_json::Value)> {
        let (status, headers, body) = self.get(path_and_query).await?;
        let json = serde_json::from_slice(&body)
            .with_context(|| format!("parse response body as JSON: {path_and_query}"))?;
        Ok((status, headers, json))
    }
}

/// Config for tests: any non-empty database URL passes validation; the
/// in-memory store never dials it.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.database.url = "postgres://unused-in-tests".to_string();
    config
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

/// Extract facility ids, in order, from a list response body.
pub fn facility_ids(body: &serde_json::Value) -> Vec<i64> {
    body.get("facilities")
        .and_then(|v| v.as_array())
        .map(|facilities| {
            facilities
                .iter()
                .filter_map(|f| f.get("id").and_then(|id| id.as_i64()))
                .collect()
        })
        .unwrap_or_default()
}

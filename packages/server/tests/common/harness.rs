//! Test harness that drives the full HTTP stack against the in-memory store.
//!
//! Every request goes through the real router, extractors, and error
//! mapping; only the store behind `BaseShopStore` is swapped out, so tests
//! need no database and run on tokio's paused clock for exact timing
//! assertions.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tokio::sync::broadcast;
use tower::ServiceExt;

use server_core::domains::presence::models::{Maker, Station};
use server_core::domains::presence::ShopEvent;
use server_core::kernel::{InMemoryShopStore, PresenceConfig, ServerDeps};
use server_core::server::build_app;

pub struct TestShop {
    /// Direct store handle for seeding rosters and inspecting rows.
    pub store: Arc<InMemoryShopStore>,
    pub deps: Arc<ServerDeps>,
    app: Router,
}

impl TestShop {
    /// Shop with the production timing defaults (10s cooldown, 15s reset).
    pub fn new() -> Self {
        Self::with_config(PresenceConfig::default())
    }

    pub fn with_config(presence: PresenceConfig) -> Self {
        let store = Arc::new(InMemoryShopStore::new());
        let deps = Arc::new(ServerDeps::new(store.clone(), presence));
        let app = build_app(deps.clone(), &[]);
        Self { store, deps, app }
    }

    pub fn add_maker(&self, display_name: &str, external_label: &str) -> Maker {
        self.store.add_maker(display_name, external_label)
    }

    pub fn add_station(&self, name: &str) -> Station {
        self.store.add_station(name)
    }

    /// Subscribe to the broadcast hub before triggering the behavior under
    /// test, so no event can be missed.
    pub fn subscribe(&self) -> broadcast::Receiver<ShopEvent> {
        self.deps.events.subscribe()
    }

    /// Let armed background timers run to completion on the paused clock.
    pub async fn settle(&self) {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    /// POST a JSON body and return (status, parsed response body).
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST with no body at all, as a misconfigured camera would.
    pub async fn post_empty(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// GET a streaming endpoint and hand back the raw response. SSE bodies
    /// never end, so callers read frames off the body stream themselves.
    pub async fn get_stream(&self, path: &str) -> Response {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, body)
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain every event already delivered to the receiver.
pub fn drain_events(rx: &mut broadcast::Receiver<ShopEvent>) -> Vec<ShopEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

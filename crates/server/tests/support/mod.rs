#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get as get_route,
    Json, Router,
};
use configs::{AppConfig, DatabaseConfig};
use serde_json::Value;
use tower::ServiceExt;

pub fn sqlite_config(pizza_base_url: &str) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.database = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    cfg.pizza_service.base_url = pizza_base_url.to_string();
    cfg
}

/// App wired through the real startup path against an in-memory database.
pub async fn build_test_app(pizza_base_url: &str) -> anyhow::Result<Router> {
    let state = server::startup::build_state(&sqlite_config(pizza_base_url)).await?;
    Ok(server::startup::build_app(state))
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// How the fake pizza service answers.
#[derive(Clone)]
pub enum Behaviour {
    Reply(Value),
    Status(StatusCode),
    Stall(Duration),
}

/// Throwaway pizza service on an ephemeral port.
#[derive(Clone)]
pub struct MockPizzaService {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

#[derive(Clone)]
struct MockState {
    behaviour: Behaviour,
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

async fn for_outlet(
    State(state): State<MockState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push((code, auth));
    match state.behaviour {
        Behaviour::Reply(body) => Json(body).into_response(),
        Behaviour::Status(status) => status.into_response(),
        Behaviour::Stall(d) => {
            tokio::time::sleep(d).await;
            Json(serde_json::json!([])).into_response()
        }
    }
}

impl MockPizzaService {
    pub async fn start(behaviour: Behaviour) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { behaviour, hits: hits.clone(), seen: seen.clone() };
        let router = Router::new()
            .route("/pizza/for-outlet/:code", get_route(for_outlet))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Self { base_url: format!("http://{addr}"), hits, seen }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, Option<String>)> {
        self.seen.lock().unwrap().clone()
    }
}

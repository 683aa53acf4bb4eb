//! Shared test utilities: an in-process stand-in for the knowledge service
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

/// Behavior and recorded traffic of the mock service, shared with handlers
#[derive(Clone)]
struct MockState {
    items: Arc<Mutex<Value>>,
    answer: Arc<Mutex<Value>>,
    ingests: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<Value>>>,
    items_status: u16,
    ingest_status: u16,
    query_status: u16,
}

/// Builder configuring what the mock service serves
pub struct MockServiceBuilder {
    items: Value,
    answer: Value,
    items_status: u16,
    ingest_status: u16,
    query_status: u16,
}

impl MockServiceBuilder {
    pub fn new() -> Self {
        Self {
            items: json!([]),
            answer: json!({"answer": "mock answer"}),
            items_status: 200,
            ingest_status: 200,
            query_status: 200,
        }
    }

    /// JSON array served by `GET /items`
    pub fn items(mut self, items: Value) -> Self {
        self.items = items;
        self
    }

    /// JSON body served by `POST /query`
    pub fn answer(mut self, answer: Value) -> Self {
        self.answer = answer;
        self
    }

    pub fn items_status(mut self, status: u16) -> Self {
        self.items_status = status;
        self
    }

    pub fn ingest_status(mut self, status: u16) -> Self {
        self.ingest_status = status;
        self
    }

    pub fn query_status(mut self, status: u16) -> Self {
        self.query_status = status;
        self
    }

    /// Bind to an ephemeral port and start serving. The server task runs for
    /// the lifetime of the spawning runtime.
    pub async fn spawn(self) -> MockService {
        let state = MockState {
            items: Arc::new(Mutex::new(self.items)),
            answer: Arc::new(Mutex::new(self.answer)),
            ingests: Arc::new(Mutex::new(Vec::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
            items_status: self.items_status,
            ingest_status: self.ingest_status,
            query_status: self.query_status,
        };

        let router = Router::new()
            .route("/items", get(items_handler))
            .route("/ingest", post(ingest_handler))
            .route("/query", post(query_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock service crashed");
        });

        MockService { base_url: format!("http://{}", addr), state }
    }
}

impl Default for MockServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn items_handler(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
    let status = StatusCode::from_u16(state.items_status).expect("invalid status");
    let items = state.items.lock().expect("poisoned").clone();
    (status, Json(items))
}

async fn ingest_handler(State(state): State<MockState>, Json(body): Json<Value>) -> StatusCode {
    state.ingests.lock().expect("poisoned").push(body);
    StatusCode::from_u16(state.ingest_status).expect("invalid status")
}

async fn query_handler(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.queries.lock().expect("poisoned").push(body);
    let status = StatusCode::from_u16(state.query_status).expect("invalid status");
    let answer = state.answer.lock().expect("poisoned").clone();
    (status, Json(answer))
}

/// Handle to a running mock knowledge service
pub struct MockService {
    base_url: String,
    state: MockState,
}

impl MockService {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bodies received on `POST /ingest`, in order
    pub fn recorded_ingests(&self) -> Vec<Value> {
        self.state.ingests.lock().expect("poisoned").clone()
    }

    /// Bodies received on `POST /query`, in order
    pub fn recorded_queries(&self) -> Vec<Value> {
        self.state.queries.lock().expect("poisoned").clone()
    }

    /// Replace the item list served by `GET /items`
    pub fn set_items(&self, items: Value) {
        *self.state.items.lock().expect("poisoned") = items;
    }
}

/// Start a mock service from a synchronous test. The returned runtime must be
/// kept alive for as long as the service is used.
pub fn spawn_blocking(builder: MockServiceBuilder) -> (tokio::runtime::Runtime, MockService) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let service = runtime.block_on(builder.spawn());
    (runtime, service)
}

// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Runs an in-process mock of the Arvo API and builds clients pointed at it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arvo
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `arvo_mcp`
//!
//! [`MockArvo`] serves the three Arvo endpoints on an ephemeral port and
//! records what the bridge sent, so tests can assert on headers, bodies,
//! and hit counts.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use arvo_mcp::config::ServerConfig;
use arvo_mcp::external::ArvoApiClient;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "arvo_test_key_123";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("arvo_mcp=warn")
            .with_test_writer()
            .try_init();
    });
}

/// Canned HTTP answer for one endpoint
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl MockReply {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            content_type: "text/html",
            body: body.to_owned(),
        }
    }

    /// `{"result": value}` with status 200
    pub fn result(value: Value) -> Self {
        Self::json(200, &json!({ "result": value }))
    }
}

impl IntoResponse for MockReply {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

/// One request observed by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Debug)]
struct MockState {
    execute_reply: MockReply,
    validate_reply: MockReply,
    catalog_reply: MockReply,
    execute_hits: AtomicUsize,
    validate_hits: AtomicUsize,
    catalog_hits: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for [`MockArvo`]
pub struct MockArvoBuilder {
    execute_reply: MockReply,
    validate_reply: MockReply,
    catalog_reply: MockReply,
}

impl Default for MockArvoBuilder {
    fn default() -> Self {
        Self {
            execute_reply: MockReply::result(json!("ok")),
            validate_reply: MockReply::json(
                200,
                &json!({ "valid": true, "userId": "user-123", "scopes": ["read", "write"] }),
            ),
            catalog_reply: MockReply::json(200, &json!({ "tools": [] })),
        }
    }
}

impl MockArvoBuilder {
    pub fn execute(mut self, reply: MockReply) -> Self {
        self.execute_reply = reply;
        self
    }

    pub fn validate(mut self, reply: MockReply) -> Self {
        self.validate_reply = reply;
        self
    }

    pub fn catalog(mut self, reply: MockReply) -> Self {
        self.catalog_reply = reply;
        self
    }

    pub async fn start(self) -> MockArvo {
        let state = Arc::new(MockState {
            execute_reply: self.execute_reply,
            validate_reply: self.validate_reply,
            catalog_reply: self.catalog_reply,
            execute_hits: AtomicUsize::new(0),
            validate_hits: AtomicUsize::new(0),
            catalog_hits: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/api/v1/mcp/tools", post(execute_tool).get(list_tools))
            .route("/api/v1/auth/validate-key", post(validate_key))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockArvo { addr, state }
    }
}

/// In-process stand-in for the Arvo API
pub struct MockArvo {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockArvo {
    pub fn builder() -> MockArvoBuilder {
        MockArvoBuilder::default()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn execute_hits(&self) -> usize {
        self.state.execute_hits.load(Ordering::SeqCst)
    }

    pub fn validate_hits(&self) -> usize {
        self.state.validate_hits.load(Ordering::SeqCst)
    }

    pub fn catalog_hits(&self) -> usize {
        self.state.catalog_hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> Arc<ArvoApiClient> {
        client_for(&self.base_url())
    }
}

fn record(state: &MockState, headers: &HeaderMap, body: &str) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = serde_json::from_str(body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(RecordedRequest {
        authorization,
        body,
    });
}

async fn execute_tool(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> MockReply {
    state.execute_hits.fetch_add(1, Ordering::SeqCst);
    record(&state, &headers, &body);
    state.execute_reply.clone()
}

async fn list_tools(State(state): State<Arc<MockState>>, headers: HeaderMap) -> MockReply {
    state.catalog_hits.fetch_add(1, Ordering::SeqCst);
    record(&state, &headers, "");
    state.catalog_reply.clone()
}

async fn validate_key(State(state): State<Arc<MockState>>, headers: HeaderMap) -> MockReply {
    state.validate_hits.fetch_add(1, Ordering::SeqCst);
    record(&state, &headers, "");
    state.validate_reply.clone()
}

/// Configuration pointing at `base_url` with the test key
pub fn config_for(base_url: &str) -> ServerConfig {
    let base_url = base_url.to_owned();
    ServerConfig::from_lookup(move |key| match key {
        "ARVO_API_KEY" => Some(TEST_API_KEY.to_owned()),
        "ARVO_API_URL" => Some(base_url.clone()),
        "ARVO_REQUEST_TIMEOUT_SECS" => Some("5".to_owned()),
        _ => None,
    })
    .unwrap()
}

pub fn client_for(base_url: &str) -> Arc<ArvoApiClient> {
    Arc::new(ArvoApiClient::new(&config_for(base_url)).unwrap())
}

/// Base URL of a port nothing listens on
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

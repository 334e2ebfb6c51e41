//! In-process stand-in for the agent / execution service.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self { status: StatusCode::OK, body: body.to_string(), delay: None }
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into(), delay: None }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct MockAgent {
    pub chat: Reply,
    pub execute: Reply,
    pub status: Reply,
    pub chat_hits: AtomicUsize,
    pub execute_hits: AtomicUsize,
    pub last_prompt: Mutex<Option<Value>>,
    pub last_execute_body: Mutex<Option<String>>,
}

impl MockAgent {
    pub fn new(chat: Reply, execute: Reply) -> Arc<Self> {
        Arc::new(Self {
            chat,
            execute,
            status: Reply::ok(serde_json::json!({"status": "ok", "address": "0xfeed"})),
            chat_hits: AtomicUsize::new(0),
            execute_hits: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_execute_body: Mutex::new(None),
        })
    }

    pub fn chat_hits(&self) -> usize {
        self.chat_hits.load(Ordering::SeqCst)
    }

    pub fn execute_hits(&self) -> usize {
        self.execute_hits.load(Ordering::SeqCst)
    }
}

async fn respond(reply: &Reply) -> Response {
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body.clone()).into_response()
}

async fn chat(State(mock): State<Arc<MockAgent>>, Json(body): Json<Value>) -> Response {
    mock.chat_hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_prompt.lock().unwrap() = Some(body);
    respond(&mock.chat).await
}

async fn execute(State(mock): State<Arc<MockAgent>>, body: String) -> Response {
    mock.execute_hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_execute_body.lock().unwrap() = Some(body);
    respond(&mock.execute).await
}

async fn status(State(mock): State<Arc<MockAgent>>) -> Response {
    respond(&mock.status).await
}

/// Serves `mock` on an ephemeral port and returns its base URL.
pub async fn spawn(mock: Arc<MockAgent>) -> String {
    let app = Router::new()
        .route("/api/chat", post(chat))
        .route("/api/execute", post(execute))
        .route("/api/status", get(status))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

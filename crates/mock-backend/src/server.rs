//! HTTP surface for the mock (axum router + bootstrap).

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
};

use catalog_core::{HttpRequest, HttpResponse};

use crate::backend::MockBackend;
use crate::errors::bad_request;

pub const ADDR_ENV: &str = "CATALOG_MOCK_ADDR";
pub const REQUIRE_AUTH_ENV: &str = "CATALOG_MOCK_REQUIRE_AUTH";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Prefix the client's default base URL points at.
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockServerConfig {
    pub addr: SocketAddr,
    pub require_auth: bool,
}

impl MockServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw
            .parse()
            .with_context(|| format!("{ADDR_ENV} is not a socket address: {raw}"))?;
        let require_auth = std::env::var(REQUIRE_AUTH_ENV)
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self { addr, require_auth })
    }

    pub fn backend(&self) -> MockBackend {
        let backend = MockBackend::new();
        if self.require_auth {
            backend.with_required_auth()
        } else {
            backend
        }
    }
}

/// Router serving the mock under `/api`, plus `/health`.
pub fn router(backend: Arc<MockBackend>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/*rest", any(dispatch))
        .with_state(backend)
}

pub async fn serve(config: MockServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        require_auth = config.require_auth,
        "mock catalog API listening"
    );

    axum::serve(listener, router(Arc::new(config.backend()))).await?;
    Ok(())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn dispatch(
    State(backend): State<Arc<MockBackend>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Response {
    let path = uri.path().strip_prefix(API_PREFIX).unwrap_or(uri.path());

    let body = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => Some(value),
            Err(e) => return into_response(bad_request(format!("Malformed JSON: {e}"))),
        }
    };

    let request = HttpRequest {
        method,
        path: path.to_string(),
        query,
        headers,
        body,
    };

    into_response(backend.handle(&request))
}

fn into_response(response: HttpResponse) -> Response {
    match response.body {
        Some(body) => (response.status, Json(body)).into_response(),
        None => response.status.into_response(),
    }
}

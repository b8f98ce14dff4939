//! Network-backed transport.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use catalog_core::{HttpRequest, HttpResponse, Transport, TransportError};

use crate::config::ClientConfig;

/// Sends requests to `base_url + path` with `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            http,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut req = self
            .http
            .request(request.method, &url)
            .headers(request.headers);

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(map_reqwest_error)?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse {
            status,
            body: decode_body(&bytes),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_decode() || err.is_body() {
        TransportError::Body(err.to_string())
    } else {
        TransportError::Connect(err.to_string())
    }
}

// Non-JSON bodies (proxy error pages, plain text) are kept as a JSON string.
fn decode_body(bytes: &[u8]) -> Option<JsonValue> {
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(JsonValue::String(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}

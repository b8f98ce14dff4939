use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use catalog_core::{HttpRequest, HttpResponse, Transport, TransportError};

use crate::backend::MockBackend;

/// In-process `Transport` backed by a `MockBackend`.
///
/// Every request is recorded so tests can assert on what the client actually sent
/// (headers included).
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    backend: Arc<MockBackend>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new(backend: MockBackend) -> Self {
        Self {
            backend: Arc::new(backend),
            requests: Arc::default(),
        }
    }

    pub fn backend(&self) -> &MockBackend {
        &self.backend
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.backend.handle(&request);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::http::StatusCode;

    #[tokio::test]
    async fn records_requests_and_answers_from_backend() {
        let transport = MockTransport::default();

        let resp = transport.send(HttpRequest::get("/products/2")).await.unwrap();
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body.unwrap()["name"], "Wireless Mouse");

        transport.send(HttpRequest::delete("/products/2")).await.unwrap();

        assert_eq!(transport.requests().len(), 2);
        assert_eq!(transport.last_request().unwrap().path, "/products/2");
        assert_eq!(
            transport.last_request().unwrap().method,
            catalog_core::http::Method::DELETE
        );
    }

    #[tokio::test]
    async fn clones_share_backend_and_log() {
        let transport = MockTransport::new(MockBackend::new());
        let clone = transport.clone();

        clone.send(HttpRequest::get("/products")).await.unwrap();
        assert_eq!(transport.requests().len(), 1);
    }
}

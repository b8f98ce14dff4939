use std::sync::Arc;

use catalog_client::{
    ApiClient, AUTH_TOKEN_KEY, ClientConfig, CredentialStore, InMemoryCredentialStore, LOGIN_PATH,
    RecordingNavigator,
};
use catalog_core::{Credentials, ProductFilter, ProductId, ProductRequest};
use catalog_mock::MockBackend;
use catalog_validation::{FieldValue, ProductFormData};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(backend: MockBackend) -> Self {
        // Same router as the binary, on an ephemeral port.
        let app = catalog_mock::server::router(Arc::new(backend));
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

    fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct Harness {
    client: ApiClient,
    store: Arc<InMemoryCredentialStore>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(srv: &TestServer, store: InMemoryCredentialStore) -> Harness {
    let store = Arc::new(store);
    let navigator = Arc::new(RecordingNavigator::new());
    let client = ApiClient::connect(
        ClientConfig::new(srv.api_url()),
        store.clone(),
        navigator.clone(),
    )
    .expect("client builds");
    Harness {
        client,
        store,
        navigator,
    }
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn(MockBackend::new().with_required_auth()).await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_then_crud_over_http() {
    let srv = TestServer::spawn(MockBackend::new().with_required_auth()).await;
    let h = harness(&srv, InMemoryCredentialStore::new());

    let login = h
        .client
        .login(&Credentials::new("validuser", "validpass123"))
        .await
        .unwrap();
    assert_eq!(login.status, 200);
    assert_eq!(login.data.token.as_deref(), Some("jwt-token"));
    assert_eq!(h.store.get(AUTH_TOKEN_KEY).as_deref(), Some("jwt-token"));

    let page = h
        .client
        .get_products(Some(&ProductFilter::by_category("kitchen")))
        .await
        .unwrap();
    let names: Vec<_> = page.data.content.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Coffee Mug"]);

    let form = ProductFormData {
        name: "Travel Mug".to_string(),
        price: FieldValue::from("18.50"),
        quantity: FieldValue::from("12"),
        description: String::new(),
        category: "Kitchen".to_string(),
    };
    let request: ProductRequest = form.into_request().unwrap();
    let created = h.client.create_product(&request).await.unwrap();
    assert_eq!(created.status, 200);
    assert_eq!(created.data.id, ProductId(6));
    assert_eq!(created.data.price, 18.5);
    assert!(created.data.active);

    let updated = h
        .client
        .update_product(created.data.id, &ProductRequest {
            quantity: 0,
            ..request
        })
        .await
        .unwrap();
    assert_eq!(updated.data.quantity, 0);

    let fetched = h.client.get_product_by_id(ProductId(2)).await.unwrap();
    assert_eq!(fetched.data.name, "Wireless Mouse");

    let deleted = h.client.delete_product(ProductId(2)).await.unwrap();
    assert_eq!(deleted.status, 204);

    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn rejected_login_redirects_to_login() {
    let srv = TestServer::spawn(MockBackend::new()).await;
    let h = harness(&srv, InMemoryCredentialStore::new());

    let err = h
        .client
        .login(&Credentials::new("validuser", "nope12345"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), Some("Invalid credentials"));
    assert_eq!(h.navigator.visits(), vec![LOGIN_PATH.to_string()]);
    assert!(!h.client.is_authenticated());
}

#[tokio::test]
async fn stale_token_is_cleared_on_401() {
    let srv = TestServer::spawn(MockBackend::new().with_required_auth()).await;
    let h = harness(&srv, InMemoryCredentialStore::with_token("expired-token"));

    let err = h.client.get_products(None).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(h.store.get(AUTH_TOKEN_KEY), None);
    assert_eq!(h.navigator.count(LOGIN_PATH), 1);
}

#[tokio::test]
async fn malformed_json_is_rejected_without_touching_session() {
    let srv = TestServer::spawn(MockBackend::new()).await;
    let h = harness(&srv, InMemoryCredentialStore::with_token("jwt-token"));

    let unknown = h.client.get_product_by_id(ProductId(404)).await.unwrap();
    assert_eq!(unknown.data.id, ProductId(404));
    assert_eq!(unknown.data.name, "Test Product");

    let res = reqwest::Client::new()
        .post(format!("{}/products", srv.api_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));

    // Token untouched by non-401 failures.
    assert_eq!(h.store.get(AUTH_TOKEN_KEY).as_deref(), Some("jwt-token"));
    assert!(h.navigator.visits().is_empty());
}

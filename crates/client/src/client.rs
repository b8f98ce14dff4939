//! The catalog API facade.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use catalog_core::http::{HeaderValue, header};
use catalog_core::{
    Credentials, HttpRequest, HttpResponse, LoginResponse, ProductFilter, ProductId, ProductPage,
    ProductRequest, ProductResponse, Transport,
};

use crate::auth_expiry::AuthExpiryPolicy;
use crate::config::ClientConfig;
use crate::credentials::{AUTH_TOKEN_KEY, CredentialStore};
use crate::error::RequestError;
use crate::navigation::Navigator;
use crate::response::ApiResponse;
use crate::transport::ReqwestTransport;

/// Client for the catalog REST API.
///
/// Every outbound request carries `Authorization: Bearer <token>` when the
/// credential store holds one. Every failure passes through `AuthExpiryPolicy`
/// before being returned.
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    expiry: AuthExpiryPolicy,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let expiry = AuthExpiryPolicy::new(credentials.clone(), navigator);
        Self {
            config,
            transport,
            credentials,
            expiry,
        }
    }

    /// Client that talks to `config.base_url()` over the network.
    pub fn connect(
        config: ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, RequestError> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::new(config, transport, credentials, navigator))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `POST /auth/login`. A successful response's token is stored for later calls.
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse<LoginResponse>, RequestError> {
        let request = HttpRequest::post("/auth/login").with_json(to_json(credentials)?);
        let response: ApiResponse<LoginResponse> = self.execute(request).await?;

        if let Some(token) = response.data.issued_token() {
            self.credentials.set(AUTH_TOKEN_KEY, token);
            tracing::info!(username = %credentials.username, "login succeeded; token stored");
        }

        Ok(response)
    }

    /// Forget the stored token. Purely local; no request is sent.
    pub fn logout(&self) {
        self.credentials.remove(AUTH_TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.get(AUTH_TOKEN_KEY).is_some()
    }

    /// `GET /products`, with unset filter fields left out of the query.
    pub async fn get_products(
        &self,
        filter: Option<&ProductFilter>,
    ) -> Result<ApiResponse<ProductPage>, RequestError> {
        let query = filter.map(ProductFilter::to_query).unwrap_or_default();
        self.execute(HttpRequest::get("/products").with_query(query))
            .await
    }

    pub async fn get_product_by_id(
        &self,
        id: ProductId,
    ) -> Result<ApiResponse<ProductResponse>, RequestError> {
        self.execute(HttpRequest::get(format!("/products/{id}")))
            .await
    }

    pub async fn create_product(
        &self,
        product: &ProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, RequestError> {
        let request = HttpRequest::post("/products").with_json(to_json(product)?);
        self.execute(request).await
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        product: &ProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, RequestError> {
        let request = HttpRequest::put(format!("/products/{id}")).with_json(to_json(product)?);
        self.execute(request).await
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<ApiResponse<()>, RequestError> {
        self.execute(HttpRequest::delete(format!("/products/{id}")))
            .await
    }

    async fn execute<T>(&self, request: HttpRequest) -> Result<ApiResponse<T>, RequestError>
    where
        T: DeserializeOwned,
    {
        let method = request.method.clone();
        let path = request.path.clone();
        let request = self.authorize(request);

        tracing::debug!(%method, %path, "sending request");

        let result = self.dispatch(request).await.and_then(decode);
        match &result {
            Ok(resp) => tracing::debug!(%method, %path, status = resp.status, "request succeeded"),
            Err(err) => {
                tracing::debug!(%method, %path, error = %err, "request failed");
                self.expiry.on_failure(err);
            }
        }
        result
    }

    /// Outbound interceptor: attach the token current at send time.
    fn authorize(&self, mut request: HttpRequest) -> HttpRequest {
        let Some(token) = self.credentials.get(AUTH_TOKEN_KEY) else {
            return request;
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                request.headers.insert(header::AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!("stored token is not a valid header value; sending unauthenticated");
            }
        }
        request
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        match tokio::time::timeout(self.config.timeout(), self.transport.send(request)).await {
            Ok(result) => result.map_err(RequestError::from),
            Err(_elapsed) => Err(RequestError::Timeout),
        }
    }
}

/// Inbound interceptor: 2xx decodes into the envelope, anything else is an error.
fn decode<T>(response: HttpResponse) -> Result<ApiResponse<T>, RequestError>
where
    T: DeserializeOwned,
{
    if !response.status.is_success() {
        return Err(RequestError::Status {
            status: response.status.as_u16(),
            message: response.message().map(str::to_string),
        });
    }

    let body = response.body.unwrap_or(JsonValue::Null);
    let data = serde_json::from_value(body).map_err(|e| RequestError::Decode(e.to_string()))?;
    Ok(ApiResponse::new(data, response.status))
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, RequestError> {
    serde_json::to_value(value).map_err(|e| RequestError::Encode(e.to_string()))
}

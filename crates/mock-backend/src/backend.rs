//! Request handling for the mock catalog API.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};

use serde_json::json;

use catalog_core::http::StatusCode;
use catalog_core::{
    Credentials, HttpRequest, HttpResponse, ProductId, ProductPage, ProductRequest,
    ProductResponse,
};

use crate::errors::{bad_request, not_found, unauthorized};
use crate::fixtures::{self, INVALID_CREDENTIALS_MESSAGE, LOGIN_SUCCESS_MESSAGE, MOCK_TOKEN};
use crate::routes::Route;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Deterministic answers for the catalog API.
///
/// Listing honors `name`/`category` (case-insensitive substring), `page` and `size`,
/// over active fixtures sorted by name. Writes are echoed, never stored.
#[derive(Debug)]
pub struct MockBackend {
    products: Vec<ProductResponse>,
    next_id: AtomicI64,
    overrides: Mutex<HashMap<Route, HttpResponse>>,
    require_auth: bool,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::with_products(fixtures::products())
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<ProductResponse>) -> Self {
        let next_id = products.iter().map(|p| p.id.0).max().unwrap_or(0).saturating_add(1);
        Self {
            products,
            next_id: AtomicI64::new(next_id),
            overrides: Mutex::new(HashMap::new()),
            require_auth: false,
        }
    }

    /// Product routes answer 401 unless the request carries the mock token.
    pub fn with_required_auth(mut self) -> Self {
        self.require_auth = true;
        self
    }

    pub fn requires_auth(&self) -> bool {
        self.require_auth
    }

    /// Answer `route` with `response` until `reset_overrides`.
    pub fn override_route(&self, route: Route, response: HttpResponse) {
        self.overrides
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(route, response);
    }

    pub fn reset_overrides(&self) {
        self.overrides
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let Some((route, id)) = Route::resolve(&request.method, &request.path) else {
            tracing::debug!(method = %request.method, path = %request.path, "no mock route");
            return not_found(format!(
                "No handler for {} {}",
                request.method, request.path
            ));
        };

        tracing::debug!(?route, path = %request.path, "mock route matched");

        if let Some(response) = self.override_for(route) {
            return response;
        }

        if self.require_auth
            && route.is_protected()
            && request.bearer_token() != Some(MOCK_TOKEN)
        {
            return unauthorized("Unauthorized");
        }

        match route {
            Route::Login => self.login(request),
            Route::ListProducts => self.list_products(request),
            Route::CreateProduct => self.create_product(request),
            Route::GetProduct => with_id(id, |id| self.get_product(id)),
            Route::UpdateProduct => with_id(id, |id| self.update_product(id, request)),
            Route::DeleteProduct => with_id(id, |_| HttpResponse::empty(StatusCode::NO_CONTENT)),
        }
    }

    fn override_for(&self, route: Route) -> Option<HttpResponse> {
        self.overrides
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&route)
            .cloned()
    }

    fn login(&self, request: &HttpRequest) -> HttpResponse {
        let credentials: Credentials = match parse_body(request) {
            Ok(c) => c,
            Err(resp) => return resp,
        };

        if credentials.username == fixtures::VALID_USERNAME
            && credentials.password == fixtures::VALID_PASSWORD
        {
            HttpResponse::json(
                StatusCode::OK,
                json!({
                    "success": true,
                    "message": LOGIN_SUCCESS_MESSAGE,
                    "token": MOCK_TOKEN,
                }),
            )
        } else {
            unauthorized(INVALID_CREDENTIALS_MESSAGE)
        }
    }

    fn list_products(&self, request: &HttpRequest) -> HttpResponse {
        let page = match query_u32(request, "page") {
            Ok(v) => v.unwrap_or(0),
            Err(resp) => return resp,
        };
        let size = match query_u32(request, "size") {
            Ok(Some(0)) | Ok(None) => DEFAULT_PAGE_SIZE,
            Ok(Some(v)) => v,
            Err(resp) => return resp,
        };
        let name = request.query_param("name").unwrap_or_default().to_lowercase();
        let category = request
            .query_param("category")
            .unwrap_or_default()
            .to_lowercase();

        let mut matching: Vec<&ProductResponse> = self
            .products
            .iter()
            .filter(|p| p.active)
            .filter(|p| p.name.to_lowercase().contains(&name))
            .filter(|p| p.category.to_lowercase().contains(&category))
            .collect();
        matching.sort_by_key(|p| p.name.to_lowercase());

        let total = matching.len();
        let start = (page as usize).saturating_mul(size as usize);
        let content = matching
            .into_iter()
            .skip(start)
            .take(size as usize)
            .cloned()
            .collect();

        let body = ProductPage {
            content,
            total_elements: Some(total as u64),
            total_pages: Some(total.div_ceil(size as usize) as u32),
            number: Some(page),
            size: Some(size),
        };
        json_ok(StatusCode::OK, &body)
    }

    fn get_product(&self, id: ProductId) -> HttpResponse {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .unwrap_or_else(|| fixtures::canned_product(id));
        json_ok(StatusCode::OK, &product)
    }

    fn create_product(&self, request: &HttpRequest) -> HttpResponse {
        let product: ProductRequest = match parse_body(request) {
            Ok(p) => p,
            Err(resp) => return resp,
        };
        let id = ProductId(self.next_id.fetch_add(1, Ordering::Relaxed));
        json_ok(StatusCode::OK, &ProductResponse::from_request(id, product, true))
    }

    fn update_product(&self, id: ProductId, request: &HttpRequest) -> HttpResponse {
        let product: ProductRequest = match parse_body(request) {
            Ok(p) => p,
            Err(resp) => return resp,
        };
        json_ok(StatusCode::OK, &ProductResponse::from_request(id, product, true))
    }
}

fn with_id(id: Option<&str>, f: impl FnOnce(ProductId) -> HttpResponse) -> HttpResponse {
    let raw = id.unwrap_or_default();
    match raw.parse::<ProductId>() {
        Ok(id) => f(id),
        Err(_) => bad_request(format!("Invalid product id: {raw}")),
    }
}

fn parse_body<T>(request: &HttpRequest) -> Result<T, HttpResponse>
where
    T: serde::de::DeserializeOwned,
{
    let body = request
        .body
        .clone()
        .ok_or_else(|| bad_request("Request body is required"))?;
    serde_json::from_value(body).map_err(|e| bad_request(format!("Malformed request body: {e}")))
}

fn query_u32(request: &HttpRequest, key: &str) -> Result<Option<u32>, HttpResponse> {
    request
        .query_param(key)
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| bad_request(format!("Invalid query parameter {key}: {raw}")))
        })
        .transpose()
}

fn json_ok<T: serde::Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    match serde_json::to_value(body) {
        Ok(value) => HttpResponse::json(status, value),
        Err(e) => crate::errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

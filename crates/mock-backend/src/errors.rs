use serde_json::json;

use catalog_core::HttpResponse;
use catalog_core::http::StatusCode;

/// Error body in the backend's shape: `{ "success": false, "message": ... }`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::json(
        status,
        json!({
            "success": false,
            "message": message.into(),
        }),
    )
}

pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    json_error(StatusCode::BAD_REQUEST, message)
}

pub fn unauthorized(message: impl Into<String>) -> HttpResponse {
    json_error(StatusCode::UNAUTHORIZED, message)
}

pub fn not_found(message: impl Into<String>) -> HttpResponse {
    json_error(StatusCode::NOT_FOUND, message)
}

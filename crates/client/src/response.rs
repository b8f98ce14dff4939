use serde::{Deserialize, Serialize};

use catalog_core::http::StatusCode;

/// Uniform envelope for every successful call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub status_text: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, status: StatusCode) -> Self {
        Self {
            data,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

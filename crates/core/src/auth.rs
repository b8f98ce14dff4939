//! Login request/response payloads.

use serde::{Deserialize, Serialize};

/// Username/password pair submitted to `POST /auth/login`.
///
/// Transient: the caller owns it and nothing in this workspace persists it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body returned by `POST /auth/login`, for both outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The token, if this response represents a successful login that carries one.
    pub fn issued_token(&self) -> Option<&str> {
        match self.token.as_deref() {
            Some(token) if self.success && !token.is_empty() => Some(token),
            _ => None,
        }
    }
}

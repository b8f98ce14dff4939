//! `catalog-client`: HTTP facade over the product catalog API.
//!
//! This crate provides:
//! - `ApiClient`: the six catalog operations, returning `ApiResponse<T>` envelopes
//! - bearer-token attachment from an injected `CredentialStore`
//! - redirect-on-401 via `AuthExpiryPolicy` and an injected `Navigator`
//! - `ReqwestTransport`, the network-backed `Transport`
//!
//! The transport is chosen by the caller; tests plug in `catalog_mock::MockTransport`.

pub mod auth_expiry;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod navigation;
pub mod response;
pub mod transport;

pub use auth_expiry::AuthExpiryPolicy;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use credentials::{AUTH_TOKEN_KEY, CredentialStore, InMemoryCredentialStore};
pub use error::RequestError;
pub use navigation::{LOGIN_PATH, Navigator, RecordingNavigator};
pub use response::ApiResponse;
pub use transport::ReqwestTransport;

//! `catalog-core`: wire types shared by the catalog client and its mock backend.
//!
//! This crate contains **no IO**: request/response DTOs plus the transport seam
//! (`Transport`) that both the real HTTP client and the in-process mock plug into.

pub mod auth;
pub mod http;
pub mod product;

pub use auth::{Credentials, LoginResponse};
pub use http::{HttpRequest, HttpResponse, Transport, TransportError};
pub use product::{ProductFilter, ProductId, ProductPage, ProductRequest, ProductResponse};

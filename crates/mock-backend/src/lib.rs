//! `catalog-mock`: deterministic stand-in for the catalog REST API.
//!
//! One `MockBackend` answers the login and product routes. It can be reached:
//! - in-process, through `MockTransport` (a `catalog_core::Transport`)
//! - over a socket, through the axum router in `server` (binary: `catalog-mock-server`)

pub mod backend;
pub mod errors;
pub mod fixtures;
pub mod routes;
pub mod server;
pub mod transport;

pub use backend::MockBackend;
pub use routes::Route;
pub use transport::MockTransport;

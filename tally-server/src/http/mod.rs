//! HTTP layer
//!
//! Axum server with:
//! - Per-resource routers merged in `server.rs`
//! - Request tracing and CORS
//! - Graceful shutdown
//! - JSON error responses that never leak database causes

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, ServerConfig};

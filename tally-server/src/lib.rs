//! tally-server: data layer and HTTP surface for the invoicing dashboard
//!
//! Read queries live in `db::repos`, form-driven mutations in `actions`,
//! and the axum routes that expose both in `http`. The rendering layer
//! and credential framework sit behind the `Revalidator` and
//! `CredentialVerifier` seams in `revalidate` and `auth`.

pub mod actions;
pub mod auth;
pub mod db;
pub mod http;
pub mod models;
pub mod revalidate;
pub mod state;

pub use http::{run_server, ServerConfig};
pub use state::AppState;

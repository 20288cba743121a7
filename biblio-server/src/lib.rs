//! biblio-server: HTTP API over a single-tenant book catalog
//!
//! Exposes create/read/update/delete operations on books, backed by a
//! single-file SQLite database.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::Book;

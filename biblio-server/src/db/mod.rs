//! Database layer - connection pool and repositories
//!
//! The pool is built once at startup and handed to the HTTP layer; each
//! repository call checks a single connection out of it for the duration
//! of one operation.

pub mod pool;
pub mod repos;

pub use pool::{create_pool, run_migrations};
pub use repos::{BookRepo, DbError};

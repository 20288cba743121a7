//! Repository implementations for database access
//!
//! Each method checks one connection out of the pool, runs one logical
//! operation, and releases the connection on every exit path.

pub mod books;

pub use books::{BookRepo, DbError};

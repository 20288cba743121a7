//! Book entity
//!
//! One struct serves as request payload, response body, and database row;
//! there is no separate DTO layer for a single-table catalog.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalogued book.
///
/// `id` is assigned by storage on insert. Clients may omit it (or send any
/// value) in create and update payloads; handlers never read it from the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub year: i32,
}

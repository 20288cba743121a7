//! Book endpoints
//!
//! One handler per route; each checks a connection out of the pool for
//! the duration of its single database operation via [`BookRepo`].

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::BookRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Book;

/// GET /books - list all books
///
/// Order of the returned collection is unspecified.
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = BookRepo::new(&state.pool).list().await?;
    Ok(Json(books))
}

/// GET /books/{id} - get a single book
async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, ApiError> {
    let book = BookRepo::new(&state.pool).get(id).await?;
    Ok(Json(book))
}

/// POST /books - create a book
///
/// The id is assigned by storage; any id in the payload is ignored.
async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(book): Json<Book>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let created = BookRepo::new(&state.pool).create(&book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /books/{id} - replace a book
///
/// Full replacement: every field is overwritten from the payload.
async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(book): Json<Book>,
) -> Result<Json<Book>, ApiError> {
    let updated = BookRepo::new(&state.pool).update(id, &book).await?;
    Ok(Json(updated))
}

/// DELETE /books/{id} - delete a book
async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    BookRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

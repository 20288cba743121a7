//! Book repository
//!
//! Single-row CRUD against the `book` table. There is no ordering
//! guarantee on listing and no conflict handling across concurrent
//! writers beyond SQLite's own defaults.

use sqlx::SqlitePool;

use crate::models::Book;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("book {id} not found")]
    NotFound { id: i64 },
}

/// Book repository
pub struct BookRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every book.
    ///
    /// No ORDER BY: rows come back in storage-native scan order, which
    /// callers must not rely on.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let books: Vec<Book> = sqlx::query_as("SELECT id, title, author, year FROM book")
            .fetch_all(&mut *conn)
            .await?;

        Ok(books)
    }

    /// Get a single book by id.
    pub async fn get(&self, id: i64) -> Result<Book, DbError> {
        let mut conn = self.pool.acquire().await?;

        let book: Book = sqlx::query_as("SELECT id, title, author, year FROM book WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(DbError::NotFound { id })?;

        Ok(book)
    }

    /// Insert a new book; storage assigns the id.
    ///
    /// Any id on `book` is ignored, never bound.
    pub async fn create(&self, book: &Book) -> Result<Book, DbError> {
        let mut conn = self.pool.acquire().await?;

        let created: Book = sqlx::query_as(
            r#"
            INSERT INTO book (title, author, year)
            VALUES (?, ?, ?)
            RETURNING id, title, author, year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year)
        .fetch_one(&mut *conn)
        .await?;

        Ok(created)
    }

    /// Overwrite title, author, and year of the book with `id`.
    ///
    /// Full replacement semantics; any id on `book` is ignored.
    pub async fn update(&self, id: i64, book: &Book) -> Result<Book, DbError> {
        let mut conn = self.pool.acquire().await?;

        let updated: Book = sqlx::query_as(
            r#"
            UPDATE book
            SET title = ?, author = ?, year = ?
            WHERE id = ?
            RETURNING id, title, author, year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(DbError::NotFound { id })?;

        Ok(updated)
    }

    /// Remove the book with `id` permanently. No tombstone is left.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM book WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::{create_pool, run_migrations};
    use tempfile::TempDir;

    async fn test_pool() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = create_pool(&dir.path().join("books.db"))
            .await
            .expect("pool creation failed");
        run_migrations(&pool).await.expect("migrations failed");
        (dir, pool)
    }

    fn draft(title: &str, author: &str, year: i32) -> Book {
        Book {
            id: None,
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    #[tokio::test]
    async fn create_assigns_ids() {
        let (_dir, pool) = test_pool().await;
        let repo = BookRepo::new(&pool);

        let first = repo.create(&draft("Dune", "Herbert", 1965)).await.unwrap();
        let second = repo
            .create(&draft("Hyperion", "Simmons", 1989))
            .await
            .unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn create_ignores_supplied_id() {
        let (_dir, pool) = test_pool().await;
        let repo = BookRepo::new(&pool);

        let mut book = draft("Dune", "Herbert", 1965);
        book.id = Some(999);
        let created = repo.create(&book).await.unwrap();

        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn get_returns_created_fields() {
        let (_dir, pool) = test_pool().await;
        let repo = BookRepo::new(&pool);

        let created = repo.create(&draft("Dune", "Herbert", 1965)).await.unwrap();
        let fetched = repo.get(created.id.unwrap()).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_dir, pool) = test_pool().await;

        let err = BookRepo::new(&pool).get(7).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let (_dir, pool) = test_pool().await;
        let repo = BookRepo::new(&pool);

        let created = repo.create(&draft("Dune", "Herbert", 1965)).await.unwrap();
        let id = created.id.unwrap();

        let updated = repo
            .update(id, &draft("Dune Messiah", "Frank Herbert", 1969))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.author, "Frank Herbert");
        assert_eq!(updated.year, 1969);
        assert_eq!(repo.get(id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_ignores_supplied_id() {
        let (_dir, pool) = test_pool().await;
        let repo = BookRepo::new(&pool);

        let created = repo.create(&draft("Dune", "Herbert", 1965)).await.unwrap();
        let id = created.id.unwrap();

        let mut replacement = draft("Dune Messiah", "Frank Herbert", 1969);
        replacement.id = Some(999);
        let updated = repo.update(id, &replacement).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.title, "Dune Messiah");
        assert!(matches!(
            repo.get(999).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let (_dir, pool) = test_pool().await;

        let err = BookRepo::new(&pool)
            .update(7, &draft("Dune", "Herbert", 1965))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let (_dir, pool) = test_pool().await;
        let repo = BookRepo::new(&pool);

        let created = repo.create(&draft("Dune", "Herbert", 1965)).await.unwrap();
        let id = created.id.unwrap();

        repo.delete(id).await.unwrap();

        assert!(matches!(
            repo.get(id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.delete(id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn list_reflects_surviving_set() {
        let (_dir, pool) = test_pool().await;
        let repo = BookRepo::new(&pool);

        let a = repo.create(&draft("Dune", "Herbert", 1965)).await.unwrap();
        let b = repo
            .create(&draft("Hyperion", "Simmons", 1989))
            .await
            .unwrap();
        let c = repo
            .create(&draft("Neuromancer", "Gibson", 1984))
            .await
            .unwrap();

        repo.delete(b.id.unwrap()).await.unwrap();

        let mut titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();
        titles.sort();

        assert_eq!(titles, vec!["Dune".to_string(), "Neuromancer".to_string()]);
        assert_eq!(repo.get(a.id.unwrap()).await.unwrap(), a);
        assert_eq!(repo.get(c.id.unwrap()).await.unwrap(), c);
    }
}

//! PostgreSQL implementation of author repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::domain::validation::ValidationError;
use crate::error::AppError;
use crate::utils::db_error::{AUTHORS_NAME_KEY, is_unique_violation_on};

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    phone_number: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author::new(r.id, r.name, r.phone_number, r.created_at, r.updated_at)
    }
}

/// Translates a write error, reporting a lost race on the name constraint as
/// a duplicate name.
fn map_write_error(e: sqlx::Error, name: &str) -> AppError {
    if is_unique_violation_on(&e, AUTHORS_NAME_KEY) {
        return ValidationError::NameTaken {
            name: name.to_string(),
        }
        .into();
    }
    e.into()
}

/// PostgreSQL repository for authors.
///
/// Name uniqueness is backed by the `authors_name_key` constraint, so two
/// concurrent writers cannot both commit the same name.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (name, phone_number)
            VALUES ($1, $2)
            RETURNING id, name, phone_number, created_at, updated_at
            "#,
        )
        .bind(&new_author.name)
        .bind(&new_author.phone_number)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, &new_author.name))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, phone_number, created_at, updated_at
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, phone_number, created_at, updated_at
            FROM authors
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, phone_number, created_at, updated_at
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Author, AppError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            UPDATE authors SET
                name         = COALESCE($2::TEXT, name),
                phone_number = COALESCE($3::TEXT, phone_number),
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, name, phone_number, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.phone_number.as_deref())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_write_error(e, patch.name.as_deref().unwrap_or_default()))?;

        row.map(Author::from)
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))
    }
}

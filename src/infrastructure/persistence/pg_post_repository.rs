//! PostgreSQL implementation of post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Category, NewPost, Post, PostFilter, PostPatch};
use crate::domain::repositories::PostRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    summary: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = AppError;

    fn try_from(r: PostRow) -> Result<Self, Self::Error> {
        let category: Category = r.category.parse().map_err(|_| {
            AppError::internal(
                "Stored post has an unknown category",
                json!({ "id": r.id, "category": r.category }),
            )
        })?;

        Ok(Post::new(
            r.id,
            r.title,
            r.content,
            category,
            r.summary,
            r.created_at,
            r.updated_at,
        ))
    }
}

/// PostgreSQL repository for posts.
///
/// The table's CHECK constraints mirror the category and content rules, so
/// rows that bypass the services still cannot hold invalid values.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, category, summary)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, category, summary, created_at, updated_at
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(&new_post.category)
        .bind(new_post.summary.as_deref())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, category, summary, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, category, summary, created_at, updated_at
            FROM posts
            WHERE ($1::TEXT IS NULL OR category = $1)
            ORDER BY id
            "#,
        )
        .bind(filter.category.map(|c| c.as_str()))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError> {
        let update_summary = patch.summary.is_some();
        let new_summary = patch.summary.flatten();

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts SET
                title      = COALESCE($2::TEXT, title),
                content    = COALESCE($3::TEXT, content),
                category   = COALESCE($4::TEXT, category),
                summary    = CASE WHEN $5 THEN $6::TEXT ELSE summary END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, content, category, summary, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.category)
        .bind(update_summary)
        .bind(new_summary)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Post::try_from)
            .transpose()?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))
    }
}

//! Process-local repository implementations.
//!
//! Useful for tests and tooling that should not need PostgreSQL. Records live
//! in a `BTreeMap` behind a `tokio::sync::RwLock`; each write holds the lock
//! across its constraint check and insert, which gives the same guarantees as
//! the database constraints.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{
    Author, AuthorPatch, Category, NewAuthor, NewPost, Post, PostFilter, PostPatch,
};
use crate::domain::repositories::{AuthorRepository, PostRepository};
use crate::domain::validation::ValidationError;
use crate::error::AppError;

struct Table<T> {
    last_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory author storage with a unique name constraint.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    table: RwLock<Table<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        debug!("Using in-memory author storage");
        Self::default()
    }
}

fn ensure_name_free(
    table: &Table<Author>,
    name: &str,
    current_id: Option<i64>,
) -> Result<(), ValidationError> {
    let taken = table
        .rows
        .values()
        .any(|a| a.name == name && Some(a.id) != current_id);

    if taken {
        return Err(ValidationError::NameTaken {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let mut table = self.table.write().await;
        ensure_name_free(&table, &new_author.name, None)?;

        let id = table.next_id();
        let author = Author::new(
            id,
            new_author.name,
            new_author.phone_number,
            Utc::now(),
            None,
        );
        table.rows.insert(id, author.clone());

        Ok(author)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|a| a.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Author, AppError> {
        let mut table = self.table.write().await;
        if let Some(name) = &patch.name {
            ensure_name_free(&table, name, Some(id))?;
        }

        let author = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))?;

        if let Some(name) = patch.name {
            author.name = name;
        }
        if let Some(phone_number) = patch.phone_number {
            author.phone_number = phone_number;
        }
        author.updated_at = Some(Utc::now());

        Ok(author.clone())
    }
}

/// In-memory post storage.
///
/// Categories are parsed on write, matching the database CHECK constraint.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        debug!("Using in-memory post storage");
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let category: Category = new_post.category.parse()?;

        let mut table = self.table.write().await;
        let id = table.next_id();
        let post = Post::new(
            id,
            new_post.title,
            new_post.content,
            category,
            new_post.summary,
            Utc::now(),
            None,
        );
        table.rows.insert(id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError> {
        let category = patch
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?;

        let mut table = self.table.write().await;
        let post = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(category) = category {
            post.category = category;
        }
        if let Some(summary) = patch.summary {
            post.summary = summary;
        }
        post.updated_at = Some(Utc::now());

        Ok(post.clone())
    }
}

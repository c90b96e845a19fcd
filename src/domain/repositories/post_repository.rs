//! Repository trait for post storage.

use crate::domain::entities::{NewPost, Post, PostFilter, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryPostRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Stores a new post and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with `InvalidCategory` if the stored
    /// category cannot be represented.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists posts matching the filter, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, AppError>;

    /// Applies a partial update and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, AppError>;
}

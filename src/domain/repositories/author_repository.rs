//! Repository trait for author storage.

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing authors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryAuthorRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Stores a new author and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with `NameTaken` if the store already
    /// holds an author with the same name.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Finds an author by exact (case-sensitive) name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, AppError>;

    /// Lists all authors ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Author>, AppError>;

    /// Applies a partial update and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Validation`] with `NameTaken` if the new name is
    /// already used by another author.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Author, AppError>;
}

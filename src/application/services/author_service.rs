//! Author creation and update service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::domain::validation::{validate_name, validate_phone};
use crate::error::AppError;

/// Service for creating and modifying authors.
///
/// Every write validates the name (presence and uniqueness) and phone number
/// before the repository is touched, so a rejected write leaves storage
/// unchanged.
pub struct AuthorService<R: AuthorRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: AuthorRepository + ?Sized> AuthorService<R> {
    /// Creates a new author service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an author.
    ///
    /// # Validation
    ///
    /// - Name must not be blank and must not belong to any stored author
    /// - Phone number must be exactly 10 digits
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any rule fails.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_author(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        self.validate_new(&new_author)
            .await
            .inspect_err(|e| warn!(error = %e, name = %new_author.name, "Author rejected"))?;

        let author = self.repository.create(new_author).await?;
        info!(author_id = author.id, "Author created");

        Ok(author)
    }

    /// Applies a partial update to an existing author.
    ///
    /// Only the supplied fields are validated and written. Keeping the
    /// author's own current name is not a uniqueness violation. An empty
    /// patch returns the stored author untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Validation`] if any supplied field fails a rule.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_author(&self, id: i64, patch: AuthorPatch) -> Result<Author, AppError> {
        let existing = self.get_author(id).await?;

        if patch.is_empty() {
            return Ok(existing);
        }

        self.validate_patch(existing.id, &patch)
            .await
            .inspect_err(|e| warn!(error = %e, author_id = id, "Author update rejected"))?;

        let author = self.repository.update(id, patch).await?;
        info!(author_id = author.id, "Author updated");

        Ok(author)
    }

    /// Retrieves an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no author has that id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_author(&self, id: i64) -> Result<Author, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))
    }

    /// Retrieves an author by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no author has that name.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_author_by_name(&self, name: &str) -> Result<Author, AppError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "name": name })))
    }

    /// Lists all authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        self.repository.list().await
    }

    async fn validate_new(&self, new_author: &NewAuthor) -> Result<(), AppError> {
        validate_name(self.repository.as_ref(), &new_author.name, None).await?;
        validate_phone(&new_author.phone_number)?;
        Ok(())
    }

    async fn validate_patch(&self, id: i64, patch: &AuthorPatch) -> Result<(), AppError> {
        if let Some(name) = &patch.name {
            validate_name(self.repository.as_ref(), name, Some(id)).await?;
        }
        if let Some(phone_number) = &patch.phone_number {
            validate_phone(phone_number)?;
        }
        Ok(())
    }
}

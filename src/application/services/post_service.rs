//! Post creation, update and listing service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{NewPost, Post, PostFilter, PostPatch};
use crate::domain::repositories::PostRepository;
use crate::domain::validation::{
    ValidationError, validate_category, validate_content, validate_summary, validate_title,
};
use crate::error::AppError;

/// Service for creating, modifying and listing posts.
///
/// Handles the full set of post rules before anything is stored:
/// - Clickbait titles
/// - Minimum content length
/// - Maximum summary length
/// - Exact category names
pub struct PostService<R: PostRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: PostRepository + ?Sized> PostService<R> {
    /// Creates a new post service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for the first field that breaks a rule,
    /// checked in the order title, content, summary, category.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, AppError> {
        validate_new(&new_post)
            .inspect_err(|e| warn!(error = %e, field = e.field(), "Post rejected"))?;

        let post = self.repository.create(new_post).await?;
        info!(post_id = post.id, category = %post.category, "Post created");

        Ok(post)
    }

    /// Applies a partial update to an existing post.
    ///
    /// Only the supplied fields are validated and written. An empty patch
    /// returns the stored post untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Validation`] if any supplied field fails a rule.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_post(&self, id: i64, patch: PostPatch) -> Result<Post, AppError> {
        let existing = self.get_post(id).await?;

        if patch.is_empty() {
            return Ok(existing);
        }

        validate_patch(&patch).inspect_err(
            |e| warn!(error = %e, field = e.field(), post_id = id, "Post update rejected"),
        )?;

        let post = self.repository.update(id, patch).await?;
        info!(post_id = post.id, "Post updated");

        Ok(post)
    }

    /// Retrieves a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has that id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_post(&self, id: i64) -> Result<Post, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({ "id": id })))
    }

    /// Lists posts, optionally restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, AppError> {
        self.repository.list(filter).await
    }
}

fn validate_new(new_post: &NewPost) -> Result<(), ValidationError> {
    validate_title(&new_post.title)?;
    validate_content(&new_post.content)?;
    validate_summary(new_post.summary.as_deref())?;
    validate_category(&new_post.category)?;
    Ok(())
}

fn validate_patch(patch: &PostPatch) -> Result<(), ValidationError> {
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(content) = &patch.content {
        validate_content(content)?;
    }
    if let Some(summary) = &patch.summary {
        validate_summary(summary.as_deref())?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;
    use crate::domain::repositories::MockPostRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn content(len: usize) -> String {
        "c".repeat(len)
    }

    fn new_post(title: &str, category: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content(300),
            category: category.to_string(),
            summary: None,
        }
    }

    fn create_test_post(id: i64, category: Category) -> Post {
        Post::new(
            id,
            "Top 10 Secrets".to_string(),
            content(300),
            category,
            None,
            Utc::now(),
            None,
        )
    }

    #[tokio::test]
    async fn test_create_post_success() {
        let mut mock_repo = MockPostRepository::new();

        let created = create_test_post(1, Category::Fiction);
        mock_repo
            .expect_create()
            .withf(|p| p.title == "Top 10 Secrets" && p.category == "Fiction")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = PostService::new(Arc::new(mock_repo));

        let post = service
            .create_post(new_post("Top 10 Secrets", "Fiction"))
            .await
            .unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.category, Category::Fiction);
    }

    #[tokio::test]
    async fn test_create_post_rejections_never_reach_repository() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo.expect_create().times(0);
        let service = PostService::new(Arc::new(mock_repo));

        let boring = new_post("My Boring Day", "Fiction");
        let err = service.create_post(boring).await.unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::TitleNotClickbait));

        let mut short = new_post("Top Secrets", "Fiction");
        short.content = content(249);
        let err = service.create_post(short).await.unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::ContentTooShort { actual: 249, .. })
        ));

        let mut long_summary = new_post("Top Secrets", "Fiction");
        long_summary.summary = Some("s".repeat(251));
        let err = service.create_post(long_summary).await.unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::SummaryTooLong { actual: 251, .. })
        ));

        let drama = new_post("Top Secrets", "Drama");
        let err = service.create_post(drama).await.unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::InvalidCategory { value }) if value == "Drama"
        ));
    }

    #[tokio::test]
    async fn test_update_post_clear_summary() {
        let mut mock_repo = MockPostRepository::new();

        let existing = create_test_post(5, Category::NonFiction);
        mock_repo
            .expect_find_by_id()
            .with(eq(5))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        let mut updated = create_test_post(5, Category::NonFiction);
        updated.updated_at = Some(Utc::now());
        mock_repo
            .expect_update()
            .withf(|id, patch| *id == 5 && patch.summary == Some(None))
            .times(1)
            .returning(move |_, _| Ok(updated.clone()));

        let service = PostService::new(Arc::new(mock_repo));

        let patch = PostPatch {
            summary: Some(None),
            ..Default::default()
        };
        let post = service.update_post(5, patch).await.unwrap();

        assert!(post.summary.is_none());
        assert!(post.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_post_invalid_category() {
        let mut mock_repo = MockPostRepository::new();

        let existing = create_test_post(5, Category::Fiction);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_update().times(0);

        let service = PostService::new(Arc::new(mock_repo));

        let patch = PostPatch {
            title: Some("Guess What".to_string()),
            category: Some("fiction".to_string()),
            ..Default::default()
        };
        let err = service.update_post(5, patch).await.unwrap_err();

        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::InvalidCategory { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_post_not_found() {
        let mut mock_repo = MockPostRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(mock_repo));

        let patch = PostPatch {
            title: Some("Top Picks".to_string()),
            ..Default::default()
        };
        let err = service.update_post(404, patch).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_posts_passes_filter() {
        let mut mock_repo = MockPostRepository::new();

        let posts = vec![create_test_post(1, Category::Fiction)];
        mock_repo
            .expect_list()
            .with(eq(PostFilter::category(Category::Fiction)))
            .times(1)
            .returning(move |_| Ok(posts.clone()));

        let service = PostService::new(Arc::new(mock_repo));

        let list = service
            .list_posts(PostFilter::category(Category::Fiction))
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
    }
}

#![allow(dead_code)]

use blog_core::application::services::{AuthorService, PostService};
use blog_core::domain::entities::NewPost;
use blog_core::infrastructure::persistence::{InMemoryAuthorRepository, InMemoryPostRepository};
use std::sync::Arc;

pub fn author_service() -> AuthorService<InMemoryAuthorRepository> {
    AuthorService::new(Arc::new(InMemoryAuthorRepository::new()))
}

pub fn post_service() -> PostService<InMemoryPostRepository> {
    PostService::new(Arc::new(InMemoryPostRepository::new()))
}

/// Content of exactly `len` characters.
pub fn content_of(len: usize) -> String {
    "lorem ipsum ".repeat(len / 12 + 1).chars().take(len).collect()
}

pub fn valid_post(title: &str) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: content_of(300),
        category: "Fiction".to_string(),
        summary: Some("A short teaser".to_string()),
    }
}

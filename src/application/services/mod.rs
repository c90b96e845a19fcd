//! Business logic services for the application layer.

pub mod author_service;
pub mod post_service;

pub use author_service::AuthorService;
pub use post_service::PostService;

//! Application layer services implementing the write rules.
//!
//! Services are the only place records are created or modified. Each write
//! runs the domain validators first and reaches the repository only when all
//! of them pass.
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Author creation, updates and lookup
//! - [`services::post_service::PostService`] - Post creation, updates and listing

pub mod services;

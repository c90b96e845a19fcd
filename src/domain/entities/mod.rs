//! Core domain entities representing the blog's data model.
//!
//! Entities are plain data structures; the rules that guard their fields live
//! in [`crate::domain::validation`] and are applied by the services before
//! anything reaches a repository.
//!
//! # Entity Types
//!
//! - [`Author`] - A person who writes posts
//! - [`Post`] - A blog post with a [`Category`]
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! - `NewAuthor`, `NewPost` - For creating new records
//! - `AuthorPatch`, `PostPatch` - For partial updates

pub mod author;
pub mod post;

pub use author::{Author, AuthorPatch, NewAuthor};
pub use post::{Category, NewPost, Post, PostFilter, PostPatch};

//! Repository trait definitions for the domain layer.
//!
//! These traits are the contract with the persistence collaborator: create,
//! read and update keyed by identity, plus the name lookup the author
//! uniqueness rule depends on. Repositories store what they are given;
//! validation happens in the services before a repository is called.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AuthorRepository`] - Author storage and name lookup
//! - [`PostRepository`] - Post storage and category filtering
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod author_repository;
pub mod post_repository;

pub use author_repository::AuthorRepository;
pub use post_repository::PostRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;

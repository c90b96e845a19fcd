//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx with bound parameters; the in-memory
//! repositories keep records in process and apply the same uniqueness and
//! category constraints as the database schema.
//!
//! # Repositories
//!
//! - [`PgAuthorRepository`] - Author storage in PostgreSQL
//! - [`PgPostRepository`] - Post storage in PostgreSQL
//! - [`InMemoryAuthorRepository`] - Process-local author storage
//! - [`InMemoryPostRepository`] - Process-local post storage
//!
//! [`pool`] builds the connection pool and applies the baseline schema.

pub mod memory;
pub mod pg_author_repository;
pub mod pg_post_repository;
pub mod pool;

pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};
pub use pg_author_repository::PgAuthorRepository;
pub use pg_post_repository::PgPostRepository;
pub use pool::{MIGRATOR, connect};

//! Domain layer containing business entities and rules.
//!
//! This module defines the blog's records, the field validators that guard
//! them, and the repository interfaces used to persist them. It has no
//! dependency on a concrete database.
//!
//! # Architecture
//!
//! - [`entities`] - `Author` and `Post` records plus their input types
//! - [`validation`] - Field validators and [`validation::ValidationError`]
//! - [`repositories`] - Data access trait definitions
//!
//! # Write Flow
//!
//! 1. Caller hands a `NewAuthor`/`NewPost` or a patch to a service
//!    (see [`crate::application::services`])
//! 2. The service runs every relevant validator; the name uniqueness check
//!    queries the injected [`repositories::AuthorRepository`]
//! 3. Only when all validators pass is the repository asked to commit

pub mod entities;
pub mod repositories;
pub mod validation;

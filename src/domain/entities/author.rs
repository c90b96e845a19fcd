//! Author entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted author.
///
/// `name` is unique across all authors. `updated_at` stays `None` until the
/// record is modified for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Creates a new Author instance.
    pub fn new(
        id: i64,
        name: String,
        phone_number: String,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}

/// Input data for creating a new author.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub phone_number: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Partial update for an existing author.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl AuthorPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}

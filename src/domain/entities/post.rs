//! Post entity and its category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

/// The two categories a post can belong to.
///
/// Parsing is exact: `"fiction"` or `"Non-fiction"` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    /// Returns the stored string form of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

/// A persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Creates a new Post instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        content: String,
        category: Category,
        summary: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            category,
            summary,
            created_at,
            updated_at,
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, category={})",
            self.id, self.title, self.category
        )
    }
}

/// Input data for creating a new post.
///
/// `category` holds the raw submitted value; it is checked by
/// [`crate::domain::validation::validate_category`] before the post is stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Partial update for an existing post.
///
/// `None` fields are left unchanged.
/// `summary: Some(None)` clears the summary; `Some(Some(s))` sets it.
/// In JSON an absent `summary` key leaves it unchanged and `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub summary: Option<Option<String>>,
}

impl PostPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.summary.is_none()
    }
}

/// Filter for listing posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub category: Option<Category>,
}

impl PostFilter {
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
        }
    }

    /// Returns true if the post passes the filter.
    pub fn matches(&self, post: &Post) -> bool {
        self.category.is_none_or(|c| c == post.category)
    }
}

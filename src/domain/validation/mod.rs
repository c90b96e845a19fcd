//! Field validators for authors and posts.
//!
//! Each validator checks one field's proposed value and returns a
//! [`ValidationError`] instead of coercing bad input. Services call them
//! explicitly before anything is committed.
//!
//! - [`author`] - Name presence/uniqueness and phone number format
//! - [`post`] - Clickbait titles, content and summary lengths, category

pub mod author;
pub mod post;

pub use author::{validate_name, validate_name_present, validate_phone};
pub use post::{
    CLICKBAIT_PHRASES, MAX_SUMMARY_CHARS, MIN_CONTENT_CHARS, validate_category, validate_content,
    validate_summary, validate_title,
};

use serde_json::{Value, json};
use thiserror::Error;

/// A rejected field value.
///
/// Messages are meant for end users; [`ValidationError::details`] adds the
/// field name and any limits for programmatic callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Author name is required")]
    NameRequired,

    #[error("Author name must be unique")]
    NameTaken { name: String },

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhoneNumber,

    #[error("Post title is required")]
    TitleRequired,

    #[error("Title must be clickbait-y!")]
    TitleNotClickbait,

    #[error("Content must be at least {min} characters long")]
    ContentTooShort { min: u64, actual: u64 },

    #[error("Summary must be at most {max} characters long")]
    SummaryTooLong { max: u64, actual: u64 },

    #[error("Category must be either 'Fiction' or 'Non-Fiction'")]
    InvalidCategory { value: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired | ValidationError::NameTaken { .. } => "name",
            ValidationError::InvalidPhoneNumber => "phone_number",
            ValidationError::TitleRequired | ValidationError::TitleNotClickbait => "title",
            ValidationError::ContentTooShort { .. } => "content",
            ValidationError::SummaryTooLong { .. } => "summary",
            ValidationError::InvalidCategory { .. } => "category",
        }
    }

    pub fn details(&self) -> Value {
        let field = self.field();
        match self {
            ValidationError::NameTaken { name } => json!({ "field": field, "name": name }),
            ValidationError::InvalidPhoneNumber => {
                json!({ "field": field, "pattern": "^[0-9]{10}$" })
            }
            ValidationError::TitleNotClickbait => {
                json!({ "field": field, "phrases": CLICKBAIT_PHRASES })
            }
            ValidationError::ContentTooShort { min, actual } => {
                json!({ "field": field, "min": min, "actual": actual })
            }
            ValidationError::SummaryTooLong { max, actual } => {
                json!({ "field": field, "max": max, "actual": actual })
            }
            ValidationError::InvalidCategory { value } => {
                json!({ "field": field, "value": value, "allowed": ["Fiction", "Non-Fiction"] })
            }
            ValidationError::NameRequired | ValidationError::TitleRequired => {
                json!({ "field": field })
            }
        }
    }
}

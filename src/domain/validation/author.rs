//! Author field validators.

use regex::Regex;
use std::sync::LazyLock;

use super::ValidationError;
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

/// Exactly ten ASCII digits.
static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Rejects empty and whitespace-only names.
///
/// # Errors
///
/// Returns [`ValidationError::NameRequired`].
pub fn validate_name_present(candidate: &str) -> Result<(), ValidationError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// Validates an author name, including uniqueness across all stored authors.
///
/// `current_id` is the id of the author being saved, if it already exists.
/// A stored author with that id and the same name does not count as a
/// duplicate, so re-saving an unchanged name succeeds. Names are compared
/// exactly (case-sensitive).
///
/// # Errors
///
/// Returns [`ValidationError::NameRequired`] for blank names and
/// [`ValidationError::NameTaken`] when a different author already uses the
/// name. Lookup failures are propagated from the repository.
pub async fn validate_name<R>(
    authors: &R,
    candidate: &str,
    current_id: Option<i64>,
) -> Result<(), AppError>
where
    R: AuthorRepository + ?Sized,
{
    validate_name_present(candidate)?;

    if let Some(existing) = authors.find_by_name(candidate).await?
        && Some(existing.id) != current_id
    {
        return Err(ValidationError::NameTaken {
            name: candidate.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Accepts only phone numbers made of exactly 10 ASCII digits.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhoneNumber`].
pub fn validate_phone(candidate: &str) -> Result<(), ValidationError> {
    if !PHONE_NUMBER_REGEX.is_match(candidate) {
        return Err(ValidationError::InvalidPhoneNumber);
    }
    Ok(())
}

//! Post field validators.

use validator::ValidateLength;

use super::ValidationError;
use crate::domain::entities::Category;

/// Phrases a title must contain, compared case-insensitively.
pub const CLICKBAIT_PHRASES: [&str; 4] = ["won't believe", "secret", "top", "guess"];

/// Minimum content length in characters.
pub const MIN_CONTENT_CHARS: u64 = 250;

/// Maximum summary length in characters.
pub const MAX_SUMMARY_CHARS: u64 = 250;

/// Requires a non-blank title containing at least one clickbait phrase.
///
/// # Errors
///
/// Returns [`ValidationError::TitleRequired`] for blank titles and
/// [`ValidationError::TitleNotClickbait`] when no phrase matches.
pub fn validate_title(candidate: &str) -> Result<(), ValidationError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }

    let lowered = candidate.to_lowercase();
    if !CLICKBAIT_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        return Err(ValidationError::TitleNotClickbait);
    }

    Ok(())
}

/// Requires at least [`MIN_CONTENT_CHARS`] characters of content.
///
/// # Errors
///
/// Returns [`ValidationError::ContentTooShort`].
pub fn validate_content(candidate: &str) -> Result<(), ValidationError> {
    if !candidate.validate_length(Some(MIN_CONTENT_CHARS), None, None) {
        return Err(ValidationError::ContentTooShort {
            min: MIN_CONTENT_CHARS,
            actual: char_count(candidate),
        });
    }
    Ok(())
}

/// Allows a missing summary; a present one is capped at [`MAX_SUMMARY_CHARS`].
///
/// # Errors
///
/// Returns [`ValidationError::SummaryTooLong`].
pub fn validate_summary(candidate: Option<&str>) -> Result<(), ValidationError> {
    let Some(summary) = candidate else {
        return Ok(());
    };

    if !summary.validate_length(None, Some(MAX_SUMMARY_CHARS), None) {
        return Err(ValidationError::SummaryTooLong {
            max: MAX_SUMMARY_CHARS,
            actual: char_count(summary),
        });
    }
    Ok(())
}

/// Parses the category, accepting only the exact strings `Fiction` and
/// `Non-Fiction`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCategory`].
pub fn validate_category(candidate: &str) -> Result<Category, ValidationError> {
    candidate.parse()
}

fn char_count(s: &str) -> u64 {
    s.chars().count() as u64
}

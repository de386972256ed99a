use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum title length, in characters, after trimming.
pub const TITLE_MAX_CHARS: usize = 200;

/// Storage-assigned post identifier.
pub type PostId = i32;

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Validated title and content, ready to be written.
///
/// Both fields are trimmed and non-empty. The title length limit is checked
/// separately by [`PostDraft::within_title_limit`] because only creation
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// Trim both fields and reject the draft if either is missing or blank.
    /// A body carrying neither field is reported as having no data at all.
    pub fn parse(title: Option<&str>, content: Option<&str>) -> Result<Self, ValidationError> {
        if title.is_none() && content.is_none() {
            return Err(ValidationError::NoData);
        }

        let title = title.unwrap_or_default().trim();
        let content = content.unwrap_or_default().trim();

        if title.is_empty() || content.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    /// Reject titles longer than [`TITLE_MAX_CHARS`] characters.
    pub fn within_title_limit(self) -> Result<Self, ValidationError> {
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong);
        }
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields() {
        let draft = PostDraft::parse(Some("  Hello  "), Some("\n body \t")).unwrap();
        assert_eq!(draft.title(), "Hello");
        assert_eq!(draft.content(), "body");
    }

    #[test]
    fn test_parse_rejects_blank_or_missing() {
        assert_eq!(
            PostDraft::parse(Some("   "), Some("body")),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            PostDraft::parse(Some("Title"), None),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            PostDraft::parse(None, Some("  ")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_parse_without_any_field_is_no_data() {
        assert_eq!(PostDraft::parse(None, None), Err(ValidationError::NoData));
    }

    #[test]
    fn test_title_limit() {
        let exact = "a".repeat(TITLE_MAX_CHARS);
        assert!(
            PostDraft::parse(Some(&exact), Some("body"))
                .unwrap()
                .within_title_limit()
                .is_ok()
        );

        let long = "a".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(
            PostDraft::parse(Some(&long), Some("body"))
                .unwrap()
                .within_title_limit(),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_title_limit_counts_characters_not_bytes() {
        // 200 two-byte characters is still within the limit.
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(
            PostDraft::parse(Some(&title), Some("body"))
                .unwrap()
                .within_title_limit()
                .is_ok()
        );
    }

    #[test]
    fn test_title_limit_applies_after_trimming() {
        let padded = format!("  {}  ", "a".repeat(TITLE_MAX_CHARS));
        assert!(
            PostDraft::parse(Some(&padded), Some("body"))
                .unwrap()
                .within_title_limit()
                .is_ok()
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::NoData.to_string(), "No data provided");
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Title and content are required"
        );
        assert_eq!(
            ValidationError::TitleTooLong.to_string(),
            "Title must be <= 200 characters"
        );
    }
}

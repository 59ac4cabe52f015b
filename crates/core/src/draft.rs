//! Edit buffer and submission validation.
//!
//! The edit buffer is the in-progress form state held by an edit surface.
//! Submission for review checks the buffer field by field, in a fixed
//! order, and stops at the first violation so that the user always sees
//! one stable, field-specific message. Validation runs entirely client
//! side, before any diff is built or network call issued.

use crate::error::CoreError;
use crate::types::DbId;

/// User-visible message when the title is missing.
pub const MSG_TITLE_REQUIRED: &str = "Le titre est obligatoire";

/// User-visible message when no category is selected.
pub const MSG_CATEGORY_REQUIRED: &str = "La catégorie est obligatoire";

/// User-visible message when the content is missing.
pub const MSG_CONTENT_REQUIRED: &str = "Le contenu est obligatoire";

/// User-visible message when no tag is selected.
pub const MSG_TAG_REQUIRED: &str = "Sélectionnez au moins un tag";

/// In-progress form state for one article edit surface.
///
/// `category_id` is `None` while the user has not picked a category yet;
/// a draft save is allowed in that state, a submission is not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    pub tag_ids: Vec<DbId>,
}

impl EditBuffer {
    /// Check the submission requirements in display order and return the
    /// first violation, if any.
    ///
    /// Order: title, category, content, tags. Whitespace-only text counts
    /// as empty.
    pub fn first_violation(&self) -> Option<CoreError> {
        if self.title.trim().is_empty() {
            return Some(CoreError::Validation {
                field: "title",
                message: MSG_TITLE_REQUIRED.to_string(),
            });
        }
        if self.category_id.is_none() {
            return Some(CoreError::Validation {
                field: "categoryId",
                message: MSG_CATEGORY_REQUIRED.to_string(),
            });
        }
        if self.content.trim().is_empty() {
            return Some(CoreError::Validation {
                field: "content",
                message: MSG_CONTENT_REQUIRED.to_string(),
            });
        }
        if self.tag_ids.is_empty() {
            return Some(CoreError::Validation {
                field: "tagIds",
                message: MSG_TAG_REQUIRED.to_string(),
            });
        }
        None
    }

    /// Convenience wrapper returning `Err` on the first violation.
    pub fn validate_for_submission(&self) -> Result<(), CoreError> {
        match self.first_violation() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

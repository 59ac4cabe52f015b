//! Revision diff builder.
//!
//! Computes the minimal patch between the last server-known snapshot of an
//! article and the in-progress edit buffer. The patch carries only fields
//! whose value actually changed, plus the target status and a change
//! summary — every lifecycle save is status-carrying so the server records
//! an audit-trail entry even for a pure status move.

use crate::draft::EditBuffer;
use crate::status::ArticleStatus;
use crate::types::DbId;

/// The fields of an article that participate in diffing, captured when the
/// server copy was last received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSnapshot {
    pub title: String,
    pub content: String,
    pub category_id: DbId,
    pub tag_ids: Vec<DbId>,
    pub status: ArticleStatus,
}

/// Partial update payload for `PATCH /articles/:id`.
///
/// Optional fields are omitted from the wire body when `None`; `status`
/// and `change_summary` are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
    pub tag_ids: Option<Vec<DbId>>,
    pub status: ArticleStatus,
    pub change_summary: String,
}

impl ArticlePatch {
    /// Whether the patch carries anything beyond the status/summary pair.
    pub fn has_field_changes(&self) -> bool {
        self.title.is_some()
            || self.content.is_some()
            || self.category_id.is_some()
            || self.tag_ids.is_some()
    }
}

/// Result of a diff computation.
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    pub patch: ArticlePatch,
    /// True only when the patch contains nothing beyond an unchanged
    /// status and its summary. Used to short-circuit a draft re-save with
    /// literally no edits.
    pub is_noop: bool,
}

/// Compare two tag sets ignoring order.
fn same_tag_set(a: &[DbId], b: &[DbId]) -> bool {
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}

/// Build the minimal patch moving `original` towards `current` with the
/// requested target status.
///
/// With no `original` (new article) every field is included and the
/// outcome is never a no-op. Otherwise scalar fields are compared by value
/// and the tag set by sorted ids. A cleared category in the buffer is
/// treated as unchanged: the wire format has no way to unset a category on
/// a partial update.
pub fn build_patch(
    original: Option<&ArticleSnapshot>,
    current: &EditBuffer,
    target_status: ArticleStatus,
    change_summary: &str,
) -> DiffOutcome {
    let Some(original) = original else {
        return DiffOutcome {
            patch: ArticlePatch {
                title: Some(current.title.clone()),
                content: Some(current.content.clone()),
                category_id: current.category_id,
                tag_ids: Some(current.tag_ids.clone()),
                status: target_status,
                change_summary: change_summary.to_string(),
            },
            is_noop: false,
        };
    };

    let title = (current.title != original.title).then(|| current.title.clone());
    let content = (current.content != original.content).then(|| current.content.clone());
    let category_id = match current.category_id {
        Some(id) if id != original.category_id => Some(id),
        _ => None,
    };
    let tag_ids =
        (!same_tag_set(&current.tag_ids, &original.tag_ids)).then(|| current.tag_ids.clone());

    let patch = ArticlePatch {
        title,
        content,
        category_id,
        tag_ids,
        status: target_status,
        change_summary: change_summary.to_string(),
    };
    let is_noop = !patch.has_field_changes() && target_status == original.status;

    DiffOutcome { patch, is_noop }
}

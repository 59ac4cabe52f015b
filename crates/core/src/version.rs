//! Immutable version snapshots of an article.
//!
//! Versions are created server-side as a side effect of create/update and
//! of a revert (a revert appends a new version carrying the restored
//! content — history never shrinks). The client only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::ArticleStatus;
use crate::types::DbId;

/// One recorded version of an article (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleVersion {
    pub id: DbId,
    /// Monotonically increasing, starting at 1. The client renders
    /// whatever the server returns and does not validate gaps.
    pub version_number: i32,
    pub title: String,
    pub content: String,
    pub change_summary: String,
    pub created_at: DateTime<Utc>,
    pub author_id: DbId,
    /// Article status at the time the snapshot was taken.
    pub status: ArticleStatus,
}

impl ArticleVersion {
    /// Whether this version exposes the revert action.
    ///
    /// Only versions strictly older than the current (highest) version can
    /// be restored; the current version has nothing to revert to.
    pub fn is_revertible(&self, current_max: i32) -> bool {
        self.version_number < current_max
    }
}

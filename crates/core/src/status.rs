//! Article lifecycle status state machine.
//!
//! Statuses mirror the server's `articles.status` column. Only the
//! Draft↔Pending edge (plus re-entrant status-carrying saves on those two
//! states) is client-initiated; Published, Rejected and Archived are
//! reached by moderator actions outside this client and are terminal from
//! the client's point of view.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Being edited, visible only to its author.
    Draft,
    /// Submitted, waiting for a moderator decision.
    Pending,
    /// Accepted and publicly visible.
    Published,
    /// Refused by a moderator.
    Rejected,
    /// Withdrawn from publication.
    Archived,
}

impl ArticleStatus {
    /// String representation for display, logging, and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Published => "published",
            Self::Rejected => "rejected",
            Self::Archived => "archived",
        }
    }

    /// Whether this status is terminal from the client's perspective.
    ///
    /// Terminal statuses only change through moderator actions that this
    /// client never issues.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Published | Self::Rejected | Self::Archived)
    }

    /// Whether an article may be created directly in this status.
    pub fn is_valid_initial(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending)
    }

    /// Whether the client itself may request a transition `from` → `to`.
    ///
    /// Re-entrant saves (Draft→Draft, Pending→Pending) are allowed because
    /// a draft re-save or a content-only resubmission still stamps the
    /// status on the patch for the audit trail.
    pub fn is_client_transition(from: ArticleStatus, to: ArticleStatus) -> bool {
        matches!(
            (from, to),
            (Self::Draft, Self::Draft)
                | (Self::Draft, Self::Pending)
                | (Self::Pending, Self::Draft)
                | (Self::Pending, Self::Pending)
        )
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

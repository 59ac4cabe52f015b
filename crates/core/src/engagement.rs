//! Per-surface engagement state for like/bookmark toggles.
//!
//! Every rendering surface (card, modal, profile entry) owns its own copy,
//! seeded from the article payload when the surface mounts. The copies are
//! a transient projection of server truth: eventually consistent, never
//! guaranteed to agree across surfaces at a given instant.

use serde::{Deserialize, Serialize};

use crate::article::Article;

/// Which engagement flag a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementKind {
    Like,
    Bookmark,
}

/// Local like/bookmark projection for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementState {
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub likes_count: i64,
}

impl EngagementState {
    /// Seed the surface copy from a freshly received article payload.
    pub fn from_article(article: &Article) -> Self {
        Self {
            is_liked: article.is_liked,
            is_bookmarked: article.is_bookmarked,
            likes_count: article.likes_count,
        }
    }

    /// Apply the optimistic flip for `kind` and return the pre-toggle
    /// state so a failed confirmation can roll back.
    ///
    /// A like flip moves the counter by ±1 in the same direction as the
    /// flag; a bookmark flip touches only the flag.
    pub fn flip(&mut self, kind: EngagementKind) -> EngagementState {
        let before = *self;
        match kind {
            EngagementKind::Like => {
                self.is_liked = !self.is_liked;
                self.likes_count += if self.is_liked { 1 } else { -1 };
            }
            EngagementKind::Bookmark => {
                self.is_bookmarked = !self.is_bookmarked;
            }
        }
        before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> EngagementState {
        EngagementState {
            is_liked: false,
            is_bookmarked: false,
            likes_count: 10,
        }
    }

    #[test]
    fn like_flip_moves_flag_and_counter_together() {
        let mut s = state();
        let before = s.flip(EngagementKind::Like);

        assert!(s.is_liked);
        assert_eq!(s.likes_count, 11);
        assert_eq!(before, state());
    }

    #[test]
    fn unlike_flip_decrements_counter() {
        let mut s = EngagementState {
            is_liked: true,
            is_bookmarked: false,
            likes_count: 11,
        };
        s.flip(EngagementKind::Like);
        assert!(!s.is_liked);
        assert_eq!(s.likes_count, 10);
    }

    #[test]
    fn bookmark_flip_leaves_counter_alone() {
        let mut s = state();
        s.flip(EngagementKind::Bookmark);
        assert!(s.is_bookmarked);
        assert_eq!(s.likes_count, 10);
    }

    #[test]
    fn two_flips_return_to_the_original_state() {
        let mut s = state();
        s.flip(EngagementKind::Like);
        s.flip(EngagementKind::Like);
        assert_eq!(s, state());

        s.flip(EngagementKind::Bookmark);
        s.flip(EngagementKind::Bookmark);
        assert_eq!(s, state());
    }
}

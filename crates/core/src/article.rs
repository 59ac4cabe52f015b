//! Article entity as served by the remote API.
//!
//! The server owns the canonical copy. The client never merges into an
//! article incrementally: after any mutating call the whole cached copy is
//! replaced by the response (or by a fresh fetch).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diff::ArticleSnapshot;
use crate::status::ArticleStatus;
use crate::types::DbId;

/// Full article payload (camelCase on the wire).
///
/// `is_liked` / `is_bookmarked` reflect the requesting user and default to
/// `false` when the server omits them (e.g. anonymous listing endpoints).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: DbId,
    pub tag_ids: Vec<DbId>,
    pub status: ArticleStatus,
    pub author_id: DbId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views_count: i64,
    pub likes_count: i64,
    pub comments_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl Article {
    /// Capture the fields relevant to diffing as an immutable snapshot.
    pub fn snapshot(&self) -> ArticleSnapshot {
        ArticleSnapshot {
            title: self.title.clone(),
            content: self.content.clone(),
            category_id: self.category_id,
            tag_ids: self.tag_ids.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": 12,
            "title": "Les canaux en Rust",
            "content": "<p>Un tour des canaux mpsc.</p>",
            "categoryId": 3,
            "tagIds": [7, 2],
            "status": "draft",
            "authorId": 5,
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T11:30:00Z",
            "viewsCount": 40,
            "likesCount": 4,
            "commentsCount": 1
        })
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let article: Article = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(article.id, 12);
        assert_eq!(article.category_id, 3);
        assert_eq!(article.tag_ids, vec![7, 2]);
        assert_eq!(article.status, ArticleStatus::Draft);
        assert_eq!(article.likes_count, 4);
    }

    #[test]
    fn engagement_flags_default_to_false_when_absent() {
        let article: Article = serde_json::from_value(sample_json()).unwrap();
        assert!(!article.is_liked);
        assert!(!article.is_bookmarked);
    }

    #[test]
    fn payload_with_wrong_shape_is_rejected() {
        let mut json = sample_json();
        json["status"] = serde_json::json!("waiting");
        assert!(serde_json::from_value::<Article>(json).is_err());

        let mut json = sample_json();
        json.as_object_mut().unwrap().remove("title");
        assert!(serde_json::from_value::<Article>(json).is_err());
    }

    #[test]
    fn snapshot_copies_diffable_fields() {
        let article: Article = serde_json::from_value(sample_json()).unwrap();
        let snap = article.snapshot();
        assert_eq!(snap.title, article.title);
        assert_eq!(snap.content, article.content);
        assert_eq!(snap.category_id, article.category_id);
        assert_eq!(snap.tag_ids, article.tag_ids);
        assert_eq!(snap.status, article.status);
    }
}

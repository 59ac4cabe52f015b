//! Wire payload types for the article endpoints (camelCase JSON).

use serde::{Deserialize, Serialize};

use redac_core::diff::ArticlePatch;
use redac_core::draft::EditBuffer;
use redac_core::status::ArticleStatus;
use redac_core::types::DbId;

/// Body of `POST /articles`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    pub status: ArticleStatus,
    pub tag_ids: Vec<DbId>,
}

impl CreateArticleRequest {
    /// Build the full create payload from an edit buffer.
    pub fn from_buffer(buffer: &EditBuffer, status: ArticleStatus) -> Self {
        Self {
            title: buffer.title.clone(),
            content: buffer.content.clone(),
            category_id: buffer.category_id,
            status,
            tag_ids: buffer.tag_ids.clone(),
        }
    }
}

/// Body of `PATCH /articles/:id`.
///
/// Unchanged fields are omitted entirely; `status` and `changeSummary`
/// are always serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<DbId>>,
    pub status: ArticleStatus,
    pub change_summary: String,
}

impl From<&ArticlePatch> for UpdateArticleRequest {
    fn from(patch: &ArticlePatch) -> Self {
        Self {
            title: patch.title.clone(),
            content: patch.content.clone(),
            category_id: patch.category_id,
            tag_ids: patch.tag_ids.clone(),
            status: patch.status,
            change_summary: patch.change_summary.clone(),
        }
    }
}

/// Body of `POST /articles/:id/tags`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateTagsRequest {
    pub tag_ids: Vec<DbId>,
}

/// Response of `POST /articles/:id/like`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub is_liked: bool,
    pub likes_count: i64,
}

/// Response of `POST /articles/:id/bookmark`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub is_bookmarked: bool,
}

/// Error body shape used by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

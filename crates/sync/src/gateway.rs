//! Network seam between the synchronization layer and the REST client.
//!
//! [`ArticleGateway`] mirrors the eight article endpoints one-for-one.
//! Production code uses the blanket implementation for
//! [`ArticlesApi`]; tests inject in-process fakes with queued or
//! hand-resolvable responses.

use async_trait::async_trait;

use redac_client::payloads::{BookmarkResponse, CreateArticleRequest, LikeResponse};
use redac_client::{ApiError, ArticlesApi};
use redac_core::article::Article;
use redac_core::diff::ArticlePatch;
use redac_core::types::DbId;
use redac_core::version::ArticleVersion;

/// Async interface over the article endpoints.
#[async_trait]
pub trait ArticleGateway: Send + Sync {
    async fn fetch_article(&self, article_id: DbId) -> Result<Article, ApiError>;

    async fn create_article(&self, request: &CreateArticleRequest) -> Result<Article, ApiError>;

    async fn update_article(
        &self,
        article_id: DbId,
        patch: &ArticlePatch,
    ) -> Result<Article, ApiError>;

    async fn associate_tags(&self, article_id: DbId, tag_ids: &[DbId]) -> Result<(), ApiError>;

    async fn fetch_history(&self, article_id: DbId) -> Result<Vec<ArticleVersion>, ApiError>;

    async fn revert_to_version(
        &self,
        article_id: DbId,
        version_number: i32,
    ) -> Result<(), ApiError>;

    async fn toggle_like(&self, article_id: DbId) -> Result<LikeResponse, ApiError>;

    async fn toggle_bookmark(&self, article_id: DbId) -> Result<BookmarkResponse, ApiError>;
}

#[async_trait]
impl ArticleGateway for ArticlesApi {
    async fn fetch_article(&self, article_id: DbId) -> Result<Article, ApiError> {
        ArticlesApi::fetch_article(self, article_id).await
    }

    async fn create_article(&self, request: &CreateArticleRequest) -> Result<Article, ApiError> {
        ArticlesApi::create_article(self, request).await
    }

    async fn update_article(
        &self,
        article_id: DbId,
        patch: &ArticlePatch,
    ) -> Result<Article, ApiError> {
        ArticlesApi::update_article(self, article_id, patch).await
    }

    async fn associate_tags(&self, article_id: DbId, tag_ids: &[DbId]) -> Result<(), ApiError> {
        ArticlesApi::associate_tags(self, article_id, tag_ids).await
    }

    async fn fetch_history(&self, article_id: DbId) -> Result<Vec<ArticleVersion>, ApiError> {
        ArticlesApi::fetch_history(self, article_id).await
    }

    async fn revert_to_version(
        &self,
        article_id: DbId,
        version_number: i32,
    ) -> Result<(), ApiError> {
        ArticlesApi::revert_to_version(self, article_id, version_number).await
    }

    async fn toggle_like(&self, article_id: DbId) -> Result<LikeResponse, ApiError> {
        ArticlesApi::toggle_like(self, article_id).await
    }

    async fn toggle_bookmark(&self, article_id: DbId) -> Result<BookmarkResponse, ApiError> {
        ArticlesApi::toggle_bookmark(self, article_id).await
    }
}

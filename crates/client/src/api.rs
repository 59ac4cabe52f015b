//! Typed wrappers over the article REST endpoints.
//!
//! One [`ArticlesApi`] per session; the underlying [`reqwest::Client`] is
//! reused across calls for connection pooling. Timeout and cancellation
//! policy is whatever `reqwest` provides — this layer adds none of its
//! own, and it never retries.

use redac_core::article::Article;
use redac_core::diff::ArticlePatch;
use redac_core::types::DbId;
use redac_core::version::ArticleVersion;

use crate::error::ApiError;
use crate::payloads::{
    ApiMessage, AssociateTagsRequest, BookmarkResponse, CreateArticleRequest, LikeResponse,
    UpdateArticleRequest,
};
use crate::session::SessionContext;

/// HTTP client for the article endpoints of one API instance.
pub struct ArticlesApi {
    client: reqwest::Client,
    session: SessionContext,
}

impl ArticlesApi {
    /// Create a new API handle for the given session.
    pub fn new(session: SessionContext) -> Self {
        Self {
            client: reqwest::Client::new(),
            session,
        }
    }

    /// Create an API handle reusing an existing [`reqwest::Client`]
    /// (useful to share the connection pool with other API surfaces).
    pub fn with_client(client: reqwest::Client, session: SessionContext) -> Self {
        Self { client, session }
    }

    /// The session this handle authenticates with.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.session.base_url())
    }

    /// Fetch the full current article.
    ///
    /// `GET /articles/:id`
    pub async fn fetch_article(&self, article_id: DbId) -> Result<Article, ApiError> {
        tracing::debug!(article_id, "fetching article");
        let response = self
            .client
            .get(self.url(&format!("/articles/{article_id}")))
            .bearer_auth(self.session.token())
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Create an article with a full payload.
    ///
    /// `POST /articles`
    pub async fn create_article(
        &self,
        request: &CreateArticleRequest,
    ) -> Result<Article, ApiError> {
        tracing::info!(status = %request.status, "creating article");
        let response = self
            .client
            .post(self.url("/articles"))
            .bearer_auth(self.session.token())
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Apply a partial update computed by the diff builder.
    ///
    /// `PATCH /articles/:id`. No optimistic-concurrency token accompanies
    /// the call: two concurrent editors end in last-writer-wins.
    pub async fn update_article(
        &self,
        article_id: DbId,
        patch: &ArticlePatch,
    ) -> Result<Article, ApiError> {
        tracing::info!(
            article_id,
            status = %patch.status,
            has_field_changes = patch.has_field_changes(),
            "patching article"
        );
        let response = self
            .client
            .patch(self.url(&format!("/articles/{article_id}")))
            .bearer_auth(self.session.token())
            .json(&UpdateArticleRequest::from(patch))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Record the tag associations of an article.
    ///
    /// `POST /articles/:id/tags`
    pub async fn associate_tags(
        &self,
        article_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), ApiError> {
        tracing::debug!(article_id, tag_count = tag_ids.len(), "associating tags");
        let response = self
            .client
            .post(self.url(&format!("/articles/{article_id}/tags")))
            .bearer_auth(self.session.token())
            .json(&AssociateTagsRequest {
                tag_ids: tag_ids.to_vec(),
            })
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Fetch the ordered version history of an article.
    ///
    /// `GET /articles/:id/history`
    pub async fn fetch_history(&self, article_id: DbId) -> Result<Vec<ArticleVersion>, ApiError> {
        tracing::debug!(article_id, "fetching version history");
        let response = self
            .client
            .get(self.url(&format!("/articles/{article_id}/history")))
            .bearer_auth(self.session.token())
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Ask the server to restore an earlier version.
    ///
    /// `POST /articles/:id/revert/:versionNumber`. The response carries no
    /// body; the caller must reload the article and its history.
    pub async fn revert_to_version(
        &self,
        article_id: DbId,
        version_number: i32,
    ) -> Result<(), ApiError> {
        tracing::info!(article_id, version_number, "reverting article");
        let response = self
            .client
            .post(self.url(&format!(
                "/articles/{article_id}/revert/{version_number}"
            )))
            .bearer_auth(self.session.token())
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Toggle the like flag for the current user.
    ///
    /// `POST /articles/:id/like`
    pub async fn toggle_like(&self, article_id: DbId) -> Result<LikeResponse, ApiError> {
        tracing::debug!(article_id, "toggling like");
        let response = self
            .client
            .post(self.url(&format!("/articles/{article_id}/like")))
            .bearer_auth(self.session.token())
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Toggle the bookmark flag for the current user.
    ///
    /// `POST /articles/:id/bookmark`
    pub async fn toggle_bookmark(&self, article_id: DbId) -> Result<BookmarkResponse, ApiError> {
        tracing::debug!(article_id, "toggling bookmark");
        let response = self
            .client
            .post(self.url(&format!("/articles/{article_id}/bookmark")))
            .bearer_auth(self.session.token())
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Map non-success statuses to [`ApiError`]. 401 becomes
    /// [`ApiError::SessionExpired`]; other failures carry the `{message}`
    /// body when present, the raw text otherwise.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ApiError::SessionExpired);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ApiMessage>(&body)
                .map(|m| m.message)
                .unwrap_or(body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

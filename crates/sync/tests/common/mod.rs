//! In-memory stand-in for the article API used by the integration tests.
//!
//! Simulates the server contract closely enough for the synchronization
//! layer: partial updates append a version snapshot, a revert appends a
//! new version carrying the restored content, toggles flip server truth.
//! Every call is recorded so tests can assert on network traffic, and a
//! failure can be injected for the next call.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use redac_client::payloads::{BookmarkResponse, CreateArticleRequest, LikeResponse};
use redac_client::ApiError;
use redac_core::article::Article;
use redac_core::diff::ArticlePatch;
use redac_core::status::ArticleStatus;
use redac_core::types::DbId;
use redac_core::version::ArticleVersion;
use redac_sync::ArticleGateway;

/// Fixture article with a known shape.
pub fn article(id: DbId) -> Article {
    Article {
        id,
        title: "A".into(),
        content: "C".into(),
        category_id: 3,
        tag_ids: vec![1, 2],
        status: ArticleStatus::Draft,
        author_id: 5,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        views_count: 40,
        likes_count: 4,
        comments_count: 1,
        is_liked: false,
        is_bookmarked: false,
    }
}

pub struct FakeGateway {
    articles: Mutex<HashMap<DbId, Article>>,
    history: Mutex<HashMap<DbId, Vec<ArticleVersion>>>,
    calls: Mutex<Vec<String>>,
    patches: Mutex<Vec<ArticlePatch>>,
    fail_next: Mutex<Option<ApiError>>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            articles: Mutex::new(HashMap::new()),
            history: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            patches: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        })
    }

    /// Seed the fake with one article and its initial version snapshot.
    pub fn with_article(article: Article) -> Arc<Self> {
        let gateway = Self::new();
        gateway.seed_article(article);
        gateway
    }

    pub fn seed_article(&self, article: Article) {
        let version = ArticleVersion {
            id: article.id * 100 + 1,
            version_number: 1,
            title: article.title.clone(),
            content: article.content.clone(),
            change_summary: "Création".into(),
            created_at: article.created_at,
            author_id: article.author_id,
            status: article.status,
        };
        self.history
            .lock()
            .unwrap()
            .insert(article.id, vec![version]);
        self.articles.lock().unwrap().insert(article.id, article);
    }

    /// Make the next gateway call fail with the given error.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Everything the synchronization layer sent so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls whose tag starts with `prefix`.
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    /// Patches received by `update_article`, in order.
    pub fn patches(&self) -> Vec<ArticlePatch> {
        self.patches.lock().unwrap().clone()
    }

    /// Server-side copy of an article.
    pub fn stored_article(&self, id: DbId) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(id: DbId) -> ApiError {
        ApiError::Api {
            status: 404,
            message: format!("Article {id} introuvable"),
        }
    }

    fn append_version(
        &self,
        article_id: DbId,
        article: &Article,
        change_summary: &str,
    ) -> ArticleVersion {
        let mut history = self.history.lock().unwrap();
        let versions = history.entry(article_id).or_default();
        let number = versions.iter().map(|v| v.version_number).max().unwrap_or(0) + 1;
        let version = ArticleVersion {
            id: article_id * 100 + number as DbId,
            version_number: number,
            title: article.title.clone(),
            content: article.content.clone(),
            change_summary: change_summary.to_string(),
            created_at: Utc::now(),
            author_id: article.author_id,
            status: article.status,
        };
        versions.push(version.clone());
        version
    }
}

#[async_trait]
impl ArticleGateway for FakeGateway {
    async fn fetch_article(&self, article_id: DbId) -> Result<Article, ApiError> {
        self.record(format!("fetch:{article_id}"));
        self.check_failure()?;
        self.stored_article(article_id)
            .ok_or_else(|| Self::not_found(article_id))
    }

    async fn create_article(&self, request: &CreateArticleRequest) -> Result<Article, ApiError> {
        self.record("create");
        self.check_failure()?;
        let id = {
            let articles = self.articles.lock().unwrap();
            articles.keys().max().copied().unwrap_or(0) + 1
        };
        let article = Article {
            id,
            title: request.title.clone(),
            content: request.content.clone(),
            category_id: request.category_id.unwrap_or(0),
            tag_ids: request.tag_ids.clone(),
            status: request.status,
            author_id: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            views_count: 0,
            likes_count: 0,
            comments_count: 0,
            is_liked: false,
            is_bookmarked: false,
        };
        self.articles.lock().unwrap().insert(id, article.clone());
        self.append_version(id, &article, "Création");
        Ok(article)
    }

    async fn update_article(
        &self,
        article_id: DbId,
        patch: &ArticlePatch,
    ) -> Result<Article, ApiError> {
        self.record(format!("update:{article_id}"));
        self.check_failure()?;
        self.patches.lock().unwrap().push(patch.clone());

        let updated = {
            let mut articles = self.articles.lock().unwrap();
            let article = articles
                .get_mut(&article_id)
                .ok_or_else(|| Self::not_found(article_id))?;
            if let Some(title) = &patch.title {
                article.title = title.clone();
            }
            if let Some(content) = &patch.content {
                article.content = content.clone();
            }
            if let Some(category_id) = patch.category_id {
                article.category_id = category_id;
            }
            if let Some(tag_ids) = &patch.tag_ids {
                article.tag_ids = tag_ids.clone();
            }
            article.status = patch.status;
            article.updated_at = Utc::now();
            article.clone()
        };
        self.append_version(article_id, &updated, &patch.change_summary);
        Ok(updated)
    }

    async fn associate_tags(&self, article_id: DbId, tag_ids: &[DbId]) -> Result<(), ApiError> {
        self.record(format!("tags:{article_id}"));
        self.check_failure()?;
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&article_id)
            .ok_or_else(|| Self::not_found(article_id))?;
        article.tag_ids = tag_ids.to_vec();
        Ok(())
    }

    async fn fetch_history(&self, article_id: DbId) -> Result<Vec<ArticleVersion>, ApiError> {
        self.record(format!("history:{article_id}"));
        self.check_failure()?;
        Ok(self
            .history
            .lock()
            .unwrap()
            .get(&article_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn revert_to_version(
        &self,
        article_id: DbId,
        version_number: i32,
    ) -> Result<(), ApiError> {
        self.record(format!("revert:{article_id}:{version_number}"));
        self.check_failure()?;

        let restored = {
            let history = self.history.lock().unwrap();
            history
                .get(&article_id)
                .and_then(|versions| {
                    versions
                        .iter()
                        .find(|v| v.version_number == version_number)
                        .cloned()
                })
                .ok_or_else(|| Self::not_found(article_id))?
        };
        let updated = {
            let mut articles = self.articles.lock().unwrap();
            let article = articles
                .get_mut(&article_id)
                .ok_or_else(|| Self::not_found(article_id))?;
            article.title = restored.title.clone();
            article.content = restored.content.clone();
            article.updated_at = Utc::now();
            article.clone()
        };
        // A revert grows the history: the restored content becomes a new
        // version at the top.
        self.append_version(
            article_id,
            &updated,
            &format!("Restauration de la version {version_number}"),
        );
        Ok(())
    }

    async fn toggle_like(&self, article_id: DbId) -> Result<LikeResponse, ApiError> {
        self.record(format!("like:{article_id}"));
        self.check_failure()?;
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&article_id)
            .ok_or_else(|| Self::not_found(article_id))?;
        article.is_liked = !article.is_liked;
        article.likes_count += if article.is_liked { 1 } else { -1 };
        Ok(LikeResponse {
            is_liked: article.is_liked,
            likes_count: article.likes_count,
        })
    }

    async fn toggle_bookmark(&self, article_id: DbId) -> Result<BookmarkResponse, ApiError> {
        self.record(format!("bookmark:{article_id}"));
        self.check_failure()?;
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&article_id)
            .ok_or_else(|| Self::not_found(article_id))?;
        article.is_bookmarked = !article.is_bookmarked;
        Ok(BookmarkResponse {
            is_bookmarked: article.is_bookmarked,
        })
    }
}

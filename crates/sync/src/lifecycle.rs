//! Article lifecycle controller.
//!
//! Drives create / save-draft / submit-for-review / revert for one edit
//! surface. The controller owns the cached server snapshot and applies
//! every transition pessimistically: the snapshot is replaced wholesale by
//! the server response on success and left untouched on failure, so the
//! caller's edit buffer survives for a retry. There is no automatic retry
//! and no optimistic-concurrency token — two concurrent editors end in
//! last-writer-wins, with the earlier writer's changes silently lost.

use std::sync::Arc;

use redac_client::payloads::CreateArticleRequest;
use redac_client::ApiError;
use redac_core::article::Article;
use redac_core::diff::build_patch;
use redac_core::draft::EditBuffer;
use redac_core::status::ArticleStatus;
use redac_core::types::DbId;

use crate::error::SyncError;
use crate::gateway::ArticleGateway;
use crate::history::VersionHistoryStore;
use crate::notify::NoticeBus;

/// Change summary stamped on a draft save.
pub const DRAFT_SAVE_SUMMARY: &str = "Mise à jour du brouillon";

/// Change summary stamped on a submission for review.
pub const SUBMIT_SUMMARY: &str = "Soumission pour validation";

/// Info notice published when a draft re-save has nothing to send.
pub const NOTICE_NOTHING_TO_SAVE: &str = "Aucune modification à enregistrer";

/// Result of a draft save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A patch was sent and the snapshot was refreshed.
    Saved,
    /// The buffer was identical to the snapshot; no network call was made.
    NothingToSave,
}

/// Orchestrates lifecycle transitions for one article edit surface.
pub struct ArticleLifecycleController {
    gateway: Arc<dyn ArticleGateway>,
    notices: Arc<NoticeBus>,
    snapshot: Option<Article>,
}

impl ArticleLifecycleController {
    /// Create a controller with no article loaded yet.
    pub fn new(gateway: Arc<dyn ArticleGateway>, notices: Arc<NoticeBus>) -> Self {
        Self {
            gateway,
            notices,
            snapshot: None,
        }
    }

    /// The cached server snapshot, if an article is loaded.
    pub fn snapshot(&self) -> Option<&Article> {
        self.snapshot.as_ref()
    }

    /// Seed the controller from an article payload already fetched by the
    /// surface (e.g. the feed entry that opened the edit modal).
    pub fn seed(&mut self, article: Article) {
        self.snapshot = Some(article);
    }

    /// Load the article from the server and cache it.
    pub async fn load(&mut self, article_id: DbId) -> Result<(), SyncError> {
        let article = self
            .gateway
            .fetch_article(article_id)
            .await
            .map_err(|e| self.transport(e))?;
        self.snapshot = Some(article);
        Ok(())
    }

    /// Create a new article in `Draft` or `Pending`.
    ///
    /// A `Pending` creation validates the buffer first, exactly like a
    /// submission. Tag associations are recorded through the dedicated
    /// tags endpoint after creation, then the snapshot is refreshed so it
    /// reflects the stored associations.
    pub async fn create(
        &mut self,
        buffer: &EditBuffer,
        target_status: ArticleStatus,
    ) -> Result<DbId, SyncError> {
        if !target_status.is_valid_initial() {
            return Err(SyncError::Validation {
                field: "status",
                message: "Statut initial invalide".to_string(),
            });
        }
        if target_status == ArticleStatus::Pending {
            buffer.validate_for_submission()?;
        }

        let request = CreateArticleRequest::from_buffer(buffer, target_status);
        let created = self
            .gateway
            .create_article(&request)
            .await
            .map_err(|e| self.transport(e))?;
        let article_id = created.id;
        tracing::info!(article_id, status = %target_status, "article created");

        if buffer.tag_ids.is_empty() {
            self.snapshot = Some(created);
        } else {
            self.gateway
                .associate_tags(article_id, &buffer.tag_ids)
                .await
                .map_err(|e| self.transport(e))?;
            let fresh = self
                .gateway
                .fetch_article(article_id)
                .await
                .map_err(|e| self.transport(e))?;
            self.snapshot = Some(fresh);
        }
        Ok(article_id)
    }

    /// Save the buffer as a draft.
    ///
    /// Diffs against the cached snapshot; a buffer with literally no edits
    /// short-circuits with a "nothing to save" notice and zero network
    /// calls. Otherwise a single PATCH is sent and the snapshot replaced
    /// wholesale by the response.
    pub async fn save_draft(&mut self, buffer: &EditBuffer) -> Result<SaveOutcome, SyncError> {
        let (article_id, snapshot) = self.loaded()?;
        self.check_transition(ArticleStatus::Draft)?;

        let outcome = build_patch(
            Some(&snapshot),
            buffer,
            ArticleStatus::Draft,
            DRAFT_SAVE_SUMMARY,
        );
        if outcome.is_noop {
            tracing::debug!(article_id, "draft save skipped, no changes");
            self.notices.info(NOTICE_NOTHING_TO_SAVE);
            return Ok(SaveOutcome::NothingToSave);
        }

        let updated = self
            .gateway
            .update_article(article_id, &outcome.patch)
            .await
            .map_err(|e| self.transport(e))?;
        tracing::info!(article_id, "draft saved");
        self.snapshot = Some(updated);
        Ok(SaveOutcome::Saved)
    }

    /// Submit the buffer for review.
    ///
    /// Validates first — a violation aborts before any diff is built or
    /// network call made. When validation passes, the PATCH is always
    /// sent, even if only the status changes: a submission must be
    /// recorded without content edits too.
    pub async fn submit_for_review(&mut self, buffer: &EditBuffer) -> Result<(), SyncError> {
        buffer.validate_for_submission()?;

        let (article_id, snapshot) = self.loaded()?;
        self.check_transition(ArticleStatus::Pending)?;

        let outcome = build_patch(
            Some(&snapshot),
            buffer,
            ArticleStatus::Pending,
            SUBMIT_SUMMARY,
        );
        let updated = self
            .gateway
            .update_article(article_id, &outcome.patch)
            .await
            .map_err(|e| self.transport(e))?;
        tracing::info!(article_id, "article submitted for review");
        self.snapshot = Some(updated);
        Ok(())
    }

    /// Restore an earlier version.
    ///
    /// Requires explicit user confirmation. Delegates the restore to the
    /// server through the history store, then discards the local snapshot
    /// entirely and reloads the article — no local splicing, no assumption
    /// about the resulting status or content.
    pub async fn revert_to_version(
        &mut self,
        history: &mut VersionHistoryStore,
        version_number: i32,
        confirmed: bool,
    ) -> Result<(), SyncError> {
        if !confirmed {
            return Err(SyncError::Validation {
                field: "confirmation",
                message: "La restauration doit être confirmée".to_string(),
            });
        }
        let article_id = self.snapshot.as_ref().ok_or(SyncError::NoArticle)?.id;

        history.revert(version_number).await?;

        self.snapshot = None;
        let fresh = self
            .gateway
            .fetch_article(article_id)
            .await
            .map_err(|e| self.transport(e))?;
        tracing::info!(article_id, version_number, "article reverted and reloaded");
        self.snapshot = Some(fresh);
        Ok(())
    }

    // ---- private helpers ----

    /// Current article id plus a diffable snapshot of the cached copy.
    fn loaded(&self) -> Result<(DbId, redac_core::diff::ArticleSnapshot), SyncError> {
        match &self.snapshot {
            Some(article) => Ok((article.id, article.snapshot())),
            None => Err(SyncError::NoArticle),
        }
    }

    /// Refuse transitions the client is not allowed to initiate
    /// (anything outside Draft↔Pending).
    fn check_transition(&self, target: ArticleStatus) -> Result<(), SyncError> {
        let current = self
            .snapshot
            .as_ref()
            .map(|a| a.status)
            .ok_or(SyncError::NoArticle)?;
        if !ArticleStatus::is_client_transition(current, target) {
            return Err(SyncError::Validation {
                field: "status",
                message: "Cette action n'est pas disponible pour le statut actuel".to_string(),
            });
        }
        Ok(())
    }

    /// Surface a transport failure as a transient error notice and keep
    /// the snapshot untouched.
    fn transport(&self, err: ApiError) -> SyncError {
        tracing::warn!(error = %err, "lifecycle call failed");
        self.notices.error(err.to_string());
        SyncError::Transport(err)
    }
}

//! Lazily loaded, read-mostly version history for one article.
//!
//! History is fetched only when a history view is opened — it is not kept
//! warm. The only client-side mutation path is [`VersionHistoryStore::revert`],
//! which delegates fully to the server and then refetches: the client
//! never predicts the resulting version count or splices entries locally.

use std::sync::Arc;

use redac_core::types::DbId;
use redac_core::version::ArticleVersion;

use crate::error::SyncError;
use crate::gateway::ArticleGateway;

/// Cached version list for one article.
pub struct VersionHistoryStore {
    gateway: Arc<dyn ArticleGateway>,
    article_id: DbId,
    entries: Option<Vec<ArticleVersion>>,
}

impl VersionHistoryStore {
    /// Create an empty store; nothing is fetched until [`open`](Self::open).
    pub fn new(gateway: Arc<dyn ArticleGateway>, article_id: DbId) -> Self {
        Self {
            gateway,
            article_id,
            entries: None,
        }
    }

    /// The article this store tracks.
    pub fn article_id(&self) -> DbId {
        self.article_id
    }

    /// Fetch the history on first use and return the cached list.
    ///
    /// The list is rendered as returned by the server, ascending by
    /// version number; the client does not validate gaps.
    pub async fn open(&mut self) -> Result<&[ArticleVersion], SyncError> {
        if self.entries.is_none() {
            let versions = self.gateway.fetch_history(self.article_id).await?;
            tracing::debug!(
                article_id = self.article_id,
                count = versions.len(),
                "version history loaded"
            );
            self.entries = Some(versions);
        }
        Ok(self.entries.as_deref().unwrap_or_default())
    }

    /// The cached list, if loaded.
    pub fn entries(&self) -> Option<&[ArticleVersion]> {
        self.entries.as_deref()
    }

    /// Drop the cache so the next [`open`](Self::open) refetches.
    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    /// Highest loaded version number — the "current" version.
    pub fn current_version_number(&self) -> Option<i32> {
        self.entries
            .as_deref()?
            .iter()
            .map(|v| v.version_number)
            .max()
    }

    /// Version numbers that expose the revert action: everything strictly
    /// below the current version.
    pub fn revertible_versions(&self) -> Vec<i32> {
        let Some(current) = self.current_version_number() else {
            return Vec::new();
        };
        self.entries
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|v| v.is_revertible(current))
            .map(|v| v.version_number)
            .collect()
    }

    /// Restore an earlier version on the server, then refetch the list.
    ///
    /// The current (highest) version is refused locally before any
    /// network call. A successful revert invalidates the cache and loads
    /// the new truth immediately, since the server decides what the
    /// post-revert history looks like.
    pub async fn revert(&mut self, version_number: i32) -> Result<(), SyncError> {
        self.open().await?;
        let current = self
            .current_version_number()
            .ok_or(SyncError::NoArticle)?;
        if version_number >= current {
            return Err(SyncError::Validation {
                field: "version",
                message: "La version courante ne peut pas être restaurée".to_string(),
            });
        }

        self.gateway
            .revert_to_version(self.article_id, version_number)
            .await?;
        tracing::info!(
            article_id = self.article_id,
            version_number,
            "version restored"
        );

        self.invalidate();
        self.open().await?;
        Ok(())
    }
}

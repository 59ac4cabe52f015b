//! Optimistic like/bookmark synchronization, one engine per surface.
//!
//! Each rendering surface (feed card, modal, profile entry, notification
//! preview) mounts its own [`EngagementSurface`] seeded from the article
//! payload it received. There is no shared store and no subscription
//! mechanism between surfaces: two surfaces showing the same article can
//! display divergent like counts until each independently refetches.
//!
//! A toggle flips the local state before any network round-trip, then
//! issues exactly one confirmation request — no debouncing, coalescing or
//! in-flight cancellation. Responses are not sequenced: with overlapping
//! toggles, whichever response resolves last determines the rendered
//! state, regardless of click order. This is the observed contract, not a
//! race to fix here.

use std::sync::{Arc, Mutex};

use redac_core::article::Article;
use redac_core::engagement::{EngagementKind, EngagementState};
use redac_core::types::DbId;

use crate::error::SyncError;
use crate::gateway::ArticleGateway;

/// What a surface does with a successful confirmation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Adopt the server's authoritative counter/flags from the body.
    AdoptServer,
    /// Keep the optimistic value and ignore the body.
    KeepOptimistic,
}

/// What a surface does when the confirmation request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Restore the pre-toggle state.
    Rollback,
    /// Discard the optimistic state and re-seed from a fresh fetch of the
    /// article, silently reconciling with server truth.
    RefetchList,
}

/// Per-surface engagement engine.
pub struct EngagementSurface {
    gateway: Arc<dyn ArticleGateway>,
    article_id: DbId,
    state: Mutex<EngagementState>,
    resolution: ResolutionPolicy,
    failure: FailurePolicy,
}

impl EngagementSurface {
    /// Mount a surface, seeding its state from the article payload.
    pub fn mount(
        gateway: Arc<dyn ArticleGateway>,
        article: &Article,
        resolution: ResolutionPolicy,
        failure: FailurePolicy,
    ) -> Self {
        Self {
            gateway,
            article_id: article.id,
            state: Mutex::new(EngagementState::from_article(article)),
            resolution,
            failure,
        }
    }

    /// The article this surface renders.
    pub fn article_id(&self) -> DbId {
        self.article_id
    }

    /// Current rendered state (copy).
    pub fn state(&self) -> EngagementState {
        *self.lock()
    }

    /// Toggle a flag: optimistic flip, one confirmation request, then
    /// resolution per the surface's policies.
    ///
    /// With [`FailurePolicy::RefetchList`] a failed confirmation resolves
    /// silently (`Ok`) after re-seeding from the server; with
    /// [`FailurePolicy::Rollback`] the pre-toggle state is restored and
    /// the transport error returned so the surface may show it.
    pub async fn toggle(&self, kind: EngagementKind) -> Result<(), SyncError> {
        // The UI must reflect the flip before the round-trip completes.
        let before = self.lock().flip(kind);

        match kind {
            EngagementKind::Like => match self.gateway.toggle_like(self.article_id).await {
                Ok(response) => {
                    if self.resolution == ResolutionPolicy::AdoptServer {
                        let mut state = self.lock();
                        state.is_liked = response.is_liked;
                        state.likes_count = response.likes_count;
                    }
                    Ok(())
                }
                Err(err) => self.recover(before, err).await,
            },
            EngagementKind::Bookmark => {
                match self.gateway.toggle_bookmark(self.article_id).await {
                    Ok(response) => {
                        if self.resolution == ResolutionPolicy::AdoptServer {
                            self.lock().is_bookmarked = response.is_bookmarked;
                        }
                        Ok(())
                    }
                    Err(err) => self.recover(before, err).await,
                }
            }
        }
    }

    // ---- private helpers ----

    fn lock(&self) -> std::sync::MutexGuard<'_, EngagementState> {
        self.state.lock().expect("engagement state lock poisoned")
    }

    /// Apply the surface's failure policy after a failed confirmation.
    async fn recover(
        &self,
        before: EngagementState,
        err: redac_client::ApiError,
    ) -> Result<(), SyncError> {
        tracing::debug!(
            article_id = self.article_id,
            error = %err,
            "engagement confirmation failed"
        );
        match self.failure {
            FailurePolicy::Rollback => {
                *self.lock() = before;
                Err(SyncError::Transport(err))
            }
            FailurePolicy::RefetchList => {
                match self.gateway.fetch_article(self.article_id).await {
                    Ok(article) => {
                        *self.lock() = EngagementState::from_article(&article);
                        // Reconciled against server truth; resolved silently.
                        Ok(())
                    }
                    Err(refetch_err) => {
                        // The reconciliation fetch itself failed; fall back
                        // to a rollback so the surface is not left with a
                        // phantom optimistic value.
                        *self.lock() = before;
                        Err(SyncError::Transport(refetch_err))
                    }
                }
            }
        }
    }
}

//! Error taxonomy of the synchronization layer.
//!
//! Validation failures never reach the network; transport failures on
//! lifecycle actions are always surfaced to the user via the notice bus
//! in addition to being returned. Engagement failures are handled by the
//! surface itself (rollback or refetch) and may resolve silently.

use redac_client::ApiError;
use redac_core::error::CoreError;

/// Errors returned by lifecycle, history and engagement operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A client-side rule blocked the operation before any network call.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The network call failed or the server refused the operation.
    #[error(transparent)]
    Transport(#[from] ApiError),

    /// The operation needs a loaded article snapshot and none is present.
    #[error("Aucun article chargé")]
    NoArticle,
}

impl From<CoreError> for SyncError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, message } => Self::Validation { field, message },
        }
    }
}

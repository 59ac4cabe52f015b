//! Pure domain layer for the rédaction client.
//!
//! Holds the article/version data model, the status state machine, the
//! edit-buffer validation rules, the revision diff builder, and the
//! per-surface engagement state. No I/O happens in this crate: every
//! network concern lives in `redac-client` and `redac-sync`.

pub mod article;
pub mod diff;
pub mod draft;
pub mod engagement;
pub mod error;
pub mod status;
pub mod types;
pub mod version;

//! Synchronization layer for article lifecycle, revisions and engagement.
//!
//! Orchestrates the edit surfaces of the rédaction client over the REST
//! API: the lifecycle controller drives draft/review transitions through
//! the diff builder, the history store reads and reverts version
//! snapshots, and one engagement surface per rendering location keeps an
//! optimistic like/bookmark projection.
//!
//! Everything network-facing goes through the [`gateway::ArticleGateway`]
//! trait so tests can substitute in-process fakes for the HTTP client.

pub mod engagement;
pub mod error;
pub mod gateway;
pub mod history;
pub mod lifecycle;
pub mod notify;

pub use engagement::{EngagementSurface, FailurePolicy, ResolutionPolicy};
pub use error::SyncError;
pub use gateway::ArticleGateway;
pub use history::VersionHistoryStore;
pub use lifecycle::{ArticleLifecycleController, SaveOutcome};
pub use notify::{Notice, NoticeBus, NoticeLevel};

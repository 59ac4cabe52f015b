//! REST client for the rédaction content API.
//!
//! Wraps the article endpoints (fetch, create, partial update, tags,
//! history, revert, like, bookmark) over [`reqwest`]. Authentication is a
//! bearer token carried by an explicitly injected [`session::SessionContext`];
//! nothing in this crate reads ambient global state.

pub mod api;
pub mod error;
pub mod payloads;
pub mod session;

pub use api::ArticlesApi;
pub use error::ApiError;
pub use session::SessionContext;

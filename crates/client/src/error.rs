//! Transport-level error type for the article API.

/// Errors from the article REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    ///
    /// `message` comes from the `{message}` error body when the server
    /// sent one, otherwise the raw body text.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided error message.
        message: String,
    },

    /// The server answered 401: the session token is no longer valid.
    ///
    /// Handled globally by the shell (redirect to login), not by the
    /// synchronization layer.
    #[error("Session expirée")]
    SessionExpired,
}

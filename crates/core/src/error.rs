//! Domain-level error type.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A client-side validation rule failed before any network call.
    ///
    /// `field` names the offending edit-buffer field; `message` is the
    /// user-visible text shown next to it.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl CoreError {
    /// The user-visible message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
        }
    }
}

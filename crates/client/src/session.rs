//! Injected session context for API calls.
//!
//! The observed system read its token from ambient global state; here the
//! session is an explicit value handed to every API handle so tests can
//! construct one freely and token rotation is a plain value swap.

/// Base URL and bearer token for one authenticated session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    base_url: String,
    token: String,
}

impl SessionContext {
    /// Create a session context.
    ///
    /// * `base_url` - API root, e.g. `https://api.example.org`. A trailing
    ///   slash is stripped so endpoint paths can be appended directly.
    /// * `token`    - bearer token sent on every call.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// API root without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer token for the `Authorization` header.
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let ctx = SessionContext::new("https://api.example.org/", "tok");
        assert_eq!(ctx.base_url(), "https://api.example.org");
    }

    #[test]
    fn plain_base_url_is_kept() {
        let ctx = SessionContext::new("http://localhost:3000", "tok");
        assert_eq!(ctx.base_url(), "http://localhost:3000");
        assert_eq!(ctx.token(), "tok");
    }
}

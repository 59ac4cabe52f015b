//! Shared primitive type aliases.

/// Database row identifier used by every server-side entity.
pub type DbId = i64;

//! Error types for the redaction engine.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur while building the redaction engine.
///
/// Preprocessing itself has no error path: configuration ambiguity resolves
/// to `Keep` and missing field values are no-ops.
#[derive(Error, Debug)]
pub enum RedactError {
    /// The digest primitive failed its known-answer self check.
    /// Starting anyway would emit values the policy says to hash.
    #[error("SHA-256 self check failed; refusing to initialize")]
    DigestUnavailable,
}

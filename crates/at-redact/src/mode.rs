//! Redaction modes.

use serde::{Deserialize, Serialize};

/// Action applied to a governed field during preprocessing.
///
/// Exactly one mode applies per field; modes for different fields are
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Persist as-is (no modification).
    #[default]
    Keep,
    /// Replace with the SHA-256 hex digest of the value.
    Hash,
    /// Remove the value entirely.
    Drop,
}

impl Mode {
    /// Parse a mode from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "keep" => Some(Mode::Keep),
            "hash" => Some(Mode::Hash),
            "drop" => Some(Mode::Drop),
            _ => None,
        }
    }

    /// Returns whether this mode modifies the event.
    pub fn is_modifying(&self) -> bool {
        !matches!(self, Mode::Keep)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Keep => "keep",
            Mode::Hash => "hash",
            Mode::Drop => "drop",
        };
        write!(f, "{}", s)
    }
}

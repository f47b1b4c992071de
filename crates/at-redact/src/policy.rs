//! Redaction policy resolution.
//!
//! Translates flat environment-style configuration into an immutable
//! per-field [`Policy`]. Resolution is total: malformed or absent variables
//! resolve to [`Mode::Keep`], never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Field, Mode};

/// Literal value that enables a policy variable, compared after trimming
/// surrounding whitespace. `"True"`, `"TRUE"` and `"1"` all mean false.
const TRUE_LITERAL: &str = "true";

/// Resolved per-field redaction policy.
///
/// Fully populated by construction: every governed field has a determined
/// mode. Plain data with no interior mutability; build it once, then share
/// it read-only across preprocessing calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Policy {
    /// Mode for the `username` detail entry.
    #[serde(default)]
    pub username: Mode,

    /// Mode for the `identity_provider_identity` detail entry.
    #[serde(default)]
    pub identity: Mode,

    /// Mode for the `sessionId` scalar.
    #[serde(default)]
    pub session_id: Mode,

    /// Mode for the `ipAddress` scalar.
    #[serde(default)]
    pub ip_address: Mode,
}

impl Policy {
    /// Resolve a policy from an environment-style variable lookup.
    ///
    /// Per-field precedence: drop variable true wins over hash variable
    /// true; neither means `Keep`.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Policy {
            username: resolve_field(&lookup, Field::Username),
            identity: resolve_field(&lookup, Field::Identity),
            session_id: resolve_field(&lookup, Field::SessionId),
            ip_address: resolve_field(&lookup, Field::IpAddress),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve from a variable snapshot (tests, embedding hosts).
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self::resolve(|name| vars.get(name).cloned())
    }

    /// The mode resolved for one field.
    pub fn mode_for(&self, field: Field) -> Mode {
        match field {
            Field::Username => self.username,
            Field::Identity => self.identity,
            Field::SessionId => self.session_id,
            Field::IpAddress => self.ip_address,
        }
    }

    /// True when every field resolves to `Keep` and preprocessing is a
    /// full no-op.
    pub fn is_noop(&self) -> bool {
        Field::ALL
            .iter()
            .all(|field| self.mode_for(*field) == Mode::Keep)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for field in Field::ALL {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", field, self.mode_for(field))?;
            first = false;
        }
        Ok(())
    }
}

fn resolve_field<F>(lookup: &F, field: Field) -> Mode
where
    F: Fn(&str) -> Option<String>,
{
    if is_enabled(lookup(field.drop_var())) {
        Mode::Drop
    } else if is_enabled(lookup(field.hash_var())) {
        Mode::Hash
    } else {
        Mode::Keep
    }
}

fn is_enabled(value: Option<String>) -> bool {
    value.is_some_and(|v| v.trim() == TRUE_LITERAL)
}

//! The preprocessing engine.
//!
//! Applies an immutable [`Policy`] to one [`AuditEvent`] at a time. The
//! engine holds no state besides the policy; a fresh digest context is
//! built per hashed value, so one engine can be shared across threads.

use at_common::AuditEvent;

use crate::{hash, Field, Mode, Policy, Result};

/// Applies the redaction policy to audit events.
pub struct RedactionEngine {
    policy: Policy,
}

impl RedactionEngine {
    /// Build an engine, verifying the digest primitive first.
    ///
    /// Fails when the primitive does not reproduce the known-answer vector.
    /// There is no fallback: a non-hash passthrough would leak values the
    /// policy says to hash.
    pub fn new(policy: Policy) -> Result<Self> {
        hash::self_check()?;
        Ok(RedactionEngine { policy })
    }

    /// The active policy.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Apply the policy to every governed field of `event`.
    ///
    /// Call exactly once per event instance, before the event reaches any
    /// downstream sink: `Hash` replaces the value with its digest, so a
    /// second pass would hash the hash.
    pub fn preprocess(&self, event: &mut AuditEvent) {
        for field in Field::ALL {
            let mode = self.policy.mode_for(field);
            match field.detail_key() {
                Some(key) => self.apply_detail(event, field, key, mode),
                None => self.apply_scalar(event, field, mode),
            }
        }
    }

    fn apply_scalar(&self, event: &mut AuditEvent, field: Field, mode: Mode) {
        let slot = match field {
            Field::SessionId => &mut event.session_id,
            Field::IpAddress => &mut event.ip_address,
            // Detail-map fields never reach here.
            Field::Username | Field::Identity => return,
        };

        match mode {
            Mode::Keep => {}
            Mode::Hash => {
                // Hashing a missing value is a no-op, not an error.
                if let Some(value) = slot.take() {
                    *slot = Some(hash::sha256_hex(&value));
                    tracing::debug!(field = %field, "hashed scalar field");
                }
            }
            Mode::Drop => {
                if slot.take().is_some() {
                    tracing::debug!(field = %field, "dropped scalar field");
                }
            }
        }
    }

    fn apply_detail(&self, event: &mut AuditEvent, field: Field, key: &str, mode: Mode) {
        match mode {
            Mode::Keep => {}
            Mode::Hash => {
                let digest = match event.detail(key) {
                    Some(value) => hash::sha256_hex(value),
                    None => return,
                };
                // Rebuild instead of editing in place: the producing side
                // may hold an aliased view of the current map.
                let mut details = event.details().cloned().unwrap_or_default();
                details.insert(key.to_string(), digest);
                event.set_details(Some(details));
                tracing::debug!(field = %field, "hashed detail field");
            }
            Mode::Drop => {
                let mut details = match event.details() {
                    Some(details) if details.contains_key(key) => details.clone(),
                    _ => return,
                };
                details.remove(key);
                event.set_details(Some(details));
                tracing::debug!(field = %field, "dropped detail field");
            }
        }
    }
}

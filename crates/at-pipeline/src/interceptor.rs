//! The sanitizing interceptor.
//!
//! Wraps an [`EventSink`] and runs the redaction engine on every event
//! before the wrapped sink sees it. Explicit composition: the wrapper owns
//! the inner sink rather than deriving from a concrete sink type, so it
//! works uniformly in front of any downstream.

use at_common::AuditEvent;
use at_redact::{Policy, RedactionEngine};

use crate::sink::{EventSink, SinkError};

/// Event sink wrapper that sanitizes events before forwarding them.
pub struct SanitizingSink<S: EventSink> {
    engine: RedactionEngine,
    inner: S,
}

impl<S: EventSink> SanitizingSink<S> {
    /// Wrap `inner` with an explicit policy.
    ///
    /// Fails when the digest primitive does not pass its startup check; no
    /// event is accepted in that case.
    pub fn new(policy: Policy, inner: S) -> at_redact::Result<Self> {
        let engine = RedactionEngine::new(policy)?;
        Ok(SanitizingSink { engine, inner })
    }

    /// Wrap `inner` with the policy resolved from the process environment.
    ///
    /// Logs the resolved per-field modes once so operators can confirm the
    /// active configuration. The summary names modes only, never values.
    pub fn from_env(inner: S) -> at_redact::Result<Self> {
        let policy = Policy::from_env();
        tracing::info!(policy = %policy, "resolved redaction policy");
        Self::new(policy, inner)
    }

    /// The active policy.
    pub fn policy(&self) -> &Policy {
        self.engine.policy()
    }

    /// Unwrap, returning the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for SanitizingSink<S> {
    /// Sanitize, then forward. The engine runs exactly once per submitted
    /// event; resubmitting an event instance would hash hashes.
    fn submit(&mut self, mut event: AuditEvent) -> Result<(), SinkError> {
        self.engine.preprocess(&mut event);
        self.inner.submit(event)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.inner.flush()
    }
}

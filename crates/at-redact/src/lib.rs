//! Redaction policy and preprocessing engine for authentication audit
//! events.
//!
//! This crate decides what happens to each sensitive event field before the
//! event is persisted or forwarded: keep it, replace it with a one-way
//! digest, or drop it. The policy is resolved once from environment-style
//! configuration and shared read-only across all preprocessing calls.
//!
//! # Key Properties
//!
//! - **Total policy resolution**: malformed or absent configuration never
//!   errors; it resolves to `Keep` for that field.
//! - **Deterministic hashing**: unkeyed SHA-256, lowercase hex, so
//!   downstream systems can correlate hashed identifiers across events and
//!   processes.
//! - **Fail-closed startup**: the digest primitive is verified against a
//!   known-answer vector before the engine is built; a broken primitive
//!   refuses to start instead of passing values through.
//!
//! # Example
//!
//! ```
//! use at_common::{AuditEvent, EventType};
//! use at_redact::{Mode, Policy, RedactionEngine};
//!
//! let mut policy = Policy::default();
//! policy.ip_address = Mode::Drop;
//!
//! let engine = RedactionEngine::new(policy).unwrap();
//! let mut event = AuditEvent::new(EventType::Login).with_ip_address("198.51.100.7");
//! engine.preprocess(&mut event);
//!
//! assert_eq!(event.ip_address, None);
//! ```

pub mod engine;
pub mod error;
pub mod field;
pub mod hash;
pub mod mode;
pub mod policy;

pub use engine::RedactionEngine;
pub use error::{RedactError, Result};
pub use field::Field;
pub use mode::Mode;
pub use policy::Policy;

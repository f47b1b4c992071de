//! Authtrail shared types.
//!
//! This crate provides the foundational types shared across authtrail
//! crates:
//! - The audit event record: scalar properties plus a free-form detail map
//! - The event type vocabulary

pub mod event;

pub use event::{AuditEvent, EventType};

//! Authtrail event pipeline.
//!
//! This crate provides:
//! - The [`EventSink`] trait: the downstream collaborator that persists or
//!   forwards audit events
//! - Concrete sinks: append-only JSONL files and structured `tracing`
//!   output
//! - [`SanitizingSink`]: the interceptor that runs the redaction engine on
//!   every event before the wrapped sink sees it
//!
//! # Example
//!
//! ```no_run
//! use at_pipeline::{EventSink, JsonlSink, SanitizingSink};
//! use at_common::{AuditEvent, EventType};
//!
//! let sink = JsonlSink::open("/var/log/auth-events.jsonl").unwrap();
//! let mut sink = SanitizingSink::from_env(sink).unwrap();
//!
//! let event = AuditEvent::new(EventType::Login).with_ip_address("198.51.100.7");
//! sink.submit(event).unwrap();
//! sink.flush().unwrap();
//! ```

pub mod interceptor;
pub mod sink;

pub use interceptor::SanitizingSink;
pub use sink::{EventSink, JsonlSink, SinkError, TracingSink};

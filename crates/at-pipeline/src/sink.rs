//! Event sinks.
//!
//! A sink is the downstream collaborator that persists or forwards audit
//! events. Sinks receive events after preprocessing; they never see a
//! governed value the policy said to hash or drop.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use at_common::AuditEvent;

/// Errors from sink operations.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Downstream consumer of preprocessed events.
pub trait EventSink {
    /// Deliver one event. Called exactly once per event, after
    /// preprocessing.
    fn submit(&mut self, event: AuditEvent) -> Result<(), SinkError>;

    /// Flush any buffered events to durable storage.
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Append-only JSONL sink: one serialized event per line.
pub struct JsonlSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonlSink {
    /// Open (or create) the log file in append mode.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(JsonlSink {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for JsonlSink {
    fn submit(&mut self, event: AuditEvent) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, &event)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that emits each event as a structured `tracing` event.
///
/// Stands in for the host platform's logging delegate when events are
/// observed rather than persisted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        TracingSink
    }
}

impl EventSink for TracingSink {
    fn submit(&mut self, event: AuditEvent) -> Result<(), SinkError> {
        tracing::info!(
            event_type = %event.event_type,
            realm = event.realm.as_deref(),
            client = event.client.as_deref(),
            user_id = event.user_id.as_deref(),
            session_id = event.session_id.as_deref(),
            ip_address = event.ip_address.as_deref(),
            error = event.error.as_deref(),
            "audit event"
        );
        Ok(())
    }
}

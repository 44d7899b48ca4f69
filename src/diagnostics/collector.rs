// SPDX-License-Identifier: MPL-2.0
//! Collector for export-lifecycle events.
//!
//! The export path records events through a [`DiagnosticsHandle`], which
//! sends them over a bounded channel and never blocks: when the channel is
//! full the event is dropped. The owning [`DiagnosticsCollector`] drains the
//! channel into a circular buffer and can write the buffered events out as
//! a JSON report.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{ExportEvent, ExportEventKind};

/// Channel capacity between handles and the collector.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending export events to the collector.
///
/// Cheap to clone and shareable across tasks. Sending is non-blocking;
/// events are dropped when the channel is full (backpressure protection).
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ExportEvent>,
}

impl DiagnosticsHandle {
    /// Records an event without blocking.
    pub fn record(&self, kind: ExportEventKind) {
        let _ = self.event_tx.try_send(ExportEvent::new(kind));
    }
}

/// Central collector storing events in a memory-bounded buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<ExportEvent>,
    event_rx: Receiver<ExportEvent>,
    event_tx: Sender<ExportEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains all pending events from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &ExportEvent> {
        self.buffer.iter()
    }

    /// Serializes the buffered events to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn report_json(&self) -> serde_json::Result<String> {
        let events: Vec<&ExportEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }

    /// Drains pending events and writes the report atomically to `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] on serialization or file failures.
    pub fn export_report(&mut self, path: &Path) -> io::Result<()> {
        self.process_pending();
        let json = self.report_json().map_err(io::Error::other)?;
        write_atomic(path, &json)
    }
}

/// Generates a default report filename, stamped with local time.
///
/// Format: `gallery_export_report_YYYYMMDD_HHMMSS.json`
#[must_use]
pub fn default_report_filename() -> String {
    let now = Local::now();
    format!("gallery_export_report_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes content to a temp file next to `path`, then renames into place.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}

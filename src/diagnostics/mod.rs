// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for capturing export-lifecycle events.
//!
//! Events are sent from the export path through a cheap, non-blocking handle
//! into a memory-bounded circular buffer, and can be exported as a JSON
//! report for troubleshooting failed exports.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: ring buffer with fixed capacity
//! - [`ExportEvent`]: a timestamped lifecycle event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-backed
//!   collection that never blocks an in-flight export

mod buffer;
mod collector;
mod events;

pub use buffer::{capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{default_report_filename, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{ExportEvent, ExportEventKind};

// SPDX-License-Identifier: MPL-2.0
//! Export-lifecycle event types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The stages of one export call worth recording.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ExportEventKind {
    /// An export call entered the pipeline.
    ExportStarted {
        /// Display name of the asset being exported.
        display_name: String,
        /// Inferred MIME type label.
        mime_type: String,
    },

    /// Permission negotiation resolved (with or without a prompt).
    PermissionResolved {
        /// The resolved access state.
        state: String,
        /// Whether the state allows the export to proceed.
        sufficient: bool,
    },

    /// The destination asset was fully published.
    ExportCompleted {
        /// Store-specific reference of the published asset.
        reference: String,
    },

    /// The export failed at some step.
    ExportFailed {
        /// Machine-readable error kind code.
        code: String,
    },
}

/// A timestamped export-lifecycle event.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportEvent {
    /// Wall-clock time the event was recorded.
    pub recorded_at: DateTime<Utc>,
    /// What happened.
    #[serde(flatten)]
    pub kind: ExportEventKind,
}

impl ExportEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: ExportEventKind) -> Self {
        Self {
            recorded_at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = ExportEvent::new(ExportEventKind::ExportFailed {
            code: "COPY_FAILED".to_string(),
        });
        let json = serde_json::to_string(&event).expect("serialize event");
        assert!(json.contains(r#""event":"export_failed""#));
        assert!(json.contains(r#""code":"COPY_FAILED""#));
    }

    #[test]
    fn started_event_carries_mime_type() {
        let event = ExportEvent::new(ExportEventKind::ExportStarted {
            display_name: "clip.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
        });
        let json = serde_json::to_string(&event).expect("serialize event");
        assert!(json.contains(r#""mime_type":"video/mp4""#));
    }
}

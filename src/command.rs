// SPDX-License-Identifier: MPL-2.0
//! Boundary command surface for the host application shell.
//!
//! The shell talks to the exporter through a single JSON-encoded command,
//! `saveVideoToGallery`, carrying the source `path` and an optional display
//! `name`. The reply is success with no payload, or a machine-readable kind
//! code plus a human-readable message.

use serde::{Deserialize, Serialize};

use crate::application::ExportCoordinator;
use crate::domain::{ExportOutcome, ExportRequest};

/// Commands the host shell can issue.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", content = "args")]
pub enum Command {
    /// Export one video file into the gallery.
    #[serde(rename = "saveVideoToGallery")]
    SaveVideoToGallery {
        /// Absolute path of the source file.
        path: String,
        /// Desired display name; the source base name when omitted.
        #[serde(default)]
        name: Option<String>,
    },
}

impl Command {
    /// Parses a command from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] for unknown methods or malformed
    /// arguments.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Terminal reply to one command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Reply {
    /// Whether the command succeeded.
    pub ok: bool,
    /// Machine-readable failure kind code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable failure detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Reply {
    /// Success with no payload.
    #[must_use]
    pub fn success() -> Self {
        Self {
            ok: true,
            code: None,
            message: None,
        }
    }

    /// Structured failure.
    #[must_use]
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    /// Collapses an export outcome into the wire reply.
    #[must_use]
    pub fn from_outcome(outcome: ExportOutcome) -> Self {
        match outcome {
            ExportOutcome::Success => Self::success(),
            ExportOutcome::Failure { code, message } => Self::failure(code, message),
        }
    }
}

/// Runs one command against the coordinator and returns its terminal reply.
pub async fn dispatch(coordinator: &ExportCoordinator, command: Command) -> Reply {
    match command {
        Command::SaveVideoToGallery { path, name } => {
            let request = match name {
                Some(name) => ExportRequest::new(path, name),
                None => ExportRequest::from_source(path),
            };
            let request = match request {
                Ok(request) => request,
                Err(err) => return Reply::failure(err.code(), err.to_string()),
            };
            let result = coordinator.export(&request).await;
            Reply::from_outcome(ExportOutcome::from_result(result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_save_command_with_name() {
        let command = Command::from_json(
            r#"{"method":"saveVideoToGallery","args":{"path":"/tmp/clip.mp4","name":"x.mov"}}"#,
        )
        .expect("parse command");
        assert_eq!(
            command,
            Command::SaveVideoToGallery {
                path: "/tmp/clip.mp4".to_string(),
                name: Some("x.mov".to_string()),
            }
        );
    }

    #[test]
    fn parses_save_command_without_name() {
        let command = Command::from_json(
            r#"{"method":"saveVideoToGallery","args":{"path":"/tmp/clip.mp4"}}"#,
        )
        .expect("parse command");
        assert_eq!(
            command,
            Command::SaveVideoToGallery {
                path: "/tmp/clip.mp4".to_string(),
                name: None,
            }
        );
    }

    #[test]
    fn unknown_method_fails_to_parse() {
        assert!(Command::from_json(r#"{"method":"listGallery","args":{}}"#).is_err());
    }

    #[test]
    fn success_reply_serializes_without_error_fields() {
        let json = serde_json::to_string(&Reply::success()).expect("serialize reply");
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn failure_reply_carries_code_and_message() {
        let reply = Reply::from_outcome(ExportOutcome::Failure {
            code: "NOT_FOUND".to_string(),
            message: "source not found: /tmp/missing.mov".to_string(),
        });
        assert!(!reply.ok);
        assert_eq!(reply.code.as_deref(), Some("NOT_FOUND"));
    }
}

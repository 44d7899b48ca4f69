// SPDX-License-Identifier: MPL-2.0
//! Export request and outcome types.

use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};

/// A single validated request to export one video file into the gallery.
///
/// Immutable once constructed; owned by the coordinator for the duration of
/// one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Absolute path of the source file.
    source: PathBuf,
    /// Name the gallery labels the asset with; also drives MIME inference.
    display_name: String,
}

impl ExportRequest {
    /// Creates a request with an explicit display name.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidArgument`] if the source path or the
    /// display name is empty.
    pub fn new(source: impl Into<PathBuf>, display_name: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let display_name = display_name.into();
        if source.as_os_str().is_empty() {
            return Err(ExportError::InvalidArgument(
                "source path is empty".to_string(),
            ));
        }
        if display_name.is_empty() {
            return Err(ExportError::InvalidArgument(
                "display name is empty".to_string(),
            ));
        }
        Ok(Self {
            source,
            display_name,
        })
    }

    /// Creates a request whose display name is the source file's base name.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidArgument`] if the source path is empty
    /// or has no file name component.
    pub fn from_source(source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(source, name)
    }

    /// The source file path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The display name used for gallery labeling and MIME inference.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Opaque reference to the destination artifact created by an export.
///
/// Valid only for the duration of one export call; never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingHandle {
    reference: String,
}

impl StagingHandle {
    pub(crate) fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// The store-specific reference string (record id or asset id).
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

/// Terminal outcome of one export call, in the shape the host shell receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The asset was fully published.
    Success,
    /// The export failed at some step.
    Failure {
        /// Machine-readable kind code (see [`ExportError::code`]).
        code: String,
        /// Human-readable detail.
        message: String,
    },
}

impl ExportOutcome {
    /// Collapses a coordinator result into the boundary outcome.
    #[must_use]
    pub fn from_result(result: Result<StagingHandle>) -> Self {
        match result {
            Ok(_) => ExportOutcome::Success,
            Err(err) => ExportOutcome::Failure {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_path_is_invalid() {
        let err = ExportRequest::new("", "clip.mp4").unwrap_err();
        assert!(matches!(err, ExportError::InvalidArgument(_)));
    }

    #[test]
    fn empty_display_name_is_invalid() {
        let err = ExportRequest::new("/tmp/clip.mp4", "").unwrap_err();
        assert!(matches!(err, ExportError::InvalidArgument(_)));
    }

    #[test]
    fn from_source_uses_base_name() {
        let request = ExportRequest::from_source("/tmp/clip.mp4").expect("valid request");
        assert_eq!(request.display_name(), "clip.mp4");
    }

    #[test]
    fn from_source_without_file_name_is_invalid() {
        let err = ExportRequest::from_source("/tmp/..").unwrap_err();
        assert!(matches!(err, ExportError::InvalidArgument(_)));
    }

    #[test]
    fn outcome_preserves_kind_code() {
        let outcome = ExportOutcome::from_result(Err(ExportError::PermissionDenied(
            "prompt dismissed".to_string(),
        )));
        match outcome {
            ExportOutcome::Failure { code, message } => {
                assert_eq!(code, "PERMISSION_DENIED");
                assert!(message.contains("prompt dismissed"));
            }
            ExportOutcome::Success => panic!("expected failure"),
        }
    }
}

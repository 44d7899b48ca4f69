// SPDX-License-Identifier: MPL-2.0
//! Unified error taxonomy for gallery exports.
//!
//! Every failure surfaced by the export pipeline carries one of these kinds.
//! Each kind maps to a stable machine-readable code that the host shell can
//! dispatch on (e.g., to decide whether re-prompting for permission or asking
//! the user to pick a different file is appropriate).

use std::fmt;

/// Errors that can occur while exporting a video into the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The request is missing a source path or display name, or one is empty.
    InvalidArgument(String),

    /// The source file does not exist or is not a regular readable file.
    NotFound(String),

    /// Access negotiation concluded with an insufficient state, including
    /// prompt dismissal.
    PermissionDenied(String),

    /// The destination index or library rejected record creation or
    /// transaction submission outright.
    StoreUnavailable(String),

    /// Either endpoint of the manual byte copy could not be opened
    /// (indexed-store strategy only).
    StreamOpenFailed(String),

    /// A byte-copy I/O error after both streams were opened (indexed-store
    /// strategy only). The partially written record stays pending.
    CopyFailed(String),

    /// The asset-library transaction completed unsuccessfully or never
    /// signaled completion (asset-library strategy only).
    ImportFailed(String),
}

impl ExportError {
    /// Returns the stable machine-readable code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ExportError::NotFound(_) => "NOT_FOUND",
            ExportError::PermissionDenied(_) => "PERMISSION_DENIED",
            ExportError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            ExportError::StreamOpenFailed(_) => "STREAM_OPEN_FAILED",
            ExportError::CopyFailed(_) => "COPY_FAILED",
            ExportError::ImportFailed(_) => "IMPORT_FAILED",
        }
    }

    /// Returns the human-readable detail message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ExportError::InvalidArgument(msg)
            | ExportError::NotFound(msg)
            | ExportError::PermissionDenied(msg)
            | ExportError::StoreUnavailable(msg)
            | ExportError::StreamOpenFailed(msg)
            | ExportError::CopyFailed(msg)
            | ExportError::ImportFailed(msg) => msg,
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            ExportError::NotFound(msg) => write!(f, "source not found: {msg}"),
            ExportError::PermissionDenied(msg) => write!(f, "permission denied: {msg}"),
            ExportError::StoreUnavailable(msg) => write!(f, "store unavailable: {msg}"),
            ExportError::StreamOpenFailed(msg) => write!(f, "stream open failed: {msg}"),
            ExportError::CopyFailed(msg) => write!(f, "copy failed: {msg}"),
            ExportError::ImportFailed(msg) => write!(f, "import failed: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

pub type Result<T> = std::result::Result<T, ExportError>;

// SPDX-License-Identifier: MPL-2.0
//! Content index port definition.
//!
//! This module defines the [`ContentIndex`] trait for gallery stores that
//! are a content catalog over a filesystem: assets are registered as records
//! with metadata and, where supported, a pending visibility flag. The staged
//! writer drives the two-phase protocol (insert pending → copy bytes →
//! finalize); the adapter only supplies the primitive operations.
//!
//! # Design Notes
//!
//! - Methods are synchronous; the byte copy against the returned stream is
//!   a blocking transfer the writer runs on a blocking task
//! - `scoped_staging` models platform versions without a pending flag: when
//!   it returns `false`, records become visible at insert time and
//!   `finalize` is never called

use std::fmt;
use std::io;

/// Metadata for a record about to be inserted into the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Name the gallery displays for the asset.
    pub display_name: String,
    /// MIME type label for the record.
    pub mime_type: &'static str,
    /// Destination hint: logical subfolder below the gallery root.
    pub relative_path: String,
}

/// Reference to a record created by [`ContentIndex::insert`].
///
/// Valid only for the export call that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps a store-specific record reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The store-specific reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors reported by a content index adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The index rejected the record operation.
    Rejected(String),
    /// An underlying I/O failure while touching the index.
    Io(String),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Rejected(msg) => write!(f, "index rejected operation: {msg}"),
            IndexError::Io(msg) => write!(f, "index I/O failure: {msg}"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Port for a content-index-mediated gallery store.
pub trait ContentIndex: Send + Sync {
    /// Whether this index supports pending (not-yet-visible) records.
    fn scoped_staging(&self) -> bool;

    /// Inserts a new record and returns its reference.
    ///
    /// When `pending` is `true` the record must not be discoverable by
    /// gallery consumers until [`finalize`](ContentIndex::finalize) runs.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the index rejects the insertion.
    fn insert(&self, record: &NewRecord, pending: bool) -> Result<RecordId, IndexError>;

    /// Opens a write stream to the record's destination.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the destination cannot be opened.
    fn open_destination(&self, id: &RecordId) -> io::Result<Box<dyn io::Write + Send>>;

    /// Flips the record from pending to finalized — the atomic publish
    /// point. Only called for records inserted with `pending = true`.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the index rejects the update.
    fn finalize(&self, id: &RecordId) -> Result<(), IndexError>;
}

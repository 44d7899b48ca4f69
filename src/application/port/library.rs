// SPDX-License-Identifier: MPL-2.0
//! Asset library port definition.
//!
//! This module defines the [`VideoAssetLibrary`] trait for gallery stores
//! that are a permissioned, transactional asset library. The library
//! performs its own internal copy; additions are all-or-nothing by
//! construction, so no pending/publish step exists on this path — the
//! structural reason the two staged-writer strategies diverge.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::MediaKind;

/// Reference to an asset created by a library transaction.
///
/// Valid only for the export call that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetId(String);

impl AssetId {
    /// Wraps a library-specific asset reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The library-specific reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors reported by an asset library adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The library rejected the transaction submission outright.
    Rejected(String),
    /// The transaction ran but completed unsuccessfully, or never signaled
    /// completion.
    TransactionFailed(String),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Rejected(msg) => write!(f, "library rejected transaction: {msg}"),
            LibraryError::TransactionFailed(msg) => write!(f, "library transaction failed: {msg}"),
        }
    }
}

impl std::error::Error for LibraryError {}

/// Port for a transactional asset library.
#[async_trait]
pub trait VideoAssetLibrary: Send + Sync {
    /// Submits a single "create asset from file" transaction and awaits its
    /// completion exactly once.
    ///
    /// # Errors
    ///
    /// Returns a [`LibraryError`]; a failed transaction leaves no partial
    /// asset behind.
    async fn import_video(
        &self,
        source: &Path,
        display_name: &str,
        kind: MediaKind,
    ) -> Result<AssetId, LibraryError>;
}

// SPDX-License-Identifier: MPL-2.0
//! Staged write strategies.
//!
//! Two mutually exclusive strategies cover the two platform storage models:
//!
//! - **Indexed store**: insert a pending index record, copy bytes manually
//!   into its destination stream, then flip the record visible. Failure
//!   after the insert leaves the pending record in place; nothing here
//!   retries or deletes a partially created destination.
//! - **Asset library**: submit one all-or-nothing import transaction; the
//!   library copies internally, so no pending/publish step exists.
//!
//! The strategy is selected once at startup and dispatched by a single
//! match per write.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::port::{
    ContentIndex, IndexError, LibraryError, NewRecord, VideoAssetLibrary,
};
use crate::domain::{MediaKind, StagingHandle};
use crate::error::{ExportError, Result};

/// The gallery store a writer targets, fixed at startup.
#[derive(Clone)]
pub enum GalleryStore {
    /// Content-index-mediated store (two-phase pending write).
    IndexedStore(Arc<dyn ContentIndex>),
    /// Permissioned, transactional asset library.
    AssetLibrary(Arc<dyn VideoAssetLibrary>),
}

/// Performs the bytes transfer into the destination store.
pub struct StagedWriter {
    store: GalleryStore,
    /// Destination hint for indexed-store records.
    relative_path: String,
}

impl StagedWriter {
    /// Creates a writer over a content index, staging records below the
    /// given logical subfolder.
    #[must_use]
    pub fn indexed(index: Arc<dyn ContentIndex>, relative_path: impl Into<String>) -> Self {
        Self {
            store: GalleryStore::IndexedStore(index),
            relative_path: relative_path.into(),
        }
    }

    /// Creates a writer over a transactional asset library.
    #[must_use]
    pub fn library(library: Arc<dyn VideoAssetLibrary>) -> Self {
        Self {
            store: GalleryStore::AssetLibrary(library),
            relative_path: String::new(),
        }
    }

    /// Transfers the source file into the destination store.
    ///
    /// The source must already have been validated as an existing regular
    /// file by the coordinator; both strategies re-check it here because the
    /// file can vanish between validation and transfer.
    ///
    /// # Errors
    ///
    /// Returns the taxonomy kind of the step that failed; see the module
    /// docs for the partial-artifact rules.
    pub async fn write(
        &self,
        source: &Path,
        display_name: &str,
        kind: MediaKind,
    ) -> Result<StagingHandle> {
        match &self.store {
            GalleryStore::IndexedStore(index) => {
                let index = Arc::clone(index);
                let record = NewRecord {
                    display_name: display_name.to_string(),
                    mime_type: kind.mime_type(),
                    relative_path: self.relative_path.clone(),
                };
                let source = source.to_path_buf();
                // The copy is blocking stream I/O; keep it off the runtime.
                // An aborted task is a store-side fault, not a mid-copy I/O
                // error, so it does not report as CopyFailed.
                tokio::task::spawn_blocking(move || copy_into_index(&*index, &source, &record))
                    .await
                    .map_err(|err| {
                        ExportError::StoreUnavailable(format!("writer task aborted: {err}"))
                    })?
            }
            GalleryStore::AssetLibrary(library) => {
                validate_source(source)?;
                library
                    .import_video(source, display_name, kind)
                    .await
                    .map(|asset| StagingHandle::new(asset.as_str()))
                    .map_err(|err| match err {
                        LibraryError::Rejected(msg) => ExportError::StoreUnavailable(msg),
                        LibraryError::TransactionFailed(msg) => ExportError::ImportFailed(msg),
                    })
            }
        }
    }
}

/// Checks that the source exists and is a regular file.
fn validate_source(source: &Path) -> Result<()> {
    match std::fs::metadata(source) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(ExportError::NotFound(format!(
            "{}: not a regular file",
            source.display()
        ))),
        Err(_) => Err(ExportError::NotFound(source.display().to_string())),
    }
}

/// The indexed-store protocol: insert pending, copy, finalize.
fn copy_into_index(
    index: &dyn ContentIndex,
    source: &PathBuf,
    record: &NewRecord,
) -> Result<StagingHandle> {
    validate_source(source)?;

    let pending = index.scoped_staging();
    let id = index
        .insert(record, pending)
        .map_err(|err| ExportError::StoreUnavailable(err.to_string()))?;

    let mut reader = File::open(source)
        .map_err(|err| ExportError::StreamOpenFailed(format!("{}: {err}", source.display())))?;
    let mut writer = index
        .open_destination(&id)
        .map_err(|err| ExportError::StreamOpenFailed(format!("{}: {err}", id.as_str())))?;

    // A failure from here on leaves the record pending; the pending flag is
    // exactly what keeps such records out of consumers' sight.
    io::copy(&mut reader, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|err| ExportError::CopyFailed(err.to_string()))?;
    drop(writer);

    if pending {
        index
            .finalize(&id)
            .map_err(|err: IndexError| ExportError::StoreUnavailable(err.to_string()))?;
    }

    Ok(StagingHandle::new(id.as_str()))
}

// SPDX-License-Identifier: MPL-2.0
//! Directory-backed content index adapter.
//!
//! Models an indexed gallery store over a plain directory tree: a record is
//! a destination file below `<root>/<relative_path>`, and the pending flag
//! is a JSON sidecar next to it (`<file>.pending`). Consumers must treat a
//! file with a live sidecar as not yet part of the gallery; deleting the
//! sidecar is the atomic publish point.
//!
//! A failed copy leaves both the file and its sidecar in place. Nothing
//! here sweeps or deletes orphaned pending records.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::port::{ContentIndex, IndexError, NewRecord, RecordId};

/// Upper bound on collision-suffix probing per insert.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Metadata stored in a record's pending sidecar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingMarker {
    /// Name the gallery displays for the record.
    pub display_name: String,
    /// MIME type label of the record.
    pub mime_type: String,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
}

/// Content index over a local directory tree.
pub struct FsContentIndex {
    root: PathBuf,
    scoped: bool,
}

impl FsContentIndex {
    /// Creates an index rooted at `root`.
    ///
    /// `scoped` selects whether records are staged as pending; stores on
    /// platform versions without scoped staging pass `false`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, scoped: bool) -> Self {
        Self {
            root: root.into(),
            scoped,
        }
    }

    /// The sidecar path marking a record as pending.
    #[must_use]
    pub fn pending_marker_path(record_path: &Path) -> PathBuf {
        let mut name = record_path.as_os_str().to_os_string();
        name.push(".pending");
        PathBuf::from(name)
    }

    /// Whether the record behind `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: &RecordId) -> bool {
        Self::pending_marker_path(Path::new(id.as_str())).exists()
    }

    /// Claims a destination path that collides with neither an existing
    /// record nor a pending one, uniquifying with ` (n)` suffixes.
    ///
    /// The exclusive create is the claim itself, so concurrent inserts
    /// racing for the same display name each end up with a distinct path.
    fn claim_destination(dir: &Path, display_name: &str) -> Result<PathBuf, IndexError> {
        if let Some(path) = try_claim(dir.join(display_name))? {
            return Ok(path);
        }

        let name = Path::new(display_name);
        let stem = name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| display_name.to_string());
        let extension = name.extension().map(|e| e.to_string_lossy().into_owned());

        for n in 1..MAX_NAME_ATTEMPTS {
            let unique = match &extension {
                Some(ext) => format!("{stem} ({n}).{ext}"),
                None => format!("{stem} ({n})"),
            };
            if let Some(path) = try_claim(dir.join(unique))? {
                return Ok(path);
            }
        }
        Err(IndexError::Rejected(format!(
            "no free destination name for {display_name}"
        )))
    }
}

/// Tries to claim a destination name by creating it exclusively.
///
/// Returns `None` when the name is taken, either by the record file itself
/// or by a pending sidecar left over from an earlier insert.
fn try_claim(candidate: PathBuf) -> Result<Option<PathBuf>, IndexError> {
    if FsContentIndex::pending_marker_path(&candidate).exists() {
        return Ok(None);
    }
    match OpenOptions::new().write(true).create_new(true).open(&candidate) {
        Ok(_) => Ok(Some(candidate)),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(None),
        Err(err) => Err(IndexError::Io(err.to_string())),
    }
}

impl ContentIndex for FsContentIndex {
    fn scoped_staging(&self) -> bool {
        self.scoped
    }

    fn insert(&self, record: &NewRecord, pending: bool) -> Result<RecordId, IndexError> {
        let dir = self.root.join(&record.relative_path);
        fs::create_dir_all(&dir).map_err(|err| IndexError::Io(err.to_string()))?;

        let path = Self::claim_destination(&dir, &record.display_name)?;

        if pending {
            let marker = PendingMarker {
                display_name: record.display_name.clone(),
                mime_type: record.mime_type.to_string(),
                created_at: Utc::now(),
            };
            let json = serde_json::to_string(&marker)
                .map_err(|err| IndexError::Rejected(err.to_string()))?;
            if let Err(err) = fs::write(Self::pending_marker_path(&path), json) {
                // The record never existed as far as consumers are
                // concerned; undo the bare file so insert stays atomic.
                let _ = fs::remove_file(&path);
                return Err(IndexError::Io(err.to_string()));
            }
        }

        Ok(RecordId::new(path.to_string_lossy()))
    }

    fn open_destination(&self, id: &RecordId) -> io::Result<Box<dyn io::Write + Send>> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(id.as_str())?;
        Ok(Box::new(file))
    }

    fn finalize(&self, id: &RecordId) -> Result<(), IndexError> {
        let marker = Self::pending_marker_path(Path::new(id.as_str()));
        match fs::remove_file(&marker) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(IndexError::Rejected(
                format!("{}: record is not pending", id.as_str()),
            )),
            Err(err) => Err(IndexError::Io(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::tempdir;

    fn record(name: &str) -> NewRecord {
        NewRecord {
            display_name: name.to_string(),
            mime_type: "video/mp4",
            relative_path: "Movies/GalleryExport".to_string(),
        }
    }

    #[test]
    fn insert_pending_creates_file_and_marker() {
        let dir = tempdir().expect("tempdir");
        let index = FsContentIndex::new(dir.path(), true);

        let id = index.insert(&record("clip.mp4"), true).expect("insert");

        let path = Path::new(id.as_str());
        assert!(path.exists());
        assert!(index.is_pending(&id));

        let json =
            fs::read_to_string(FsContentIndex::pending_marker_path(path)).expect("read marker");
        let marker: PendingMarker = serde_json::from_str(&json).expect("parse marker");
        assert_eq!(marker.display_name, "clip.mp4");
        assert_eq!(marker.mime_type, "video/mp4");
    }

    #[test]
    fn insert_without_pending_writes_no_marker() {
        let dir = tempdir().expect("tempdir");
        let index = FsContentIndex::new(dir.path(), false);

        let id = index.insert(&record("clip.mp4"), false).expect("insert");
        assert!(!index.is_pending(&id));
    }

    #[test]
    fn colliding_names_are_uniquified() {
        let dir = tempdir().expect("tempdir");
        let index = FsContentIndex::new(dir.path(), true);

        let first = index.insert(&record("clip.mp4"), true).expect("insert");
        let second = index.insert(&record("clip.mp4"), true).expect("insert");

        assert!(first.as_str().ends_with("clip.mp4"));
        assert!(second.as_str().ends_with("clip (1).mp4"));
    }

    #[test]
    fn concurrent_inserts_claim_distinct_records() {
        let dir = tempdir().expect("tempdir");
        let index = std::sync::Arc::new(FsContentIndex::new(dir.path(), true));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let index = std::sync::Arc::clone(&index);
                std::thread::spawn(move || {
                    index.insert(&record("clip.mp4"), true).expect("insert")
                })
            })
            .collect();

        let mut ids: Vec<String> = threads
            .into_iter()
            .map(|t| t.join().expect("insert thread").as_str().to_string())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        for id in &ids {
            assert!(Path::new(id).exists());
        }
    }

    #[test]
    fn finalize_removes_marker_only() {
        let dir = tempdir().expect("tempdir");
        let index = FsContentIndex::new(dir.path(), true);

        let id = index.insert(&record("clip.mp4"), true).expect("insert");
        index.finalize(&id).expect("finalize");

        assert!(!index.is_pending(&id));
        assert!(Path::new(id.as_str()).exists());
    }

    #[test]
    fn finalize_twice_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let index = FsContentIndex::new(dir.path(), true);

        let id = index.insert(&record("clip.mp4"), true).expect("insert");
        index.finalize(&id).expect("finalize");

        let err = index.finalize(&id).unwrap_err();
        assert!(matches!(err, IndexError::Rejected(_)));
    }

    #[test]
    fn insert_fails_when_root_is_a_file() {
        let dir = tempdir().expect("tempdir");
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, b"x").expect("write blocker");

        let index = FsContentIndex::new(&blocked, true);
        let err = index.insert(&record("clip.mp4"), true).unwrap_err();
        assert!(matches!(err, IndexError::Io(_)));
    }

    #[test]
    fn open_destination_writes_into_record() {
        let dir = tempdir().expect("tempdir");
        let index = FsContentIndex::new(dir.path(), true);

        let id = index.insert(&record("clip.mp4"), true).expect("insert");
        {
            let mut writer = index.open_destination(&id).expect("open destination");
            writer.write_all(b"payload").expect("write payload");
            writer.flush().expect("flush");
        }

        assert_eq!(
            fs::read(Path::new(id.as_str())).expect("read record"),
            b"payload"
        );
    }
}

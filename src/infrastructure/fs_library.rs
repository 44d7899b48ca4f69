// SPDX-License-Identifier: MPL-2.0
//! Directory-backed asset library adapter.
//!
//! Models a transactional library over a local directory: an import
//! reserves the final asset name with an exclusive create, copies the
//! source to a temp name next to it, and renames the temp over the
//! reservation. The rename is the commit; on any failure both the temp
//! file and the reservation are removed. There is no pending state to
//! publish.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::port::{AssetId, LibraryError, VideoAssetLibrary};
use crate::domain::MediaKind;

/// Suffix for in-flight import temp files.
const IMPORT_TEMP_SUFFIX: &str = ".import.tmp";

/// Upper bound on collision-suffix probing per import.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Transactional asset library over a local directory.
pub struct FsAssetLibrary {
    root: PathBuf,
}

impl FsAssetLibrary {
    /// Creates a library rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl VideoAssetLibrary for FsAssetLibrary {
    async fn import_video(
        &self,
        source: &Path,
        display_name: &str,
        _kind: MediaKind,
    ) -> Result<AssetId, LibraryError> {
        let root = self.root.clone();
        let source = source.to_path_buf();
        let display_name = display_name.to_string();

        tokio::task::spawn_blocking(move || import_blocking(&root, &source, &display_name))
            .await
            .map_err(|err| LibraryError::TransactionFailed(format!("import task aborted: {err}")))?
    }
}

fn import_blocking(
    root: &Path,
    source: &Path,
    display_name: &str,
) -> Result<AssetId, LibraryError> {
    fs::create_dir_all(root).map_err(|err| LibraryError::Rejected(err.to_string()))?;

    let destination = claim_destination(root, display_name)?;
    let mut temp_name = destination.as_os_str().to_os_string();
    temp_name.push(IMPORT_TEMP_SUFFIX);
    let temp_path = PathBuf::from(temp_name);

    if let Err(err) = fs::copy(source, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        let _ = fs::remove_file(&destination);
        return Err(LibraryError::TransactionFailed(err.to_string()));
    }
    if let Err(err) = fs::rename(&temp_path, &destination) {
        let _ = fs::remove_file(&temp_path);
        let _ = fs::remove_file(&destination);
        return Err(LibraryError::TransactionFailed(err.to_string()));
    }

    Ok(AssetId::new(destination.to_string_lossy()))
}

/// Claims an asset path, uniquifying with ` (n)` suffixes.
///
/// The exclusive create reserves the final name for the duration of the
/// import, so concurrent imports racing for the same display name each end
/// up with a distinct path. The committing rename replaces the reservation
/// with the copied bytes.
fn claim_destination(dir: &Path, display_name: &str) -> Result<PathBuf, LibraryError> {
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
    Err(LibraryError::Rejected(format!(
        "no free asset name for {display_name}"
    )))
}

/// Tries to reserve an asset name by creating it exclusively.
fn try_claim(candidate: PathBuf) -> Result<Option<PathBuf>, LibraryError> {
    match OpenOptions::new().write(true).create_new(true).open(&candidate) {
        Ok(_) => Ok(Some(candidate)),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(None),
        Err(err) => Err(LibraryError::Rejected(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::tempdir;

    fn temp_source(dir: &Path, name: &str, payload: &[u8]) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("create source");
        file.write_all(payload).expect("write source");
        path
    }

    #[tokio::test]
    async fn import_copies_bytes_and_commits() {
        let src_dir = tempdir().expect("tempdir");
        let lib_dir = tempdir().expect("tempdir");
        let source = temp_source(src_dir.path(), "clip.mp4", b"frames");
        let library = FsAssetLibrary::new(lib_dir.path());

        let asset = library
            .import_video(&source, "clip.mp4", MediaKind::Mp4)
            .await
            .expect("import");

        assert_eq!(fs::read(asset.as_str()).expect("read asset"), b"frames");
        // No temp file remains after commit.
        assert!(!Path::new(&format!("{}{IMPORT_TEMP_SUFFIX}", asset.as_str())).exists());
    }

    #[tokio::test]
    async fn missing_source_leaves_no_partial_asset() {
        let lib_dir = tempdir().expect("tempdir");
        let library = FsAssetLibrary::new(lib_dir.path());

        let err = library
            .import_video(Path::new("/nonexistent/clip.mp4"), "clip.mp4", MediaKind::Mp4)
            .await
            .unwrap_err();

        assert!(matches!(err, LibraryError::TransactionFailed(_)));
        assert!(!lib_dir.path().join("clip.mp4").exists());
        let leftovers: Vec<_> = fs::read_dir(lib_dir.path())
            .expect("read library dir")
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn concurrent_imports_claim_distinct_assets() {
        let src_dir = tempdir().expect("tempdir");
        let lib_dir = tempdir().expect("tempdir");
        let first_source = temp_source(src_dir.path(), "a.mp4", b"first frames");
        let second_source = temp_source(src_dir.path(), "b.mp4", b"second frames");
        let library = FsAssetLibrary::new(lib_dir.path());

        let (first, second) = tokio::join!(
            library.import_video(&first_source, "clip.mp4", MediaKind::Mp4),
            library.import_video(&second_source, "clip.mp4", MediaKind::Mp4),
        );
        let first = first.expect("first import");
        let second = second.expect("second import");

        assert_ne!(first.as_str(), second.as_str());
        let mut payloads = vec![
            fs::read(first.as_str()).expect("read first asset"),
            fs::read(second.as_str()).expect("read second asset"),
        ];
        payloads.sort();
        assert_eq!(
            payloads,
            vec![b"first frames".to_vec(), b"second frames".to_vec()]
        );
    }

    #[tokio::test]
    async fn colliding_names_are_uniquified() {
        let src_dir = tempdir().expect("tempdir");
        let lib_dir = tempdir().expect("tempdir");
        let source = temp_source(src_dir.path(), "clip.mp4", b"frames");
        let library = FsAssetLibrary::new(lib_dir.path());

        let first = library
            .import_video(&source, "clip.mp4", MediaKind::Mp4)
            .await
            .expect("first import");
        let second = library
            .import_video(&source, "clip.mp4", MediaKind::Mp4)
            .await
            .expect("second import");

        assert!(first.as_str().ends_with("clip.mp4"));
        assert!(second.as_str().ends_with("clip (1).mp4"));
    }
}

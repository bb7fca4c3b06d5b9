use crate::error::{MeteorError, Result};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Private copy of a Firefox `places.sqlite`
///
/// A running Firefox keeps the live database locked, so it is copied (with
/// its write-ahead log, when one exists) into a temporary directory. The
/// directory and everything in it are deleted when the snapshot is dropped.
#[derive(Debug)]
pub struct PlacesSnapshot {
    dir: TempDir,
    path: PathBuf,
}

impl PlacesSnapshot {
    pub fn capture(source: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("meteor-places-")
            .tempdir()
            .map_err(|e| MeteorError::unavailable(source, e))?;

        let file_name = source
            .file_name()
            .unwrap_or_else(|| OsStr::new("places.sqlite"));
        let path = dir.path().join(file_name);

        fs::copy(source, &path).map_err(|e| MeteorError::unavailable(source, e))?;

        let wal = sidecar(source, "-wal");
        if wal.is_file() {
            fs::copy(&wal, sidecar(&path, "-wal"))
                .map_err(|e| MeteorError::unavailable(&wal, e))?;
        }

        debug!("Copied {} to {}", source.display(), path.display());
        Ok(Self { dir, path })
    }

    /// Path of the copied database
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary directory holding the copy
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

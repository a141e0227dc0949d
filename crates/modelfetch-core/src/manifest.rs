//! Manifest of locally available assets.
//!
//! A JSON array of filenames (not URLs), consumed by the viewer to populate
//! its model library. Recomputed on every run and written over the previous
//! file; nothing is merged from earlier runs.

use crate::error::FilesystemError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Confirmed-available filenames in source order, one per available source.
///
/// Sources that share a file name each contribute an entry, so a name can
/// repeat. Files read back from disk are taken as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    names: Vec<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str) {
        self.names.push(name.to_string());
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Write `manifest` as a compact JSON array to `path`, replacing any existing file.
/// The parent directory is created if missing.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), FilesystemError> {
    let wrap = |source: io::Error| FilesystemError::WriteManifest {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    let json = serde_json::to_vec(manifest).map_err(|e| wrap(e.into()))?;
    fs::write(path, json).map_err(wrap)
}

/// Read a manifest written by [`write_manifest`].
pub fn read_manifest(path: &Path) -> Result<Manifest, FilesystemError> {
    let wrap = |source: io::Error| FilesystemError::ReadManifest {
        path: path.to_path_buf(),
        source,
    };
    let data = fs::read(path).map_err(wrap)?;
    serde_json::from_slice(&data).map_err(|e| wrap(e.into()))
}

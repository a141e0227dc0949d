//! Fetch-and-manifest runner.
//!
//! Walks the source list in order. For each entry it either finds the file
//! already in the save directory (no network access) or issues one GET and
//! keeps the body only on a 200. Per-asset failures are recorded and the
//! run moves on; only save-directory creation and the manifest write can
//! fail the run as a whole.

mod report;

pub use report::{ItemOutcome, RunReport};

use crate::config::FetchConfig;
use crate::error::FilesystemError;
use crate::manifest::{write_manifest, Manifest};
use crate::sources::{filename_collisions, Collision, SourceEntry};
use crate::storage::{ensure_directory, temp_path, PartFile};
use crate::transport::Transport;
use crate::url_model::is_addressable;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of resolving one source entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    /// A file with the derived name was already in the save directory.
    AlreadyPresent,
    /// Fetched with status 200 and written in full.
    Downloaded { bytes: u64 },
    /// The server answered with a status other than 200.
    FailedHttp { status: u32 },
    /// Transport, timeout, or local write failure.
    FailedException { message: String },
}

impl AssetStatus {
    /// True if the asset is on disk after resolving (and so belongs in the manifest).
    pub fn is_available(&self) -> bool {
        matches!(self, AssetStatus::AlreadyPresent | AssetStatus::Downloaded { .. })
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetStatus::AlreadyPresent => write!(f, "already present"),
            AssetStatus::Downloaded { bytes } => write!(f, "downloaded ({} bytes)", bytes),
            AssetStatus::FailedHttp { status } => write!(f, "HTTP {}: link unavailable", status),
            AssetStatus::FailedException { message } => write!(f, "failed: {}", message),
        }
    }
}

/// Progress notifications emitted by [`Runner::run`], in order.
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    Queued { total: usize },
    Collision(&'a Collision),
    Started { index: usize, entry: &'a SourceEntry },
    Finished {
        index: usize,
        entry: &'a SourceEntry,
        status: &'a AssetStatus,
    },
    ManifestWritten { path: &'a Path, count: usize },
}

/// Sequential fetcher bound to one save directory and manifest path.
pub struct Runner<'t, T: Transport + ?Sized> {
    transport: &'t T,
    save_dir: PathBuf,
    manifest_path: PathBuf,
}

impl<'t, T: Transport + ?Sized> Runner<'t, T> {
    pub fn new(
        transport: &'t T,
        save_dir: impl Into<PathBuf>,
        manifest_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            transport,
            save_dir: save_dir.into(),
            manifest_path: manifest_path.into(),
        }
    }

    pub fn from_config(transport: &'t T, cfg: &FetchConfig) -> Self {
        Self::new(transport, &cfg.save_dir, &cfg.manifest_path)
    }

    /// Ensure `entry` is available locally, fetching it if its file is absent.
    pub fn resolve(&self, entry: &SourceEntry) -> AssetStatus {
        if !is_addressable(&entry.filename) {
            return AssetStatus::FailedException {
                message: format!("no usable file name in {}", entry.url),
            };
        }

        let final_path = self.save_dir.join(&entry.filename);
        if final_path.exists() {
            tracing::debug!(path = %final_path.display(), "already present, skipping fetch");
            return AssetStatus::AlreadyPresent;
        }

        let tp = temp_path(&final_path);
        let mut part = match PartFile::create(&tp) {
            Ok(p) => p,
            Err(e) => {
                return AssetStatus::FailedException {
                    message: format!("{:#}", e),
                }
            }
        };

        match self.transport.get(&entry.url, &mut part) {
            Ok(200) => match part.finalize(&final_path) {
                Ok(bytes) => AssetStatus::Downloaded { bytes },
                Err(e) => {
                    let _ = std::fs::remove_file(&tp);
                    AssetStatus::FailedException {
                        message: format!("{:#}", e),
                    }
                }
            },
            Ok(status) => {
                part.discard();
                AssetStatus::FailedHttp { status }
            }
            Err(e) => {
                part.discard();
                AssetStatus::FailedException {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Resolve every entry in order, then write the manifest of available filenames.
    pub fn run<F>(&self, sources: &[SourceEntry], mut on_event: F) -> Result<RunReport, FilesystemError>
    where
        F: FnMut(ProgressEvent<'_>),
    {
        ensure_directory(&self.save_dir)?;

        for collision in &filename_collisions(sources) {
            tracing::warn!(
                filename = %collision.filename,
                indices = ?collision.indices,
                case_only = collision.case_only,
                duplicate_url = collision.duplicate_url,
                "sources share a local file name; later entries resolve to the first file"
            );
            on_event(ProgressEvent::Collision(collision));
        }

        on_event(ProgressEvent::Queued {
            total: sources.len(),
        });
        tracing::info!(
            total = sources.len(),
            save_dir = %self.save_dir.display(),
            "starting fetch run"
        );

        let mut manifest = Manifest::new();
        let mut outcomes = Vec::with_capacity(sources.len());
        for (index, entry) in sources.iter().enumerate() {
            on_event(ProgressEvent::Started { index, entry });
            let status = self.resolve(entry);
            match &status {
                AssetStatus::FailedHttp { .. } | AssetStatus::FailedException { .. } => {
                    tracing::warn!(url = %entry.url, "{}", status)
                }
                _ => tracing::info!(file = %entry.filename, "{}", status),
            }
            if status.is_available() {
                manifest.push(&entry.filename);
            }
            on_event(ProgressEvent::Finished {
                index,
                entry,
                status: &status,
            });
            outcomes.push(ItemOutcome {
                index,
                url: entry.url.clone(),
                filename: entry.filename.clone(),
                status,
            });
        }

        write_manifest(&self.manifest_path, &manifest)?;
        tracing::info!(
            path = %self.manifest_path.display(),
            count = manifest.len(),
            "manifest written"
        );
        on_event(ProgressEvent::ManifestWritten {
            path: &self.manifest_path,
            count: manifest.len(),
        });

        Ok(RunReport {
            outcomes,
            manifest,
            save_dir: self.save_dir.clone(),
            manifest_path: self.manifest_path.clone(),
        })
    }
}

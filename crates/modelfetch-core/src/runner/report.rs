//! Run summary returned by the runner.

use super::AssetStatus;
use crate::manifest::Manifest;
use std::path::PathBuf;

/// Result of resolving one source entry.
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    /// Position in the source list.
    pub index: usize,
    pub url: String,
    pub filename: String,
    pub status: AssetStatus,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    /// One outcome per source entry, in source order.
    pub outcomes: Vec<ItemOutcome>,
    /// The manifest as written.
    pub manifest: Manifest,
    pub save_dir: PathBuf,
    pub manifest_path: PathBuf,
}

impl RunReport {
    pub fn downloaded(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::Downloaded { .. }))
    }

    pub fn already_present(&self) -> usize {
        self.count(|s| matches!(s, AssetStatus::AlreadyPresent))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| !s.is_available())
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Outcomes that did not end with the file on disk.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_available())
    }

    fn count(&self, pred: impl Fn(&AssetStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

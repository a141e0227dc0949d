//! Disk I/O and file lifecycle.
//!
//! Bodies stream into `<name>.part` next to the final file and are renamed
//! into place only after a 200 response, so an interrupted or rejected
//! download never leaves a file that a later run would take as present.

mod writer;

pub use writer::PartFile;

use crate::error::FilesystemError;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `Fox.glb` → `Fox.glb.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create `path` and its parents if absent. Idempotent.
pub fn ensure_directory(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|source| FilesystemError::CreateSaveDir {
        path: path.to_path_buf(),
        source,
    })
}

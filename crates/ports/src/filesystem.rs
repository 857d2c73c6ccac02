// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use arborealize_shared_kernel::{DirPath, FileName, Result};
use serde::{Deserialize, Serialize};

/// Input parameters controlling the walk below one scan root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPlan {
    pub root: PathBuf,
    /// Honour `.gitignore`/`.ignore` files and skip hidden entries.
    pub respect_ignore: bool,
}

impl ScanPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), respect_ignore: false }
    }
}

/// DTO for one regular file discovered by an input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntryDto {
    /// Containing directory relative to the scan root, e.g. `docs/img/`.
    pub dir: DirPath,
    /// Raw base name as reported by the filesystem.
    pub name: FileName,
    pub size: u64,
}

/// Port for enumerating the regular files below a scan root.
///
/// Implementations must finish the whole walk before returning and must fail
/// on the first traversal error instead of skipping entries.
pub trait FileEnumerator {
    fn collect(&self, plan: &ScanPlan) -> Result<Vec<FileEntryDto>>;
}

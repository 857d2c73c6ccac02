use arborealize_shared_kernel::{FileName, FileSize};
use serde::{Deserialize, Serialize};

/// A regular file directly contained in some directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: FileName,
    pub size: FileSize,
}

impl FileEntry {
    pub fn new(name: impl Into<FileName>, bytes: u64) -> Self {
        Self { name: name.into(), size: FileSize::new(bytes) }
    }
}

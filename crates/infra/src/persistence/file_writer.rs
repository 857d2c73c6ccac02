// crates/infra/src/persistence/file_writer.rs
use std::{io::Write, path::Path};

use tempfile::NamedTempFile;

/// Helper utilities for writing generated documents to disk.
pub struct FileWriter;

impl FileWriter {
    /// Writes `data` to a temp file beside `path` and renames it into place,
    /// so an aborted run never leaves a half-written document behind.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}

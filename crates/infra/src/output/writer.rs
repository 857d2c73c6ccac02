// crates/infra/src/output/writer.rs
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use arborealize_shared_kernel::{InfraResult, InfrastructureError};
use log::debug;

use crate::persistence::FileWriter;

/// Where the finished document goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

/// Writes a fully rendered document in one go.
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    target: OutputTarget,
}

impl OutputWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    pub fn emit(&self, document: &str) -> InfraResult<()> {
        match &self.target {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                Self::emit_to(&mut BufWriter::new(stdout.lock()), document)
            }
            OutputTarget::File(path) => {
                debug!("writing {} bytes to {}", document.len(), path.display());
                FileWriter::atomic_write(path, document.as_bytes())
                    .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })
            }
        }
    }

    pub fn emit_to(out: &mut impl Write, document: &str) -> InfraResult<()> {
        out.write_all(document.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_to_writes_everything() {
        let mut buffer = Vec::new();
        OutputWriter::emit_to(&mut buffer, "<html></html>\n").unwrap();
        assert_eq!(buffer, b"<html></html>\n");
    }

    #[test]
    fn file_target_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.html");
        OutputWriter::new(OutputTarget::File(path.clone())).emit("<html></html>\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<html></html>\n");
    }

    #[test]
    fn missing_parent_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("tree.html");
        let err = OutputWriter::new(OutputTarget::File(path)).emit("x").unwrap_err();
        assert!(matches!(err, InfrastructureError::FileWrite { .. }));
    }
}

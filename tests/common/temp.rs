use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory tree removed on drop.
#[derive(Debug)]
pub struct TempTree {
    dir: tempfile::TempDir,
}

impl TempTree {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `size` bytes to `rel`, creating parent directories.
    pub fn write_file(&self, rel: &str, size: usize) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, vec![b'x'; size]).unwrap();
        path
    }

    #[allow(dead_code)]
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// The sample tree used across suites: `a.txt`, `docs/readme.md`, `docs/img/logo.png`.
    #[allow(dead_code)]
    pub fn sample(prefix: &str) -> Self {
        let tree = Self::new(prefix);
        tree.write_file("a.txt", 10);
        tree.write_file("docs/readme.md", 2048);
        tree.write_file("docs/img/logo.png", 500);
        tree
    }
}

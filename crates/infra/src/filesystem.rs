// crates/infra/src/filesystem.rs
use std::path::Path;

use arborealize_ports::filesystem::{FileEntryDto, FileEnumerator, ScanPlan};
use arborealize_shared_kernel::{
    DirPath, FileName, InfrastructureError, Result,
    path::{os_bytes, relative_dir},
};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace};

/// Filesystem adapter implementing the `FileEnumerator` port with a
/// sequential `ignore` walk.
#[derive(Debug, Default)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn collect(&self, plan: &ScanPlan) -> Result<Vec<FileEntryDto>> {
        ensure_directory(&plan.root)?;
        walk_root(plan)
    }
}

fn ensure_directory(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root)
        .map_err(|source| InfrastructureError::Metadata { path: root.to_path_buf(), source })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::RootNotDirectory { path: root.to_path_buf() }.into());
    }
    Ok(())
}

fn walk_root(plan: &ScanPlan) -> Result<Vec<FileEntryDto>> {
    let mut builder = WalkBuilder::new(&plan.root);
    // Symlinks are reported as such and never count as regular files.
    builder.follow_links(false);
    builder.standard_filters(plan.respect_ignore);
    if plan.respect_ignore {
        // Honour .gitignore files even when the root is not inside a repository.
        builder.require_git(false);
    }

    debug!("walking {} (respect_ignore={})", plan.root.display(), plan.respect_ignore);

    let mut entries = Vec::new();
    for result in builder.build() {
        // Any traversal error aborts the scan; there is no partial tree.
        let entry = result.map_err(|err| InfrastructureError::Walk {
            root: plan.root.clone(),
            details: err.to_string(),
        })?;
        if let Some(dto) = to_port_entry(&plan.root, &entry)? {
            trace!("file {}{} ({} bytes)", dto.dir, dto.name, dto.size);
            entries.push(dto);
        }
    }

    debug!("collected {} regular files under {}", entries.len(), plan.root.display());
    Ok(entries)
}

// Returns `None` for directories, symlinks and special files.
fn to_port_entry(root: &Path, entry: &DirEntry) -> Result<Option<FileEntryDto>> {
    let is_regular = entry.file_type().is_some_and(|ft| ft.is_file());
    if !is_regular || entry.depth() == 0 {
        return Ok(None);
    }

    let metadata = entry.metadata().map_err(|err| InfrastructureError::Walk {
        root: root.to_path_buf(),
        details: err.to_string(),
    })?;

    let dir = containing_dir(root, entry.path())?;
    let name = FileName::new(os_bytes(entry.file_name()).into_owned());

    Ok(Some(FileEntryDto { dir, name, size: metadata.len() }))
}

// Key of the directory holding `path`; a file that cannot be placed below
// the root fails the scan.
fn containing_dir(root: &Path, path: &Path) -> Result<DirPath> {
    path.parent().and_then(|parent| relative_dir(root, parent)).ok_or_else(|| {
        InfrastructureError::Walk {
            root: root.to_path_buf(),
            details: format!("'{}' is outside the scan root", path.display()),
        }
        .into()
    })
}

use arborealize_domain::{EntriesByPath, FileEntry, build_tree};
use arborealize_ports::filesystem::{FileEntryDto, FileEnumerator, ScanPlan};
use arborealize_shared_kernel::{DirPath, ErrorContext, Result};
use log::{debug, info};

use crate::dto::OutlineOutput;

/// Walks a scan root to completion, then builds the directory tree.
pub struct BuildOutline<'a> {
    enumerator: &'a dyn FileEnumerator,
}

impl<'a> BuildOutline<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator) -> Self {
        Self { enumerator }
    }

    pub fn run(&self, plan: &ScanPlan) -> Result<OutlineOutput> {
        let entries = self.enumerate(plan)?;
        debug!(
            "grouped {} files into {} directories",
            entries.file_count(),
            entries.dir_count()
        );

        let tree = build_tree(entries);
        let stats = tree.stats();
        info!(
            "scanned {}: {} directories, {} files, {:#}",
            plan.root.display(),
            stats.directories,
            stats.files,
            stats.total_size
        );
        Ok(OutlineOutput { tree, stats })
    }

    fn enumerate(&self, plan: &ScanPlan) -> Result<EntriesByPath> {
        let ports_entries = self
            .enumerator
            .collect(plan)
            .with_context(|| format!("scanning {}", plan.root.display()))?;
        Ok(ports_entries.into_iter().map(port_to_domain_entry).collect())
    }
}

fn port_to_domain_entry(entry: FileEntryDto) -> (DirPath, FileEntry) {
    (entry.dir, FileEntry::new(entry.name, entry.size))
}

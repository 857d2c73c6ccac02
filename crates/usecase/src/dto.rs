use arborealize_domain::{DirectoryNode, TreeStats};

/// Result of a scan: the assembled tree and its totals.
#[derive(Debug, Clone)]
pub struct OutlineOutput {
    pub tree: DirectoryNode,
    pub stats: TreeStats,
}

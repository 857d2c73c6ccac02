use arborealize_shared_kernel::{DirPath, FileName, FileSize};
use serde::Serialize;

use super::FileEntry;

/// One directory of the scanned tree.
///
/// The scan root is the only node with an empty name and an empty path. Every
/// other node's path is its parent's path followed by its own name and `/`.
/// Nodes are only produced by [`crate::tree::build_tree`], which keeps sibling
/// names unique, so the fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    name: FileName,
    path: DirPath,
    files: Vec<FileEntry>,
    children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    pub(crate) fn root(files: Vec<FileEntry>) -> Self {
        Self { name: FileName::new(Vec::new()), path: DirPath::root(), files, children: Vec::new() }
    }

    pub(crate) fn new(name: &[u8], path: DirPath, files: Vec<FileEntry>) -> Self {
        Self { name: FileName::new(name), path, files, children: Vec::new() }
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn path(&self) -> &DirPath {
        &self.path
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn children(&self) -> &[DirectoryNode] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Position of the child called `name`, by linear scan.
    pub fn child_index(&self, name: &[u8]) -> Option<usize> {
        self.children.iter().position(|child| child.name.as_bytes() == name)
    }

    pub fn child(&self, name: impl AsRef<[u8]>) -> Option<&DirectoryNode> {
        self.child_index(name.as_ref()).map(|index| &self.children[index])
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<DirectoryNode> {
        &mut self.children
    }

    /// Pre-order traversal of this node and all of its descendants.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    pub fn stats(&self) -> TreeStats {
        self.iter().fold(TreeStats::default(), |mut stats, node| {
            stats.directories += 1;
            stats.files += node.files.len();
            stats.total_size = stats.total_size + node.files.iter().map(|f| f.size).sum::<FileSize>();
            stats
        })
    }
}

pub struct Nodes<'a> {
    stack: Vec<&'a DirectoryNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a DirectoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Totals over a subtree; `directories` counts the subtree root too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub total_size: FileSize,
}

use arborealize_shared_kernel::DirPath;

use crate::model::{DirectoryNode, EntriesByPath};

/// Assembles the flat walk result into a single rooted tree.
///
/// The root takes the files keyed under the empty path. Every other populated
/// key is split into segments and inserted from the root downwards: an existing
/// child with the same name is reused, a missing one is created with the files
/// recorded for its own path. Intermediate directories therefore appear without
/// needing their own keys, and keys with no files never create nodes.
///
/// Sibling order follows key processing order and is not meaningful; display
/// order is applied at render time.
pub fn build_tree(mut entries: EntriesByPath) -> DirectoryNode {
    let mut root = DirectoryNode::root(entries.take(&DirPath::root()));

    let keys: Vec<DirPath> = entries.populated_dirs().cloned().collect();
    for key in &keys {
        insert_path(&mut root, key, &mut entries);
    }

    root
}

fn insert_path(root: &mut DirectoryNode, key: &DirPath, entries: &mut EntriesByPath) {
    let mut current = root;
    let mut path = DirPath::root();

    for segment in key.segments() {
        path = path.join(segment);
        let index = match current.child_index(segment) {
            Some(index) => index,
            None => {
                let files = entries.take(&path);
                let children = current.children_mut();
                children.push(DirectoryNode::new(segment, path.clone(), files));
                children.len() - 1
            }
        };
        current = &mut current.children_mut()[index];
    }
}

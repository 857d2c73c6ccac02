pub mod directory_node;
pub mod file_entry;

pub use directory_node::{DirectoryNode, TreeStats};
pub use file_entry::FileEntry;

pub mod entities;
pub mod entries;

pub use entities::{DirectoryNode, FileEntry, TreeStats};
pub use entries::EntriesByPath;

//! # Domain
//!
//! Directory tree model for arborealize.
//!
//! - [`model`]: [`FileEntry`], [`DirectoryNode`] and the flat
//!   [`EntriesByPath`] mapping produced by a filesystem walk
//! - [`tree`]: assembly of the mapping into a rooted tree
//! - [`ordering`]: display order for siblings
//!
//! Nothing here performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod ordering;
pub mod tree;

pub use model::{DirectoryNode, EntriesByPath, FileEntry, TreeStats};
pub use tree::build_tree;

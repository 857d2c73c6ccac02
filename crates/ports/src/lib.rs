//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal yielding the regular files below a
//!   scan root
//!
//! The use case layer depends on these traits only, never on a concrete walker.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;

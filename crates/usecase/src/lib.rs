//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: walk the scan root and assemble the directory tree
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::OutlineOutput;
pub use orchestrator::BuildOutline;

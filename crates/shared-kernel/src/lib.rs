// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ArborealizeError, ErrorContext, InfraResult, InfrastructureError, PresentationError, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{DirPath, FileName, FileSize};

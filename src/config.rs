// src/config.rs
use std::path::PathBuf;

use arborealize_infra::output::{DEFAULT_STYLESHEET, OutputTarget, RenderOptions};
use arborealize_ports::filesystem::ScanPlan;
use arborealize_shared_kernel::{
    PresentationError, Result,
    path::{current_dir, root_label},
};

use crate::cli::Args;

/// Immutable run configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    /// Scan root as shown in the page title, always ending in `/`.
    pub title: String,
    pub respect_ignore: bool,
    pub output: OutputTarget,
    pub stylesheet: String,
    pub render: RenderOptions,
}

impl Config {
    /// Resolves defaults and validates values.
    ///
    /// Fails when no root was given and the working directory cannot be
    /// determined, or when a flag carries an unusable value.
    pub fn from_args(args: Args) -> Result<Self> {
        let root = match args.root {
            Some(root) => root,
            None => current_dir()?,
        };

        let stylesheet = match args.stylesheet {
            Some(url) if url.trim().is_empty() => {
                return Err(PresentationError::InvalidValue {
                    flag: "--stylesheet".to_string(),
                    value: url,
                    reason: "stylesheet URL must not be empty".to_string(),
                }
                .into());
            }
            Some(url) => url,
            None => DEFAULT_STYLESHEET.to_string(),
        };

        let output = args.output.map_or(OutputTarget::Stdout, OutputTarget::File);

        Ok(Self {
            title: root_label(&root),
            root,
            respect_ignore: args.respect_ignore,
            output,
            stylesheet,
            render: RenderOptions { show_sizes: !args.no_sizes },
        })
    }

    pub fn scan_plan(&self) -> ScanPlan {
        ScanPlan { root: self.root.clone(), respect_ignore: self.respect_ignore }
    }
}

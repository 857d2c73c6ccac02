// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "arborealize",
    version = crate::VERSION,
    about = "Render a directory tree as a collapsible HTML outline"
)]
pub struct Args {
    /// Filesystem root for the scan [default: current directory]
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "Input")]
    pub root: Option<PathBuf>,

    /// Honour .gitignore/.ignore files and skip hidden entries
    #[arg(long, help_heading = "Input")]
    pub respect_ignore: bool,

    /// Write the document to FILE instead of standard output
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Stylesheet URL linked from the page
    #[arg(long, value_name = "URL", help_heading = "Output")]
    pub stylesheet: Option<String>,

    /// Omit the size badge next to each file
    #[arg(long, help_heading = "Output")]
    pub no_sizes: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

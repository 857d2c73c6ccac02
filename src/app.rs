// src/app.rs
use anyhow::{Context, Result};
use arborealize_infra::{
    filesystem::WalkFileEnumerator,
    output::{HtmlDocument, MarkupRenderer, OutputWriter},
};
use arborealize_usecase::BuildOutline;
use log::info;

use crate::{cli::Args, config::Config};

/// Full pipeline: resolve config, scan, render, write once.
pub fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args).context("invalid configuration")?;
    let document = render_document(&config)?;
    OutputWriter::new(config.output.clone())
        .emit(&document)
        .context("failed to emit output")?;
    Ok(())
}

/// Scans `config.root` and returns the complete HTML page without writing it.
pub fn render_document(config: &Config) -> Result<String> {
    info!("arborealize v{} scanning {}", crate::VERSION, config.root.display());

    let enumerator = WalkFileEnumerator::new();
    let outline = BuildOutline::new(&enumerator)
        .run(&config.scan_plan())
        .context("failed to scan directory tree")?;

    let body = MarkupRenderer::new(config.render).render(&outline.tree);
    let document = HtmlDocument::new(&config.title)
        .with_stylesheet(&config.stylesheet)
        .assemble(&body);
    Ok(document)
}

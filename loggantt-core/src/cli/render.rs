use crate::conf::load_render_config;
use crate::layout::build_layout;
use crate::render::{render_html, write_document};
use crate::timeline::parse_log;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub output: PathBuf,
    pub chunk_bars: usize,
    pub bytes: usize,
}

/// Parse, lay out, render, write. Nothing is written unless every earlier
/// step succeeded.
pub fn render(input: &Path, output: &Path, title: &str, config: Option<&Path>) -> Result<RenderOutcome> {
    let cfg = load_render_config(config).context("failed to load render config")?;
    let model = parse_log(input)?;

    let layout = build_layout(&model, &cfg);
    let html = render_html(&model, &layout, &cfg, title)?;
    write_document(output, &html)?;

    let chunk_bars = layout.chunk_count();
    tracing::info!(
        output = %output.display(),
        bytes = html.len(),
        chunk_bars,
        streams = layout.streams.len(),
        "timeline rendered"
    );

    Ok(RenderOutcome {
        output: output.to_path_buf(),
        chunk_bars,
        bytes: html.len(),
    })
}

//! Reads and analyzes the requested files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use propscan_parser::ComponentFile;
use rayon::prelude::*;

/// Analyze every path in parallel. Results keep the input order.
pub fn analyze_paths(paths: &[PathBuf]) -> Vec<anyhow::Result<ComponentFile>> {
    paths.par_iter().map(|path| analyze_path(path)).collect()
}

fn analyze_path(path: &Path) -> anyhow::Result<ComponentFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path.display().to_string();
    let file = propscan_parser::analyze_file(&filename, &source)
        .with_context(|| format!("failed to analyze {}", path.display()))?;
    tracing::info!(file = %filename, components = file.components.len(), "analyzed");
    Ok(file)
}

/// JSON array of the analyzed files.
pub fn render(files: &[ComponentFile], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(files)
    } else {
        serde_json::to_string(files)
    }
}

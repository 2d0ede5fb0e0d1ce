//! Shared input loading for commands that convert a file.

use anyhow::{Context, Result};
use credconv_core::{convert_with, ConversionResult, ConvertOptions};
use std::path::Path;

/// Reads `path` and converts it, attaching the path to any error.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<ConversionResult> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read input file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
    let result = convert_with(&text, options)
        .with_context(|| format!("convert {}", path.display()))?;
    Ok(result)
}

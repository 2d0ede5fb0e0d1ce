//! `credconv convert <input>` – convert and write the Bitwarden CSV.

use anyhow::{bail, Context, Result};
use credconv_core::naming;
use credconv_core::ConvertOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::input::convert_file;

/// Where converted output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertTarget {
    Stdout,
    /// Explicit path, or `None` for the name derived from the input.
    File(Option<PathBuf>),
}

/// Converts `input` and writes the result. Returns the path written, if any.
pub fn run_convert(
    input: &Path,
    target: ConvertTarget,
    overwrite: bool,
    options: &ConvertOptions,
) -> Result<Option<PathBuf>> {
    let result = convert_file(input, options)?;

    match target {
        ConvertTarget::Stdout => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", result.text)?;
            eprintln!("Converted {} entries", result.count);
            Ok(None)
        }
        ConvertTarget::File(path) => {
            let path = path.unwrap_or_else(|| naming::default_output_path(input));
            if path.exists() && !overwrite {
                bail!(
                    "output file {} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            std::fs::write(&path, &result.text)
                .with_context(|| format!("write output file: {}", path.display()))?;
            tracing::info!(path = %path.display(), count = result.count, "wrote converted file");
            println!("Converted {} entries to {}", result.count, path.display());
            Ok(Some(path))
        }
    }
}

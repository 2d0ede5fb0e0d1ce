//! `credconv preview <input>` – numbered view of the converted CSV.

use anyhow::Result;
use credconv_core::preview::{render_preview, PreviewOptions};
use credconv_core::ConvertOptions;
use std::path::Path;

use super::input::convert_file;

pub fn run_preview(
    input: &Path,
    max_lines: usize,
    mask_passwords: bool,
    options: &ConvertOptions,
) -> Result<()> {
    let result = convert_file(input, options)?;
    let preview = render_preview(
        &result,
        &PreviewOptions {
            max_lines,
            mask_passwords,
        },
    )?;
    println!("{preview}");
    Ok(())
}

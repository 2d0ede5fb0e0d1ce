//! `credconv check <input>` – validate and count without writing.

use anyhow::Result;
use credconv_core::ConvertOptions;
use std::path::Path;

use super::input::convert_file;

pub fn run_check(input: &Path, json: bool, options: &ConvertOptions) -> Result<()> {
    let result = convert_file(input, options)?;
    if json {
        let summary = serde_json::json!({
            "input": input.display().to_string(),
            "count": result.count,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}: {} entries can be converted", input.display(), result.count);
    }
    Ok(())
}

//! Output file naming.
//!
//! The converted file is named after the input: `export.csv` becomes
//! `export_bitwarden.csv`, sanitized for common filesystems.

use std::path::{Path, PathBuf};

/// Name used when the input path yields no usable stem.
pub const DEFAULT_OUTPUT_NAME: &str = "bitwarden_import.csv";

const OUTPUT_SUFFIX: &str = "_bitwarden.csv";

/// Derives the output file name for `input`.
///
/// Drops the last extension of the input file name and appends
/// `_bitwarden.csv`.
///
/// # Examples
///
/// - `output_file_name(Path::new("/tmp/export.csv"))` → `"export_bitwarden.csv"`
/// - `output_file_name(Path::new("passwords.2024.csv"))` → `"passwords.2024_bitwarden.csv"`
/// - `output_file_name(Path::new(".csv"))` → `"bitwarden_import.csv"`
pub fn output_file_name(input: &Path) -> String {
    let file_name = match input.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return DEFAULT_OUTPUT_NAME.to_string(),
    };

    let stem = match file_name.rfind('.') {
        Some(i) => &file_name[..i],
        None => file_name,
    };

    let sanitized = sanitize_file_name(stem);
    if sanitized.is_empty() {
        DEFAULT_OUTPUT_NAME.to_string()
    } else {
        format!("{sanitized}{OUTPUT_SUFFIX}")
    }
}

/// Output path next to `input`, using [`output_file_name`].
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = output_file_name(input);
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Replaces `/`, `\`, NUL and control characters with `_` and trims
/// surrounding whitespace and dots.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    replaced
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension() {
        assert_eq!(
            output_file_name(Path::new("/tmp/export.csv")),
            "export_bitwarden.csv"
        );
        assert_eq!(
            output_file_name(Path::new("passwords.2024.csv")),
            "passwords.2024_bitwarden.csv"
        );
    }

    #[test]
    fn no_extension_kept_whole() {
        assert_eq!(output_file_name(Path::new("dump")), "dump_bitwarden.csv");
    }

    #[test]
    fn empty_stem_uses_default() {
        assert_eq!(output_file_name(Path::new(".csv")), DEFAULT_OUTPUT_NAME);
        assert_eq!(output_file_name(Path::new("/")), DEFAULT_OUTPUT_NAME);
    }

    #[test]
    fn control_chars_sanitized() {
        assert_eq!(sanitize_file_name("a\u{0}b\tc"), "a_b_c");
        assert_eq!(sanitize_file_name("  .hidden.  "), "hidden");
    }

    #[test]
    fn output_path_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("/data/in/export.csv")),
            PathBuf::from("/data/in/export_bitwarden.csv")
        );
        assert_eq!(
            default_output_path(Path::new("export.csv")),
            PathBuf::from("export_bitwarden.csv")
        );
    }
}

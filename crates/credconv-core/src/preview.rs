//! Numbered, optionally password-masked preview of converted output.

use crate::convert::ConversionResult;
use crate::error::ConvertError;
use crate::target::{self, LOGIN_PASSWORD_COLUMN};

/// Replacement shown for non-empty passwords.
pub const PASSWORD_MASK: &str = "********";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Maximum number of lines (header included) to show.
    pub max_lines: usize,
    pub mask_passwords: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_lines: 20,
            mask_passwords: true,
        }
    }
}

/// Renders converted output as `001: <line>` rows followed by an
/// `[INFO] showing X of Y lines` footer. Lines are output records; line breaks
/// inside quoted fields are shown as `\n` / `\r` so each record stays on one
/// numbered row.
pub fn render_preview(
    result: &ConversionResult,
    options: &PreviewOptions,
) -> Result<String, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(result.text.as_bytes());

    let mut lines = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let mut fields: Vec<&str> = record.iter().collect();
        if options.mask_passwords && index > 0 {
            if let Some(password) = fields.get_mut(LOGIN_PASSWORD_COLUMN) {
                if !password.is_empty() {
                    *password = PASSWORD_MASK;
                }
            }
        }
        let mut writer = target::output_writer();
        writer.write_record(&fields)?;
        lines.push(escape_line_breaks(&target::finish(writer)?));
    }

    let total = lines.len();
    let shown = total.min(options.max_lines);
    let mut out = String::new();
    for (index, line) in lines.iter().take(shown).enumerate() {
        out.push_str(&format!("{:03}: {}\n", index + 1, line));
    }
    out.push_str(&format!("[INFO] showing {shown} of {total} lines"));
    Ok(out)
}

fn escape_line_breaks(line: &str) -> String {
    line.replace('\r', "\\r").replace('\n', "\\n")
}

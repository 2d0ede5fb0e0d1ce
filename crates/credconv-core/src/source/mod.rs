//! Source table reading.
//!
//! Reads delimited text with a header row into field maps keyed by the
//! normalized (trimmed, lower-cased) header name. Every value stays text.

mod dialect;
mod fault;
mod quotes;

pub use dialect::{detect_delimiter, Delimiter, InvalidDelimiter, DELIMITER_CANDIDATES};
pub use fault::ParseFault;
pub use quotes::check_quotes;

use std::collections::BTreeMap;

/// One data row: normalized header name to raw field text.
pub type SourceRow = BTreeMap<String, String>;

/// Result of reading the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
    /// Delimiter actually used (after auto-detection).
    pub delimiter: u8,
}

/// Trims and lower-cases a header name.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reads `input` as a headed table. Blank lines are skipped. Only the first
/// structural fault is reported.
pub fn read_table(input: &str, delimiter: Delimiter) -> Result<SourceTable, ParseFault> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let delimiter = match delimiter {
        Delimiter::Auto => detect_delimiter(input).ok_or(ParseFault::UndetectableDelimiter)?,
        Delimiter::Fixed(d) => d,
    };
    let shown = (delimiter as char).escape_default().to_string();
    tracing::debug!(delimiter = %shown, "reading source table");

    let cleaned = check_quotes(input, delimiter)?;
    let input: &str = &cleaned;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::None)
        .delimiter(delimiter)
        .quote(b'"')
        .double_quote(true)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ParseFault::from_csv(&e, input))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ParseFault::from_csv(&e, input))?;
        let row: SourceRow = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_owned))
            .collect();
        rows.push(row);
    }

    Ok(SourceTable {
        headers,
        rows,
        delimiter,
    })
}

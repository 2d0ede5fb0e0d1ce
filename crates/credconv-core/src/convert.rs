//! The conversion pipeline: read, validate, map, serialize.

use serde::Serialize;

use crate::domain::extract_domain;
use crate::error::ConvertError;
use crate::source::{self, Delimiter, SourceRow};
use crate::target::{self, TargetRecord};

/// Columns the source header must contain, checked in this order.
pub const REQUIRED_FIELDS: [&str; 3] = ["url", "username", "password"];

/// Converted text plus the number of entries it holds (header excluded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub text: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub delimiter: Delimiter,
}

/// Converts a credential export to Bitwarden CSV with default options.
pub fn convert(input: &str) -> Result<ConversionResult, ConvertError> {
    convert_with(input, &ConvertOptions::default())
}

/// Converts a credential export to Bitwarden CSV.
///
/// Either the whole input converts or an error is returned; rows whose url,
/// username and password are all empty are skipped and not counted.
pub fn convert_with(
    input: &str,
    options: &ConvertOptions,
) -> Result<ConversionResult, ConvertError> {
    if is_blank(input) {
        return Err(ConvertError::EmptyInput);
    }

    let table = source::read_table(input, options.delimiter)?;
    tracing::debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "parsed source table"
    );

    let first = table.rows.first().ok_or(ConvertError::NoData)?;
    check_required_fields(first)?;

    let records: Vec<TargetRecord> = table.rows.iter().filter_map(to_target).collect();
    let skipped = table.rows.len() - records.len();
    if skipped > 0 {
        tracing::debug!(skipped, "skipped rows with no url, username or password");
    }

    let text = target::serialize(&records)?;
    tracing::info!(count = records.len(), "converted credential export");

    Ok(ConversionResult {
        text,
        count: records.len(),
    })
}

fn is_blank(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_whitespace() || c == '\u{feff}')
}

fn check_required_fields(row: &SourceRow) -> Result<(), ConvertError> {
    match REQUIRED_FIELDS.into_iter().find(|f| !row.contains_key(*f)) {
        Some(missing) => Err(ConvertError::MissingField(missing)),
        None => Ok(()),
    }
}

/// Absent keys and empty values are treated the same.
fn to_target(row: &SourceRow) -> Option<TargetRecord> {
    let field = |name: &str| row.get(name).map(String::as_str).unwrap_or("");
    let (url, username, password) = (field("url"), field("username"), field("password"));

    if url.is_empty() && username.is_empty() && password.is_empty() {
        return None;
    }

    Some(TargetRecord::login(
        extract_domain(url),
        url,
        username,
        password,
    ))
}

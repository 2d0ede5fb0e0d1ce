//! Conversion error type.

use thiserror::Error;

use crate::source::ParseFault;

/// Why a conversion failed. Every variant is terminal: no partial output is
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input was empty or contained only whitespace.
    #[error("input is empty")]
    EmptyInput,
    /// The input is not well-formed delimited text.
    #[error("CSV parse error: {0}")]
    Parse(#[from] ParseFault),
    /// Only a header row was present.
    #[error("no data rows found")]
    NoData,
    /// A required column is missing from the header.
    #[error("required field '{0}' not found (expected header: url,username,password)")]
    MissingField(&'static str),
    /// Writing the converted text failed. In-memory writers do not fail in
    /// practice; this exists so the csv writer error is not swallowed.
    #[error("failed to write converted output: {0}")]
    Output(String),
}

impl From<csv::Error> for ConvertError {
    fn from(e: csv::Error) -> Self {
        ConvertError::Output(e.to_string())
    }
}

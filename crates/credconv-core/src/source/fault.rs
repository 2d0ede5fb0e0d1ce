//! Classified parse faults.

use std::cmp::Ordering;
use thiserror::Error;

/// Structural problem found while reading the source table.
///
/// Line numbers are 1-based and refer to the line where the offending record
/// (or quoted field) starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFault {
    #[error("too many fields on line {line}: header has {expected} columns, row has {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("too few fields on line {line}: header has {expected} columns, row has {found}")]
    TooFewFields {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("could not detect the field delimiter")]
    UndetectableDelimiter,
    #[error("quoted field starting on line {line} is never closed")]
    MissingQuotes { line: u64 },
    #[error("malformed quote on line {line}: a closing quote must be followed by a delimiter or line break")]
    InvalidQuotes { line: u64 },
    #[error("field layout does not match the header on line {line}")]
    FieldMismatch { line: u64 },
    #[error("unknown parse error: {0}")]
    Unknown(String),
}

impl ParseFault {
    /// Maps a csv reader error into a fault class. `input` is the text the
    /// reader was given; line numbers are counted from it.
    pub fn from_csv(err: &csv::Error, input: &str) -> Self {
        match err.kind() {
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => {
                let line = pos.as_ref().map(|p| line_at(input, p.byte())).unwrap_or(0);
                let expected = *expected_len as usize;
                let found = *len as usize;
                match found.cmp(&expected) {
                    Ordering::Greater => ParseFault::TooManyFields {
                        line,
                        expected,
                        found,
                    },
                    Ordering::Less => ParseFault::TooFewFields {
                        line,
                        expected,
                        found,
                    },
                    Ordering::Equal => ParseFault::FieldMismatch { line },
                }
            }
            _ => ParseFault::Unknown(err.to_string()),
        }
    }
}

/// 1-based line of byte offset `byte`. `\r\n`, `\n` and a lone `\r` each end
/// one line, matching the quote check.
pub(crate) fn line_at(input: &str, byte: u64) -> u64 {
    let bytes = input.as_bytes();
    let end = usize::try_from(byte).unwrap_or(usize::MAX).min(bytes.len());
    let breaks = bytes[..end]
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count();
    breaks as u64 + 1
}

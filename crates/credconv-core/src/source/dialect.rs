//! Delimiter selection and auto-detection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Candidates tried by auto-detection, in order of preference on ties.
pub const DELIMITER_CANDIDATES: [u8; 6] = [b',', b'\t', b'|', b';', 0x1e, 0x1f];

/// Records inspected when guessing the delimiter.
const PREVIEW_RECORDS: usize = 10;

/// Field delimiter for the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Guess from the leading records.
    #[default]
    Auto,
    /// Always use this byte.
    Fixed(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid delimiter {0:?}: expected \"auto\", \"tab\" or a single ASCII character")]
pub struct InvalidDelimiter(pub String);

impl FromStr for Delimiter {
    type Err = InvalidDelimiter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Delimiter::Auto),
            "tab" | "\t" => Ok(Delimiter::Fixed(b'\t')),
            "comma" => Ok(Delimiter::Fixed(b',')),
            "semicolon" => Ok(Delimiter::Fixed(b';')),
            "pipe" => Ok(Delimiter::Fixed(b'|')),
            _ => match s.as_bytes() {
                [b] if b.is_ascii() && !matches!(b, b'"' | b'\r' | b'\n') => {
                    Ok(Delimiter::Fixed(*b))
                }
                _ => Err(InvalidDelimiter(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Auto => f.write_str("auto"),
            Delimiter::Fixed(b'\t') => f.write_str("tab"),
            Delimiter::Fixed(b) => write!(f, "{}", *b as char),
        }
    }
}

/// Picks the candidate delimiter that splits the leading records into at
/// least two fields with the most consistent field count.
///
/// Ties on consistency go to the candidate with the higher average field
/// count, then to the earlier candidate. Returns `None` when no candidate
/// yields two or more fields per record on average.
pub fn detect_delimiter(input: &str) -> Option<u8> {
    let mut best: Option<(u8, usize, f64)> = None;

    for &candidate in &DELIMITER_CANDIDATES {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(candidate)
            .from_reader(input.as_bytes());

        let counts: Vec<usize> = reader
            .records()
            .take(PREVIEW_RECORDS)
            .map_while(Result::ok)
            .map(|r| r.len())
            .collect();
        if counts.is_empty() {
            continue;
        }

        let avg = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        if avg <= 1.99 {
            continue;
        }
        let delta: usize = counts.windows(2).map(|w| w[0].abs_diff(w[1])).sum();

        let better = match best {
            None => true,
            Some((_, best_delta, best_avg)) => {
                delta < best_delta || (delta == best_delta && avg > best_avg)
            }
        };
        if better {
            best = Some((candidate, delta, avg));
        }
    }

    best.map(|(d, _, _)| d)
}

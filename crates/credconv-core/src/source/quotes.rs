//! Quote structure check.
//!
//! The csv reader accepts unterminated quoted fields and stray text after a
//! closing quote without complaint, so those two faults are found here in a
//! separate pass before reading records. The same pass drops spaces between a
//! closing quote and the next delimiter, which the reader would otherwise
//! append to the field value.

use std::borrow::Cow;
use std::ops::Range;

use super::ParseFault;

const QUOTE: u8 = b'"';

/// Checks quoting in `input` and returns it with padding after closing
/// quotes removed, or the first quoting fault.
pub fn check_quotes(input: &str, delimiter: u8) -> Result<Cow<'_, str>, ParseFault> {
    let bytes = input.as_bytes();
    let mut line: u64 = 1;
    let mut field_start = true;
    let mut quote_line: Option<u64> = None;
    let mut padding: Vec<Range<usize>> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if quote_line.is_some() {
            match b {
                QUOTE if bytes.get(i + 1) == Some(&QUOTE) => i += 1,
                QUOTE => {
                    quote_line = None;
                    field_start = false;
                    match padding_after(&bytes[i + 1..], delimiter) {
                        None => return Err(ParseFault::InvalidQuotes { line }),
                        Some(0) => {}
                        Some(n) => {
                            padding.push(i + 1..i + 1 + n);
                            i += n;
                        }
                    }
                }
                b'\n' => line += 1,
                _ => {}
            }
        } else if b == delimiter {
            field_start = true;
        } else {
            match b {
                QUOTE if field_start => {
                    quote_line = Some(line);
                    field_start = false;
                }
                b'\n' => {
                    line += 1;
                    field_start = true;
                }
                b'\r' => {
                    if bytes.get(i + 1) != Some(&b'\n') {
                        line += 1;
                    }
                    field_start = true;
                }
                _ => field_start = false,
            }
        }
        i += 1;
    }

    if let Some(line) = quote_line {
        return Err(ParseFault::MissingQuotes { line });
    }
    Ok(strip_ranges(input, &padding))
}

/// Number of spaces/tabs after a closing quote when they are followed by a
/// delimiter, a line break or end of input; `None` for any other byte.
fn padding_after(rest: &[u8], delimiter: u8) -> Option<usize> {
    let end = rest
        .iter()
        .position(|&b| b == delimiter || !(b == b' ' || b == b'\t'));
    match end {
        None => Some(rest.len()),
        Some(n) if matches!(rest[n], b'\n' | b'\r') || rest[n] == delimiter => Some(n),
        Some(_) => None,
    }
}

/// Ranges only cover ASCII bytes, so every cut lands on a char boundary.
fn strip_ranges<'a>(input: &'a str, ranges: &[Range<usize>]) -> Cow<'a, str> {
    if ranges.is_empty() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for r in ranges {
        out.push_str(&input[last..r.start]);
        last = r.end;
    }
    out.push_str(&input[last..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_quotes_pass() {
        let input = "url,username,password\n\"https://a.com/?q=1,2\",\"bo\"\"b\",\"multi\nline\"\n";
        assert_eq!(check_quotes(input, b',').unwrap(), input);
    }

    #[test]
    fn unterminated_quote_reports_start_line() {
        let input = "url,username,password\nhttps://a.com,bob,\"unfinished\nmore\n";
        assert_eq!(
            check_quotes(input, b','),
            Err(ParseFault::MissingQuotes { line: 2 })
        );
    }

    #[test]
    fn text_after_closing_quote_is_invalid() {
        let input = "url,username,password\n\"a\"b,bob,pw\n";
        assert_eq!(
            check_quotes(input, b','),
            Err(ParseFault::InvalidQuotes { line: 2 })
        );
    }

    #[test]
    fn padding_after_closing_quote_is_removed() {
        assert_eq!(check_quotes("a,b\n\"x\"  ,y\n", b',').unwrap(), "a,b\n\"x\",y\n");
        assert_eq!(check_quotes("a,b\nx,\"y\" \t\r\n", b',').unwrap(), "a,b\nx,\"y\"\r\n");
        assert_eq!(check_quotes("a,b\nx,\"y\"  ", b',').unwrap(), "a,b\nx,\"y\"");
    }

    #[test]
    fn tab_after_closing_quote_is_the_delimiter() {
        let input = "a\tb\n\"x\"\t\ty\n";
        assert_eq!(check_quotes(input, b'\t').unwrap(), input);
    }

    #[test]
    fn quote_inside_unquoted_field_is_literal() {
        let input = "a,b\nsa\"y,z\n";
        assert_eq!(check_quotes(input, b',').unwrap(), input);
    }

    #[test]
    fn respects_tab_delimiter() {
        let input = "a\tb\n\"x\"\ty\n";
        assert_eq!(check_quotes(input, b'\t').unwrap(), input);
    }

    #[test]
    fn crlf_line_counting() {
        let input = "a,b\r\n1,2\r\n\"open,3\r\n";
        assert_eq!(
            check_quotes(input, b','),
            Err(ParseFault::MissingQuotes { line: 3 })
        );
    }
}

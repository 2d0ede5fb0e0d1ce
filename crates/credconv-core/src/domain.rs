//! Display-name derivation from a login URL.

use std::borrow::Cow;
use url::Url;

/// Name used when the URL is empty.
pub const UNKNOWN_NAME: &str = "Unknown";

const WWW_PREFIX: &str = "www.";

/// Derives a short display name (host without `www.`) from a URL.
///
/// Values without a `scheme://` prefix are parsed as `https://<value>`. When
/// the value does not parse or has no host, the original text is used
/// instead, minus any leading `www.`. Never fails.
///
/// # Examples
///
/// - `extract_domain("https://www.example.com/login")` → `"example.com"`
/// - `extract_domain("www.site.com")` → `"site.com"`
/// - `extract_domain("")` → `"Unknown"`
pub fn extract_domain(raw: &str) -> String {
    if raw.is_empty() {
        return UNKNOWN_NAME.to_string();
    }

    let candidate: Cow<'_, str> = if has_scheme(raw) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("https://{raw}"))
    };

    let label = match Url::parse(&candidate) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => strip_www(host).to_string(),
            _ => strip_www(raw).to_string(),
        },
        Err(e) => {
            tracing::trace!("url parse failed, using raw value: {}", e);
            strip_www(raw).to_string()
        }
    };

    if label.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        label
    }
}

/// True when `s` starts with `scheme://` (RFC 3986 scheme characters).
fn has_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn strip_www(s: &str) -> &str {
    let mut rest = s;
    while let Some(stripped) = rest.strip_prefix(WWW_PREFIX) {
        rest = stripped;
    }
    rest
}

//! credconv core: converts credential CSV exports (url, username, password)
//! into the Bitwarden "login" CSV import layout.

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod logging;
pub mod naming;
pub mod preview;
pub mod source;
pub mod target;

pub use convert::{convert, convert_with, ConversionResult, ConvertOptions};
pub use domain::extract_domain;
pub use error::ConvertError;
pub use source::{Delimiter, ParseFault};

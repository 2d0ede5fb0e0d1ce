//! CLI command handlers. Each command is in its own file.

mod check;
mod config;
mod convert;
mod input;
mod preview;

pub use check::run_check;
pub use config::run_config;
pub use convert::{run_convert, ConvertTarget};
pub use preview::run_preview;

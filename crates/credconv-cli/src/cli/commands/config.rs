//! `credconv config` – show config location and effective values.

use anyhow::Result;
use credconv_core::config::{self, ConvConfig};

pub fn run_config(cfg: &ConvConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", config::render(cfg)?);
    Ok(())
}

//! CLI for credconv.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use credconv_core::config;
use credconv_core::Delimiter;
use std::path::PathBuf;

use commands::{run_check, run_config, run_convert, run_preview, ConvertTarget};

/// Top-level CLI for credconv.
#[derive(Debug, Parser)]
#[command(name = "credconv")]
#[command(
    about = "Convert url,username,password CSV exports into Bitwarden import CSV",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert an export file and write the Bitwarden CSV.
    Convert {
        /// Source CSV with url, username and password columns.
        input: PathBuf,

        /// Output path (default: <input stem>_bitwarden.csv next to the input).
        #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the converted CSV to stdout instead of a file.
        #[arg(long)]
        stdout: bool,

        /// Overwrite the output file if it exists.
        #[arg(long)]
        force: bool,

        /// Source delimiter: "auto", "tab" or a single character (overrides config).
        #[arg(long, value_name = "DELIM")]
        delimiter: Option<Delimiter>,
    },

    /// Validate an export file and report how many entries would be converted.
    Check {
        /// Source CSV with url, username and password columns.
        input: PathBuf,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// Source delimiter: "auto", "tab" or a single character (overrides config).
        #[arg(long, value_name = "DELIM")]
        delimiter: Option<Delimiter>,
    },

    /// Show the converted CSV as numbered lines without writing a file.
    Preview {
        /// Source CSV with url, username and password columns.
        input: PathBuf,

        /// Maximum number of lines to show (default from config).
        #[arg(long, value_name = "N")]
        rows: Option<usize>,

        /// Show passwords instead of masking them.
        #[arg(long)]
        show_passwords: bool,

        /// Source delimiter: "auto", "tab" or a single character (overrides config).
        #[arg(long, value_name = "DELIM")]
        delimiter: Option<Delimiter>,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert {
                input,
                output,
                stdout,
                force,
                delimiter,
            } => {
                let target = if stdout {
                    ConvertTarget::Stdout
                } else {
                    ConvertTarget::File(output)
                };
                let options = cfg.convert_options(delimiter);
                run_convert(&input, target, force || cfg.overwrite, &options)?;
            }
            CliCommand::Check {
                input,
                json,
                delimiter,
            } => run_check(&input, json, &cfg.convert_options(delimiter))?,
            CliCommand::Preview {
                input,
                rows,
                show_passwords,
                delimiter,
            } => {
                let max_lines = rows.unwrap_or(cfg.preview_rows);
                run_preview(
                    &input,
                    max_lines,
                    !show_passwords,
                    &cfg.convert_options(delimiter),
                )?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

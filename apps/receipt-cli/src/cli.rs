//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ErrorPolicy, OutputFormat, ReceiptConfig};

#[derive(Debug, Parser)]
#[command(name = "receipts")]
#[command(about = "Prints sales receipts for the shopping baskets in a directory")]
#[command(version)]
pub struct Args {
    /// TOML config file (default: receipts.toml in the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory with one basket per file
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory for output<i> receipt files
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write one file per receipt to the output directory
    #[arg(short, long)]
    pub write: bool,

    /// Do not print receipts to stdout
    #[arg(long)]
    pub no_print: bool,

    /// Printed format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// What to do with a basket that has a bad line
    #[arg(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Layers the flags that were given over `config`.
    pub fn apply(&self, config: &mut ReceiptConfig) {
        if let Some(dir) = &self.input {
            config.input.dir = dir.clone();
        }
        if let Some(dir) = &self.output {
            config.output.dir = dir.clone();
        }
        if self.write {
            config.output.write_files = true;
        }
        if self.no_print {
            config.output.print = false;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(policy) = self.on_error {
            config.processing.on_error = policy;
        }
    }
}

//! # receipts
//!
//! ```text
//! receipts [--config PATH] [--input DIR] [--output DIR] [--write]
//!          [--no-print] [--format text|json] [--on-error skip-basket|abort]
//!          [--verbose]
//! ```
//!
//! Exits non-zero when configuration or input cannot be read, or when a
//! bad basket aborts the run.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use receipt_cli::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    receipt_cli::init_tracing(args.verbose);

    let config = receipt_cli::resolve_config(&args)?;
    info!(
        input = %config.input.dir.display(),
        format = %config.output.format,
        on_error = %config.processing.on_error,
        "Configuration loaded"
    );

    receipt_cli::run(&config)?;
    Ok(())
}

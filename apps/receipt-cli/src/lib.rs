//! # receipt-cli: The `receipts` Command
//!
//! Reads every basket file in a directory, prints a receipt for each and
//! optionally writes the receipts to an output directory.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing (stderr, RUST_LOG or --verbose)                       │
//! │  2. ReceiptConfig::load → Args::apply → validate                       │
//! │  3. BasketSource::read_baskets (sorted file names)                     │
//! │  4. BasketPipeline::process_isolated                                   │
//! │        │                                                               │
//! │        ├── abort:       first failed basket ends the run (exit 1)      │
//! │        └── skip_basket: failed basket logged, the rest continue        │
//! │  5. write_report → stdout          (output.print)                      │
//! │  6. ReceiptSink::write → output<i> (output.write_files)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod report;

use anyhow::{Context, Result};
use receipt_core::BasketPipeline;
use receipt_io::{BasketSource, ReceiptSink};
use std::io::Write;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::{ErrorPolicy, ReceiptConfig};
use crate::report::{write_report, BasketReceipt};

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,receipt=info";

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Basket files found.
    pub baskets: usize,
    /// Receipts produced.
    pub receipts: usize,
    /// Baskets skipped because of a bad line.
    pub skipped: usize,
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only receipts.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds the effective configuration for the given flags.
pub fn resolve_config(args: &Args) -> Result<ReceiptConfig> {
    let mut config =
        ReceiptConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Runs with receipts printed to stdout.
pub fn run(config: &ReceiptConfig) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Runs with receipts printed to `out`.
pub fn run_with_output<W: Write>(config: &ReceiptConfig, out: &mut W) -> Result<RunSummary> {
    let source = BasketSource::new(&config.input.dir);
    let baskets = source
        .read_baskets()
        .with_context(|| format!("Failed to read baskets from {}", source.dir().display()))?;

    let pipeline = BasketPipeline::default();
    let outcomes = pipeline.process_isolated(&baskets);

    let mut summary = RunSummary {
        baskets: baskets.len(),
        ..RunSummary::default()
    };
    let mut receipts = Vec::with_capacity(outcomes.len());

    for (index, (basket, outcome)) in baskets.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(receipt) => {
                debug!(
                    file = %basket.file_name(),
                    items = receipt.items.len(),
                    total = %receipt.total,
                    "Receipt computed"
                );
                receipts.push(BasketReceipt {
                    basket: index,
                    receipt,
                });
            }
            Err(err) => match config.processing.on_error {
                ErrorPolicy::Abort => {
                    error!(file = %basket.file_name(), error = %err, "Aborting run");
                    return Err(err)
                        .with_context(|| format!("Invalid basket file {}", basket.path.display()));
                }
                ErrorPolicy::SkipBasket => {
                    warn!(file = %basket.file_name(), error = %err, "Skipping basket");
                    summary.skipped += 1;
                }
            },
        }
    }
    summary.receipts = receipts.len();

    if config.output.print {
        write_report(out, config.output.format, &receipts).context("Failed to print receipts")?;
        out.flush().context("Failed to print receipts")?;
    }

    if config.output.write_files {
        let sink = ReceiptSink::new(&config.output.dir);
        sink.prepare()?;
        for entry in &receipts {
            sink.write(entry.basket, &entry.receipt.to_string())?;
        }
        info!(
            dir = %sink.dir().display(),
            count = receipts.len(),
            "Receipts written"
        );
    }

    if !config.output.print && !config.output.write_files {
        warn!("Printing and file output are both disabled");
    }

    info!(
        baskets = summary.baskets,
        receipts = summary.receipts,
        skipped = summary.skipped,
        "Run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn config_for(input: &Path, output: &Path) -> ReceiptConfig {
        let mut config = ReceiptConfig::default();
        config.input.dir = input.to_path_buf();
        config.output.dir = output.to_path_buf();
        config
    }

    fn run_to_string(config: &ReceiptConfig) -> Result<(RunSummary, String)> {
        let mut out = Vec::new();
        let summary = run_with_output(config, &mut out)?;
        Ok((summary, String::from_utf8(out)?))
    }

    #[test]
    fn test_prints_receipts_in_file_order() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("input2"), "1 chocolate bar at 0.85\n").unwrap();
        fs::write(input.path().join("input1"), "1 music CD at 14.99\n").unwrap();

        let (summary, text) = run_to_string(&config_for(input.path(), output.path())).unwrap();

        assert_eq!(summary.baskets, 2);
        assert_eq!(summary.receipts, 2);
        assert_eq!(
            text,
            "Output 0: \n1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 16.49\n\n\
             Output 1: \n1 chocolate bar: 0.85\nSales Taxes: 0.00\nTotal: 0.85\n\n"
        );
    }

    #[test]
    fn test_skip_basket_keeps_positions() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a"), "1 book at 12.49").unwrap();
        fs::write(input.path().join("b"), "Five phones at 5000.00").unwrap();
        fs::write(input.path().join("c"), "1 popcorn at 2.00").unwrap();

        let mut config = config_for(input.path(), output.path());
        config.output.write_files = true;
        let (summary, text) = run_to_string(&config).unwrap();

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.receipts, 2);
        assert!(text.contains("Output 0: \n1 book: 13.74"));
        assert!(text.contains("Output 2: \n1 popcorn: 2.00"));
        assert!(!text.contains("Output 1:"));

        assert!(output.path().join("output0").exists());
        assert!(!output.path().join("output1").exists());
        assert_eq!(
            fs::read_to_string(output.path().join("output2")).unwrap(),
            "1 popcorn: 2.00\nSales Taxes: 0.00\nTotal: 2.00"
        );
    }

    #[test]
    fn test_abort_prints_nothing() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a"), "1 book at 12.49").unwrap();
        fs::write(input.path().join("b"), "5 loans at -100").unwrap();

        let mut config = config_for(input.path(), output.path());
        config.processing.on_error = ErrorPolicy::Abort;
        config.output.write_files = true;

        let mut out = Vec::new();
        let err = run_with_output(&config, &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(!output.path().join("output0").exists());
        assert!(format!("{:#}", err).contains("Invalid price detected: -100"));
    }

    #[test]
    fn test_missing_input_dir_fails() {
        let root = tempfile::tempdir().unwrap();
        let config = config_for(&root.path().join("missing"), root.path());
        let err = run_to_string(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Input directory not found"));
    }

    #[test]
    fn test_json_output_and_no_print() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("basket"), "1 imported box of chocolates at 10.00").unwrap();

        let mut config = config_for(input.path(), output.path());
        config.output.format = config::OutputFormat::Json;
        let (_, text) = run_to_string(&config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[0]["total"], "10.50");

        config.output.print = false;
        let (summary, text) = run_to_string(&config).unwrap();
        assert_eq!(summary.receipts, 1);
        assert!(text.is_empty());
    }
}

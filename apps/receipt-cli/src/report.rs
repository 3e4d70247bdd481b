//! # Console Report
//!
//! ## Text
//! ```text
//! Output 0:
//! 1 book: 13.74
//! Sales Taxes: 1.25
//! Total: 13.74
//!
//! Output 1:
//! ...
//! ```
//! The header keeps its trailing space (`"Output 0: "`).
//!
//! ## JSON
//! One pretty array; each element is the receipt plus its basket index.
//! Amounts are strings with two decimals.

use receipt_core::Receipt;
use serde::Serialize;
use std::io::{self, Write};

use crate::config::OutputFormat;

/// A receipt tagged with the position of its basket in the run.
#[derive(Debug, Clone, Serialize)]
pub struct BasketReceipt {
    pub basket: usize,
    #[serde(flatten)]
    pub receipt: Receipt,
}

/// Prints receipts in the chosen format.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    receipts: &[BasketReceipt],
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, receipts),
        OutputFormat::Json => write_json(out, receipts),
    }
}

fn write_text<W: Write>(out: &mut W, receipts: &[BasketReceipt]) -> io::Result<()> {
    for entry in receipts {
        writeln!(out, "Output {}: ", entry.basket)?;
        writeln!(out, "{}", entry.receipt)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, receipts: &[BasketReceipt]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, receipts)?;
    writeln!(out)
}

//! # Basket Pipeline
//!
//! Raw baskets in, receipts out.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw baskets: [[line, line, ...], [line, ...], ...]                     │
//! │       │                                                                 │
//! │       ▼  for each basket, in order                                      │
//! │  skip blank lines ──► LineParser::parse ──► Vec<PurchaseRecord>         │
//! │       │                      │                                          │
//! │       │                      └─ first error ──► PipelineError::Line     │
//! │       ▼                                         (basket, line number)   │
//! │  ReceiptFormatter::summarize ──► Receipt                                │
//! │       │                                                                 │
//! │       └─ totals overflow ──► PipelineError::Totals (basket)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policies
//! - [`BasketPipeline::process`]: fail-fast, the first bad line anywhere
//!   stops the run and no receipt is returned.
//! - [`BasketPipeline::process_isolated`]: every basket gets its own
//!   outcome, so a bad basket does not hide the others.

use crate::error::{PipelineError, PipelineResult};
use crate::parser::LineParser;
use crate::receipt::{Receipt, ReceiptFormatter};
use crate::types::Basket;

/// Outcome of one basket under [`BasketPipeline::process_isolated`].
pub type BasketOutcome = PipelineResult<Receipt>;

/// Parses baskets and formats their receipts.
#[derive(Debug, Clone, Default)]
pub struct BasketPipeline {
    parser: LineParser,
    formatter: ReceiptFormatter,
}

impl BasketPipeline {
    /// Creates a pipeline around an explicit parser.
    pub fn new(parser: LineParser) -> Self {
        BasketPipeline {
            parser,
            formatter: ReceiptFormatter::new(),
        }
    }

    /// Renders one receipt per basket, failing on the first bad line.
    pub fn process<B, L>(&self, raw_baskets: &[B]) -> PipelineResult<Vec<String>>
    where
        B: AsRef<[L]>,
        L: AsRef<str>,
    {
        raw_baskets
            .iter()
            .enumerate()
            .map(|(index, lines)| {
                self.process_basket(index, lines.as_ref())
                    .map(|receipt| receipt.to_string())
            })
            .collect()
    }

    /// Evaluates every basket independently.
    ///
    /// The result has exactly one entry per input basket, in input order.
    pub fn process_isolated<B, L>(&self, raw_baskets: &[B]) -> Vec<BasketOutcome>
    where
        B: AsRef<[L]>,
        L: AsRef<str>,
    {
        raw_baskets
            .iter()
            .enumerate()
            .map(|(index, lines)| self.process_basket(index, lines.as_ref()))
            .collect()
    }

    /// Parses and summarizes a single basket.
    ///
    /// `index` is only used to label errors.
    pub fn process_basket<L: AsRef<str>>(&self, index: usize, lines: &[L]) -> BasketOutcome {
        let basket = self.build_basket(index, lines)?;
        self.formatter
            .summarize(&basket)
            .map_err(|source| PipelineError::Totals {
                basket: index,
                source,
            })
    }

    /// Parses every non-blank line of a basket.
    pub fn build_basket<L: AsRef<str>>(&self, index: usize, lines: &[L]) -> PipelineResult<Basket> {
        lines
            .iter()
            .map(as_line)
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_index, line)| {
                self.parser
                    .parse(line)
                    .map_err(|source| PipelineError::Line {
                        basket: index,
                        line_number: line_index + 1,
                        line: line.trim_end().to_string(),
                        source,
                    })
            })
            .collect()
    }
}

fn as_line<L: AsRef<str>>(line: &L) -> &str {
    line.as_ref()
}

// =============================================================================
// Unit Tests
// =============================================================================

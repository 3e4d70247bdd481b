//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ParseError     - A purchase line failed validation                │
//! │  ├── TaxError       - Negative or out-of-range amount                  │
//! │  └── PipelineError  - ParseError + basket/line position, or totals     │
//! │                                                                         │
//! │  receipt-io errors (separate crate)                                    │
//! │  └── IoError        - Reading baskets / writing receipts failed        │
//! │                                                                         │
//! │  Flow: TaxError → ParseError → PipelineError → CLI (anyhow)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every message carries the offending raw value
//! 3. Errors are enum variants, never String

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// A purchase line could not be turned into a [`PurchaseRecord`].
///
/// The record is never partially built: the first failing field wins.
///
/// [`PurchaseRecord`]: crate::types::PurchaseRecord
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The quantity token is not a number at all.
    ///
    /// ## Example
    /// `"Five phones at 5000.00"`
    #[error("Non-numeral quantity detected: {value}")]
    NonNumericQuantity { value: String },

    /// The quantity is a number, but negative or fractional.
    ///
    /// ## Example
    /// `"-5 phones at 5000.00"`, `"2.5 phones at 5000.00"`
    #[error("Invalid quantity detected: {value} ({reason})")]
    InvalidQuantity { value: String, reason: String },

    /// The price token is not a number once separators are stripped.
    ///
    /// ## Example
    /// `"5 loans at Hundred"`
    #[error("Non-numeral price detected: {value}")]
    NonNumericPrice { value: String },

    /// The price is a number, but negative or beyond what an amount holds.
    ///
    /// ## Example
    /// `"5 loans at -100"`, `"1 star at 1e40"`
    #[error("Invalid price detected: {value} ({reason})")]
    InvalidPrice { value: String, reason: String },

    /// The line does not follow `QUANTITY [imported] NAME at PRICE`.
    ///
    /// ## When This Occurs
    /// - Too few tokens (`"3 at"`)
    /// - The token before the price is not `at`
    /// - Nothing left for the name (`"1 imported at 5.00"`)
    #[error("Malformed purchase line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },

    /// Tax could not be computed for the parsed price.
    #[error(transparent)]
    Tax(#[from] TaxError),
}

// =============================================================================
// Tax Error
// =============================================================================

/// Tax computation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    /// Rounding was asked to handle a negative amount.
    ///
    /// Prices are validated non-negative before tax runs, so this only
    /// fires if a caller builds a record by hand with a negative price.
    #[error("Negative tax is not valid: {amount}")]
    NegativeTax { amount: Decimal },

    /// An intermediate amount does not fit in a `Decimal`.
    ///
    /// ## When This Occurs
    /// - Tax on a price close to `Decimal::MAX`
    /// - A huge quantity times a large price
    /// - Basket totals summing past the limit
    #[error("Amount out of range while computing {what}")]
    AmountOverflow { what: &'static str },
}

// =============================================================================
// Pipeline Error
// =============================================================================

/// A basket could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// One line of one basket failed to parse.
    ///
    /// `basket` is the 0-based basket index, `line_number` is 1-based so it
    /// matches what an editor shows for the input file.
    #[error("basket {basket}, line {line_number} ('{line}'): {source}")]
    Line {
        basket: usize,
        line_number: usize,
        line: String,
        #[source]
        source: ParseError,
    },

    /// Every line parsed, but the basket's totals overflowed.
    #[error("basket {basket}: {source}")]
    Totals {
        basket: usize,
        #[source]
        source: TaxError,
    },
}

impl PipelineError {
    /// Index of the basket that failed.
    pub fn basket(&self) -> usize {
        match self {
            PipelineError::Line { basket, .. } | PipelineError::Totals { basket, .. } => *basket,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for parsing results.
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for tax results.
pub type TaxResult<T> = Result<T, TaxError>;

/// Convenience type alias for pipeline results.
pub type PipelineResult<T> = Result<T, PipelineError>;

// =============================================================================
// Unit Tests
// =============================================================================

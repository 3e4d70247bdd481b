//! # receipt-core: Pure Receipt Logic
//!
//! This crate is the **heart** of the receipts workspace. It turns purchase
//! lines into taxed receipts as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipts Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipts (CLI binary)                        │   │
//! │  │    config ──► read input dir ──► print / write receipts         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  parser   │  │    tax    │  │  receipt  │  │ pipeline  │  │   │
//! │  │   │ LineParser│─►│ TaxCalc   │  │ Formatter │◄─│  Basket   │  │   │
//! │  │   │ Exemption │  │ roundUp   │  │ Receipt   │  │ Pipeline  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                    receipt-io (File Layer)                      │   │
//! │  │              input dir → raw baskets, receipts → output dir     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PurchaseRecord, Basket, TaxRate)
//! - [`money`] - Decimal money and the receipt number format
//! - [`validation`] - Quantity / price token validation
//! - [`parser`] - Purchase line parsing and tax-exempt classification
//! - [`tax`] - Basic and import tax with round-up-to-0.05
//! - [`receipt`] - Receipt aggregation and text
//! - [`pipeline`] - Raw baskets to receipts
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::BasketPipeline;
//!
//! let baskets = vec![vec![
//!     "1 imported box of chocolates at 10.00",
//!     "1 imported bottle of perfume at 47.50",
//! ]];
//!
//! let receipts = BasketPipeline::default().process(&baskets).unwrap();
//! assert_eq!(
//!     receipts[0],
//!     "1 imported box of chocolates: 10.50\n\
//!      1 imported bottle of perfume: 54.65\n\
//!      Sales Taxes: 7.65\n\
//!      Total: 65.15"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod parser;
pub mod pipeline;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ParseError, PipelineError, TaxError};
pub use money::Money;
pub use parser::{ExemptionList, LineParser};
pub use pipeline::{BasketOutcome, BasketPipeline};
pub use receipt::{Receipt, ReceiptFormatter, ReceiptLine};
pub use tax::{TaxBreakdown, TaxCalculator, TaxPolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basic sales tax, in basis points (10%).
pub const BASIC_SALES_TAX_BPS: u32 = 1000;

/// Import duty, in basis points (5%). Applies to exempt items too.
pub const IMPORT_DUTY_BPS: u32 = 500;

/// Names containing one of these are exempt from basic sales tax.
///
/// Illustrative, not a tax code. Import duty still applies.
pub const DEFAULT_EXEMPT_KEYWORDS: &[&str] = &[
    "skittles",
    "popcorn",
    "coffee",
    "snickers",
    "chocolate",
    "M&Ms",
    "gummy bears",
];

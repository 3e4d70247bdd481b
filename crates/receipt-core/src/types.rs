//! # Domain Types
//!
//! Core domain types used throughout the receipt pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PurchaseRecord  │   │     Basket      │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Vec<Purchase-  │   │  bps (u32)      │       │
//! │  │  quantity       │◄──│       Record>   │   │  1000 = 10%     │       │
//! │  │  unit_price     │   │  input order    │   │   500 =  5%     │       │
//! │  │  tax_free       │   └─────────────────┘   └─────────────────┘       │
//! │  │  imported       │                                                    │
//! │  │  sales_tax      │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! A `PurchaseRecord` computes its sales tax and line amounts when it is
//! built and exposes only getters afterwards. There is no "tax not computed
//! yet" state, and an amount that would overflow fails construction.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{TaxError, TaxResult};
use crate::money::Money;
use crate::tax::TaxCalculator;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (basic sales tax), 500 bps = 5% (import duty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact decimal fraction (1000 bps → 0.1000).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One parsed purchase line with its sales tax already computed.
///
/// ## Line Anatomy
/// ```text
/// [5]        [imported]?       [bags of candy]            [at] [10.99]
/// quantity   imported flag     name (tax-free lookup)          unit price
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRecord {
    name: String,
    quantity: u64,
    unit_price: Money,
    tax_free: bool,
    imported: bool,
    sales_tax: Money,
    #[serde(skip)]
    unit_price_with_tax: Money,
    #[serde(skip)]
    line_tax: Money,
    #[serde(skip)]
    line_subtotal: Money,
}

impl PurchaseRecord {
    /// Builds a record and computes its per-unit sales tax and line amounts.
    ///
    /// ## Errors
    /// - `TaxError::NegativeTax` if `unit_price` is negative. The parser
    ///   rejects negative prices first, so this only matters for hand-built
    ///   records.
    /// - `TaxError::AmountOverflow` if the tax, the taxed unit price or a
    ///   quantity product does not fit in a `Decimal`.
    pub fn new(
        name: impl Into<String>,
        quantity: u64,
        unit_price: Money,
        tax_free: bool,
        imported: bool,
        calculator: &TaxCalculator,
    ) -> TaxResult<Self> {
        let sales_tax = calculator
            .compute_tax(unit_price, tax_free, imported)?
            .total;

        let unit_price_with_tax = unit_price
            .checked_add(sales_tax)
            .ok_or(TaxError::AmountOverflow {
                what: "unit price with tax",
            })?;
        let line_tax = sales_tax
            .checked_multiply_quantity(quantity)
            .ok_or(TaxError::AmountOverflow { what: "line tax" })?;
        let line_subtotal = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or(TaxError::AmountOverflow {
                what: "line subtotal",
            })?;

        Ok(PurchaseRecord {
            name: name.into(),
            quantity,
            unit_price,
            tax_free,
            imported,
            sales_tax,
            unit_price_with_tax,
            line_tax,
            line_subtotal,
        })
    }

    /// Product name, words joined by single spaces.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of identical units purchased.
    #[inline]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Price of one unit, before tax.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Whether the name matched the exemption list.
    #[inline]
    pub fn is_tax_free(&self) -> bool {
        self.tax_free
    }

    /// Whether the line declared the item as imported.
    #[inline]
    pub fn is_imported(&self) -> bool {
        self.imported
    }

    /// Sales tax on ONE unit (basic + import, each rounded up).
    #[inline]
    pub fn sales_tax(&self) -> Money {
        self.sales_tax
    }

    /// Unit price including its sales tax (what the receipt line shows).
    #[inline]
    pub fn unit_price_with_tax(&self) -> Money {
        self.unit_price_with_tax
    }

    /// Sales tax for the whole line (quantity × per-unit tax).
    #[inline]
    pub fn line_tax(&self) -> Money {
        self.line_tax
    }

    /// Price of the whole line before tax (quantity × unit price).
    #[inline]
    pub fn line_subtotal(&self) -> Money {
        self.line_subtotal
    }
}

// =============================================================================
// Basket
// =============================================================================

/// The purchases of one receipt, in input line order.
pub type Basket = Vec<PurchaseRecord>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    A ceil() step after that turns a float error into a whole nickel    │
//! │                                                                         │
//! │  Integer cents would fix the arithmetic, but input prices may carry    │
//! │  more than two decimals and the receipt format depends on them.        │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal (rust_decimal)                          │
//! │    Exact for every price a human can type                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_decimal(Decimal::new(1099, 2)); // 10.99
//! let doubled = price.checked_multiply_quantity(2);        // Some(21.98)
//! assert_eq!(doubled.map(|m| m.to_string()), Some("21.98".to_string()));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in currency units (e.g. dollars, not cents).
///
/// ## Design Decisions
/// - **Decimal**: exact base-10 arithmetic, unbounded practical precision
/// - **Single field tuple struct**: Zero-cost abstraction over Decimal
/// - **Display**: the receipt format (`10,000.45`)
/// - **Checked arithmetic only**: `Decimal` panics on overflow, so sums and
///   products return `None` instead of exposing `+` / `*`
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  "at 14.99" ──► PurchaseRecord.unit_price ──► × 0.10 ──► round up      │
/// │                                 │                          │            │
/// │                                 │               PurchaseRecord.sales_tax│
/// │                                 ▼                          ▼            │
/// │                 Receipt line "1 music CD: 16.49" ◄── price + tax       │
/// │                                                                         │
/// │  Σ qty × sales_tax ──► "Sales Taxes: 1.50"                             │
/// │  Σ qty × price + taxes ──► "Total: 16.49"                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Adds two amounts, or `None` if the sum does not fit.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies money by a quantity, or `None` if the product does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let unit_price = Money::from_decimal(Decimal::new(299, 2)); // 2.99
    /// let line_total = unit_price.checked_multiply_quantity(3);
    /// assert_eq!(line_total.map(|m| m.amount()), Some(Decimal::new(897, 2))); // 8.97
    ///
    /// assert!(Money::from_decimal(Decimal::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Renders the amount the way receipts print it.
    ///
    /// ## The Two-Step Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  1. fixed   = round half-up to 2 decimals   10000.456 → "10000.46"  │
    /// │  2. decimals = last two chars of fixed                   "46"       │
    /// │  3. whole   = floor(UNROUNDED amount)       10000.456 → 10000       │
    /// │  4. grouped = thousands separated by ','                 "10,000"   │
    /// │                                                                     │
    /// │  result = grouped + "." + decimals                   "10,000.46"   │
    /// │                                                                     │
    /// │  The whole part comes from the unrounded amount, so a value that   │
    /// │  rounds across an integer keeps its old whole part:                 │
    /// │     9.999 → fixed "10.00", floor 9 → "9.00"                          │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn to_receipt_string(&self) -> String {
        let fixed = format!("{:.2}", self.fixed_two_places());
        let decimals = &fixed[fixed.len() - 2..];

        let whole = self.0.floor();
        let sign = if whole.is_sign_negative() && !whole.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{}{}.{}",
            sign,
            group_thousands(&whole.abs().trunc().to_string()),
            decimals
        )
    }

    /// Round half-up (away from zero) to two decimal places.
    fn fixed_two_places(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Inserts `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the receipt format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_receipt_string())
    }
}

/// Serialized as a plain two-decimal string (`"1234.50"`), no grouping.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", self.fixed_two_places()))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

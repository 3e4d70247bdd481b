//! # Tax Module
//!
//! Sales tax for a single unit of a purchase.
//!
//! ## Tax Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Per-Unit Sales Tax                               │
//! │                                                                         │
//! │                 tax_free?          imported?                            │
//! │                    │                  │                                 │
//! │           no ──────┤          yes ────┤                                 │
//! │                    ▼                  ▼                                 │
//! │     basic  = roundUp(price × 10%)   import = roundUp(price × 5%)       │
//! │                                                                         │
//! │           yes → basic = 0           no → import = 0                    │
//! │                                                                         │
//! │     total  = basic + import                                            │
//! │                                                                         │
//! │  roundUp(x) = ceil(x / 0.05) × 0.05        (never rounds down)         │
//! │     0.00 → 0.00   0.50 → 0.50   0.5625 → 0.60   1.001 → 1.05           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each component is rounded on its own before they are added, so
//! `roundUp(a) + roundUp(b)` and not `roundUp(a + b)`.
//!
//! Every step uses checked `Decimal` arithmetic. A price too close to
//! `Decimal::MAX` yields `TaxError::AmountOverflow` rather than a panic.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{TaxError, TaxResult};
use crate::money::Money;
use crate::types::TaxRate;
use crate::{BASIC_SALES_TAX_BPS, IMPORT_DUTY_BPS};

// =============================================================================
// Tax Policy
// =============================================================================

/// Rates and rounding increment used by a [`TaxCalculator`].
///
/// Immutable once built. The default is the only policy the CLI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxPolicy {
    /// Applied to every item not on the exemption list.
    pub basic_rate: TaxRate,
    /// Applied to every imported item, exempt or not.
    pub import_rate: TaxRate,
    /// Each tax component is rounded up to a multiple of this.
    pub rounding_increment: Decimal,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy {
            basic_rate: TaxRate::from_bps(BASIC_SALES_TAX_BPS),
            import_rate: TaxRate::from_bps(IMPORT_DUTY_BPS),
            rounding_increment: Decimal::new(5, 2),
        }
    }
}

// =============================================================================
// Tax Breakdown
// =============================================================================

/// Result of [`TaxCalculator::compute_tax`]: the two components and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaxBreakdown {
    pub basic: Money,
    pub import: Money,
    pub total: Money,
}

// =============================================================================
// Tax Calculator
// =============================================================================

/// Computes per-unit sales tax. Pure: same inputs, same output.
#[derive(Debug, Clone, Default)]
pub struct TaxCalculator {
    policy: TaxPolicy,
}

impl TaxCalculator {
    /// Creates a calculator with the given policy.
    pub fn new(policy: TaxPolicy) -> Self {
        TaxCalculator { policy }
    }

    /// The policy this calculator applies.
    pub fn policy(&self) -> &TaxPolicy {
        &self.policy
    }

    /// Computes basic tax, import tax and their sum for one unit.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use receipt_core::tax::TaxCalculator;
    /// use rust_decimal::Decimal;
    ///
    /// let calculator = TaxCalculator::default();
    /// let price = Money::from_decimal(Decimal::new(1000, 2)); // 10.00
    ///
    /// let tax = calculator.compute_tax(price, false, true).unwrap();
    /// assert_eq!(tax.basic.amount(), Decimal::new(100, 2));  // 1.00
    /// assert_eq!(tax.import.amount(), Decimal::new(50, 2));  // 0.50
    /// assert_eq!(tax.total.amount(), Decimal::new(150, 2));  // 1.50
    /// ```
    pub fn compute_tax(
        &self,
        unit_price: Money,
        tax_free: bool,
        imported: bool,
    ) -> TaxResult<TaxBreakdown> {
        let basic = if tax_free {
            Money::zero()
        } else {
            self.component(unit_price, self.policy.basic_rate)?
        };

        let import = if imported {
            self.component(unit_price, self.policy.import_rate)?
        } else {
            Money::zero()
        };

        let total = basic
            .checked_add(import)
            .ok_or(TaxError::AmountOverflow { what: "sales tax" })?;

        Ok(TaxBreakdown {
            basic,
            import,
            total,
        })
    }

    /// Rounds an amount up to the next multiple of the policy increment.
    ///
    /// ## Errors
    /// - `TaxError::NegativeTax` when `amount` is below zero
    /// - `TaxError::AmountOverflow` when the rounded amount does not fit
    pub fn round_up(&self, amount: Decimal) -> TaxResult<Money> {
        round_up_to(amount, self.policy.rounding_increment)
    }

    fn component(&self, unit_price: Money, rate: TaxRate) -> TaxResult<Money> {
        let raw = unit_price
            .amount()
            .checked_mul(rate.as_decimal())
            .ok_or(TaxError::AmountOverflow { what: "sales tax" })?;
        self.round_up(raw)
    }
}

/// `ceil(amount / increment) × increment`, rejecting negative amounts.
///
/// A zero increment means "no rounding".
pub fn round_up_to(amount: Decimal, increment: Decimal) -> TaxResult<Money> {
    if amount < Decimal::ZERO {
        return Err(TaxError::NegativeTax { amount });
    }
    if increment.is_zero() {
        return Ok(Money::from_decimal(amount));
    }

    let overflow = TaxError::AmountOverflow {
        what: "tax rounding",
    };
    let steps = amount
        .checked_div(increment)
        .ok_or_else(|| overflow.clone())?
        .ceil();
    steps
        .checked_mul(increment)
        .map(Money::from_decimal)
        .ok_or(overflow)
}

// =============================================================================
// Unit Tests
// =============================================================================

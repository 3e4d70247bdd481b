//! # Receipt Module
//!
//! Builds the receipt for one basket.
//!
//! ## Receipt Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1 imported box of chocolates: 10.50     ◄── one line per record,      │
//! │  1 imported bottle of perfume: 54.65         basket order, UNIT price  │
//! │  Sales Taxes: 7.65                       ◄── Σ quantity × sales_tax    │
//! │  Total: 65.15                            ◄── Σ quantity × price + tax  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are joined with `\n` and the text has no trailing newline.
//! Amounts use [`Money`]'s receipt format. Totals are summed with checked
//! arithmetic, so a basket whose totals do not fit fails with
//! `TaxError::AmountOverflow`.

use serde::Serialize;
use std::fmt;

use crate::error::{TaxError, TaxResult};
use crate::money::Money;
use crate::types::PurchaseRecord;

// =============================================================================
// Receipt Line
// =============================================================================

/// One printed item line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub quantity: u64,
    pub imported: bool,
    pub name: String,
    /// Price of one unit including its sales tax.
    pub price: Money,
}

impl From<&PurchaseRecord> for ReceiptLine {
    fn from(record: &PurchaseRecord) -> Self {
        ReceiptLine {
            quantity: record.quantity(),
            imported: record.is_imported(),
            name: record.name().to_string(),
            price: record.unit_price_with_tax(),
        }
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.quantity)?;
        if self.imported {
            f.write_str("imported ")?;
        }
        write!(f, "{}: {}", self.name, self.price)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A rendered basket: item lines plus the two totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Receipt {
    pub items: Vec<ReceiptLine>,
    pub sales_taxes: Money,
    pub total: Money,
}

impl Receipt {
    /// Checks if the basket had no purchases.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        writeln!(f, "Sales Taxes: {}", self.sales_taxes)?;
        write!(f, "Total: {}", self.total)
    }
}

// =============================================================================
// Receipt Formatter
// =============================================================================

/// Aggregates a basket into a [`Receipt`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptFormatter;

impl ReceiptFormatter {
    pub fn new() -> Self {
        ReceiptFormatter
    }

    /// Builds the structured receipt.
    ///
    /// ## Errors
    /// `TaxError::AmountOverflow` when the sales taxes or the total do not fit.
    pub fn summarize(&self, basket: &[PurchaseRecord]) -> TaxResult<Receipt> {
        let sales_taxes = checked_sum(basket.iter().map(PurchaseRecord::line_tax), "sales taxes")?;
        let subtotal = checked_sum(basket.iter().map(PurchaseRecord::line_subtotal), "total")?;
        let total = subtotal
            .checked_add(sales_taxes)
            .ok_or(TaxError::AmountOverflow { what: "total" })?;

        Ok(Receipt {
            items: basket.iter().map(ReceiptLine::from).collect(),
            sales_taxes,
            total,
        })
    }

    /// Renders the receipt text.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::parser::LineParser;
    /// use receipt_core::receipt::ReceiptFormatter;
    ///
    /// let parser = LineParser::default();
    /// let basket = vec![
    ///     parser.parse("1 book at 12.49").unwrap(),
    ///     parser.parse("1 chocolate bar at 0.85").unwrap(),
    /// ];
    ///
    /// assert_eq!(
    ///     ReceiptFormatter::new().render(&basket).unwrap(),
    ///     "1 book: 13.74\n1 chocolate bar: 0.85\nSales Taxes: 1.25\nTotal: 14.59"
    /// );
    /// ```
    pub fn render(&self, basket: &[PurchaseRecord]) -> TaxResult<String> {
        self.summarize(basket).map(|receipt| receipt.to_string())
    }
}

fn checked_sum(mut amounts: impl Iterator<Item = Money>, what: &'static str) -> TaxResult<Money> {
    amounts.try_fold(Money::zero(), |acc, amount| {
        acc.checked_add(amount).ok_or(TaxError::AmountOverflow { what })
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LineParser;
    use rust_decimal_macros::dec;

    fn basket(lines: &[&str]) -> Vec<PurchaseRecord> {
        let parser = LineParser::default();
        lines.iter().map(|line| parser.parse(line).unwrap()).collect()
    }

    fn render(lines: &[&str]) -> String {
        ReceiptFormatter::new().render(&basket(lines)).unwrap()
    }

    fn summarize(lines: &[&str]) -> Receipt {
        ReceiptFormatter::new().summarize(&basket(lines)).unwrap()
    }

    #[test]
    fn test_empty_basket() {
        assert_eq!(render(&[]), "Sales Taxes: 0.00\nTotal: 0.00");
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_line_shows_unit_price_with_tax() {
        let text = render(&["3 imported bottles of wine at 20.00"]);
        assert_eq!(
            text,
            "3 imported bottles of wine: 23.00\nSales Taxes: 9.00\nTotal: 69.00"
        );
    }

    #[test]
    fn test_totals_multiply_quantity() {
        let receipt = summarize(&[
            "5 trucks of ice cream at 100.00",
            "2 bags of popcorn at 1.50",
        ]);

        assert_eq!(receipt.sales_taxes.amount(), dec!(50));
        assert_eq!(receipt.total.amount(), dec!(553));
        assert_eq!(receipt.items.len(), 2);
    }

    #[test]
    fn test_lines_keep_basket_order() {
        let text = render(&["1 zebra at 1.00", "1 aardvark at 1.00"]);
        let first_lines: Vec<&str> = text.lines().take(2).collect();
        assert_eq!(first_lines, vec!["1 zebra: 1.10", "1 aardvark: 1.10"]);
    }

    #[test]
    fn test_large_amounts_are_grouped() {
        let text = render(&["2 imported cars at 25,000.00"]);
        assert_eq!(
            text,
            "2 imported cars: 28,750.00\nSales Taxes: 7,500.00\nTotal: 57,500.00"
        );
    }

    #[test]
    fn test_zero_quantity_prints_but_adds_nothing() {
        let text = render(&["0 music CD at 14.99"]);
        assert_eq!(text, "0 music CD: 16.49\nSales Taxes: 0.00\nTotal: 0.00");
    }

    #[test]
    fn test_receipt_serializes_to_json() {
        let receipt = summarize(&["1 imported box of chocolates at 10.00"]);
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["sales_taxes"], "0.50");
        assert_eq!(json["total"], "10.50");
        assert_eq!(json["items"][0]["name"], "box of chocolates");
        assert_eq!(json["items"][0]["imported"], true);
        assert_eq!(json["items"][0]["price"], "10.50");
    }

    #[test]
    fn test_single_max_price_line_renders() {
        let text = render(&["1 box of chocolates at 79228162514264337593543950335"]);
        assert_eq!(
            text,
            "1 box of chocolates: 79,228,162,514,264,337,593,543,950,335.00\n\
             Sales Taxes: 0.00\n\
             Total: 79,228,162,514,264,337,593,543,950,335.00"
        );
    }

    #[test]
    fn test_total_overflow_across_lines_is_an_error() {
        let records = basket(&[
            "1 box of chocolates at 79228162514264337593543950335",
            "1 box of chocolates at 79228162514264337593543950335",
        ]);

        let err = ReceiptFormatter::new().summarize(&records).unwrap_err();
        assert_eq!(err, TaxError::AmountOverflow { what: "total" });
        assert!(ReceiptFormatter::new().render(&records).is_err());
    }

    #[test]
    fn test_max_quantity_small_price_totals() {
        let receipt = summarize(&["18446744073709551615 pens at 1.00"]);
        assert_eq!(receipt.sales_taxes.amount(), dec!(1844674407370955161.5));
        assert_eq!(receipt.total.amount(), dec!(20291418481080506776.5));
    }
}

//! # Line Parser
//!
//! Turns one purchase description into a [`PurchaseRecord`].
//!
//! ## Line Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QUANTITY [imported] NAME... at PRICE                                   │
//! │                                                                         │
//! │   "1   imported   box of chocolates   at   10.00"                       │
//! │    │      │              │             │     │                          │
//! │    │      │              │             │     └─ last token, ',' dropped │
//! │    │      │              │             └─ literal, case-insensitive     │
//! │    │      │              └─ every token in between, joined by ' '      │
//! │    │      └─ token[1], case-insensitive, optional                      │
//! │    └─ token[0], whole non-negative number                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Order
//! 1. Quantity (`NonNumericQuantity`, `InvalidQuantity`)
//! 2. Shape of the line (`MalformedLine`)
//! 3. Price (`NonNumericPrice`, `InvalidPrice`)
//! 4. Tax and line amounts (`Tax`, e.g. an amount past `Decimal::MAX`)
//!
//! The first failure is returned; nothing is built.

use crate::error::{ParseError, ParseResult};
use crate::tax::TaxCalculator;
use crate::types::PurchaseRecord;
use crate::validation::{validate_price, validate_quantity};
use crate::DEFAULT_EXEMPT_KEYWORDS;

const IMPORTED_TOKEN: &str = "imported";
const PRICE_MARKER: &str = "at";

// =============================================================================
// Exemption List
// =============================================================================

/// Keywords that make a purchase exempt from basic sales tax.
///
/// ## Matching Rules
/// - Case-insensitive
/// - Whole words only: `coffee` matches "bag of coffee", not "coffeemaker"
/// - Multi-word keywords match consecutive words: "gummy bears"
/// - The last word may carry a plural `s`: "box of chocolates"
#[derive(Debug, Clone)]
pub struct ExemptionList {
    /// Each keyword, lowercased and split into words.
    keywords: Vec<Vec<String>>,
}

impl ExemptionList {
    /// Builds a list from keyword phrases.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|keyword| {
                keyword
                    .as_ref()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .collect();

        ExemptionList { keywords }
    }

    /// Checks whether any keyword appears in the name.
    pub fn matches(&self, name: &str) -> bool {
        let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();

        self.keywords.iter().any(|keyword| {
            words
                .windows(keyword.len())
                .any(|window| phrase_matches(window, keyword))
        })
    }
}

impl Default for ExemptionList {
    fn default() -> Self {
        ExemptionList::new(DEFAULT_EXEMPT_KEYWORDS)
    }
}

fn phrase_matches(window: &[String], keyword: &[String]) -> bool {
    let last = keyword.len() - 1;
    window.iter().zip(keyword).enumerate().all(|(i, (word, key))| {
        word == key || (i == last && word.strip_suffix('s') == Some(key.as_str()))
    })
}

// =============================================================================
// Line Parser
// =============================================================================

/// Parses purchase lines into tax-computed records.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    exemptions: ExemptionList,
    calculator: TaxCalculator,
}

impl LineParser {
    /// Creates a parser with an explicit exemption list and tax calculator.
    pub fn new(exemptions: ExemptionList, calculator: TaxCalculator) -> Self {
        LineParser {
            exemptions,
            calculator,
        }
    }

    /// Parses one line.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::parser::LineParser;
    ///
    /// let record = LineParser::default()
    ///     .parse("5 imported bags of skittles at 10.00")
    ///     .unwrap();
    ///
    /// assert_eq!(record.quantity(), 5);
    /// assert_eq!(record.name(), "bags of skittles");
    /// assert!(record.is_imported());
    /// assert!(record.is_tax_free());
    /// assert_eq!(record.sales_tax().to_string(), "0.50");
    /// ```
    pub fn parse(&self, line: &str) -> ParseResult<PurchaseRecord> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let quantity_token = tokens
            .first()
            .copied()
            .ok_or_else(|| malformed(line, "empty line"))?;
        let quantity = validate_quantity(quantity_token)?;

        if tokens.len() < 3 {
            return Err(malformed(line, "expected 'QUANTITY [imported] NAME at PRICE'"));
        }

        let imported = tokens[1].eq_ignore_ascii_case(IMPORTED_TOKEN);
        let name_start = if imported { 2 } else { 1 };
        let name_end = tokens.len() - 2;

        if !tokens[name_end].eq_ignore_ascii_case(PRICE_MARKER) {
            return Err(malformed(line, "missing 'at' before the price"));
        }

        let unit_price = validate_price(tokens[tokens.len() - 1])?;

        if name_start >= name_end {
            return Err(malformed(line, "missing item name"));
        }
        let name = tokens[name_start..name_end].join(" ");
        let tax_free = self.exemptions.matches(&name);

        let record = PurchaseRecord::new(
            name,
            quantity,
            unit_price,
            tax_free,
            imported,
            &self.calculator,
        )?;

        Ok(record)
    }
}

fn malformed(line: &str, reason: &str) -> ParseError {
    ParseError::MalformedLine {
        line: line.trim().to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaxError;
    use rust_decimal_macros::dec;

    fn parse(line: &str) -> ParseResult<PurchaseRecord> {
        LineParser::default().parse(line)
    }

    #[test]
    fn test_parse_tax_free_purchase() {
        let record = parse("5 bags of skittles at 10.00").unwrap();
        assert_eq!(record.name(), "bags of skittles");
        assert_eq!(record.quantity(), 5);
        assert_eq!(record.unit_price().amount(), dec!(10));
        assert!(record.is_tax_free());
        assert!(!record.is_imported());
        assert!(record.sales_tax().is_zero());
    }

    #[test]
    fn test_parse_imported_purchase() {
        let record = parse("5 imported bags of skittles at 10.00").unwrap();
        assert_eq!(record.name(), "bags of skittles");
        assert!(record.is_tax_free());
        assert!(record.is_imported());
        assert_eq!(record.sales_tax().amount(), dec!(0.50));
    }

    #[test]
    fn test_parse_taxed_purchase() {
        let record = parse("5 trucks of ice cream at 100.00").unwrap();
        assert_eq!(record.name(), "trucks of ice cream");
        assert!(!record.is_tax_free());
        assert!(!record.is_imported());
        assert_eq!(record.sales_tax().amount(), dec!(10));
    }

    #[test]
    fn test_parse_imported_taxed_purchase() {
        let record = parse("5 imported trucks of ice cream at 100").unwrap();
        assert_eq!(record.name(), "trucks of ice cream");
        assert_eq!(record.quantity(), 5);
        assert_eq!(record.unit_price().amount(), dec!(100));
        assert_eq!(record.sales_tax().amount(), dec!(15));
    }

    #[test]
    fn test_imported_token_is_case_insensitive() {
        let record = parse("1 IMPORTED bottle of perfume at 47.50").unwrap();
        assert!(record.is_imported());
        assert_eq!(record.name(), "bottle of perfume");
    }

    #[test]
    fn test_imported_only_counts_after_quantity() {
        let record = parse("1 box of imported chocolates at 11.25").unwrap();
        assert!(!record.is_imported());
        assert_eq!(record.name(), "box of imported chocolates");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let record = parse("  2   book \t at  12.49\r").unwrap();
        assert_eq!(record.name(), "book");
        assert_eq!(record.quantity(), 2);
    }

    #[test]
    fn test_price_thousands_separators_are_stripped() {
        let record = parse("1 car at 1,234,567.89").unwrap();
        assert_eq!(record.unit_price().amount(), dec!(1234567.89));
    }

    #[test]
    fn test_zero_quantity_is_allowed() {
        let record = parse("0 music CD at 14.99").unwrap();
        assert_eq!(record.quantity(), 0);
    }

    #[test]
    fn test_integral_decimal_quantity_is_allowed() {
        assert_eq!(parse("3.0 pens at 1.00").unwrap().quantity(), 3);
        assert_eq!(parse("1e2 pens at 1.00").unwrap().quantity(), 100);
    }

    #[test]
    fn test_negative_quantity_fails() {
        let err = parse("-5 phones at 5000.00").unwrap_err();
        assert!(matches!(err, ParseError::InvalidQuantity { ref value, .. } if value == "-5"));
    }

    #[test]
    fn test_fractional_quantity_fails() {
        let err = parse("2.5 phones at 5000.00").unwrap_err();
        assert!(matches!(err, ParseError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_non_numeric_quantity_fails() {
        let err = parse("Five phones at 5000.00").unwrap_err();
        assert_eq!(
            err,
            ParseError::NonNumericQuantity {
                value: "Five".to_string()
            }
        );
    }

    #[test]
    fn test_negative_price_fails() {
        let err = parse("5 loans at -100").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidPrice {
                value: "-100".to_string(),
                reason: "negative".to_string(),
            }
        );
    }

    #[test]
    fn test_huge_price_is_a_typed_error() {
        let err = parse("1 star at 1e40").unwrap_err();
        assert_eq!(err.to_string(), "Invalid price detected: 1e40 (out of range)");

        let err = parse("1 car at 79228162514264337593543950335").unwrap_err();
        assert!(matches!(err, ParseError::Tax(TaxError::AmountOverflow { .. })));
        assert!(err.to_string().starts_with("Amount out of range"));
    }

    #[test]
    fn test_non_numeric_price_fails() {
        let err = parse("5 loans at Hundred").unwrap_err();
        assert_eq!(
            err,
            ParseError::NonNumericPrice {
                value: "Hundred".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_lines_fail() {
        for line in ["", "3", "3 at", "1 book 12.49", "1 imported at 5.00", "2 at 5.00"] {
            assert!(
                matches!(parse(line), Err(ParseError::MalformedLine { .. })),
                "expected malformed: {line:?}"
            );
        }
    }

    #[test]
    fn test_quantity_is_checked_before_shape() {
        assert!(matches!(
            parse("lots"),
            Err(ParseError::NonNumericQuantity { .. })
        ));
    }

    #[test]
    fn test_exemption_matching() {
        let exemptions = ExemptionList::default();

        assert!(exemptions.matches("packet of Coffee"));
        assert!(exemptions.matches("box of chocolates"));
        assert!(exemptions.matches("bag of M&Ms"));
        assert!(exemptions.matches("jar of gummy bears"));
        assert!(exemptions.matches("popcorn"));

        assert!(!exemptions.matches("coffeemaker"));
        assert!(!exemptions.matches("gummy worms"));
        assert!(!exemptions.matches("bottle of perfume"));
        assert!(!exemptions.matches(""));
    }

    #[test]
    fn test_custom_exemption_list() {
        let parser = LineParser::new(
            ExemptionList::new(["book", "headache pills"]),
            TaxCalculator::default(),
        );
        assert!(parser.parse("1 book at 12.49").unwrap().is_tax_free());
        assert!(parser
            .parse("1 packet of headache pills at 9.75")
            .unwrap()
            .is_tax_free());
        assert!(!parser.parse("1 chocolate bar at 0.85").unwrap().is_tax_free());
    }
}

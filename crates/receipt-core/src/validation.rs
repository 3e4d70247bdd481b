//! # Validation Module
//!
//! Field validators for purchase lines.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Token → Value                                      │
//! │                                                                         │
//! │  quantity token "5"                                                    │
//! │       │                                                                 │
//! │       ├── not a number?   → NonNumericQuantity { "Five" }              │
//! │       ├── too big?        → InvalidQuantity { "1e40", "out of range" } │
//! │       ├── below zero?     → InvalidQuantity { "-5", "negative" }       │
//! │       ├── has a fraction? → InvalidQuantity { "2.5", "not an integer" }│
//! │       └── OK → u64                                                     │
//! │                                                                         │
//! │  price token "1,499.99"                                                │
//! │       │                                                                 │
//! │       ├── drop every ','                                               │
//! │       ├── not a number?   → NonNumericPrice { "Hundred" }              │
//! │       ├── too big?        → InvalidPrice { "1e40", "out of range" }    │
//! │       ├── below zero?     → InvalidPrice { "-100", "negative" }        │
//! │       └── OK → Money                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors always carry the raw token as it appeared in the line.
//!
//! "Too big" means the token is numeric text that `Decimal` cannot hold:
//! more than 28 significant integer digits, or an exponent past its range.
//! Fraction digits beyond 28 are rounded by `Decimal` rather than rejected.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{validate_price, validate_quantity};
//!
//! assert_eq!(validate_quantity("5").unwrap(), 5);
//! assert_eq!(validate_price("1,000.50").unwrap().to_string(), "1,000.50");
//! assert!(validate_quantity("-5").is_err());
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::money::Money;

/// Stripped from price tokens before parsing.
pub const THOUSANDS_SEPARATOR: char = ',';

// =============================================================================
// Numbers
// =============================================================================

/// Parses a numeric token.
///
/// Accepts plain decimals (`5`, `5.0`, `-100`) and scientific notation
/// (`1e3`). Returns `None` for anything else.
pub fn parse_number(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Whether `text` has the shape of a number: optional sign, digits with at
/// most one `.`, optional exponent.
///
/// Used to tell "not a number" apart from "a number `Decimal` can't hold".
pub fn looks_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(&['e', 'E'][..]) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let digits = mantissa.chars().filter(char::is_ascii_digit).count();
    let dots = mantissa.chars().filter(|c| *c == '.').count();
    let mantissa_ok = digits > 0 && dots <= 1 && digits + dots == mantissa.len();

    let exponent_ok = exponent.map_or(true, |exp| {
        let exp = exp.strip_prefix(&['+', '-'][..]).unwrap_or(exp);
        !exp.is_empty() && exp.chars().all(|c| c.is_ascii_digit())
    });

    mantissa_ok && exponent_ok
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a quantity token.
///
/// ## Rules
/// - Must be a number
/// - Must fit in a `Decimal`, then in a `u64`
/// - Must not be negative
/// - Must be whole (`3.0` is fine, `2.5` is not)
/// - Zero is allowed
pub fn validate_quantity(token: &str) -> ParseResult<u64> {
    let invalid = |reason: &str| ParseError::InvalidQuantity {
        value: token.to_string(),
        reason: reason.to_string(),
    };

    let value = match parse_number(token) {
        Some(value) => value,
        None if looks_numeric(token) => return Err(invalid("out of range")),
        None => {
            return Err(ParseError::NonNumericQuantity {
                value: token.to_string(),
            })
        }
    };

    if value < Decimal::ZERO {
        return Err(invalid("negative"));
    }
    if !value.fract().is_zero() {
        return Err(invalid("not an integer"));
    }

    value.to_u64().ok_or_else(|| invalid("too large"))
}

/// Validates a price token.
///
/// ## Rules
/// - Thousands separators are removed first
/// - Must be a number that fits in a `Decimal`
/// - Must not be negative (zero is a free item)
pub fn validate_price(token: &str) -> ParseResult<Money> {
    let invalid = |reason: &str| ParseError::InvalidPrice {
        value: token.to_string(),
        reason: reason.to_string(),
    };

    let stripped: String = token
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .collect();

    let value = match parse_number(&stripped) {
        Some(value) => value,
        None if looks_numeric(&stripped) => return Err(invalid("out of range")),
        None => {
            return Err(ParseError::NonNumericPrice {
                value: token.to_string(),
            })
        }
    };

    if value < Decimal::ZERO {
        return Err(invalid("negative"));
    }

    Ok(Money::from_decimal(value))
}

// =============================================================================
// Unit Tests
// =============================================================================

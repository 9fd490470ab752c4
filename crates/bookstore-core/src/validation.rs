//! # Validation Module
//!
//! Pure validators for everything the operator types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console loop (bookstore-cli)                                 │
//! │  ├── Reads one line                                                    │
//! │  └── Re-prompts the same field on error                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── &str → value or ValidationError                                   │
//! │  └── No I/O, unit-tested directly                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── PRIMARY KEY uniqueness                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{parse_quantity, validate_sale_date};
//!
//! assert!(validate_sale_date("2024-03-01").is_ok());
//! assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
//! ```

use crate::error::ValidationError;
use crate::{SALE_DATE_LEN, SALE_DATE_SEPARATORS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest menu option; the lowest is 1.
pub const MENU_OPTION_MAX: i64 = 5;

/// Field names carried by [`ValidationError`] variants.
pub mod field {
    pub const SALE_DATE: &str = "sale date";
    pub const QUANTITY: &str = "quantity";
    pub const DISCOUNT: &str = "discount";
    pub const SALE_ID: &str = "sale id";
    pub const OPTION: &str = "option";
}

// =============================================================================
// Date Validator
// =============================================================================

/// Validates the shape of a sale date.
///
/// ## Rules
/// - Exactly 10 characters
/// - Exactly two `-` characters
///
/// Only the shape is checked. `"2024-13-45"` and `"20-2401-01"` both pass;
/// the ledger stores dates as entered.
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_sale_date;
///
/// assert!(validate_sale_date("2024-01-15").is_ok());
/// assert!(validate_sale_date("2024/01/15").is_err());
/// ```
pub fn validate_sale_date(input: &str) -> ValidationResult<String> {
    let length = input.chars().count();
    let separators = input.chars().filter(|&c| c == '-').count();

    if length != SALE_DATE_LEN || separators != SALE_DATE_SEPARATORS {
        return Err(ValidationError::InvalidFormat {
            field: field::SALE_DATE.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        });
    }

    Ok(input.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole number, ignoring surrounding whitespace.
pub fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field: field.to_string(),
        })
}

/// Parses a whole number that must be greater than zero.
pub fn parse_positive(field: &str, input: &str) -> ValidationResult<i64> {
    let value = parse_integer(field, input)?;

    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Parses a sale quantity.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  New sale: quantity prompt                                              │
/// │                                                                         │
/// │  Operator types: "abc" → NotAnInteger  → re-prompt                     │
/// │  Operator types: "0"   → MustBePositive → re-prompt                    │
/// │  Operator types: "2"   → Ok(2)          → discount prompt              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    parse_positive(field::QUANTITY, input)
}

/// Parses a discount amount.
///
/// Zero is rejected here even though the seed data holds a zero-discount
/// sale.
pub fn parse_discount(input: &str) -> ValidationResult<i64> {
    parse_positive(field::DISCOUNT, input)
}

/// Parses a sale id typed at the update/delete prompt.
///
/// ## Returns
/// * `Ok(None)` - blank line, the operator cancelled
/// * `Ok(Some(sid))` - a positive integer
pub fn parse_sale_id(input: &str) -> ValidationResult<Option<i64>> {
    if input.is_empty() {
        return Ok(None);
    }

    parse_positive(field::SALE_ID, input).map(Some)
}

/// Parses a main-menu selection.
///
/// ## Returns
/// * `Ok(None)` - blank line, leave the menu
/// * `Ok(Some(n))` - option `1..=5`
pub fn parse_menu_option(input: &str) -> ValidationResult<Option<u8>> {
    if input.is_empty() {
        return Ok(None);
    }

    let option = parse_integer(field::OPTION, input)?;
    if !(1..=MENU_OPTION_MAX).contains(&option) {
        return Err(ValidationError::OutOfRange {
            field: field::OPTION.to_string(),
            min: 1,
            max: MENU_OPTION_MAX,
        });
    }

    // Range checked above, fits in u8.
    Ok(Some(option as u8))
}

// =============================================================================
// Unit Tests
// =============================================================================

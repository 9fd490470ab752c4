//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── CoreError        - Sale rule violations                           │
//! │  └── ValidationError  - Operator input failures                        │
//! │                                                                         │
//! │  bookstore-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What ends a session                            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → console message                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Sale rule violations and failed lookups.
///
/// Every variant maps to one message shown to the operator; none of them end
/// the session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The book id given for a sale has no price on record.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Requested quantity is larger than the stock on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// New sale (B003, qty: 25)
    ///      │
    ///      ▼
    /// Check stock: available=20
    ///      │
    ///      ▼
    /// InsufficientStock { bid: "B003", available: 20, requested: 25 }
    ///      │
    ///      ▼
    /// Console: "書籍庫存不足 (現有庫存: 20)", whole entry restarts
    /// ```
    #[error("Insufficient stock for {bid}: available {available}, requested {requested}")]
    InsufficientStock {
        bid: String,
        available: i64,
        requested: i64,
    },

    /// No sale with this id exists (or it is not in the listing shown).
    #[error("Sale not found: {0}")]
    SaleNotFound(i64),

    /// The storage layer refused the write.
    ///
    /// ## When This Occurs
    /// - Primary key or NOT NULL violation
    /// - Database file unavailable
    #[error("Sale {operation} was rejected by storage")]
    SaleRejected { operation: SaleOperation },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// The write a [`CoreError::SaleRejected`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleOperation {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for SaleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SaleOperation::Insert => "insert",
            SaleOperation::Update => "update",
            SaleOperation::Delete => "delete",
        })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the pure validators in [`crate::validation`] before any
/// database work happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is not a whole number.
    #[error("{field} must be an integer")]
    NotAnInteger { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a sale date of the wrong shape).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            bid: "B003".to_string(),
            available: 20,
            requested: 25,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for B003: available 20, requested 25"
        );

        let err = CoreError::SaleRejected {
            operation: SaleOperation::Insert,
        };
        assert_eq!(err.to_string(), "Sale insert was rejected by storage");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotAnInteger {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be an integer");

        let err = ValidationError::MustBePositive {
            field: "discount".to_string(),
        };
        assert_eq!(err.to_string(), "discount must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotAnInteger {
            field: "sale id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

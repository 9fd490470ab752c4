//! # CLI Error Type
//!
//! What can end a session, and how recoverable errors read on the console.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Ledger                             │
//! │                                                                         │
//! │  ValidationError ──► message, same prompt again                        │
//! │                                                                         │
//! │  CoreError ────────► message, operation aborts or restarts             │
//! │                                                                         │
//! │  CliError ─────────► session ends                                      │
//! │    ├── Config / Db     startup failed, non-zero exit                   │
//! │    ├── Io              console unusable                                │
//! │    └── InputClosed     stdin ended, treated as "leave"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use crate::text;
use bookstore_core::validation::field;
use bookstore_core::{CoreError, SaleOperation, ValidationError};
use bookstore_db::DbError;

/// Errors that stop the menu loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

/// Console line for a failed sale operation.
pub fn operator_message(err: &CoreError) -> String {
    match err {
        CoreError::BookNotFound(_) => text::INVALID_REFERENCE.to_string(),
        CoreError::InsufficientStock { available, .. } => text::insufficient_stock(*available),
        CoreError::SaleNotFound(sid) => text::sale_not_found(*sid),
        CoreError::SaleRejected { operation } => match operation {
            SaleOperation::Insert => text::INVALID_REFERENCE.to_string(),
            SaleOperation::Update => text::UPDATE_FAILED.to_string(),
            SaleOperation::Delete => text::DELETE_FAILED.to_string(),
        },
        CoreError::Validation(err) => validation_message(err).to_string(),
    }
}

/// Console line for input that failed validation.
pub fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::InvalidFormat { .. } => text::DATE_FORMAT_ERROR,
        ValidationError::OutOfRange { .. } => text::MENU_OPTION_ERROR,
        ValidationError::NotAnInteger { field: name } if name == field::OPTION => {
            text::MENU_OPTION_ERROR
        }
        ValidationError::NotAnInteger { field: name } if name == field::SALE_ID => {
            text::SALE_ID_NOT_INTEGER
        }
        ValidationError::NotAnInteger { .. } => text::AMOUNT_NOT_INTEGER,
        ValidationError::MustBePositive { field: name } if name == field::QUANTITY => {
            text::QUANTITY_NOT_POSITIVE
        }
        ValidationError::MustBePositive { field: name } if name == field::DISCOUNT => {
            text::DISCOUNT_NOT_POSITIVE
        }
        ValidationError::MustBePositive { .. } => text::SALE_ID_NOT_POSITIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::validation::{parse_discount, parse_menu_option, parse_quantity, parse_sale_id};

    #[test]
    fn test_validation_messages_follow_the_field() {
        let msg = |err: ValidationError| validation_message(&err);

        assert_eq!(msg(parse_quantity("0").unwrap_err()), text::QUANTITY_NOT_POSITIVE);
        assert_eq!(msg(parse_quantity("x").unwrap_err()), text::AMOUNT_NOT_INTEGER);
        assert_eq!(msg(parse_discount("-5").unwrap_err()), text::DISCOUNT_NOT_POSITIVE);
        assert_eq!(msg(parse_discount("5.5").unwrap_err()), text::AMOUNT_NOT_INTEGER);
        assert_eq!(msg(parse_sale_id("0").unwrap_err()), text::SALE_ID_NOT_POSITIVE);
        assert_eq!(msg(parse_sale_id("two").unwrap_err()), text::SALE_ID_NOT_INTEGER);
        assert_eq!(msg(parse_menu_option("6").unwrap_err()), text::MENU_OPTION_ERROR);
        assert_eq!(msg(parse_menu_option("a").unwrap_err()), text::MENU_OPTION_ERROR);
    }

    #[test]
    fn test_operator_messages() {
        let err = CoreError::InsufficientStock {
            bid: "B003".to_string(),
            available: 20,
            requested: 25,
        };
        assert_eq!(operator_message(&err), "=> 錯誤：書籍庫存不足 (現有庫存: 20)");

        let err = CoreError::BookNotFound("B999".to_string());
        assert_eq!(operator_message(&err), text::INVALID_REFERENCE);

        let err = CoreError::SaleRejected {
            operation: SaleOperation::Insert,
        };
        assert_eq!(operator_message(&err), text::INVALID_REFERENCE);

        let err = CoreError::SaleRejected {
            operation: SaleOperation::Update,
        };
        assert_eq!(operator_message(&err), text::UPDATE_FAILED);

        let err = CoreError::SaleRejected {
            operation: SaleOperation::Delete,
        };
        assert_eq!(operator_message(&err), text::DELETE_FAILED);

        assert_eq!(
            operator_message(&CoreError::SaleNotFound(42)),
            "=> 錯誤：找不到銷售編號 42"
        );
    }
}

//! # bookstore-core: Pure Business Logic for the Bookstore Ledger
//!
//! This crate holds everything about a sale that can be decided without
//! touching the database or the console.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bookstore Ledger Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    bookstore-cli (terminal)                     │   │
//! │  │    Menu ──► New Sale ──► Report ──► Update ──► Delete          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌────────────┐      ┌───────────┐         │   │
//! │  │   │   types   │      │ validation │      │   error   │         │   │
//! │  │   │  Book     │      │ dates      │      │ CoreError │         │   │
//! │  │   │  Sale     │      │ quantities │      │ Validation│         │   │
//! │  │   │  Listing  │      │ sale ids   │      │   Error   │         │   │
//! │  │   └───────────┘      └────────────┘      └───────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 bookstore-db (Database Layer)                   │   │
//! │  │            Storage gateway, bootstrap, repositories             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Row types (Book, Sale) and report rows
//! - [`error`] - Domain error types
//! - [`validation`] - Operator input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::NewSale;
//!
//! let sale = NewSale::new("2024-02-01", "M001", "B001", 2, 100);
//!
//! // 600 per copy, two copies, 100 off
//! assert_eq!(sale.total(600), 1100);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, SaleOperation, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Database file used when no path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "bookstore.db";

/// Exact length of a sale date (`YYYY-MM-DD`), counted in characters.
pub const SALE_DATE_LEN: usize = 10;

/// Number of `-` separators a sale date must contain.
pub const SALE_DATE_SEPARATORS: usize = 2;

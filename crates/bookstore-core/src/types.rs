//! # Domain Types
//!
//! Row types for `book` and `sale` plus the joined shapes the operator
//! sees. `member` is only ever read through those joins.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  member (table) │   │      Book       │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  mid (PK)       │◄──│                 │   │  sid (PK, auto) │       │
//! │  │  mname          │   │  bid (PK)       │◄──│  mid, bid       │       │
//! │  │  mphone         │   │  btitle         │   │  sqty           │       │
//! │  │  memail         │   │  bprice, bstock │   │  sdiscount      │       │
//! │  └─────────────────┘   └─────────────────┘   │  stotal (stored)│       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  Joined views: SaleReportRow (sale+member+book), SaleListing           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Denormalized Total
//! `stotal` is written once when the sale is created. A later discount
//! change does not rewrite it, so a stored total can drift from
//! `bprice * sqty - sdiscount`.

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Book
// =============================================================================

/// A book available for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Business identifier, e.g. `B001`.
    pub bid: String,

    /// Display title.
    pub btitle: String,

    /// Unit price in whole currency units.
    pub bprice: i64,

    /// Copies on hand. Selling does not decrement it.
    pub bstock: i64,
}

impl Book {
    /// Checks that `quantity` copies can be sold from current stock.
    pub fn check_stock(&self, quantity: i64) -> CoreResult<()> {
        if quantity > self.bstock {
            return Err(CoreError::InsufficientStock {
                bid: self.bid.clone(),
                available: self.bstock,
                requested: quantity,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub sid: i64,
    pub sdate: String,
    pub mid: String,
    pub bid: String,
    pub sqty: i64,
    pub sdiscount: i64,
    /// Total as of creation time.
    pub stotal: i64,
}

/// Operator-entered fields of a sale that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub sdate: String,
    pub mid: String,
    pub bid: String,
    pub sqty: i64,
    pub sdiscount: i64,
}

impl NewSale {
    pub fn new(
        sdate: impl Into<String>,
        mid: impl Into<String>,
        bid: impl Into<String>,
        sqty: i64,
        sdiscount: i64,
    ) -> Self {
        NewSale {
            sdate: sdate.into(),
            mid: mid.into(),
            bid: bid.into(),
            sqty,
            sdiscount,
        }
    }

    /// Total for this sale at the given unit price.
    #[inline]
    pub fn total(&self, unit_price: i64) -> i64 {
        sale_total(unit_price, self.sqty, self.sdiscount)
    }

    /// Builds the stored row once the database has assigned `sid`.
    pub fn into_sale(self, sid: i64, stotal: i64) -> Sale {
        Sale {
            sid,
            sdate: self.sdate,
            mid: self.mid,
            bid: self.bid,
            sqty: self.sqty,
            sdiscount: self.sdiscount,
            stotal,
        }
    }
}

/// `unit_price * quantity - discount`.
///
/// Used both for the stored total at creation and for the total displayed
/// after a discount change.
#[inline]
pub fn sale_total(unit_price: i64, quantity: i64, discount: i64) -> i64 {
    unit_price * quantity - discount
}

// =============================================================================
// Joined Views
// =============================================================================

/// One row of the sales report (`sale JOIN member JOIN book`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleReportRow {
    pub sid: i64,
    pub sdate: String,
    pub mname: String,
    pub btitle: String,
    pub bprice: i64,
    pub sqty: i64,
    pub sdiscount: i64,
    pub stotal: i64,
}

/// One entry of the numbered list shown before update and delete.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleListing {
    pub sid: i64,
    pub mname: String,
    pub sdate: String,
}

/// Whether `sid` appears in a listing the operator was shown.
pub fn listing_contains(listing: &[SaleListing], sid: i64) -> bool {
    listing.iter().any(|row| row.sid == sid)
}

// =============================================================================
// Unit Tests
// =============================================================================

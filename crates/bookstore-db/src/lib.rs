//! # bookstore-db: Database Layer for the Bookstore Ledger
//!
//! This crate provides database access for the ledger.
//! It uses a local SQLite file with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bookstore Ledger Data Flow                         │
//! │                                                                         │
//! │  Sales operation (record_sale)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookstore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │   Schema     │  │   │
//! │  │   │   (pool.rs)   │    │ (book, sale)  │    │ (schema.rs)  │  │   │
//! │  │   │               │    │       │       │    │              │  │   │
//! │  │   │ SqlitePool    │    │       ▼       │    │ schema.sql   │  │   │
//! │  │   │ Scoped conns  │◄───│ StorageGateway│    │ seed.sql     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                  ./bookstore.db (one file)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`gateway`] - Generic parameterized SELECT/INSERT/UPDATE/DELETE
//! - [`schema`] - Table bootstrap and seed rows
//! - [`error`] - Database error types
//! - [`repository`] - Book and sale repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookstore_db::{Database, DbConfig};
//!
//! // Connects and bootstraps the schema
//! let db = Database::new(DbConfig::new("bookstore.db")).await?;
//!
//! let price = db.books().price("B001").await;
//! let report = db.sales().report().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gateway;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use gateway::{Column, SqlValue, StorageGateway, Table};
pub use pool::{Database, DbConfig};
pub use schema::BootstrapOutcome;

// Repository re-exports for convenience
pub use repository::book::BookRepository;
pub use repository::sale::SaleRepository;

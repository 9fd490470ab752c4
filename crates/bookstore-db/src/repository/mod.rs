//! # Repository Module
//!
//! Typed access to the ledger tables, built on the [`StorageGateway`].
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layering                                  │
//! │                                                                         │
//! │  Sales operation                                                       │
//! │       │                                                                 │
//! │       │  db.books().price("B001")                                       │
//! │       ▼                                                                 │
//! │  BookRepository / SaleRepository                                       │
//! │  ├── single-table reads and writes → StorageGateway                    │
//! │  └── joined report / listing       → hand-written SELECT ... JOIN      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookRepository`] - Price and stock lookups
//! - [`SaleRepository`] - Sale writes, report and listing
//!
//! [`StorageGateway`]: crate::gateway::StorageGateway
//! [`BookRepository`]: book::BookRepository
//! [`SaleRepository`]: sale::SaleRepository

pub mod book;
pub mod sale;

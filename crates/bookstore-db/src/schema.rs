//! # Schema Bootstrap
//!
//! Creates the `member`, `book` and `sale` tables and their seed rows the
//! first time the ledger opens a database file.
//!
//! ## How Bootstrap Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bootstrap Process                                  │
//! │                                                                         │
//! │  Startup                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT name FROM sqlite_master WHERE name IN (member, book, sale)    │
//! │       │                                                                 │
//! │       ├── all three present? → AlreadyPresent (nothing written)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                 │
//! │    schema.sql   (CREATE TABLE IF NOT EXISTS × 3)                      │
//! │    seed.sql     (3 members, 3 books, 4 sales)                         │
//! │  COMMIT                                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Created                                                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any error rolls the transaction back and surfaces as
//! [`DbError::BootstrapFailed`]; the caller is expected to stop.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::gateway::Table;

/// Table definitions, embedded at compile time.
static SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// Seed rows, embedded at compile time.
static SEED_SQL: &str = include_str!("../sql/seed.sql");

/// What [`bootstrap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Tables were created and seeded.
    Created,
    /// All three tables already existed; nothing was written.
    AlreadyPresent,
}

/// Returns which of the ledger tables exist.
pub async fn existing_tables(pool: &SqlitePool) -> DbResult<Vec<Table>> {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN (?, ?, ?)",
    )
    .bind(Table::Member.name())
    .bind(Table::Book.name())
    .bind(Table::Sale.name())
    .fetch_all(pool)
    .await?;

    Ok(Table::ALL
        .into_iter()
        .filter(|table| names.iter().any(|name| name == table.name()))
        .collect())
}

/// Creates and seeds the schema if any ledger table is missing.
///
/// ## Safety
/// - Idempotent: a complete schema is left untouched
/// - Transactional: schema and seed commit together or not at all
pub async fn bootstrap(pool: &SqlitePool) -> DbResult<BootstrapOutcome> {
    let existing = existing_tables(pool).await.map_err(DbError::bootstrap)?;

    let missing: Vec<Table> = Table::ALL
        .into_iter()
        .filter(|table| !existing.contains(table))
        .collect();

    if missing.is_empty() {
        debug!("All ledger tables present");
        return Ok(BootstrapOutcome::AlreadyPresent);
    }

    info!(?missing, "Creating ledger tables and seed rows");

    let mut tx = pool.begin().await.map_err(DbError::bootstrap)?;

    sqlx::raw_sql(SCHEMA_SQL)
        .execute(&mut *tx)
        .await
        .map_err(DbError::bootstrap)?;

    sqlx::raw_sql(SEED_SQL)
        .execute(&mut *tx)
        .await
        .map_err(DbError::bootstrap)?;

    tx.commit().await.map_err(DbError::bootstrap)?;

    Ok(BootstrapOutcome::Created)
}

// =============================================================================
// Unit Tests
// =============================================================================

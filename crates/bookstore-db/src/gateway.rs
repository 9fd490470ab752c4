//! # Storage Gateway
//!
//! Generic parameterized SELECT / INSERT / UPDATE / DELETE against the
//! ledger tables.
//!
//! ## Statement Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  select  SELECT c1, c2 FROM <table> WHERE <cond> = ?                    │
//! │  insert  INSERT INTO <table> (c1, c2) VALUES (?, ?)                     │
//! │  update  UPDATE <table> SET c1 = ?, c2 = ? WHERE <cond> = ?             │
//! │  delete  DELETE FROM <table> WHERE <cond> = ?                           │
//! │                                                                         │
//! │  Identifiers come from the Table / Column enums (compile time).         │
//! │  Values are always bound, never formatted into the SQL text.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Contracts
//! Each operation exists twice:
//!
//! - `try_*` returns `DbResult<_>` with the full error.
//! - The plain form keeps the ledger's outward contract: an empty row list
//!   or `false` on any failure. The error is logged at `warn` and dropped.
//!
//! Every call acquires its own connection from the pool and returns it when
//! the call finishes, on the error path too.

use std::fmt;

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};

// =============================================================================
// Identifiers
// =============================================================================

/// The ledger tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Member,
    Book,
    Sale,
}

impl Table {
    /// Every table the bootstrapper must find.
    pub const ALL: [Table; 3] = [Table::Member, Table::Book, Table::Sale];

    /// SQL name of the table.
    pub const fn name(self) -> &'static str {
        match self {
            Table::Member => "member",
            Table::Book => "book",
            Table::Sale => "sale",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns across the ledger tables.
///
/// `Mid` and `Bid` name both the key column and the matching reference
/// column in `sale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Mid,
    Bid,
    Btitle,
    Bprice,
    Bstock,
    Sid,
    Sdate,
    Sqty,
    Sdiscount,
    Stotal,
}

impl Column {
    /// SQL name of the column.
    pub const fn name(self) -> &'static str {
        match self {
            Column::Mid => "mid",
            Column::Bid => "bid",
            Column::Btitle => "btitle",
            Column::Bprice => "bprice",
            Column::Bstock => "bstock",
            Column::Sid => "sid",
            Column::Sdate => "sdate",
            Column::Sqty => "sqty",
            Column::Sdiscount => "sdiscount",
            Column::Stotal => "stotal",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Bound Values
// =============================================================================

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

fn bind_all<'q>(mut query: SqliteQuery<'q>, values: &[SqlValue]) -> SqliteQuery<'q> {
    for value in values {
        query = match value {
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
        };
    }
    query
}

// =============================================================================
// Statement Builders
// =============================================================================

fn column_list(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn select_sql(table: Table, columns: &[Column], condition: Column) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(columns),
        table,
        condition
    )
}

fn insert_sql(table: Table, columns: &[Column]) -> String {
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        column_list(columns),
        placeholders
    )
}

fn update_sql(table: Table, columns: &[Column], condition: Column) -> String {
    let assignments = columns
        .iter()
        .map(|c| format!("{} = ?", c))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {} WHERE {} = ?", table, assignments, condition)
}

fn delete_sql(table: Table, condition: Column) -> String {
    format!("DELETE FROM {} WHERE {} = ?", table, condition)
}

fn check_arity(columns: &[Column], values: &[SqlValue]) -> DbResult<()> {
    if columns.is_empty() || columns.len() != values.len() {
        return Err(DbError::ColumnMismatch {
            columns: columns.len(),
            values: values.len(),
        });
    }
    Ok(())
}

// =============================================================================
// Gateway
// =============================================================================

/// Parameterized statement executor over the ledger tables.
///
/// ## Usage
/// ```rust,ignore
/// let gateway = db.gateway();
///
/// let rows = gateway
///     .select(Table::Book, &[Column::Bprice], Column::Bid, "B001")
///     .await;
///
/// let ok = gateway
///     .delete(Table::Sale, Column::Sid, 4)
///     .await;
/// ```
#[derive(Debug, Clone)]
pub struct StorageGateway {
    pool: SqlitePool,
}

impl StorageGateway {
    /// Creates a new StorageGateway.
    pub fn new(pool: SqlitePool) -> Self {
        StorageGateway { pool }
    }

    /// The pool behind this gateway, for joined reads that do not fit the
    /// single-table statement shapes.
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs `SELECT <columns> FROM <table> WHERE <condition_column> = ?`.
    pub async fn try_select(
        &self,
        table: Table,
        columns: &[Column],
        condition_column: Column,
        condition_value: impl Into<SqlValue>,
    ) -> DbResult<Vec<SqliteRow>> {
        if columns.is_empty() {
            return Err(DbError::ColumnMismatch {
                columns: 0,
                values: 0,
            });
        }

        let sql = select_sql(table, columns, condition_column);
        let values = [condition_value.into()];
        debug!(sql = %sql, "Executing select");

        let mut conn = self.pool.acquire().await?;
        let rows = bind_all(sqlx::query(&sql), &values)
            .fetch_all(&mut *conn)
            .await?;

        debug!(table = %table, count = rows.len(), "Select returned rows");
        Ok(rows)
    }

    /// Like [`try_select`](Self::try_select), but any failure yields no rows.
    pub async fn select(
        &self,
        table: Table,
        columns: &[Column],
        condition_column: Column,
        condition_value: impl Into<SqlValue>,
    ) -> Vec<SqliteRow> {
        match self
            .try_select(table, columns, condition_column, condition_value)
            .await
        {
            Ok(rows) => rows,
            Err(err) => {
                warn!(table = %table, error = %err, "Select failed, returning no rows");
                Vec::new()
            }
        }
    }

    /// Runs `INSERT INTO <table> (<columns>) VALUES (?, ...)`.
    ///
    /// ## Returns
    /// The rowid SQLite assigned to the new row.
    pub async fn try_insert(
        &self,
        table: Table,
        columns: &[Column],
        values: &[SqlValue],
    ) -> DbResult<i64> {
        check_arity(columns, values)?;

        let sql = insert_sql(table, columns);
        debug!(sql = %sql, "Executing insert");

        let mut conn = self.pool.acquire().await?;
        let result = bind_all(sqlx::query(&sql), values)
            .execute(&mut *conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Like [`try_insert`](Self::try_insert), reporting only success.
    pub async fn insert(&self, table: Table, columns: &[Column], values: &[SqlValue]) -> bool {
        match self.try_insert(table, columns, values).await {
            Ok(_) => true,
            Err(err) => {
                warn!(table = %table, error = %err, "Insert failed");
                false
            }
        }
    }

    /// Runs `UPDATE <table> SET c = ?, ... WHERE <condition_column> = ?`.
    ///
    /// ## Returns
    /// Number of rows changed. Zero is not an error.
    pub async fn try_update(
        &self,
        table: Table,
        columns: &[Column],
        values: &[SqlValue],
        condition_column: Column,
        condition_value: impl Into<SqlValue>,
    ) -> DbResult<u64> {
        check_arity(columns, values)?;

        let sql = update_sql(table, columns, condition_column);
        let mut bound = values.to_vec();
        bound.push(condition_value.into());
        debug!(sql = %sql, "Executing update");

        let mut conn = self.pool.acquire().await?;
        let result = bind_all(sqlx::query(&sql), &bound)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Like [`try_update`](Self::try_update), reporting only whether the
    /// statement ran. An update that matched no row still counts as success.
    pub async fn update(
        &self,
        table: Table,
        columns: &[Column],
        values: &[SqlValue],
        condition_column: Column,
        condition_value: impl Into<SqlValue>,
    ) -> bool {
        match self
            .try_update(table, columns, values, condition_column, condition_value)
            .await
        {
            Ok(_) => true,
            Err(err) => {
                warn!(table = %table, error = %err, "Update failed");
                false
            }
        }
    }

    /// Runs `DELETE FROM <table> WHERE <condition_column> = ?`.
    ///
    /// ## Returns
    /// Number of rows removed.
    pub async fn try_delete(
        &self,
        table: Table,
        condition_column: Column,
        condition_value: impl Into<SqlValue>,
    ) -> DbResult<u64> {
        let sql = delete_sql(table, condition_column);
        let values = [condition_value.into()];
        debug!(sql = %sql, "Executing delete");

        let mut conn = self.pool.acquire().await?;
        let result = bind_all(sqlx::query(&sql), &values)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Like [`try_delete`](Self::try_delete), reporting only whether the
    /// statement ran.
    pub async fn delete(
        &self,
        table: Table,
        condition_column: Column,
        condition_value: impl Into<SqlValue>,
    ) -> bool {
        match self
            .try_delete(table, condition_column, condition_value)
            .await
        {
            Ok(_) => true,
            Err(err) => {
                warn!(table = %table, error = %err, "Delete failed");
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

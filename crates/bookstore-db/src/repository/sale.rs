//! # Sale Repository
//!
//! Database operations for sales.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── insert() → sid assigned, stotal stored                         │
//! │                                                                         │
//! │  2. (OPTIONAL) CHANGE DISCOUNT                                         │
//! │     └── update_discount() → sdiscount rewritten, stotal left as is     │
//! │                                                                         │
//! │  3. (OPTIONAL) DELETE                                                  │
//! │     └── delete() → row removed, sid never reused                       │
//! │                                                                         │
//! │  Read side: report() joins member + book, listing() joins member       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{FromRow, Row};
use tracing::debug;

use crate::error::DbResult;
use crate::gateway::{Column, SqlValue, StorageGateway, Table};
use bookstore_core::{NewSale, Sale, SaleListing, SaleReportRow};

/// Columns written when a sale is created, in insert order.
pub const SALE_INSERT_COLUMNS: [Column; 6] = [
    Column::Sdate,
    Column::Mid,
    Column::Bid,
    Column::Sqty,
    Column::Sdiscount,
    Column::Stotal,
];

const SALE_COLUMNS: [Column; 7] = [
    Column::Sid,
    Column::Sdate,
    Column::Mid,
    Column::Bid,
    Column::Sqty,
    Column::Sdiscount,
    Column::Stotal,
];

/// Inner joins: a sale whose member or book is missing is left out.
const REPORT_SQL: &str = r#"
    SELECT
        sale.sid,
        sale.sdate,
        member.mname,
        book.btitle,
        book.bprice,
        sale.sqty,
        sale.sdiscount,
        sale.stotal
    FROM sale
    JOIN member ON sale.mid = member.mid
    JOIN book ON sale.bid = book.bid
    ORDER BY sale.sid
"#;

const LISTING_SQL: &str = r#"
    SELECT
        sale.sid,
        member.mname,
        sale.sdate
    FROM sale
    JOIN member ON sale.mid = member.mid
    ORDER BY sale.sid
"#;

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    gateway: StorageGateway,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(gateway: StorageGateway) -> Self {
        SaleRepository { gateway }
    }

    /// Inserts a new sale with its precomputed total.
    ///
    /// ## Returns
    /// The `sid` SQLite assigned.
    pub async fn insert(&self, sale: &NewSale, stotal: i64) -> DbResult<i64> {
        let values = [
            SqlValue::from(sale.sdate.as_str()),
            SqlValue::from(sale.mid.as_str()),
            SqlValue::from(sale.bid.as_str()),
            SqlValue::from(sale.sqty),
            SqlValue::from(sale.sdiscount),
            SqlValue::from(stotal),
        ];

        let sid = self
            .gateway
            .try_insert(Table::Sale, &SALE_INSERT_COLUMNS, &values)
            .await?;

        debug!(sid, bid = %sale.bid, stotal, "Sale inserted");
        Ok(sid)
    }

    /// Rewrites `sdiscount` for `sid`. `stotal` is not touched.
    ///
    /// Returns `true` when the statement ran, even if no row matched.
    pub async fn update_discount(&self, sid: i64, discount: i64) -> bool {
        self.gateway
            .update(
                Table::Sale,
                &[Column::Sdiscount],
                &[SqlValue::from(discount)],
                Column::Sid,
                sid,
            )
            .await
    }

    /// Deletes the sale `sid`.
    ///
    /// Returns `true` when the statement ran.
    pub async fn delete(&self, sid: i64) -> bool {
        self.gateway.delete(Table::Sale, Column::Sid, sid).await
    }

    /// Book id and quantity of `sid`, or `None` when it does not exist.
    pub async fn line(&self, sid: i64) -> Option<(String, i64)> {
        let rows = self
            .gateway
            .select(Table::Sale, &[Column::Bid, Column::Sqty], Column::Sid, sid)
            .await;

        let row = rows.first()?;
        let bid = row.try_get::<String, _>(0).ok()?;
        let sqty = row.try_get::<i64, _>(1).ok()?;
        Some((bid, sqty))
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, sid: i64) -> DbResult<Option<Sale>> {
        let rows = self
            .gateway
            .try_select(Table::Sale, &SALE_COLUMNS, Column::Sid, sid)
            .await?;

        let sale = rows.first().map(Sale::from_row).transpose()?;
        Ok(sale)
    }

    /// Every sale joined with its member and book, ordered by `sid`.
    pub async fn report(&self) -> DbResult<Vec<SaleReportRow>> {
        let mut conn = self.gateway.pool().acquire().await?;
        let rows: Vec<SaleReportRow> = sqlx::query_as(REPORT_SQL).fetch_all(&mut *conn).await?;

        debug!(count = rows.len(), "Report loaded");
        Ok(rows)
    }

    /// Every sale joined with its member (id, member name, date), ordered
    /// by `sid`.
    pub async fn listing(&self) -> DbResult<Vec<SaleListing>> {
        let mut conn = self.gateway.pool().acquire().await?;
        let rows: Vec<SaleListing> = sqlx::query_as(LISTING_SQL).fetch_all(&mut *conn).await?;

        debug!(count = rows.len(), "Listing loaded");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::Table;
    use crate::pool::{Database, DbConfig};
    use bookstore_core::NewSale;

    async fn open_seeded() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("ledger.db")))
            .await
            .unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_report_is_ordered_and_joined() {
        let (_dir, db) = open_seeded().await;

        let report = db.sales().report().await.unwrap();
        let sids: Vec<i64> = report.iter().map(|r| r.sid).collect();
        assert_eq!(sids, vec![1, 2, 3, 4]);

        let first = &report[0];
        assert_eq!(first.mname, "Alice");
        assert_eq!(first.btitle, "Python Programming");
        assert_eq!(first.bprice, 600);
        assert_eq!(first.stotal, 1100);
    }

    #[tokio::test]
    async fn test_insert_round_trips_through_report() {
        let (_dir, db) = open_seeded().await;
        let sales = db.sales();

        let sale = NewSale::new("2024-03-02", "M003", "B002", 2, 100);
        let sid = sales.insert(&sale, sale.total(800)).await.unwrap();
        assert_eq!(sid, 5);

        let report = sales.report().await.unwrap();
        let row = report.last().unwrap();
        assert_eq!(row.sid, 5);
        assert_eq!(row.sdate, "2024-03-02");
        assert_eq!(row.mname, "Cathy");
        assert_eq!(row.btitle, "Data Science Basics");
        assert_eq!(row.bprice, 800);
        assert_eq!(row.sqty, 2);
        assert_eq!(row.sdiscount, 100);
        assert_eq!(row.stotal, 1500);
    }

    #[tokio::test]
    async fn test_deleted_sid_is_not_reused() {
        let (_dir, db) = open_seeded().await;
        let sales = db.sales();

        assert!(sales.delete(4).await);
        let sale = NewSale::new("2024-03-02", "M001", "B001", 1, 1);
        assert_eq!(sales.insert(&sale, 599).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_update_discount_leaves_stored_total() {
        let (_dir, db) = open_seeded().await;
        let sales = db.sales();

        assert!(sales.update_discount(3, 500).await);

        let sale = sales.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(sale.sdiscount, 500);
        assert_eq!(sale.stotal, 3400);
        assert_eq!(sale.sqty, 3);
    }

    #[tokio::test]
    async fn test_line() {
        let (_dir, db) = open_seeded().await;
        let sales = db.sales();

        assert_eq!(sales.line(3).await, Some(("B003".to_string(), 3)));
        assert_eq!(sales.line(42).await, None);
    }

    #[tokio::test]
    async fn test_sale_with_unknown_member_is_not_listed() {
        let (_dir, db) = open_seeded().await;
        let sales = db.sales();

        let sale = NewSale::new("2024-03-02", "M404", "B001", 1, 1);
        sales.insert(&sale, 599).await.unwrap();

        assert_eq!(db.row_count(Table::Sale).await.unwrap(), 5);
        assert_eq!(sales.listing().await.unwrap().len(), 4);
        assert_eq!(sales.report().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_listing() {
        let (_dir, db) = open_seeded().await;

        let listing = db.sales().listing().await.unwrap();
        assert_eq!(listing.len(), 4);
        assert_eq!(listing[1].sid, 2);
        assert_eq!(listing[1].mname, "Bob");
        assert_eq!(listing[1].sdate, "2024-01-16");
    }
}

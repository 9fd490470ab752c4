//! # Sale Commands
//!
//! The four sales operations. Each one is a flow function taking already
//! validated values, plus an interactive wrapper that only prompts and
//! prints.
//!
//! ```text
//! ┌──────────────┬────────────────┬───────────────────────────────────────┐
//! │ Menu option  │ Wrapper        │ Flow                                  │
//! ├──────────────┼────────────────┼───────────────────────────────────────┤
//! │ 1            │ new_sale       │ record_sale                           │
//! │ 2            │ sales_report   │ load_report                           │
//! │ 3            │ update_sale    │ load_listing → change_discount        │
//! │ 4            │ delete_sale    │ load_listing → remove_sale            │
//! └──────────────┴────────────────┴───────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::console::Console;
use crate::error::{operator_message, CliResult};
use crate::report::{render_listing, render_report};
use crate::text;
use bookstore_core::validation::{parse_discount, parse_quantity, parse_sale_id, validate_sale_date};
use bookstore_core::{
    listing_contains, sale_total, CoreError, CoreResult, NewSale, Sale, SaleListing,
    SaleOperation, SaleReportRow,
};
use bookstore_db::{Database, DbResult};

// =============================================================================
// Flows
// =============================================================================

/// Outcome of a discount change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountChange {
    pub sid: i64,
    /// `bprice * sqty - new discount`. Shown to the operator only; the
    /// stored `stotal` keeps its old value.
    pub displayed_total: i64,
}

/// Prices, stock-checks and stores a new sale.
///
/// ## Errors
/// - `BookNotFound` - `bid` is not on record, or the lookup failed
/// - `InsufficientStock` - `sqty` exceeds `bstock`; nothing is written
/// - `SaleRejected` - the insert failed
///
/// `mid` is not looked up; an unknown member still gets a row.
pub async fn record_sale(db: &Database, sale: NewSale) -> CoreResult<Sale> {
    let book = db
        .books()
        .get_by_id(&sale.bid)
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, bid = %sale.bid, "Book lookup failed");
            None
        })
        .ok_or_else(|| CoreError::BookNotFound(sale.bid.clone()))?;

    book.check_stock(sale.sqty)?;

    let total = sale.total(book.bprice);
    let sid = db.sales().insert(&sale, total).await.map_err(|err| {
        warn!(error = %err, bid = %sale.bid, "Sale insert failed");
        CoreError::SaleRejected {
            operation: SaleOperation::Insert,
        }
    })?;

    info!(sid, total, "Sale recorded");
    Ok(sale.into_sale(sid, total))
}

/// Sets a new discount on `sid` and works out the total to display.
///
/// `sid` is not checked against any listing first. Updating a missing sale
/// touches no row and then fails the follow-up lookup with `SaleNotFound`.
pub async fn change_discount(db: &Database, sid: i64, discount: i64) -> CoreResult<DiscountChange> {
    let sales = db.sales();

    if !sales.update_discount(sid, discount).await {
        return Err(CoreError::SaleRejected {
            operation: SaleOperation::Update,
        });
    }

    let (bid, sqty) = sales.line(sid).await.ok_or(CoreError::SaleNotFound(sid))?;
    let price = db
        .books()
        .price(&bid)
        .await
        .ok_or_else(|| CoreError::BookNotFound(bid.clone()))?;

    let displayed_total = sale_total(price, sqty, discount);
    info!(sid, discount, displayed_total, "Sale discount changed");
    Ok(DiscountChange { sid, displayed_total })
}

/// Deletes `sid` if it is part of the listing the operator was shown.
pub async fn remove_sale(db: &Database, sid: i64, listing: &[SaleListing]) -> CoreResult<()> {
    if !listing_contains(listing, sid) {
        return Err(CoreError::SaleNotFound(sid));
    }

    if !db.sales().delete(sid).await {
        return Err(CoreError::SaleRejected {
            operation: SaleOperation::Delete,
        });
    }

    info!(sid, "Sale deleted");
    Ok(())
}

/// Rows of the sales report, ordered by `sid`.
pub async fn load_report(db: &Database) -> DbResult<Vec<SaleReportRow>> {
    db.sales().report().await
}

/// Sales with member names, ordered by `sid`.
pub async fn load_listing(db: &Database) -> DbResult<Vec<SaleListing>> {
    db.sales().listing().await
}

// =============================================================================
// Interactive Wrappers
// =============================================================================

/// Menu option 1.
///
/// Insufficient stock restarts the whole entry from the date prompt; any
/// other failure ends the operation.
pub async fn new_sale<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    loop {
        let sdate = console.ask_until(text::SALE_DATE_PROMPT, validate_sale_date)?;
        let mid = console.ask(text::MEMBER_ID_PROMPT)?;
        let bid = console.ask(text::BOOK_ID_PROMPT)?;
        let sqty = console.ask_until(text::QUANTITY_PROMPT, parse_quantity)?;
        let sdiscount = console.ask_until(text::DISCOUNT_PROMPT, parse_discount)?;

        match record_sale(db, NewSale::new(sdate, mid, bid, sqty, sdiscount)).await {
            Ok(sale) => {
                console.say(&text::sale_recorded(sale.stotal))?;
                return Ok(());
            }
            Err(err @ CoreError::InsufficientStock { .. }) => {
                debug!(error = %err, "Restarting sale entry");
                console.say(&operator_message(&err))?;
            }
            Err(err) => {
                console.say(&operator_message(&err))?;
                return Ok(());
            }
        }
    }
}

/// Menu option 2.
pub async fn sales_report<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    match load_report(db).await {
        Ok(rows) => console.print(&render_report(&rows)),
        Err(err) => {
            warn!(error = %err, "Report query failed");
            console.say(text::LOAD_FAILED)
        }
    }
}

/// Menu option 3.
pub async fn update_sale<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let Some(listing) = show_listing(db, console).await? else {
        return Ok(());
    };
    debug!(count = listing.len(), "Listing shown for update");

    let Some(sid) = console.ask_until(text::UPDATE_SID_PROMPT, parse_sale_id)? else {
        return Ok(());
    };
    let discount = console.ask_until(text::NEW_DISCOUNT_PROMPT, parse_discount)?;

    match change_discount(db, sid, discount).await {
        Ok(change) => console.say(&text::sale_updated(change.sid, change.displayed_total)),
        Err(err) => console.say(&operator_message(&err)),
    }
}

/// Menu option 4.
///
/// A sale id missing from the listing is refused and asked for again.
pub async fn delete_sale<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let Some(listing) = show_listing(db, console).await? else {
        return Ok(());
    };

    loop {
        let Some(sid) = console.ask_until(text::DELETE_SID_PROMPT, parse_sale_id)? else {
            return Ok(());
        };

        match remove_sale(db, sid, &listing).await {
            Ok(()) => return console.say(&text::sale_deleted(sid)),
            Err(CoreError::SaleNotFound(_)) => console.say(text::INVALID_NUMBER)?,
            Err(err) => return console.say(&operator_message(&err)),
        }
    }
}

/// Prints the numbered listing. `None` when it could not be loaded.
async fn show_listing<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<Option<Vec<SaleListing>>> {
    match load_listing(db).await {
        Ok(listing) => {
            console.print(&render_listing(&listing))?;
            Ok(Some(listing))
        }
        Err(err) => {
            warn!(error = %err, "Listing query failed");
            console.say(text::LOAD_FAILED)?;
            Ok(None)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use bookstore_db::{DbConfig, Table};
    use std::io::Cursor;

    async fn seeded() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn shown(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    async fn sale_count(db: &Database) -> i64 {
        db.row_count(Table::Sale).await.unwrap()
    }

    #[tokio::test]
    async fn test_record_sale_stores_computed_total() {
        let db = seeded().await;

        let sale = record_sale(&db, NewSale::new("2024-03-01", "M002", "B003", 2, 150))
            .await
            .unwrap();

        assert_eq!(sale.sid, 5);
        assert_eq!(sale.stotal, 1200 * 2 - 150);

        let stored = db.sales().get_by_id(5).await.unwrap().unwrap();
        assert_eq!(stored, sale);
        assert_eq!(sale_count(&db).await, 5);
    }

    #[tokio::test]
    async fn test_record_sale_does_not_touch_stock() {
        let db = seeded().await;

        record_sale(&db, NewSale::new("2024-03-01", "M001", "B003", 20, 1))
            .await
            .unwrap();

        let book = db.books().get_by_id("B003").await.unwrap().unwrap();
        assert_eq!(book.bstock, 20);
    }

    #[tokio::test]
    async fn test_record_sale_over_stock_writes_nothing() {
        let db = seeded().await;

        let err = record_sale(&db, NewSale::new("2024-03-01", "M001", "B003", 21, 10))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                bid: "B003".to_string(),
                available: 20,
                requested: 21,
            }
        );
        assert_eq!(sale_count(&db).await, 4);
    }

    #[tokio::test]
    async fn test_record_sale_unknown_book_writes_nothing() {
        let db = seeded().await;

        let err = record_sale(&db, NewSale::new("2024-03-01", "M001", "B404", 1, 10))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::BookNotFound("B404".to_string()));
        assert_eq!(sale_count(&db).await, 4);
    }

    #[tokio::test]
    async fn test_change_discount_keeps_stored_total() {
        let db = seeded().await;

        let change = change_discount(&db, 3, 500).await.unwrap();
        assert_eq!(
            change,
            DiscountChange {
                sid: 3,
                displayed_total: 1200 * 3 - 500,
            }
        );

        let stored = db.sales().get_by_id(3).await.unwrap().unwrap();
        assert_eq!(stored.sdiscount, 500);
        assert_eq!(stored.stotal, 3400);

        let untouched = db.sales().get_by_id(2).await.unwrap().unwrap();
        assert_eq!(untouched.sdiscount, 50);
    }

    #[tokio::test]
    async fn test_change_discount_missing_sale() {
        let db = seeded().await;

        let err = change_discount(&db, 42, 10).await.unwrap_err();
        assert_eq!(err, CoreError::SaleNotFound(42));
        assert_eq!(sale_count(&db).await, 4);
    }

    #[tokio::test]
    async fn test_remove_sale_only_from_listing() {
        let db = seeded().await;
        let listing = load_listing(&db).await.unwrap();

        let err = remove_sale(&db, 9, &listing).await.unwrap_err();
        assert_eq!(err, CoreError::SaleNotFound(9));
        assert_eq!(sale_count(&db).await, 4);

        remove_sale(&db, 2, &listing).await.unwrap();
        assert_eq!(sale_count(&db).await, 3);
        assert!(db.sales().get_by_id(2).await.unwrap().is_none());
        assert!(db.sales().get_by_id(1).await.unwrap().is_some());
        assert!(db.sales().get_by_id(3).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_load_report_matches_sale_count() {
        let db = seeded().await;

        let rows = load_report(&db).await.unwrap();
        assert_eq!(rows.len() as i64, sale_count(&db).await);
        assert!(rows.windows(2).all(|pair| pair[0].sid < pair[1].sid));
    }

    #[tokio::test]
    async fn test_new_sale_reprompts_invalid_fields() {
        let db = seeded().await;
        let mut console = scripted("2024/03/01\n2024-03-01\nM001\nB001\n0\n2\nten\n100\n");

        new_sale(&db, &mut console).await.unwrap();

        let out = shown(console);
        assert!(out.contains(text::DATE_FORMAT_ERROR));
        assert!(out.contains(text::QUANTITY_NOT_POSITIVE));
        assert!(out.contains(text::AMOUNT_NOT_INTEGER));
        assert!(out.contains("=> 銷售記錄已新增！(銷售總額: 1100)"));
        assert_eq!(sale_count(&db).await, 5);
    }

    #[tokio::test]
    async fn test_new_sale_restarts_on_insufficient_stock() {
        let db = seeded().await;
        let mut console = scripted(
            "2024-03-01\nM002\nB003\n25\n10\n2024-03-02\nM002\nB003\n2\n10\n",
        );

        new_sale(&db, &mut console).await.unwrap();

        let out = shown(console);
        assert!(out.contains("=> 錯誤：書籍庫存不足 (現有庫存: 20)"));
        assert_eq!(out.matches(text::SALE_DATE_PROMPT).count(), 2);
        assert!(out.contains("(銷售總額: 2390)"));

        let stored = db.sales().get_by_id(5).await.unwrap().unwrap();
        assert_eq!(stored.sdate, "2024-03-02");
    }

    #[tokio::test]
    async fn test_new_sale_unknown_book_aborts() {
        let db = seeded().await;
        let mut console = scripted("2024-03-01\nM001\nB999\n1\n1\n");

        new_sale(&db, &mut console).await.unwrap();

        assert!(shown(console).contains(text::INVALID_REFERENCE));
        assert_eq!(sale_count(&db).await, 4);
    }

    #[tokio::test]
    async fn test_new_sale_input_closed() {
        let db = seeded().await;
        let mut console = scripted("2024-03-01\nM001\n");

        let result = new_sale(&db, &mut console).await;
        assert!(matches!(result, Err(CliError::InputClosed)));
        assert_eq!(sale_count(&db).await, 4);
    }

    #[tokio::test]
    async fn test_sales_report_prints_every_sale() {
        let db = seeded().await;
        let mut console = scripted("");

        sales_report(&db, &mut console).await.unwrap();

        let out = shown(console);
        for sid in 1..=4 {
            assert!(out.contains(&format!("銷售 #{}", sid)));
        }
        assert!(out.contains("會員姓名: Cathy"));
        assert!(out.contains("書籍標題: Machine Learning Guide"));
    }

    #[tokio::test]
    async fn test_update_sale_shows_recomputed_total() {
        let db = seeded().await;
        let mut console = scripted("-1\n1\n0\n200\n");

        update_sale(&db, &mut console).await.unwrap();

        let out = shown(console);
        assert!(out.contains("1. 銷售編號: 1 - 會員: Alice - 日期: 2024-01-15"));
        assert!(out.contains(text::SALE_ID_NOT_POSITIVE));
        assert!(out.contains(text::DISCOUNT_NOT_POSITIVE));
        assert!(out.contains("=> 銷售編號 1 已更新！(銷售總額: 1000)"));
    }

    #[tokio::test]
    async fn test_update_sale_unknown_sid_reports_not_found() {
        let db = seeded().await;
        let mut console = scripted("77\n5\n");

        update_sale(&db, &mut console).await.unwrap();

        assert!(shown(console).contains("=> 錯誤：找不到銷售編號 77"));
    }

    #[tokio::test]
    async fn test_update_sale_cancel() {
        let db = seeded().await;
        let mut console = scripted("\n");

        update_sale(&db, &mut console).await.unwrap();

        let out = shown(console);
        assert!(!out.contains(text::NEW_DISCOUNT_PROMPT));
        let stored = db.sales().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.sdiscount, 100);
    }

    #[tokio::test]
    async fn test_delete_sale_reprompts_until_listed() {
        let db = seeded().await;
        let mut console = scripted("9\nabc\n2\n");

        delete_sale(&db, &mut console).await.unwrap();

        let out = shown(console);
        assert!(out.contains(text::INVALID_NUMBER));
        assert!(out.contains(text::SALE_ID_NOT_INTEGER));
        assert!(out.contains("=> 銷售編號 2 已刪除"));
        assert_eq!(sale_count(&db).await, 3);
    }

    #[tokio::test]
    async fn test_delete_sale_cancel() {
        let db = seeded().await;
        let mut console = scripted("\n");

        delete_sale(&db, &mut console).await.unwrap();
        assert_eq!(sale_count(&db).await, 4);
    }
}

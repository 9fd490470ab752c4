//! # Book Repository
//!
//! Read-only lookups against `book`. Selling a book never writes to this
//! table, so `bstock` stays at its seeded value.

use sqlx::{FromRow, Row};
use tracing::debug;

use crate::error::DbResult;
use crate::gateway::{Column, StorageGateway, Table};
use bookstore_core::Book;

const BOOK_COLUMNS: [Column; 4] = [Column::Bid, Column::Btitle, Column::Bprice, Column::Bstock];

/// Repository for book lookups.
#[derive(Debug, Clone)]
pub struct BookRepository {
    gateway: StorageGateway,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(gateway: StorageGateway) -> Self {
        BookRepository { gateway }
    }

    /// Unit price of `bid`, or `None` if the book is unknown or the lookup
    /// failed.
    pub async fn price(&self, bid: &str) -> Option<i64> {
        let rows = self
            .gateway
            .select(Table::Book, &[Column::Bprice], Column::Bid, bid)
            .await;

        let price = rows.first().and_then(|row| row.try_get::<i64, _>(0).ok());
        debug!(bid = %bid, ?price, "Book price lookup");
        price
    }

    /// Gets a full book row by id. Used when a sale needs both the price and
    /// the stock of the same book.
    pub async fn get_by_id(&self, bid: &str) -> DbResult<Option<Book>> {
        let rows = self
            .gateway
            .try_select(Table::Book, &BOOK_COLUMNS, Column::Bid, bid)
            .await?;

        let book = rows.first().map(Book::from_row).transpose()?;
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    async fn open_seeded() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("ledger.db")))
            .await
            .unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_price() {
        let (_dir, db) = open_seeded().await;

        assert_eq!(db.books().price("B003").await, Some(1200));
    }

    #[tokio::test]
    async fn test_unknown_book() {
        let (_dir, db) = open_seeded().await;
        let books = db.books();

        assert_eq!(books.price("B999").await, None);
        assert_eq!(books.price("b001").await, None);
        assert!(books.get_by_id("B999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (_dir, db) = open_seeded().await;

        let book = db.books().get_by_id("B002").await.unwrap().unwrap();
        assert_eq!(book.btitle, "Data Science Basics");
        assert_eq!(book.bprice, 800);
        assert_eq!(book.bstock, 30);
    }
}

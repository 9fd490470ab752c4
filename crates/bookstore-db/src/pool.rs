//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Handling                       │
//! │                                                                         │
//! │  CLI startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure pool settings                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Create pool + bootstrap schema          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐                                 │  (max_connections = 1)   │
//! │  │  │Conn1│  acquired per statement,        │                           │
//! │  │  └─────┘  returned when the call ends    │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Journal Mode
//! The default rollback journal is kept so the ledger stays a single file
//! next to the binary; there is only ever one writer.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::gateway::{StorageGateway, Table};
use crate::repository::book::BookRepository;
use crate::repository::sale::SaleRepository;
use crate::schema::{self, BootstrapOutcome};

// =============================================================================
// Configuration
// =============================================================================

/// Path that selects a private in-memory database.
const IN_MEMORY_PATH: &str = ":memory:";

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./bookstore.db")
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 1 (one operator, one statement at a time)
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to create and seed missing tables on connect.
    /// Default: true
    pub bootstrap: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            bootstrap: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to bootstrap the schema on connect.
    pub fn bootstrap(mut self, run: bool) -> Self {
        self.bootstrap = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let db = Database::new(DbConfig::in_memory()).await?;
    /// // Seeded and isolated
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1, // In-memory requires single connection
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            bootstrap: true,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing gateway and repository access.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Creates the connection pool and, unless disabled, bootstraps the
    /// schema.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Creates the connection pool
    /// 3. Creates and seeds missing tables (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - Connection or bootstrap failed
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        // The path goes to SQLite as a filename, never through URL parsing,
        // so `?` and `%` stay literal.
        let connect_options = if config.database_path == Path::new(IN_MEMORY_PATH) {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
        };

        debug!("Connection options configured");

        // Keep one connection alive so an in-memory database survives
        // between statements.
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.bootstrap {
            db.bootstrap().await?;
        }

        Ok(db)
    }

    /// Creates and seeds the ledger tables if any of them is missing.
    ///
    /// Idempotent: on a complete schema it changes nothing.
    pub async fn bootstrap(&self) -> DbResult<BootstrapOutcome> {
        let outcome = schema::bootstrap(&self.pool).await?;
        info!(?outcome, "Schema bootstrap finished");
        Ok(outcome)
    }

    /// Returns a reference to the connection pool.
    ///
    /// ## Usage
    /// For queries not covered by the gateway or repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the generic statement gateway.
    pub fn gateway(&self) -> StorageGateway {
        StorageGateway::new(self.pool.clone())
    }

    /// Returns the book repository.
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.gateway())
    }

    /// Returns the sale repository.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.gateway())
    }

    /// Number of rows currently in `table`.
    pub async fn row_count(&self, table: Table) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Closes the database connection pool.
    ///
    /// ## Note
    /// After calling close, every gateway call fails (and the bool/empty
    /// forms report that as `false` / no rows).
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

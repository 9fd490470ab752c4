//! # Bookstore CLI Library
//!
//! Terminal front end for the bookstore sales ledger.
//!
//! ## Module Organization
//! ```text
//! bookstore_cli/
//! ├── lib.rs          ◄─── You are here (startup & session)
//! ├── config.rs       ◄─── Environment configuration
//! ├── console.rs      ◄─── Prompt / reply helper
//! ├── report.rs       ◄─── Report and listing rendering
//! ├── text.rs         ◄─── Operator-facing strings
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Menu Controller
//! │   └── sale.rs     ◄─── Sales Operations
//! └── error.rs        ◄─── CLI error type and console messages
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod report;
pub mod text;

use std::io::{BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use bookstore_db::{BootstrapOutcome, Database, DbConfig};
use config::AppConfig;
use console::Console;
pub use error::{CliError, CliResult};

/// Runs the ledger on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • BOOKSTORE_DB_PATH, default ./bookstore.db                         │
/// │                                                                         │
/// │  2. Connect to Database ──────────────────────────────────────────────► │
/// │     • File created if missing                                           │
/// │     • Missing tables created and seeded                                 │
/// │                                                                         │
/// │  3. Run Menu ─────────────────────────────────────────────────────────► │
/// │     • Until blank line, option 5, or end of input                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> CliResult<()> {
    let config = AppConfig::from_env()?;
    let mut console = Console::stdio();
    run_session(&config, &mut console).await
}

/// One full session against `config` on any console.
pub async fn run_session<R: BufRead, W: Write>(
    config: &AppConfig,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    info!(path = %config.database_path.display(), "Opening ledger");

    let db = Database::new(DbConfig::new(&config.database_path).bootstrap(false)).await?;
    let outcome = db.bootstrap().await?;
    console.say(bootstrap_message(outcome))?;

    let result = commands::menu::run_menu(&db, console).await;
    db.close().await;
    result
}

/// Startup line for a bootstrap outcome.
pub fn bootstrap_message(outcome: BootstrapOutcome) -> &'static str {
    match outcome {
        BootstrapOutcome::Created => text::TABLES_CREATED,
        BootstrapOutcome::AlreadyPresent => text::TABLES_PRESENT,
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bookstore_db=trace` - Show trace for the database crate only
/// - Default: WARN level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    async fn session(config: &AppConfig, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_session(config, &mut console).await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_first_and_second_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: dir.path().join("bookstore.db"),
        };

        let first = session(&config, "1\n2024-03-01\nM001\nB002\n1\n50\n\n").await;
        assert!(first.starts_with(text::TABLES_CREATED));
        assert!(first.contains("(銷售總額: 750)"));

        let second = session(&config, "2\n5\n").await;
        assert!(second.starts_with(text::TABLES_PRESENT));
        assert!(second.contains("銷售 #5"));
    }

    #[tokio::test]
    async fn test_unopenable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: dir.path().join("no-such-dir").join("bookstore.db"),
        };

        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let err = run_session(&config, &mut console).await.unwrap_err();
        assert!(matches!(err, CliError::Db(_)));
    }
}

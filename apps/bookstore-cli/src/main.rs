//! # Bookstore Ledger Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, so it never mixes with the menu)
//! 2. Read configuration from the environment
//! 3. Open the ledger database and bootstrap missing tables
//! 4. Run the menu until the operator leaves
//!
//! The actual setup lives in lib.rs so tests can drive it.

use std::process::ExitCode;

use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    bookstore_cli::init_tracing();

    match bookstore_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Ledger stopped");
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

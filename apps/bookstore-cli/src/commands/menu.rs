//! # Menu Controller

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::sale;
use crate::console::Console;
use crate::error::{validation_message, CliError, CliResult};
use crate::text;
use bookstore_core::validation::parse_menu_option;
use bookstore_db::Database;

/// What the operator picked at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewSale,
    Report,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Maps a validated option; a blank line (`None`) and 5 both exit.
    pub fn from_option(option: Option<u8>) -> Self {
        match option {
            Some(1) => MenuChoice::NewSale,
            Some(2) => MenuChoice::Report,
            Some(3) => MenuChoice::Update,
            Some(4) => MenuChoice::Delete,
            _ => MenuChoice::Exit,
        }
    }
}

/// Shows the menu and runs the chosen operation until the operator leaves.
///
/// ## Loop
/// ```text
/// ┌──► print menu ──► read line ──┬── invalid ──► error line ──┐
/// │                                ├── blank / 5 / EOF ──► return
/// │                                └── 1-4 ──► operation       │
/// └────────────────────────────────────────────┴───────────────┘
/// ```
/// End of input inside an operation cancels it and ends the loop as well.
pub async fn run_menu<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    loop {
        for line in text::MENU_LINES {
            console.say(line)?;
        }

        let reply = match console.ask(text::MENU_PROMPT) {
            Ok(reply) => reply,
            Err(CliError::InputClosed) => {
                info!("Input closed at menu");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let choice = match parse_menu_option(&reply) {
            Ok(option) => MenuChoice::from_option(option),
            Err(err) => {
                console.say(validation_message(&err))?;
                continue;
            }
        };
        debug!(?choice, "Menu choice");

        let outcome = match choice {
            MenuChoice::NewSale => sale::new_sale(db, console).await,
            MenuChoice::Report => sale::sales_report(db, console).await,
            MenuChoice::Update => sale::update_sale(db, console).await,
            MenuChoice::Delete => sale::delete_sale(db, console).await,
            MenuChoice::Exit => {
                info!("Operator left the menu");
                return Ok(());
            }
        };

        match outcome {
            Ok(()) => {}
            Err(CliError::InputClosed) => {
                info!(?choice, "Input closed during operation");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}

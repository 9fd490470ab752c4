//! # Commands
//!
//! - [`menu`] - Main menu loop and dispatch
//! - [`sale`] - The four sales operations

pub mod menu;
pub mod sale;

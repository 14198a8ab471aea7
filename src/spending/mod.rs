//! Spending records and their web pages.
//!
//! This module contains everything related to spending entries:
//! - The `Spending` model and the database functions for storing and listing entries
//! - The endpoint that accepts form submissions
//! - The page that displays recorded spending as a table

mod core;
mod create_endpoint;
mod spendings_page;

pub use core::create_spending_table;
pub use create_endpoint::submit_spending_endpoint;
pub use spendings_page::get_spendings_page;

#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records individual expenses (amount, category,
//! description) in a local JSON file and shows them in a table.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use domain::Record;
pub use errors::LedgerError;
pub use ledger::{Ledger, LoadPolicy};
pub use storage::DEFAULT_STORAGE_FILE;

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    utils::init_tracing();
}

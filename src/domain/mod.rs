//! Value types stored by the expense ledger.

pub mod record;

pub use record::Record;

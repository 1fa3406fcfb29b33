pub mod json_backend;

use std::path::Path;

use serde_json::{Map, Value};

use crate::{domain::Record, errors::LedgerError};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing a record sequence.
pub trait StorageBackend {
    /// Location of the backing file.
    fn path(&self) -> &Path;

    /// Replaces the stored contents with `records`.
    fn save(&self, records: &[Record]) -> Result<()>;

    /// Reads raw entries. `Ok(None)` means nothing has been stored yet.
    fn load_entries(&self) -> Result<Option<Vec<Map<String, Value>>>>;
}

pub use json_backend::{JsonFileStorage, DEFAULT_STORAGE_FILE};

use std::path::{Path, PathBuf};

use crate::{
    domain::Record,
    errors::LedgerError,
    storage::{JsonFileStorage, Result, StorageBackend},
};

use super::LoadPolicy;

/// Ordered expense records kept in sync with one backing file.
///
/// Every mutation rewrites the whole file before returning, so after a
/// successful `append` or `clear` the file holds exactly [`Ledger::list`].
pub struct Ledger {
    records: Vec<Record>,
    storage: Box<dyn StorageBackend>,
}

impl Ledger {
    /// Opens the ledger stored at `path`, starting empty when the file is
    /// missing or cannot be decoded.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut ledger = Self::unloaded(Box::new(JsonFileStorage::new(path)));
        // Discard swallows every load failure.
        let _ = ledger.load(LoadPolicy::Discard);
        ledger.log_opened();
        ledger
    }

    /// Opens the ledger at `path`, handling bad content according to `policy`.
    pub fn open_with_policy(path: impl Into<PathBuf>, policy: LoadPolicy) -> Result<Self> {
        Self::with_backend(Box::new(JsonFileStorage::new(path)), policy)
    }

    pub fn with_backend(storage: Box<dyn StorageBackend>, policy: LoadPolicy) -> Result<Self> {
        let mut ledger = Self::unloaded(storage);
        ledger.load(policy)?;
        ledger.log_opened();
        Ok(ledger)
    }

    fn unloaded(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            records: Vec::new(),
            storage,
        }
    }

    fn log_opened(&self) {
        tracing::info!(
            path = %self.path().display(),
            count = self.records.len(),
            "expense ledger opened"
        );
    }

    /// Adds `record` after the existing entries and persists the full list.
    pub fn append(&mut self, record: Record) -> Result<()> {
        if !record.is_storable() {
            return Err(LedgerError::NonFiniteAmount(record.amount()));
        }
        self.records.push(record);
        if let Err(err) = self.save() {
            self.records.pop();
            return Err(err);
        }
        Ok(())
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Drops every record and persists the empty list.
    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.records);
        if let Err(err) = self.save() {
            self.records = previous;
            return Err(err);
        }
        tracing::info!(removed = previous.len(), "expense ledger cleared");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    fn save(&self) -> Result<()> {
        self.storage.save(&self.records)
    }

    fn load(&mut self, policy: LoadPolicy) -> Result<()> {
        self.records = match self.read_records(policy) {
            Ok(records) => records,
            Err(err) if policy != LoadPolicy::Strict && err.is_content_error() => {
                tracing::debug!(
                    path = %self.path().display(),
                    error = %err,
                    "discarding unreadable expense file"
                );
                Vec::new()
            }
            Err(err) if policy == LoadPolicy::Discard => {
                tracing::debug!(
                    path = %self.path().display(),
                    error = %err,
                    "expense file could not be read"
                );
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        Ok(())
    }

    fn read_records(&self, policy: LoadPolicy) -> Result<Vec<Record>> {
        let Some(entries) = self.storage.load_entries()? else {
            return Ok(Vec::new());
        };
        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match Record::from_mapping(entry) {
                Ok(record) => records.push(record),
                Err(err) if policy == LoadPolicy::SkipMalformed => {
                    tracing::debug!(index, error = %err, "skipping malformed expense entry");
                }
                Err(err) => {
                    tracing::debug!(index, error = %err, "malformed expense entry");
                    return Err(err);
                }
            }
        }
        Ok(records)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("path", &self.path())
            .field("records", &self.records)
            .finish()
    }
}

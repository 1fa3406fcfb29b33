use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use crate::{domain::Record, errors::LedgerError, utils::persistence::write_atomic};

use super::{Result, StorageBackend};

/// File name used when no storage path is configured.
pub const DEFAULT_STORAGE_FILE: &str = "expenses.json";

const INDENT: &[u8] = b"    ";

/// Single-file JSON persistence: a pretty-printed array of record objects.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for JsonFileStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let json = serialize_records(records)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "saved expenses");
        Ok(())
    }

    fn load_entries(&self) -> Result<Option<Vec<Map<String, Value>>>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                return Err(unreadable(&self.path, err.to_string()))
            }
            Err(err) => return Err(err.into()),
        };
        decode_entries(&self.path, &data).map(Some)
    }
}

/// Encodes records as an indented JSON array with stable key order.
pub fn serialize_records(records: &[Record]) -> Result<Vec<u8>> {
    let entries: Vec<Map<String, Value>> = records.iter().map(Record::to_mapping).collect();
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    entries.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Parses the top-level array; individual entries are validated by the caller.
pub fn decode_entries(path: &Path, data: &str) -> Result<Vec<Map<String, Value>>> {
    let value: Value =
        serde_json::from_str(data).map_err(|err| unreadable(path, err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(unreadable(path, "expected a top-level array".into()));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(unreadable(path, format!("entry {index} is not an object"))),
        })
        .collect()
}

fn unreadable(path: &Path, reason: String) -> LedgerError {
    LedgerError::UnreadableStorage {
        path: path.to_path_buf(),
        reason,
    }
}

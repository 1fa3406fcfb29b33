use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh, not-yet-existing `expenses.json` path in its own directory.
pub fn fresh_storage_path() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("expenses.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Decodes the backing file as generic JSON for assertions on the raw format.
#[allow(dead_code)]
pub fn read_json(path: &std::path::Path) -> serde_json::Value {
    let data = std::fs::read_to_string(path).expect("read expense file");
    serde_json::from_str(&data).expect("expense file is valid JSON")
}

use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures ledger storage failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Amount {0} cannot be stored; only finite amounts are allowed")]
    NonFiniteAmount(f64),
    #[error("Malformed record: field `{field}` {problem}")]
    MalformedRecord {
        field: &'static str,
        problem: &'static str,
    },
    #[error("Unreadable storage `{}`: {reason}", .path.display())]
    UnreadableStorage { path: PathBuf, reason: String },
}

impl LedgerError {
    pub(crate) fn missing(field: &'static str) -> Self {
        LedgerError::MalformedRecord {
            field,
            problem: "is missing",
        }
    }

    pub(crate) fn wrong_type(field: &'static str) -> Self {
        LedgerError::MalformedRecord {
            field,
            problem: "has the wrong type",
        }
    }

    /// True for failures caused by the contents of the backing file rather than
    /// by the filesystem itself.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            LedgerError::MalformedRecord { .. } | LedgerError::UnreadableStorage { .. }
        )
    }
}

/// Failures while reading or writing the user configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

pub mod ledger;

use serde::{Deserialize, Serialize};

pub use ledger::Ledger;

/// How a ledger reacts to a backing file it cannot fully decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Start empty whenever the file or any entry is bad.
    #[default]
    Discard,
    /// Start empty on an unreadable file but keep the well-formed entries of a
    /// readable one.
    SkipMalformed,
    /// Report the problem to the caller.
    Strict,
}

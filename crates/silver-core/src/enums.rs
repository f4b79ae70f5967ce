//! The fixed action vocabulary for the audit log.
//!
//! Actions serialize to the exact strings stored in the log's `Action` column.
//! The vocabulary is closed: every mutating operation on the record store maps
//! to exactly one action, plus the login event.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogAction {
    /// A user passed the credential gate.
    #[serde(rename = "login success")]
    LoginSuccess,
    /// The record table was replaced by an uploaded file.
    #[serde(rename = "csv upload")]
    CsvUpload,
    /// A compensation record was appended.
    #[serde(rename = "record added")]
    RecordAdded,
    /// All pending records for a nick were marked as paid out.
    #[serde(rename = "marked given")]
    MarkedGiven,
    /// A single record was deleted.
    #[serde(rename = "record deleted")]
    RecordDeleted,
}

impl LogAction {
    /// The string stored in the `Action` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoginSuccess => "login success",
            Self::CsvUpload => "csv upload",
            Self::RecordAdded => "record added",
            Self::MarkedGiven => "marked given",
            Self::RecordDeleted => "record deleted",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

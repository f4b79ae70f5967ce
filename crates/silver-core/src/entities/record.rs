use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::csvfmt;
use crate::errors::CoreError;

/// One compensation owed to a recipient.
///
/// Serializes to the persisted CSV layout: `Date,Nick,Silver,Given`, in that
/// column order. `Date` uses `YYYY-MM-DD` (chrono's default for `NaiveDate`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompensationRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Nick")]
    pub nick: String,
    #[serde(rename = "Silver")]
    pub silver: u64,
    #[serde(rename = "Given", deserialize_with = "csvfmt::given_flag::deserialize")]
    pub given: bool,
}

impl CompensationRecord {
    /// Build a validated, not-yet-given record.
    ///
    /// The nick is trimmed of surrounding whitespace before storage.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the trimmed nick is empty or the
    /// amount is zero.
    pub fn new(date: NaiveDate, nick: &str, silver: u64) -> Result<Self, CoreError> {
        let nick = nick.trim();
        if nick.is_empty() {
            return Err(CoreError::Validation("nick must not be empty".into()));
        }
        if silver == 0 {
            return Err(CoreError::Validation("silver amount must be positive".into()));
        }
        Ok(Self {
            date,
            nick: nick.to_string(),
            silver,
            given: false,
        })
    }

    /// The identity tuple the presentation layer selects records by.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey {
            date: self.date,
            nick: self.nick.clone(),
            silver: self.silver,
        }
    }

    /// Whether this record matches a selection key.
    #[must_use]
    pub fn matches(&self, key: &RecordKey) -> bool {
        self.date == key.date && self.nick == key.nick && self.silver == key.silver
    }
}

/// The `(date, nick, silver)` tuple that identifies a record for deletion.
///
/// Nicks are not unique, so the full rendered label is the identity. When two
/// rows carry the same label, deletion removes the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub date: NaiveDate,
    pub nick: String,
    pub silver: u64,
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} silver)", self.date, self.nick, self.silver)
    }
}

//! CSV cell adapters for chrono types and loosely-typed booleans.
//!
//! The persisted tables carry `Time` cells as `YYYY-MM-DD HH:MM:SS` (to the
//! second, no sub-second precision) and `Given` cells as booleans. Uploaded
//! tables come from external tools that capitalize booleans (`True`/`False`),
//! so the reader accepts them case-insensitively; the writer always emits
//! lowercase.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer, de};

pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serde adapter for the log `Time` column.
///
/// Usage: `#[serde(with = "csvfmt::log_time")]` on a `NaiveDateTime` field.
pub mod log_time {
    use super::{LOG_TIME_FORMAT, NaiveDateTime, Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(LOG_TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, LOG_TIME_FORMAT).map_err(de::Error::custom)
    }
}

/// Deserializer for the `Given` column.
///
/// Accepts `true`/`false` in any casing plus `1`/`0`. Serialization stays
/// serde's default, which already emits lowercase.
pub mod given_flag {
    use super::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(de::Error::custom(format!("invalid boolean cell: {other:?}"))),
        }
    }
}

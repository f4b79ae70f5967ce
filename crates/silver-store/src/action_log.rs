//! The append-only action log.
//!
//! Entries are never edited or removed. Stored order is insertion order; the
//! recent-first ordering is a presentation-time view.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use silver_core::{ActionLogEntry, LogAction};

use crate::atomic;
use crate::error::StoreError;

/// Column order of the persisted log table.
pub(crate) const LOG_COLUMNS: [&str; 5] = ["Time", "User", "Action", "Nick", "Silver"];

/// The audit log table.
#[derive(Debug)]
pub struct ActionLog {
    path: PathBuf,
    entries: Vec<ActionLogEntry>,
}

impl ActionLog {
    /// Open the log at `path`, loading any existing entries.
    ///
    /// A missing file is an empty log, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an existing file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = atomic::read_rows(&path)?;
        Ok(Self { path, entries })
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ActionLogEntry] {
        &self.entries
    }

    /// Where the log persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry timestamped now (to the second) and persist.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn append(
        &mut self,
        user: &str,
        action: LogAction,
        nick: Option<String>,
        silver: Option<u64>,
    ) -> Result<ActionLogEntry, StoreError> {
        self.append_at(Local::now().naive_local(), user, action, nick, silver)
    }

    /// Append with an explicit timestamp.
    ///
    /// Sub-second precision is dropped to match the persisted format.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn append_at(
        &mut self,
        time: NaiveDateTime,
        user: &str,
        action: LogAction,
        nick: Option<String>,
        silver: Option<u64>,
    ) -> Result<ActionLogEntry, StoreError> {
        use chrono::Timelike;
        let entry = ActionLogEntry {
            time: time.with_nanosecond(0).unwrap_or(time),
            user: user.to_string(),
            action,
            nick,
            silver,
        };
        self.entries.push(entry.clone());
        self.persist()?;
        tracing::debug!(user, action = %action, "action logged");
        Ok(entry)
    }

    /// Entries ordered by timestamp descending.
    ///
    /// The sort is stable: entries sharing a second keep insertion order
    /// relative to each other (newest batch first, original order within).
    #[must_use]
    pub fn list_recent_first(&self) -> Vec<ActionLogEntry> {
        let mut view = self.entries.clone();
        view.sort_by(|a, b| b.time.cmp(&a.time));
        view
    }

    fn persist(&self) -> Result<(), StoreError> {
        atomic::write_rows(&self.path, &LOG_COLUMNS, &self.entries)
    }
}

//! The mutable compensation record table.

use std::path::{Path, PathBuf};

use serde::Serialize;

use silver_core::{CompensationRecord, CoreError, RecordKey};
use chrono::NaiveDate;

use crate::atomic;
use crate::error::StoreError;

/// Column order of the persisted record table.
pub(crate) const RECORD_COLUMNS: [&str; 4] = ["Date", "Nick", "Silver", "Given"];

/// Result of a bulk mark-given pass for one nick.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MarkGivenOutcome {
    /// Records flipped from pending to given.
    pub affected: usize,
    /// Total silver across the flipped records.
    pub total_silver: u64,
}

/// The compensation record table, cached in memory and rewritten to disk in
/// full after every mutation.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<CompensationRecord>,
}

impl RecordStore {
    /// Open the table at `path`, loading any existing rows.
    ///
    /// A missing file is an empty table, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an existing file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = atomic::read_rows(&path)?;
        Ok(Self { path, records })
    }

    /// Current table snapshot, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[CompensationRecord] {
        &self.records
    }

    /// Where the table persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a validated record with `given = false` and persist.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` (wrapped) for an empty nick or a zero
    /// amount; the table is untouched in that case. Otherwise propagates
    /// persistence failures.
    pub fn append(
        &mut self,
        date: NaiveDate,
        nick: &str,
        silver: u64,
    ) -> Result<CompensationRecord, StoreError> {
        let record = CompensationRecord::new(date, nick, silver)?;
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replace the entire table with an externally supplied one and persist.
    ///
    /// No row validation happens here beyond column presence at read time —
    /// uploads are an accepted trust boundary.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn replace_all(&mut self, records: Vec<CompensationRecord>) -> Result<(), StoreError> {
        self.records = records;
        self.persist()
    }

    /// Flip `given` false -> true for every record with a matching nick.
    ///
    /// Grouping is by nick, not by row: multiple rows for the same nick are
    /// marked together even when their dates differ. A no-match call is a
    /// no-op but still persists.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn mark_given(&mut self, nick: &str) -> Result<MarkGivenOutcome, StoreError> {
        let mut outcome = MarkGivenOutcome {
            affected: 0,
            total_silver: 0,
        };
        for record in &mut self.records {
            if record.nick == nick && !record.given {
                record.given = true;
                outcome.affected += 1;
                outcome.total_silver += record.silver;
            }
        }
        self.persist()?;
        Ok(outcome)
    }

    /// Delete the first record matching the full identity tuple and persist.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) when nothing matches; the
    /// table is untouched in that case.
    pub fn delete(&mut self, key: &RecordKey) -> Result<CompensationRecord, StoreError> {
        let position = self
            .records
            .iter()
            .position(|record| record.matches(key))
            .ok_or_else(|| CoreError::NotFound(key.clone()))?;
        let removed = self.records.remove(position);
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StoreError> {
        atomic::write_rows(&self.path, &RECORD_COLUMNS, &self.records)
    }
}

/// Read an externally supplied record table (the upload path).
///
/// Unlike [`RecordStore::open`], a missing file here is an error: the caller
/// explicitly chose a file to import.
///
/// # Errors
///
/// Returns `StoreError` if the file cannot be opened or a row does not carry
/// the four record columns.
pub fn read_uploaded_table(path: &Path) -> Result<Vec<CompensationRecord>, StoreError> {
    let file = std::fs::File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?);
    }
    Ok(rows)
}

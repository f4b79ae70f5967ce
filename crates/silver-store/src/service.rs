//! The ledger service: record mutations coupled to audit appends.
//!
//! Callers go through [`Ledger`] rather than the tables directly so that
//! every mutation produces exactly one action log entry attributed to the
//! session user. A rejected mutation (validation failure, missing record)
//! produces no entry.

use std::path::Path;

use chrono::NaiveDate;

use silver_core::{CompensationRecord, LogAction, RecordKey, Session};

use crate::action_log::ActionLog;
use crate::error::StoreError;
use crate::records::{MarkGivenOutcome, RecordStore};

/// Both persisted tables behind one mutation surface.
#[derive(Debug)]
pub struct Ledger {
    records: RecordStore,
    log: ActionLog,
}

impl Ledger {
    /// Open (or start) both tables.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an existing table cannot be read.
    pub fn open(records_path: &Path, log_path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            records: RecordStore::open(records_path)?,
            log: ActionLog::open(log_path)?,
        })
    }

    /// Current record snapshot.
    #[must_use]
    pub fn records(&self) -> &[CompensationRecord] {
        self.records.records()
    }

    /// The underlying action log (read access).
    #[must_use]
    pub const fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Record that a user passed the credential gate.
    ///
    /// # Errors
    ///
    /// Propagates log persistence failures.
    pub fn record_login(&mut self, session: &Session) -> Result<(), StoreError> {
        self.log
            .append(session.user(), LogAction::LoginSuccess, None, None)?;
        Ok(())
    }

    /// Append a compensation record and log it.
    ///
    /// # Errors
    ///
    /// Validation failures leave both tables untouched.
    pub fn add_record(
        &mut self,
        session: &Session,
        date: NaiveDate,
        nick: &str,
        silver: u64,
    ) -> Result<CompensationRecord, StoreError> {
        let record = self.records.append(date, nick, silver)?;
        self.log.append(
            session.user(),
            LogAction::RecordAdded,
            Some(record.nick.clone()),
            Some(record.silver),
        )?;
        tracing::info!(user = session.user(), nick = %record.nick, silver = record.silver, "record added");
        Ok(record)
    }

    /// Replace the whole record table with an uploaded one and log the upload.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn import_records(
        &mut self,
        session: &Session,
        records: Vec<CompensationRecord>,
    ) -> Result<usize, StoreError> {
        let count = records.len();
        self.records.replace_all(records)?;
        self.log
            .append(session.user(), LogAction::CsvUpload, None, None)?;
        tracing::info!(user = session.user(), rows = count, "record table replaced from upload");
        Ok(count)
    }

    /// Mark every pending record for a nick as given and log the payout.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn mark_given(
        &mut self,
        session: &Session,
        nick: &str,
    ) -> Result<MarkGivenOutcome, StoreError> {
        let outcome = self.records.mark_given(nick)?;
        self.log.append(
            session.user(),
            LogAction::MarkedGiven,
            Some(nick.to_string()),
            Some(outcome.total_silver),
        )?;
        Ok(outcome)
    }

    /// Delete one record by its identity tuple and log the deletion.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) when the selected record has
    /// already vanished; nothing is written in that case.
    pub fn delete_record(
        &mut self,
        session: &Session,
        key: &RecordKey,
    ) -> Result<CompensationRecord, StoreError> {
        let removed = self.records.delete(key)?;
        self.log.append(
            session.user(),
            LogAction::RecordDeleted,
            Some(removed.nick.clone()),
            Some(removed.silver),
        )?;
        Ok(removed)
    }
}

//! # silver-store
//!
//! CSV-backed persistence for the Silver ledger: the mutable compensation
//! record table and the append-only action log.
//!
//! Both tables live in memory and are rewritten to disk in full after every
//! mutation — there is no write-behind and no batching. A rewrite goes
//! through a temp file in the destination directory and an atomic rename, so
//! a failed write never leaves a half-written file for the next load.
//!
//! [`Ledger`] is the entry point for callers: it couples every record
//! mutation to exactly one action log append attributed to the session user.
//! [`RecordStore`] and [`ActionLog`] are the underlying tables.
//!
//! Single-writer by contract: two processes mutating the same files
//! concurrently is outside the design envelope.

mod action_log;
mod atomic;
mod error;
mod records;
mod service;

pub use action_log::ActionLog;
pub use error::StoreError;
pub use records::{MarkGivenOutcome, RecordStore, read_uploaded_table};
pub use service::Ledger;

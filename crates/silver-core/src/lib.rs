//! # silver-core
//!
//! Core types and error types for the Silver compensation ledger.
//!
//! This crate provides the foundational types shared across all ledger crates:
//! - The `CompensationRecord` and `ActionLogEntry` row types and their CSV
//!   column mapping
//! - The fixed action vocabulary for the audit log
//! - The session context object carrying the authenticated actor
//! - Cross-cutting error types
//! - Stateless reporting functions over a record snapshot

pub mod csvfmt;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod report;
pub mod session;

pub use entities::{ActionLogEntry, CompensationRecord, RecordKey};
pub use enums::LogAction;
pub use errors::CoreError;
pub use session::Session;

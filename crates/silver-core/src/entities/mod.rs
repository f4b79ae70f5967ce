pub mod log_entry;
pub mod record;

pub use log_entry::ActionLogEntry;
pub use record::{CompensationRecord, RecordKey};

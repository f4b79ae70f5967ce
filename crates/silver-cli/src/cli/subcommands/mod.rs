pub mod log;
pub mod record;

pub use log::LogCommands;
pub use record::RecordCommands;

pub mod log;
pub mod login;
pub mod record;
pub mod stats;

mod dispatch;

pub use dispatch::dispatch;

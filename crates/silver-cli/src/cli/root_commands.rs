use clap::Subcommand;

use crate::cli::subcommands::{LogCommands, RecordCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Verify credentials and record the login in the action log.
    Login,
    /// Compensation records.
    Record {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// The action log.
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
    /// Totals, given/pending counts, and top recipients.
    Stats,
}

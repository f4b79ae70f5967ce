use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

/// Compensation record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RecordCommands {
    /// Add a compensation record.
    Add {
        /// Recipient nick.
        #[arg(long)]
        nick: String,
        /// Silver amount (must be positive).
        #[arg(long)]
        silver: u64,
        /// Date the compensation was incurred (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List the current table.
    List,
    /// Mark every pending record for a nick as paid out.
    #[command(name = "mark-given")]
    MarkGiven {
        #[arg(long)]
        nick: String,
    },
    /// Delete one record by its full label.
    Delete {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        nick: String,
        #[arg(long)]
        silver: u64,
    },
    /// Replace the whole table with an uploaded CSV file.
    Import {
        /// CSV file with Date,Nick,Silver,Given columns.
        file: PathBuf,
    },
}

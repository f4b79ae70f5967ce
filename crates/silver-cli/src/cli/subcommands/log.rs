use clap::Subcommand;

/// Action log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// Show the log, most recent first.
    List {
        /// Max entries to show.
        #[arg(long)]
        limit: Option<usize>,
    },
}

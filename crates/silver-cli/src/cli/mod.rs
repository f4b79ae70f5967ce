use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `slv` binary.
#[derive(Debug, Parser)]
#[command(name = "slv", version, about = "Silver ledger - compensation tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Nick to authenticate as (or SILVER_USER)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Password for the nick (or SILVER_PASSWORD)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Directory holding the CSV tables (overrides config)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            user: self.user.clone(),
            password: self.password.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

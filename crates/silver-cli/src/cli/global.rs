use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
///
/// `--quiet`/`--verbose` only feed tracing setup and stay on [`crate::cli::Cli`].
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub user: Option<String>,
    pub password: Option<String>,
    pub data_dir: Option<String>,
}

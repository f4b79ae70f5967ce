use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("slv error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = silver_config::SilverConfig::load_with_dotenv()
        .context("failed to load configuration")?;

    let (nick, password) = resolve_credentials(&flags)?;
    let session = silver_auth::authenticate(&config.credentials, &nick, &password)
        .context("login failed")?;
    tracing::debug!(user = session.user(), "credential gate passed");

    let mut ctx = context::AppContext::init(config, session, flags.data_dir.as_deref())
        .context("failed to open the ledger tables")?;

    commands::dispatch(cli.command, &mut ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SILVER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Credentials come from `--user`/`--password` or the `SILVER_USER` /
/// `SILVER_PASSWORD` environment. `load_with_dotenv` has already populated
/// the process env from `.env` by the time this runs.
fn resolve_credentials(flags: &cli::GlobalFlags) -> anyhow::Result<(String, String)> {
    let nick = flags
        .user
        .clone()
        .or_else(|| std::env::var("SILVER_USER").ok())
        .context("no user given — pass --user or set SILVER_USER")?;
    let password = flags
        .password
        .clone()
        .or_else(|| std::env::var("SILVER_PASSWORD").ok())
        .context("no password given — pass --password or set SILVER_PASSWORD")?;
    Ok((nick, password))
}

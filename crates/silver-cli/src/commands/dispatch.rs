use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Login => commands::login::handle(ctx, flags),
        Commands::Record { action } => commands::record::handle(&action, ctx, flags),
        Commands::Log { action } => commands::log::handle(&action, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
    }
}

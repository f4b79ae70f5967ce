use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogCommands;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    action: &LogCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LogCommands::List { limit } => {
            let mut view = ctx.ledger.log().list_recent_first();
            if let Some(limit) = limit {
                view.truncate(*limit);
            }
            output(&view, flags.format)
        }
    }
}

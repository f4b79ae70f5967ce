use chrono::Local;
use serde_json::json;

use silver_core::{RecordKey, report};
use silver_store::read_uploaded_table;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecordCommands;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    action: &RecordCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RecordCommands::Add { nick, silver, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let record = ctx.ledger.add_record(&ctx.session, date, nick, *silver)?;
            output(&json!({ "added": record }), flags.format)
        }
        RecordCommands::List => output(&ctx.ledger.records(), flags.format),
        RecordCommands::MarkGiven { nick } => {
            let pending = report::pending_silver_for(ctx.ledger.records(), nick);
            let outcome = ctx.ledger.mark_given(&ctx.session, nick)?;
            output(
                &json!({
                    "nick": nick,
                    "pending_before": pending,
                    "marked": outcome.affected,
                    "total_silver": outcome.total_silver,
                }),
                flags.format,
            )
        }
        RecordCommands::Delete { date, nick, silver } => {
            let key = RecordKey {
                date: *date,
                nick: nick.clone(),
                silver: *silver,
            };
            let removed = ctx.ledger.delete_record(&ctx.session, &key)?;
            output(&json!({ "deleted": removed }), flags.format)
        }
        RecordCommands::Import { file } => {
            let rows = read_uploaded_table(file)?;
            let imported = ctx.ledger.import_records(&ctx.session, rows)?;
            output(&json!({ "imported": imported }), flags.format)
        }
    }
}

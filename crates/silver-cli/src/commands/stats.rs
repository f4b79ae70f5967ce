use serde_json::json;

use silver_core::report;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// How many recipients the ranking shows, as in the original statistics view.
const TOP_RECIPIENTS: usize = 10;

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.ledger.records();
    if records.is_empty() {
        return output(&json!({ "message": "no data to report" }), flags.format);
    }

    let stats = report::summary(records);
    let top = report::top_recipients(records, TOP_RECIPIENTS);
    output(
        &json!({
            "total_silver": stats.total_silver,
            "given": stats.given_count,
            "not_given": stats.not_given_count,
            "top_recipients": top,
        }),
        flags.format,
    )
}

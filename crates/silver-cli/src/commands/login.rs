use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// The gate already ran in `main`; this records the successful login.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.ledger.record_login(&ctx.session)?;
    output(
        &json!({
            "status": "logged in",
            "user": ctx.session.user(),
        }),
        flags.format,
    )
}

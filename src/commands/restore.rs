use serde::Serialize;

use crate::cli::RestoreArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::swap::{self, RestoreMode};

#[derive(Debug, Serialize)]
struct RestoreReport {
    active: String,
    backup: String,
    strict: bool,
}

pub fn run(ctx: &AppContext, args: RestoreArgs) -> AppResult<()> {
    let mode = if args.strict {
        RestoreMode::Strict
    } else {
        RestoreMode::Lenient
    };
    swap::restore(&ctx.paths, mode)?;

    let report = RestoreReport {
        active: ctx.paths.active().display().to_string(),
        backup: ctx.paths.backup().display().to_string(),
        strict: args.strict,
    };

    let text = format!("restored {} from {}", report.active, report.backup);
    ctx.output.emit(&text, &report)
}

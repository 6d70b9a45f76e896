use serde::Serialize;

use crate::cli::SaveArgs;
use crate::config::Fixture;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::swap;

#[derive(Debug, Serialize)]
struct SaveReport {
    active: String,
    backup: String,
    fixture: Option<Fixture>,
}

pub fn run(ctx: &AppContext, args: SaveArgs) -> AppResult<()> {
    let fixture = args.fixture.into_fixture();
    swap::save(&ctx.paths, fixture)?;

    let report = SaveReport {
        active: ctx.paths.active().display().to_string(),
        backup: ctx.paths.backup().display().to_string(),
        fixture,
    };

    let text = match fixture {
        Some(fixture) => format!(
            "saved {} to {} ({} fixture in place)",
            report.active,
            report.backup,
            fixture.label()
        ),
        None => format!("saved {} to {}", report.active, report.backup),
    };
    ctx.output.emit(&text, &report)
}

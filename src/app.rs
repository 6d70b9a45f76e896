use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config_file,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(config_file, json)?;
    debug!(
        active = %ctx.paths.active().display(),
        backup = %ctx.paths.backup().display(),
        "resolved config paths"
    );

    match command {
        Command::Save(args) => commands::save::run(&ctx, args),
        Command::Restore(args) => commands::restore::run(&ctx, args),
        Command::Status => commands::status::run(&ctx),
    }
}

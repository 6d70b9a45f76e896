use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::Fixture;

#[derive(Debug, Parser)]
#[command(
    name = "config-swap",
    version,
    about = "Back up and restore the ferium config around a test run"
)]
pub struct Cli {
    #[arg(
        short = 'c',
        long,
        global = true,
        env = "FERIUM_CONFIG_FILE",
        visible_aliases = ["config", "conf"],
        value_hint = ValueHint::FilePath,
        help = "Active config file to swap (defaults to ~/.config/ferium/config.json)"
    )]
    pub config_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Move the active config into the backup slot
    Save(SaveArgs),
    /// Put the backed up config back in place
    Restore(RestoreArgs),
    /// Show which of the two config paths exist
    Status,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[arg(
        long,
        value_enum,
        default_value_t = FixtureArg::None,
        help = "Fixture to write at the active path after backing it up"
    )]
    pub fixture: FixtureArg,
}

#[derive(Debug, Args)]
pub struct RestoreArgs {
    #[arg(long, help = "Fail if the active config is already missing")]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum FixtureArg {
    None,
    Flat,
    Profiled,
}

impl FixtureArg {
    pub fn into_fixture(self) -> Option<Fixture> {
        match self {
            Self::None => None,
            Self::Flat => Some(Fixture::Flat),
            Self::Profiled => Some(Fixture::Profiled),
        }
    }
}

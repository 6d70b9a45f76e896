use std::path::Path;

use clap::Parser;
use config_swap::cli::{Cli, Command, FixtureArg};
use config_swap::config::Fixture;

#[test]
fn parses_save_without_fixture() {
    let cli = Cli::try_parse_from(["config-swap", "save"]).expect("cli parse should work");
    match cli.command {
        Command::Save(save) => {
            assert_eq!(save.fixture, FixtureArg::None);
            assert_eq!(save.fixture.into_fixture(), None);
        }
        _ => panic!("expected save command"),
    }
}

#[test]
fn parses_save_with_profiled_fixture() {
    let cli = Cli::try_parse_from(["config-swap", "save", "--fixture", "profiled"])
        .expect("cli parse should work");
    match cli.command {
        Command::Save(save) => assert_eq!(save.fixture.into_fixture(), Some(Fixture::Profiled)),
        _ => panic!("expected save command"),
    }
}

#[test]
fn rejects_unknown_fixture() {
    assert!(Cli::try_parse_from(["config-swap", "save", "--fixture", "nested"]).is_err());
}

#[test]
fn parses_strict_restore() {
    let cli =
        Cli::try_parse_from(["config-swap", "restore", "--strict"]).expect("cli parse should work");
    match cli.command {
        Command::Restore(restore) => assert!(restore.strict),
        _ => panic!("expected restore command"),
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "config-swap",
        "status",
        "--conf",
        "/tmp/alt/config.json",
        "--json",
        "-vv",
    ])
    .expect("cli parse should work");

    assert!(matches!(cli.command, Command::Status));
    assert_eq!(
        cli.config_file.as_deref(),
        Some(Path::new("/tmp/alt/config.json"))
    );
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn requires_a_subcommand() {
    assert!(Cli::try_parse_from(["config-swap"]).is_err());
}

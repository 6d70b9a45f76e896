use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run_command(config_file: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_config-swap"))
        .arg("--config-file")
        .arg(config_file)
        .args(args)
        .env_remove("FERIUM_CONFIG_FILE")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn config-swap")
}

#[test]
fn save_and_restore_through_the_binary() {
    let tmp = tempdir().unwrap();
    let active = tmp.path().join("config.json");
    let backup = tmp.path().join("config_backup.json");
    fs::write(&active, "{\"profiles\":[]}").unwrap();

    let out = run_command(&active, &["save", "--fixture", "flat"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(fs::read_to_string(&active).unwrap().contains("\"mod_loader\": \"fabric\""));
    assert_eq!(fs::read_to_string(&backup).unwrap(), "{\"profiles\":[]}");

    let out = run_command(&active, &["restore"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(&active).unwrap(), "{\"profiles\":[]}");
    assert!(!backup.exists());
}

#[test]
fn failure_exits_non_zero_with_message() {
    let tmp = tempdir().unwrap();
    let active = tmp.path().join("config.json");

    let out = run_command(&active, &["restore"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: failed to restore"), "{stderr}");
}

#[test]
fn status_as_json() {
    let tmp = tempdir().unwrap();
    let active = tmp.path().join("config.json");
    fs::write(&active, "{}").unwrap();

    let out = run_command(&active, &["status", "--json"]);
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["state"], "idle");
    assert_eq!(report["active_exists"], true);
    assert_eq!(report["backup_exists"], false);
}

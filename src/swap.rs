//! Filesystem moves that park the active config in its backup slot and put it
//! back afterwards.
//!
//! Callers must not run these concurrently against the same paths; nothing
//! here takes a lock.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ConfigPaths, Fixture};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum RestoreMode {
    /// A missing active config is not an error.
    #[default]
    Lenient,
    /// Every failure of the delete step propagates.
    Strict,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapState {
    Idle,
    Swapped,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwapStatus {
    pub active: String,
    pub backup: String,
    pub active_exists: bool,
    pub backup_exists: bool,
    pub state: SwapState,
}

/// Rename the active config to the backup slot, then write `fixture` at the
/// active path if one is given.
pub fn save(paths: &ConfigPaths, fixture: Option<Fixture>) -> AppResult<()> {
    rename_no_clobber(paths.active(), paths.backup())?;
    info!(
        from = %paths.active().display(),
        to = %paths.backup().display(),
        "backed up config"
    );

    let Some(fixture) = fixture else {
        return Ok(());
    };

    let payload = fixture.render()?;
    write_new(paths.active(), payload.as_bytes())?;
    info!(path = %paths.active().display(), ?fixture, "wrote fixture config");

    Ok(())
}

/// Delete whatever sits at the active path and move the backup back there.
pub fn restore(paths: &ConfigPaths, mode: RestoreMode) -> AppResult<()> {
    match fs::remove_file(paths.active()) {
        Ok(()) => debug!(path = %paths.active().display(), "removed test config"),
        Err(err) if err.kind() == ErrorKind::NotFound && mode == RestoreMode::Lenient => {
            debug!(path = %paths.active().display(), "no test config to remove");
        }
        Err(err) => return Err(AppError::fs("remove", paths.active(), err)),
    }

    fs::rename(paths.backup(), paths.active())
        .map_err(|err| AppError::fs("restore", paths.backup(), err))?;
    info!(
        from = %paths.backup().display(),
        to = %paths.active().display(),
        "restored config"
    );

    Ok(())
}

pub fn status(paths: &ConfigPaths) -> AppResult<SwapStatus> {
    let active_exists = exists(paths.active())?;
    let backup_exists = exists(paths.backup())?;

    let state = match (active_exists, backup_exists) {
        (_, true) => SwapState::Swapped,
        (true, false) => SwapState::Idle,
        (false, false) => SwapState::Missing,
    };

    Ok(SwapStatus {
        active: paths.active().display().to_string(),
        backup: paths.backup().display().to_string(),
        active_exists,
        backup_exists,
        state,
    })
}

// `fs::rename` replaces an existing destination on unix, which would destroy
// the first backup on a repeated save. The backup slot is checked first, so a
// missing active config with a backup present reports AlreadyExists, not
// NotFound.
fn rename_no_clobber(from: &Path, to: &Path) -> AppResult<()> {
    if exists(to)? {
        return Err(AppError::fs(
            "back up",
            from,
            io::Error::new(
                ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ),
        ));
    }

    fs::rename(from, to).map_err(|err| AppError::fs("back up", from, err))
}

fn write_new(path: &Path, contents: &[u8]) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| AppError::fs("create", path, err))?;
    file.write_all(contents)
        .map_err(|err| AppError::fs("write", path, err))?;
    Ok(())
}

fn exists(path: &Path) -> AppResult<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(AppError::fs("inspect", path, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_new_refuses_existing_file() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("config.json");
        fs::write(&path, "keep me").expect("seed file");

        let err = write_new(&path, b"{}").expect_err("file already exists");
        assert_eq!(err.io_kind(), Some(ErrorKind::AlreadyExists));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn write_new_creates_missing_file() {
        let tmp = tempdir().expect("create temp dir");
        let path = tmp.path().join("config.json");

        write_new(&path, b"{}").expect("create file");
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "ferium";
const CONFIG_FILE: &str = "config.json";
const BACKUP_SUFFIX: &str = "_backup";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ConfigPaths {
    active: PathBuf,
    backup: PathBuf,
}

impl ConfigPaths {
    /// Resolve the paths to swap, preferring `config_file` over the default
    /// `~/.config/ferium/config.json`.
    pub fn discover(config_file: Option<PathBuf>) -> AppResult<Self> {
        if let Some(active) = config_file {
            return Ok(Self::from_active(active));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;

        Ok(Self::from_active(
            home.join(".config").join(APP_DIR).join(CONFIG_FILE),
        ))
    }

    pub fn from_active(active: impl Into<PathBuf>) -> Self {
        let active = active.into();
        let backup = backup_path(&active);
        Self { active, backup }
    }

    pub fn active(&self) -> &Path {
        &self.active
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }
}

fn backup_path(active: &Path) -> PathBuf {
    let stem = active
        .file_stem()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| OsString::from("config"));

    let mut name = stem;
    name.push(BACKUP_SUFFIX);
    if let Some(ext) = active.extension() {
        name.push(".");
        name.push(ext);
    }

    active.with_file_name(name)
}

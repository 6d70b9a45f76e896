use std::path::PathBuf;

use crate::config::ConfigPaths;
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub paths: ConfigPaths,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config_file: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let paths = ConfigPaths::discover(config_file)?;
        let output = Output::new(json);

        Ok(Self { paths, output })
    }
}

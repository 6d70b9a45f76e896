use serde::Serialize;

use crate::error::AppResult;

const OUTPUT_DIR: &str = "/tmp/ferium/mods";
const GAME_VERSION: &str = "1.18.1";
const MOD_LOADER: &str = "fabric";
const PROFILE_NAME: &str = "Fabric 1.18.1";

/// Literal test configs that can stand in for the real one while it is
/// backed up.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    /// A single profile at the top level.
    Flat,
    /// `active_profile` plus a one-element `profiles` list.
    Profiled,
}

#[derive(Debug, Serialize)]
struct FlatConfig {
    output_dir: &'static str,
    game_version: &'static str,
    mod_loader: &'static str,
    mod_ids: Vec<String>,
    repos: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ProfiledConfig {
    active_profile: usize,
    profiles: Vec<Profile>,
}

#[derive(Debug, Serialize)]
struct Profile {
    name: &'static str,
    output_dir: &'static str,
    game_version: &'static str,
    mod_loader: &'static str,
    mod_ids: Vec<String>,
    repos: Vec<String>,
}

impl Fixture {
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Profiled => "profiled",
        }
    }

    /// Pretty JSON with two-space indentation and no trailing newline.
    pub fn render(self) -> AppResult<String> {
        let payload = match self {
            Self::Flat => serde_json::to_string_pretty(&FlatConfig {
                output_dir: OUTPUT_DIR,
                game_version: GAME_VERSION,
                mod_loader: MOD_LOADER,
                mod_ids: Vec::new(),
                repos: Vec::new(),
            })?,
            Self::Profiled => serde_json::to_string_pretty(&ProfiledConfig {
                active_profile: 0,
                profiles: vec![Profile {
                    name: PROFILE_NAME,
                    output_dir: OUTPUT_DIR,
                    game_version: GAME_VERSION,
                    mod_loader: MOD_LOADER,
                    mod_ids: Vec::new(),
                    repos: Vec::new(),
                }],
            })?,
        };
        Ok(payload)
    }
}

//! CLI command implementations for move-forge.
//!
//! Each module corresponds to a subcommand (`move-forge <command>`).

pub mod build;
pub mod doctor;
pub mod init;

use std::path::{Path, PathBuf};

use anyhow::Result;

use move_forge_core::config::{ForgeConfig, CONFIG_FILE};

/// Load the config named by `--config`, else `./move-forge.config.json` if it
/// exists, else the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ForgeConfig> {
    match explicit {
        Some(path) => Ok(ForgeConfig::load(path)?),
        None => {
            let default_path = PathBuf::from(CONFIG_FILE);
            if default_path.exists() {
                Ok(ForgeConfig::load(&default_path)?)
            } else {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                Ok(ForgeConfig::default())
            }
        }
    }
}

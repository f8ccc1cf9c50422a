//! Configuration for move-forge, stored as `move-forge.config.json`.
//!
//! Every field has a default, so an empty object (or no file at all) yields the
//! stock Aptos setup: the `aptos` binary on `PATH` and `AptosFramework` pinned
//! to the `main` branch of aptos-core.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};

/// Default config file name, looked up in the current directory by the CLI.
pub const CONFIG_FILE: &str = "move-forge.config.json";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Program name or path of the Aptos CLI.
    pub cli_binary: String,
    /// Version written into the generated `Move.toml`.
    pub package_version: String,
    /// The framework package every generated module depends on.
    pub framework: FrameworkDependency,
}

/// A git dependency entry in `Move.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkDependency {
    pub name: String,
    pub git: String,
    pub subdir: String,
    pub rev: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            cli_binary: "aptos".into(),
            package_version: "0.0.1".into(),
            framework: FrameworkDependency::default(),
        }
    }
}

impl Default for FrameworkDependency {
    fn default() -> Self {
        Self {
            name: "AptosFramework".into(),
            git: "https://github.com/aptos-labs/aptos-core.git".into(),
            subdir: "aptos-move/framework/aptos-framework/".into(),
            rev: "main".into(),
        }
    }
}

impl ForgeConfig {
    /// Load a config file. A missing file is an error; use [`ForgeConfig::default`]
    /// when no file was requested.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| BuildError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| BuildError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| BuildError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

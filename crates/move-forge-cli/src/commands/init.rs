use std::path::{Path, PathBuf};

use anyhow::Result;

use move_forge_core::config::{ForgeConfig, CONFIG_FILE};

use crate::output;

/// Write a default config file, refusing to clobber an existing one unless `force`.
pub fn run(config_path: Option<&Path>, force: bool) -> Result<()> {
    output::print_header("move-forge init");

    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    write_default(&path, force)?;

    output::print_success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    ForgeConfig::default().save(path)?;
    Ok(())
}

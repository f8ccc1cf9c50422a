use std::path::Path;

use anyhow::Result;

use move_forge_core::toolchain::{AptosCli, MIN_APTOS_VERSION};

use crate::output;

/// Report whether the configured Aptos CLI is installed and its version.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    output::print_header("move-forge doctor");

    let config = super::load_config(config_path)?;
    let cli = AptosCli::new(config.cli_binary);

    output::print_key_value("Binary", cli.binary());
    output::print_key_value(
        "Framework",
        &format!("{} @ {}", config.framework.name, config.framework.rev),
    );

    if let Err(missing) = cli.check_prerequisites() {
        for m in &missing {
            output::print_error(&format!(
                "Missing tool: {} - install: {}",
                m.tool_name, m.install_instructions
            ));
        }
        anyhow::bail!("missing prerequisites");
    }

    match cli.version() {
        Some(v) if v < MIN_APTOS_VERSION => output::print_warning(&format!(
            "{}: found v{v}, minimum v{MIN_APTOS_VERSION} recommended",
            cli.binary()
        )),
        Some(v) => output::print_success(&format!("{} v{v}", cli.binary())),
        None => output::print_warning(&format!(
            "{} found but its version could not be detected",
            cli.binary()
        )),
    }

    Ok(())
}

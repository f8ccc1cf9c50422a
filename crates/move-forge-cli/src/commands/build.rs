use std::path::Path;

use anyhow::Result;

use move_forge_core::toolchain::AptosCli;
use move_forge_core::{artifacts, BuildRequest, ContractBuilder};

use crate::output;

/// Compile a token module and emit the base64 result.
///
/// Checks that the Aptos CLI is on `PATH` first, warns if it is older than the
/// recommended minimum, then runs the build. The result JSON goes to stdout or
/// to `output_path`.
pub fn run(
    config_path: Option<&Path>,
    address: &str,
    token_name: &str,
    output_path: Option<&Path>,
) -> Result<()> {
    output::print_header("move-forge build");

    let config = super::load_config(config_path)?;
    let request = BuildRequest::new(address, token_name);

    output::print_key_value("Address", &request.address);
    output::print_key_value("Module", request.module_name());
    output::print_key_value("Package", &request.package_name());

    let cli = AptosCli::new(config.cli_binary.clone());
    if let Err(missing) = cli.check_prerequisites() {
        for m in &missing {
            output::print_error(&format!(
                "Missing tool: {} - {}",
                m.tool_name, m.install_instructions
            ));
        }
        anyhow::bail!("missing prerequisites");
    }
    if let Some(w) = cli.check_version() {
        output::print_warning(&format!(
            "{}: found v{}, minimum v{} recommended",
            w.tool_name, w.found_version, w.minimum_version
        ));
    }

    output::print_step(1, 2, "Compiling package...");
    let builder = ContractBuilder::with_compiler(cli, config);
    let result = builder.build(&request)?;

    output::print_step(2, 2, "Writing result...");
    match output_path {
        Some(path) => {
            artifacts::save(&result, path)?;
            output::print_key_value("Output", &path.display().to_string());
        }
        None => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    output::print_success("Build complete");
    Ok(())
}

//! move-forge CLI: generate and compile a minimal Aptos Move token module.
//!
//! `build` prints the compiled module and package metadata as base64 JSON on
//! stdout. Status lines and logs go to stderr so the JSON can be piped.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "move-forge",
    about = "Generate, compile, and package a minimal Aptos Move token module",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to move-forge.config.json (default: ./move-forge.config.json if present)
    #[arg(long, global = true, env = "MOVE_FORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a module for ADDRESS named TOKEN_NAME
    Build {
        /// Account address the module is published under (e.g. 0x1)
        #[arg(long)]
        address: String,

        /// Module and struct name; lower-cased it also names the package
        #[arg(long)]
        token_name: String,

        /// Write the result JSON here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write a default move-forge.config.json
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Check that the Aptos CLI is installed and recent enough
    Doctor,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build {
            address,
            token_name,
            output,
        } => {
            commands::build::run(cli.config.as_deref(), &address, &token_name, output.as_deref())?;
        }
        Commands::Init { force } => {
            commands::init::run(cli.config.as_deref(), force)?;
        }
        Commands::Doctor => {
            commands::doctor::run(cli.config.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "move-forge",
            "build",
            "--address",
            "0x1",
            "--token-name",
            "MyCoin",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Build {
                address,
                token_name,
                output,
            } => {
                assert_eq!(address, "0x1");
                assert_eq!(token_name, "MyCoin");
                assert!(output.is_none());
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_build_requires_token_name() {
        assert!(Cli::try_parse_from(["move-forge", "build", "--address", "0x1"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["move-forge", "doctor", "--config", "custom.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
    }
}

//! The external Move compiler.
//!
//! [`MoveCompiler`] is the seam between the builder and whatever actually compiles
//! the package. [`AptosCli`] is the real implementation: it shells out to
//! `aptos move compile` and blocks until the process exits. There is no timeout.

use std::path::Path;
use std::process::Command;

use crate::error::{BuildError, Result};
use crate::version::{detect_version, Version};

/// Oldest Aptos CLI release known to write `package-metadata.bcs` where we look for it.
pub const MIN_APTOS_VERSION: Version = Version::new(3, 0, 0);

const APTOS_INSTALL: &str = "https://aptos.dev/tools/aptos-cli/";

/// Captured output of a successful compile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CompileOutput {
    /// Both streams, stdout first, separated by a newline when both are non-empty.
    pub fn combined(&self) -> String {
        join_streams(&self.stdout, &self.stderr)
    }
}

/// Information about a missing prerequisite tool.
#[derive(Debug, Clone)]
pub struct PrerequisiteError {
    pub tool_name: String,
    pub install_instructions: String,
}

/// Warning about a tool version being below the recommended minimum.
#[derive(Debug, Clone)]
pub struct VersionWarning {
    pub tool_name: String,
    pub found_version: String,
    pub minimum_version: String,
}

/// Compiles a Move package laid out on disk.
pub trait MoveCompiler {
    /// Compile the package rooted at `package_dir`, saving build metadata.
    ///
    /// `named_address` is a single `name=address` binding. A non-zero exit must
    /// come back as [`BuildError::CompilationFailed`] carrying the tool's output.
    fn compile(&self, package_dir: &Path, named_address: &str) -> Result<CompileOutput>;
}

/// Wrapper around the `aptos` CLI.
#[derive(Debug, Clone)]
pub struct AptosCli {
    binary: String,
}

impl AptosCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Arguments passed to the binary for one compile.
    pub fn compile_args(package_dir: &Path, named_address: &str) -> Vec<std::ffi::OsString> {
        vec![
            "move".into(),
            "compile".into(),
            "--save-metadata".into(),
            "--package-dir".into(),
            package_dir.as_os_str().to_owned(),
            "--named-addresses".into(),
            named_address.into(),
        ]
    }

    /// Check that the binary can be found.
    pub fn check_prerequisites(&self) -> std::result::Result<(), Vec<PrerequisiteError>> {
        if which::which(&self.binary).is_err() {
            return Err(vec![PrerequisiteError {
                tool_name: self.binary.clone(),
                install_instructions: APTOS_INSTALL.into(),
            }]);
        }
        Ok(())
    }

    /// Installed version, if it can be detected.
    pub fn version(&self) -> Option<Version> {
        detect_version(&self.binary)
    }

    /// Warn when the installed CLI is older than [`MIN_APTOS_VERSION`].
    ///
    /// An undetectable version produces no warning.
    pub fn check_version(&self) -> Option<VersionWarning> {
        let found = self.version()?;
        (found < MIN_APTOS_VERSION).then(|| VersionWarning {
            tool_name: self.binary.clone(),
            found_version: found.to_string(),
            minimum_version: MIN_APTOS_VERSION.to_string(),
        })
    }
}

impl Default for AptosCli {
    fn default() -> Self {
        Self::new("aptos")
    }
}

impl MoveCompiler for AptosCli {
    fn compile(&self, package_dir: &Path, named_address: &str) -> Result<CompileOutput> {
        tracing::info!(
            binary = %self.binary,
            package_dir = %package_dir.display(),
            "running move compile"
        );

        let output = Command::new(&self.binary)
            .args(Self::compile_args(package_dir, named_address))
            .output();

        match output {
            Ok(out) if out.status.success() => Ok(CompileOutput {
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            }),
            Ok(out) => {
                let text = join_streams(
                    &String::from_utf8_lossy(&out.stdout),
                    &String::from_utf8_lossy(&out.stderr),
                );
                tracing::debug!(status = %out.status, "compiler output:\n{text}");
                Err(BuildError::CompilationFailed(text))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(BuildError::MissingTool {
                name: self.binary.clone(),
                install: APTOS_INSTALL.into(),
                source: e,
            }),
            Err(e) => Err(BuildError::Launch {
                binary: self.binary.clone(),
                source: e,
            }),
        }
    }
}

fn join_streams(stdout: &str, stderr: &str) -> String {
    let stdout = stdout.trim_end();
    let stderr = stderr.trim_end();
    match (stdout.is_empty(), stderr.is_empty()) {
        (true, _) => stderr.to_string(),
        (_, true) => stdout.to_string(),
        _ => format!("{stdout}\n{stderr}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_compile_args() {
        let args = AptosCli::compile_args(Path::new("/tmp/pkg"), "MyCoin=0x1");
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "move",
                "compile",
                "--save-metadata",
                "--package-dir",
                "/tmp/pkg",
                "--named-addresses",
                "MyCoin=0x1"
            ]
        );
    }

    #[test]
    fn test_combined_output() {
        let out = CompileOutput {
            stdout: "Compiling\n".into(),
            stderr: "warning: unused\n".into(),
        };
        assert_eq!(out.combined(), "Compiling\nwarning: unused");

        let only_err = CompileOutput {
            stdout: String::new(),
            stderr: "boom".into(),
        };
        assert_eq!(only_err.combined(), "boom");
    }

    #[test]
    fn test_missing_binary_is_missing_tool() {
        let cli = AptosCli::new("move_forge_missing_aptos_xyz");
        let err = cli.compile(&PathBuf::from("/tmp"), "X=0x1").unwrap_err();
        assert!(matches!(err, BuildError::MissingTool { .. }));
    }

    #[test]
    fn test_missing_tool_keeps_os_error() {
        let cli = AptosCli::new("move_forge_missing_aptos_xyz");
        let err = cli.compile(Path::new("/tmp"), "X=0x1").unwrap_err();
        let source = std::error::Error::source(&err).expect("io source");
        assert!(err.to_string().contains(&source.to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_binary_is_launch_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aptos");
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let cli = AptosCli::new(path.to_string_lossy().into_owned());
        let err = cli.compile(dir.path(), "MyCoin=0x1").unwrap_err();
        match &err {
            BuildError::Launch { binary, source } => {
                assert_eq!(binary.as_str(), path.to_str().unwrap());
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_prerequisites_report_missing_binary() {
        let cli = AptosCli::new("move_forge_missing_aptos_xyz");
        let missing = cli.check_prerequisites().unwrap_err();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].tool_name, "move_forge_missing_aptos_xyz");
    }

    #[test]
    fn test_no_version_warning_when_undetectable() {
        let cli = AptosCli::new("move_forge_missing_aptos_xyz");
        assert!(cli.check_version().is_none());
    }
}

//! The single error type surfaced by every move-forge operation.
//!
//! Callers only ever see [`BuildError`]. Each variant names the step that failed
//! and keeps enough detail (paths, the underlying error, or the compiler's own
//! output) to diagnose the failure without re-running it.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while building a Move package.
#[derive(Error, Debug)]
pub enum BuildError {
    // --- Configuration ---

    /// The configuration file (`move-forge.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Package workspace ---

    /// Creating the isolated build directory or writing a generated file failed.
    #[error("failed to prepare package at {path}: {source}")]
    Workspace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Toolchain ---

    /// The Aptos CLI (or the configured replacement) is not installed.
    #[error("required tool '{name}' not found ({source}) - install: {install}")]
    MissingTool {
        name: String,
        install: String,
        #[source]
        source: std::io::Error,
    },

    /// The compiler process could not be started.
    #[error("unexpected error during compilation: failed to run '{binary}': {source}")]
    Launch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The compiler exited with a non-zero status. Holds its captured output.
    #[error("compilation failed: {0}")]
    CompilationFailed(String),

    // --- Artifacts ---

    /// The compiler reported success but an expected output file is absent.
    #[error("compiled {kind} file not found at {path}")]
    ArtifactMissing { kind: &'static str, path: PathBuf },

    /// An output file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A build result could not be serialized to JSON.
    #[error("failed to serialize build result for {path}")]
    ResultFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, BuildError>`.
pub type Result<T> = std::result::Result<T, BuildError>;

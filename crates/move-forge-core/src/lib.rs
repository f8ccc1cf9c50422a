//! Core library for move-forge.
//!
//! Turns an account address and a token name into a compiled Aptos Move module.
//! The [`builder::ContractBuilder`] renders a one-module package from embedded
//! templates into an isolated temporary directory, runs `aptos move compile`
//! on it, and returns the bytecode module and package metadata as base64.
//!
//! The compiler sits behind the [`toolchain::MoveCompiler`] trait; [`toolchain::AptosCli`]
//! is the subprocess-backed implementation.

pub mod artifacts;
pub mod builder;
pub mod config;
pub mod error;
pub mod request;
pub mod templates;
pub mod toolchain;
pub mod version;
pub mod workspace;

pub use artifacts::BuildResult;
pub use builder::{build, ContractBuilder};
pub use config::ForgeConfig;
pub use error::{BuildError, Result};
pub use request::BuildRequest;

//! Compile-time embedded templates for the generated package.
//!
//! Paths are relative to this source file (`crates/move-forge-core/src/templates/embedded.rs`).
//! Do NOT rename or move template files without updating the `include_str!` path here.

/// `sources/<module>.move`: one module wrapping one empty struct.
pub const MOVE_MODULE: &str = include_str!("../../../../templates/move/module.move.tmpl");

/// `Move.toml`: package, framework dependency, named address.
pub const MOVE_TOML: &str = include_str!("../../../../templates/move/Move.toml.tmpl");

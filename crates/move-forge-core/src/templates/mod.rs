//! Template system for generated Move packages.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{address}}`, `{{module_name}}`, `{{struct_name}}`: the module source
//! - `{{package_name}}`, `{{package_version}}`: the `[package]` table
//! - `{{framework_name}}`, `{{framework_git}}`, `{{framework_subdir}}`, `{{framework_rev}}`:
//!   the single pinned dependency
//!
//! **Warning**: Template files in `templates/move/` and constants in [`embedded`] must stay
//! in sync. The `include_str!` paths are relative to `embedded.rs` and checked at compile-time.

pub mod embedded;
pub mod renderer;

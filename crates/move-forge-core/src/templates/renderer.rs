//! Handlebars-based renderer for the generated Move package.
//!
//! Strict mode is on: a `{{variable}}` missing from the data context is an error
//! instead of an empty string, so a half-filled `Move.toml` never reaches the compiler.
//! HTML escaping is off because the outputs are Move source and TOML.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ForgeConfig;
use crate::error::{BuildError, Result};
use crate::request::BuildRequest;
use crate::templates::embedded;

/// The two generated files, rendered but not yet written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPackage {
    /// Contents of `sources/<module>.move`.
    pub source: String,
    /// Contents of `Move.toml`.
    pub manifest: String,
}

/// Template renderer using Handlebars in strict mode.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| BuildError::TemplateRender(e.to_string()))
    }

    /// Render both package files for `request`.
    pub fn render_package(
        &self,
        request: &BuildRequest,
        config: &ForgeConfig,
    ) -> Result<RenderedPackage> {
        let source = self.render(
            embedded::MOVE_MODULE,
            &json!({
                "address": request.address,
                "module_name": request.module_name(),
                "struct_name": request.struct_name(),
            }),
        )?;

        let manifest = self.render(
            embedded::MOVE_TOML,
            &json!({
                "package_name": request.package_name(),
                "package_version": config.package_version,
                "framework_name": config.framework.name,
                "framework_git": config.framework.git,
                "framework_subdir": config.framework.subdir,
                "framework_rev": config.framework.rev,
                "module_name": request.module_name(),
                "address": request.address,
            }),
        )?;

        Ok(RenderedPackage { source, manifest })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render both package files with a fresh renderer.
pub fn render_package(request: &BuildRequest, config: &ForgeConfig) -> Result<RenderedPackage> {
    TemplateRenderer::new().render_package(request, config)
}

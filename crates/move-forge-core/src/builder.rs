//! The contract builder: render, compile, collect.
//!
//! One call to [`ContractBuilder::build`] renders the two package files into a
//! fresh [`PackageWorkspace`], runs the compiler on it, reads the bytecode
//! module and package metadata back, and returns them base64-encoded. The
//! workspace is removed before the call returns, whether it succeeded or not.
//! Nothing is cached between calls, so concurrent builds never share state.

use std::path::Path;

use crate::artifacts::BuildResult;
use crate::config::ForgeConfig;
use crate::error::{BuildError, Result};
use crate::request::BuildRequest;
use crate::templates::renderer::TemplateRenderer;
use crate::toolchain::{AptosCli, MoveCompiler};
use crate::workspace::PackageWorkspace;

/// Builds single-module Move packages with a [`MoveCompiler`].
pub struct ContractBuilder<C = AptosCli> {
    compiler: C,
    config: ForgeConfig,
    renderer: TemplateRenderer,
}

impl ContractBuilder<AptosCli> {
    /// Builder backed by the Aptos CLI named in `config.cli_binary`.
    pub fn new(config: ForgeConfig) -> Self {
        let compiler = AptosCli::new(config.cli_binary.clone());
        Self::with_compiler(compiler, config)
    }
}

impl<C: MoveCompiler> ContractBuilder<C> {
    pub fn with_compiler(compiler: C, config: ForgeConfig) -> Self {
        Self {
            compiler,
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    /// Compile `request` and return both artifacts.
    ///
    /// Either both files are read and encoded or the call fails; there are no
    /// partial results.
    pub fn build(&self, request: &BuildRequest) -> Result<BuildResult> {
        tracing::info!(
            module = request.module_name(),
            package = %request.package_name(),
            address = %request.address,
            "building Move package"
        );

        let rendered = self.renderer.render_package(request, &self.config)?;

        let workspace = PackageWorkspace::create()?;
        workspace.write_package(request, &rendered)?;

        let output = self
            .compiler
            .compile(workspace.root(), &request.named_address())?;
        tracing::debug!("compilation output:\n{}", output.combined());

        workspace.log_build_outputs(request);

        let module_path = workspace.module_path(request);
        let metadata_path = workspace.metadata_path(request);
        require_artifact("module", &module_path)?;
        require_artifact("metadata", &metadata_path)?;

        let module = read_artifact(&module_path)?;
        let metadata = read_artifact(&metadata_path)?;
        let result = BuildResult::from_bytes(&module, &metadata);

        if let Err(e) = workspace.close() {
            tracing::warn!("failed to remove package workspace: {e}");
        }

        tracing::info!(
            module_bytes = module.len(),
            metadata_bytes = metadata.len(),
            "build complete"
        );
        Ok(result)
    }
}

/// Build with the default configuration (the `aptos` binary on `PATH`).
pub fn build(address: &str, token_name: &str) -> Result<BuildResult> {
    ContractBuilder::new(ForgeConfig::default()).build(&BuildRequest::new(address, token_name))
}

/// A successful compile must leave this file behind; its absence means the
/// toolchain's output layout is not the one we expect.
fn require_artifact(kind: &'static str, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(BuildError::ArtifactMissing {
            kind,
            path: path.to_path_buf(),
        })
    }
}

fn read_artifact(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| BuildError::ArtifactRead {
        path: path.to_path_buf(),
        source: e,
    })
}

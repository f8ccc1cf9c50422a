//! The isolated on-disk package a single build runs in.
//!
//! ## Directory layout
//!
//! ```text
//! <tmp>/move-forge-XXXXXX/
//! ├── Move.toml
//! ├── sources/<Module>.move
//! └── build/<package>/                  # written by the compiler
//!     ├── bytecode_modules/<Module>.mv
//!     └── package-metadata.bcs
//! ```
//!
//! The directory is owned by a [`tempfile::TempDir`]; dropping the
//! [`PackageWorkspace`] deletes it along with everything the compiler wrote.

use std::path::{Component, Path, PathBuf};

use tempfile::TempDir;

use crate::error::{BuildError, Result};
use crate::request::BuildRequest;
use crate::templates::renderer::RenderedPackage;

const DIR_PREFIX: &str = "move-forge-";

/// A freshly created, exclusively owned package directory.
#[derive(Debug)]
pub struct PackageWorkspace {
    dir: TempDir,
}

impl PackageWorkspace {
    /// Create a new empty directory under the system temp dir.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(DIR_PREFIX)
            .tempdir()
            .map_err(|e| BuildError::Workspace {
                path: std::env::temp_dir(),
                source: e,
            })?;
        tracing::debug!(path = %dir.path().display(), "created package workspace");
        Ok(Self { dir })
    }

    /// Root of the package (`--package-dir`).
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root().join("sources")
    }

    pub fn source_path(&self, request: &BuildRequest) -> PathBuf {
        self.sources_dir().join(format!("{}.move", request.module_name()))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root().join("Move.toml")
    }

    /// `build/<package>/`, populated by the compiler.
    pub fn build_dir(&self, request: &BuildRequest) -> PathBuf {
        self.root().join("build").join(request.package_name())
    }

    pub fn bytecode_dir(&self, request: &BuildRequest) -> PathBuf {
        self.build_dir(request).join("bytecode_modules")
    }

    pub fn module_path(&self, request: &BuildRequest) -> PathBuf {
        self.bytecode_dir(request).join(format!("{}.mv", request.module_name()))
    }

    pub fn metadata_path(&self, request: &BuildRequest) -> PathBuf {
        self.build_dir(request).join("package-metadata.bcs")
    }

    /// Write `sources/<module>.move` and `Move.toml`.
    ///
    /// The module name must be a single plain path component so the source file
    /// stays inside the workspace. Nothing is written when it is not.
    pub fn write_package(&self, request: &BuildRequest, rendered: &RenderedPackage) -> Result<()> {
        let sources = self.sources_dir();
        ensure_file_name(&sources, request.module_name())?;
        std::fs::create_dir_all(&sources).map_err(|e| BuildError::Workspace {
            path: sources.clone(),
            source: e,
        })?;

        write_file(&self.source_path(request), &rendered.source)?;
        write_file(&self.manifest_path(), &rendered.manifest)?;

        log_listing("package root", self.root());
        log_listing("sources", &sources);
        Ok(())
    }

    /// Log what the compiler left behind. Debug output only.
    pub fn log_build_outputs(&self, request: &BuildRequest) {
        let build_dir = self.build_dir(request);
        if build_dir.exists() {
            log_listing("build directory", &build_dir);
        } else {
            tracing::debug!(path = %build_dir.display(), "build directory not found");
        }

        let bytecode_dir = self.bytecode_dir(request);
        if bytecode_dir.exists() {
            log_listing("bytecode modules", &bytecode_dir);
        }
    }

    /// Delete the directory now and report any failure.
    ///
    /// Dropping the workspace does the same but swallows errors.
    pub fn close(self) -> Result<()> {
        let path = self.root().to_path_buf();
        self.dir.close().map_err(|e| BuildError::Workspace { path, source: e })
    }
}

fn ensure_file_name(dir: &Path, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(BuildError::Workspace {
            path: dir.join(name),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("module name '{name}' is not a plain file name"),
            ),
        }),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| BuildError::Workspace {
        path: path.to_path_buf(),
        source: e,
    })
}

fn log_listing(label: &str, dir: &Path) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match std::fs::read_dir(dir) {
        Ok(entries) => {
            let mut names: Vec<String> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            tracing::debug!("{label} contents: {names:?}");
        }
        Err(e) => tracing::debug!("{label} unreadable: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> RenderedPackage {
        RenderedPackage {
            source: "module 0x1::Coin {}\n".into(),
            manifest: "[package]\n".into(),
        }
    }

    #[test]
    fn test_layout_paths() {
        let ws = PackageWorkspace::create().unwrap();
        let req = BuildRequest::new("0x1", "MyCoin");
        let root = ws.root().to_path_buf();

        assert_eq!(ws.source_path(&req), root.join("sources/MyCoin.move"));
        assert_eq!(ws.manifest_path(), root.join("Move.toml"));
        assert_eq!(
            ws.module_path(&req),
            root.join("build/mycoin_package/bytecode_modules/MyCoin.mv")
        );
        assert_eq!(
            ws.metadata_path(&req),
            root.join("build/mycoin_package/package-metadata.bcs")
        );
    }

    #[test]
    fn test_write_package() {
        let ws = PackageWorkspace::create().unwrap();
        let req = BuildRequest::new("0x1", "Coin");
        ws.write_package(&req, &rendered()).unwrap();

        assert_eq!(
            std::fs::read_to_string(ws.source_path(&req)).unwrap(),
            "module 0x1::Coin {}\n"
        );
        assert_eq!(
            std::fs::read_to_string(ws.manifest_path()).unwrap(),
            "[package]\n"
        );
    }

    #[test]
    fn test_write_package_twice_is_idempotent() {
        let ws = PackageWorkspace::create().unwrap();
        let req = BuildRequest::new("0x1", "Coin");
        ws.write_package(&req, &rendered()).unwrap();
        ws.write_package(&req, &rendered()).unwrap();
    }

    #[test]
    fn test_module_name_cannot_escape_workspace() {
        let ws = PackageWorkspace::create().unwrap();
        let escape = format!("../../move_forge_escape_{}", std::process::id());
        let outside = ws.sources_dir().join(format!("{escape}.move"));

        for name in [escape.as_str(), "/tmp/abs", "nested/Coin", "..", ""] {
            let err = ws
                .write_package(&BuildRequest::new("0x1", name), &rendered())
                .unwrap_err();
            assert!(matches!(err, BuildError::Workspace { .. }), "{name}: {err}");
        }

        assert!(!outside.exists());
        assert!(!ws.manifest_path().exists());
    }

    #[test]
    fn test_drop_removes_directory() {
        let ws = PackageWorkspace::create().unwrap();
        ws.write_package(&BuildRequest::new("0x1", "Coin"), &rendered()).unwrap();
        let root = ws.root().to_path_buf();
        assert!(root.exists());
        drop(ws);
        assert!(!root.exists());
    }

    #[test]
    fn test_close_removes_directory() {
        let ws = PackageWorkspace::create().unwrap();
        let root = ws.root().to_path_buf();
        ws.close().unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn test_workspaces_are_distinct() {
        let a = PackageWorkspace::create().unwrap();
        let b = PackageWorkspace::create().unwrap();
        assert_ne!(a.root(), b.root());
    }
}

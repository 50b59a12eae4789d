//! Project discovery: manifest lookup and token sources.
//!
//! # Example
//!
//! ```ignore
//! use coral::discovery::discover;
//!
//! let project = discover(".")?;
//! let compiler = project.manifest.compiler()?;
//! let css = compiler.generate(project.tokens()?);
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{read_tokens, scan_directory, scan_sources, tokenize};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "coral.yaml";

/// A project root and its (possibly default) manifest.
#[derive(Debug)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no coral.yaml was found).
    pub manifest: Manifest,

    /// Whether a coral.yaml manifest was found.
    pub has_manifest: bool,
}

impl Project {
    /// Token files named by the manifest's sources.
    pub fn source_files(&self) -> Vec<PathBuf> {
        scan_sources(
            &self.manifest.effective_sources(),
            &self.root,
            &self.manifest.extensions,
        )
    }

    /// All tokens from the manifest's sources, in file order.
    pub fn tokens(&self) -> Result<Vec<String>> {
        read_tokens(&self.source_files())
    }

    /// The stylesheet path, relative to the project root.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.manifest.output)
    }
}

/// Discover a project rooted at `root`.
///
/// Uses `root/coral.yaml` when present, defaults otherwise.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();
    let manifest_path = root.join(MANIFEST_FILENAME);

    if manifest_path.exists() {
        load_project(&manifest_path)
    } else {
        Ok(Project {
            root,
            manifest: Manifest::default(),
            has_manifest: false,
        })
    }
}

/// Load a project from an explicit manifest path; its directory is the root.
pub fn load_project(manifest_path: &Path) -> Result<Project> {
    let manifest = Manifest::load(manifest_path)?;
    let root = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(Project {
        root,
        manifest,
        has_manifest: true,
    })
}

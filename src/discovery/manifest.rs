//! Project manifest (coral.yaml) parsing.
//!
//! The manifest selects plugins, family fallback policies, token sources
//! and the output path.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compiler::Compiler;
use crate::error::{CoralError, Result};
use crate::family::{FallbackPolicy, FamilyKind, FamilySettings};
use crate::plugin::{core_plugins, plugin_by_name, Plugin, CORE_PLUGINS};

/// Project manifest loaded from coral.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Plugins to install, in order. Empty means every built-in plugin.
    pub plugins: Vec<String>,

    /// Fallback policy overrides, keyed by family name.
    pub families: HashMap<FamilyKind, FallbackPolicy>,

    /// Stylesheet to write.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Token files or directories. Defaults to the project root.
    pub sources: Vec<String>,

    /// File extensions picked up when walking a source directory.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist/coral.css")
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            plugins: vec![],
            families: HashMap::new(),
            output: default_output(),
            sources: vec![],
            extensions: default_extensions(),
        }
    }
}

impl Manifest {
    /// Load manifest from a coral.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoralError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CoralError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check coral.yaml syntax; family policies are `omit` or `neutral`".to_string()),
        })
    }

    /// Family policies with this manifest's overrides applied.
    pub fn family_settings(&self) -> FamilySettings {
        let mut settings = FamilySettings::new();
        for (kind, policy) in &self.families {
            settings.set(*kind, *policy);
        }
        settings
    }

    /// Instantiate the configured plugins in order.
    pub fn plugins(&self) -> Result<Vec<Box<dyn Plugin>>> {
        if self.plugins.is_empty() {
            return Ok(core_plugins());
        }

        let mut seen = HashSet::new();
        let mut plugins = Vec::with_capacity(self.plugins.len());

        for name in &self.plugins {
            if !seen.insert(name.as_str()) {
                return Err(CoralError::Config {
                    message: format!("Plugin '{}' is listed more than once", name),
                    help: Some("Remove the duplicate entry from `plugins`".to_string()),
                });
            }

            let plugin = plugin_by_name(name).ok_or_else(|| CoralError::UnknownPlugin {
                name: name.clone(),
                help: Some(format!("Available plugins: {}", CORE_PLUGINS.join(", "))),
            })?;
            plugins.push(plugin);
        }

        Ok(plugins)
    }

    /// Build a compiler from this manifest.
    pub fn compiler(&self) -> Result<Compiler> {
        Compiler::builder()
            .families(self.family_settings())
            .plugins(self.plugins()?)
            .build()
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

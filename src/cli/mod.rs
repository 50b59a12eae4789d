pub mod build;
pub mod check;
pub mod completions;
pub mod explain;
pub mod plugins;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::discovery::{discover, load_project, Project};
use crate::error::Result;

/// coral - utility-class to CSS compiler
#[derive(Parser, Debug)]
#[command(name = "coral")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest to use instead of ./coral.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate CSS from class tokens
    Build(build::BuildArgs),

    /// Show what individual tokens resolve to
    Explain(explain::ExplainArgs),

    /// Validate the configured rule registry
    Check(check::CheckArgs),

    /// List installed plugins and family policies
    Plugins(plugins::PluginsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// The project for a command: an explicit manifest, or whatever lives in
/// the current directory.
pub fn project(config: Option<&Path>) -> Result<Project> {
    match config {
        Some(path) => load_project(path),
        None => discover("."),
    }
}

//! Build command implementation.
//!
//! Reads whitespace-separated tokens and writes the generated stylesheet.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use crate::discovery::read_tokens;
use crate::error::{CoralError, Result};
use crate::output::{plural, Printer};

/// Generate CSS from class tokens
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Token files (defaults to the manifest's sources)
    pub files: Vec<PathBuf>,

    /// Extra token to compile (repeatable)
    #[arg(long = "class", short = 'c', value_name = "TOKEN")]
    pub classes: Vec<String>,

    /// Output file (defaults to the manifest's output)
    #[arg(long, short, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write CSS to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn run(args: BuildArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let project = super::project(config)?;
    let compiler = project.manifest.compiler()?;

    let mut tokens = if args.files.is_empty() && args.classes.is_empty() {
        project.tokens()?
    } else {
        read_tokens(&args.files)?
    };
    tokens.extend(args.classes);

    let compilation = compiler.compile(&tokens);
    for token in &compilation.unresolved {
        debug!(token = token.as_str(), "dropped unresolved token");
    }

    printer.status(
        "Generated",
        &format!(
            "{} ({} unresolved)",
            plural(compilation.resolved, "rule", "rules"),
            compilation.unresolved.len()
        ),
    );

    if args.stdout {
        print!("{}", compilation.css);
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| project.output_path());
    write_stylesheet(&path, &compilation.css)?;
    printer.success("Wrote", &printer.path(&path));

    Ok(())
}

fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CoralError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, css).map_err(|e| CoralError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write stylesheet: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_build_writes_stylesheet() {
        let dir = tempdir().unwrap();
        let tokens = dir.path().join("page.txt");
        fs::write(&tokens, "w-4 nope\nblur-sm").unwrap();
        let output = dir.path().join("out/site.css");

        let args = BuildArgs {
            files: vec![tokens],
            classes: vec!["grid".to_string()],
            output: Some(output.clone()),
            stdout: false,
        };
        let manifest = dir.path().join("coral.yaml");
        fs::write(&manifest, "plugins: []\n").unwrap();

        run(args, Some(manifest.as_path()), &Printer::plain()).unwrap();

        let css = fs::read_to_string(output).unwrap();
        assert!(css.starts_with(".w-4 {\n  width: 1rem;\n}\n"));
        assert!(css.contains(".blur-sm {"));
        assert!(css.ends_with(".grid {\n  display: grid;\n}\n"));
        assert!(!css.contains("nope"));
    }

    #[test]
    fn test_build_missing_token_file() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("coral.yaml");
        fs::write(&manifest, "output: out.css\n").unwrap();

        let args = BuildArgs {
            files: vec![dir.path().join("missing.txt")],
            classes: vec![],
            output: None,
            stdout: true,
        };
        assert!(matches!(
            run(args, Some(manifest.as_path()), &Printer::plain()),
            Err(CoralError::Io { .. })
        ));
    }
}

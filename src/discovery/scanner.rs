//! Token source discovery.
//!
//! Sources are files or directories. Named files are always read;
//! directories are walked recursively for files with a configured
//! extension.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CoralError, Result};

/// Collect token files under `root`, sorted by path.
pub fn scan_directory(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if !root.exists() {
        return vec![];
    }

    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| has_extension(path, extensions))
        .collect()
}

/// Resolve manifest sources relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        if source_path.is_file() {
            files.push(source_path);
        } else {
            files.extend(scan_directory(&source_path, extensions));
        }
    }

    files
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
}

/// Split source text into tokens.
pub fn tokenize(source: &str) -> impl Iterator<Item = &str> {
    source.split_whitespace()
}

/// Read every file and return its tokens, in file order.
pub fn read_tokens(paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    for path in paths {
        let content = std::fs::read_to_string(path).map_err(|e| CoralError::Io {
            path: path.clone(),
            message: format!("Failed to read tokens: {}", e),
        })?;
        tokens.extend(tokenize(&content).map(String::from));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn txt() -> Vec<String> {
        vec!["txt".to_string()]
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(scan_directory(dir.path(), &txt()).is_empty());
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        assert!(scan_directory(Path::new("/nonexistent/coral/tokens"), &txt()).is_empty());
    }

    #[test]
    fn test_scan_filters_by_extension_recursively() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pages/blog")).unwrap();
        fs::write(dir.path().join("a.txt"), "flex").unwrap();
        fs::write(dir.path().join("pages/blog/b.txt"), "grid").unwrap();
        fs::write(dir.path().join("pages/readme.md"), "# notes").unwrap();

        let files = scan_directory(dir.path(), &txt());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_extension_with_leading_dot() {
        assert!(has_extension(Path::new("x.classes"), &[".classes".to_string()]));
        assert!(!has_extension(Path::new("x"), &txt()));
    }

    #[test]
    fn test_scan_sources_keeps_named_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tokens.list"), "w-4").unwrap();
        fs::create_dir_all(dir.path().join("more")).unwrap();
        fs::write(dir.path().join("more/x.txt"), "h-4").unwrap();

        let sources = vec!["tokens.list".to_string(), "more".to_string()];
        let files = scan_sources(&sources, dir.path(), &txt());

        assert_eq!(files.len(), 2);
        assert_eq!(read_tokens(&files).unwrap(), vec!["w-4", "h-4"]);
    }

    #[test]
    fn test_tokenize() {
        let tokens: Vec<_> = tokenize(" blur-sm\n\tcontrast-125  w-[200px] ").collect();
        assert_eq!(tokens, vec!["blur-sm", "contrast-125", "w-[200px]"]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_tokens(&[PathBuf::from("/nonexistent/tokens.txt")]).unwrap_err();
        assert!(matches!(err, CoralError::Io { .. }));
    }
}

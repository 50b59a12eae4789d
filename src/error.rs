use miette::Diagnostic;
use thiserror::Error;

/// Main error type for coral operations.
///
/// Token resolution never produces one of these; an unknown or malformed
/// token simply yields no CSS. Errors come from configuration, rule
/// construction and file I/O.
#[derive(Error, Diagnostic, Debug)]
pub enum CoralError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(coral::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(coral::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid pattern `{pattern}`: {message}")]
    #[diagnostic(
        code(coral::pattern),
        help("Pattern grammars use regex syntax and are matched against the whole token suffix")
    )]
    InvalidPattern { pattern: String, message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(coral::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(coral::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown plugin '{name}'")]
    #[diagnostic(code(coral::plugin))]
    UnknownPlugin {
        name: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CoralError>;

//! Check command: build the registry and run validation.

use std::path::Path;

use clap::Args;

use crate::error::{CoralError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_registry};

/// Validate the configured rule registry
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let compiler = super::project(config)?.manifest.compiler()?;
    let registry = compiler.registry();

    printer.info(
        "Checking",
        &format!(
            "{} from {}",
            plural(registry.len(), "rule", "rules"),
            plural(registry.plugins().len(), "plugin", "plugins")
        ),
    );

    let result = validate_registry(registry);
    print_diagnostics(&result, printer);

    if result.has_errors() || (args.strict && !result.is_ok()) {
        return Err(CoralError::Validation {
            message: format!(
                "{}, {}",
                plural(result.error_count(), "error", "errors"),
                plural(result.warning_count(), "warning", "warnings")
            ),
            help: args
                .strict
                .then(|| "Warnings fail the check because --strict is set".to_string()),
        });
    }

    Ok(())
}

//! Validation for rule registries.
//!
//! Runs a suite of checks against a built registry and reports errors and
//! warnings. Used by `coral check`. Building a registry never runs these.

mod checks;
mod diagnostic;

pub use checks::{MISSING_FALLBACK, TEMPLATE_DRIFT};
pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::registry::RuleRegistry;

/// Run all validation checks against the registry.
pub fn validate_registry(registry: &RuleRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_template_drift(registry));
    result.merge(checks::check_missing_fallbacks(registry));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        eprintln!(
            "{}[{}]: {}",
            printer.severity(&d.severity.to_string(), d.is_error()),
            d.code,
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if !result.is_ok() {
        printer.warning("Checked", &format!("passed with {}", warnings));
    } else {
        printer.success("Checked", "no issues found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;
    use crate::family::{FallbackPolicy, FamilySettings};

    #[test]
    fn test_validate_empty_registry() {
        let registry = crate::registry::RegistryBuilder::new()
            .with_families(FamilySettings::uniform(FallbackPolicy::Neutral))
            .build()
            .unwrap();
        assert!(validate_registry(&registry).is_ok());
    }

    #[test]
    fn test_core_plugins_have_no_drift() {
        let compiler = Compiler::with_default_plugins().unwrap();
        let result = validate_registry(compiler.registry());

        assert!(!result.has_errors());
        assert!(result.iter().all(|d| d.code == MISSING_FALLBACK));
    }
}

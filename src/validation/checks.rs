//! Registry checks.
//!
//! Each check takes a `&RuleRegistry` and returns a `ValidationResult`.

use crate::family::{Fallback, FallbackPolicy};
use crate::registry::RuleRegistry;

use super::diagnostic::{Diagnostic, ValidationResult};

pub const TEMPLATE_DRIFT: &str = "coral::validate::template-drift";
pub const MISSING_FALLBACK: &str = "coral::validate::missing-fallback";

/// Exact rules that set a family variable must write that family's
/// template, character for character.
pub fn check_template_drift(registry: &RuleRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut rules: Vec<_> = registry.exact_rules().collect();
    rules.sort_by_key(|(token, _)| *token);

    for (token, properties) in rules {
        for family in registry.families().families() {
            let Some(variable) = properties.properties().find(|p| family.kind().owns_property(p))
            else {
                continue;
            };

            match properties.get(family.property()) {
                None => result.push(
                    Diagnostic::error(
                        TEMPLATE_DRIFT,
                        format!(
                            "'{}' sets {} but does not write `{}`",
                            token,
                            variable,
                            family.property()
                        ),
                    )
                    .with_help(format!("Declare it through the {} family", family.kind())),
                ),
                Some(value) if value != family.template() => result.push(
                    Diagnostic::error(
                        TEMPLATE_DRIFT,
                        format!(
                            "'{}' writes a `{}` value that differs from the {} template",
                            token,
                            family.property(),
                            family.kind()
                        ),
                    )
                    .with_help(format!("Expected: {}", family.template())),
                ),
                Some(_) => {}
            }
        }
    }

    result
}

/// Families under the `omit` policy whose variables have neutral values.
pub fn check_missing_fallbacks(registry: &RuleRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for family in registry.families().families() {
        if family.policy() != FallbackPolicy::Omit {
            continue;
        }

        let bare: Vec<&str> = family
            .kind()
            .variables()
            .iter()
            .filter(|v| matches!(v.fallback, Fallback::Neutral(_)))
            .map(|v| v.name)
            .collect();

        if !bare.is_empty() {
            result.push(
                Diagnostic::warning(
                    MISSING_FALLBACK,
                    format!(
                        "{} family references {} without fallbacks; an unset variable drops the whole `{}` value",
                        family.kind(),
                        crate::output::plural(bare.len(), "variable", "variables"),
                        family.property()
                    ),
                )
                .with_help(format!(
                    "Set `families: {{ {}: neutral }}` in coral.yaml to fall back to neutral values",
                    family.kind()
                )),
            );
        }
    }

    result
}

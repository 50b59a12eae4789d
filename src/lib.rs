//! coral - utility-class to CSS compiler
//!
//! Resolves utility tokens (`w-4`, `blur-sm`, `grid-cols-[200px_1fr]`)
//! against a registry of exact and pattern rules and emits one CSS rule
//! per recognised token. Composite properties such as `transform` and
//! `filter` are built from `--coral-*` custom properties so several
//! utilities can combine on one element.

pub mod arbitrary;
pub mod cli;
pub mod compiler;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod family;
pub mod output;
pub mod plugin;
pub mod registry;
pub mod rule;
pub mod validation;

pub use compiler::{Compilation, Compiler, CompilerBuilder, Resolution};
pub use discovery::{discover, load_project, Manifest, Project};
pub use emit::{emit_rule, escape_class};
pub use error::{CoralError, Result};
pub use family::{CompositeFamily, FallbackPolicy, FamilyKind, FamilySettings};
pub use plugin::{core_plugins, Plugin};
pub use registry::{PluginInfo, RegistryBuilder, RuleRegistry};
pub use rule::{Arity, PropertyMap, Rule};
pub use validation::{validate_registry, Diagnostic, Severity, ValidationResult};

//! The compiler: resolve tokens and concatenate their CSS.
//!
//! `generate` never fails. Tokens that resolve to nothing are dropped
//! without output; callers wanting diagnostics use [`Compiler::explain`]
//! or [`Compiler::compile`].
//!
//! # Example
//!
//! ```ignore
//! use coral::Compiler;
//!
//! let compiler = Compiler::with_default_plugins()?;
//! let css = compiler.generate(["blur-sm", "contrast-125", "w-[200px]"]);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::emit::write_rule;
use crate::error::Result;
use crate::family::FamilySettings;
use crate::plugin::{core_plugins, Plugin};
use crate::registry::{RegistryBuilder, RuleRegistry};
use crate::rule::{PropertyMap, Rule};

/// Outcome of resolving a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Resolution {
    Resolved { properties: PropertyMap },
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }

    pub fn properties(&self) -> Option<&PropertyMap> {
        match self {
            Resolution::Resolved { properties } => Some(properties),
            Resolution::Unresolved => None,
        }
    }
}

/// CSS plus the tokens that produced none of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compilation {
    pub css: String,
    pub resolved: usize,
    pub unresolved: Vec<String>,
}

/// A frozen registry with the generate entry points. `Send + Sync`; share
/// it behind an `Arc` for parallel generation.
#[derive(Debug)]
pub struct Compiler {
    registry: RuleRegistry,
}

impl Compiler {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::default()
    }

    /// A compiler with every built-in plugin installed.
    pub fn with_default_plugins() -> Result<Self> {
        Self::builder().core_plugins().build()
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Generate CSS for `tokens` in input order.
    pub fn generate<I, S>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.compile(tokens).css
    }

    /// Generate CSS for whitespace-separated tokens.
    pub fn generate_source(&self, source: &str) -> String {
        self.generate(source.split_whitespace())
    }

    /// Like [`generate`](Self::generate), also reporting what was dropped.
    pub fn compile<I, S>(&self, tokens: I) -> Compilation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compilation = Compilation::default();

        for token in tokens {
            let token = token.as_ref();
            match self.registry.resolve(token) {
                Some(properties) => {
                    write_rule(&mut compilation.css, token, &properties);
                    compilation.resolved += 1;
                }
                None => compilation.unresolved.push(token.to_string()),
            }
        }

        debug!(
            resolved = compilation.resolved,
            unresolved = compilation.unresolved.len(),
            "generated css"
        );
        compilation
    }

    /// Resolve one token without emitting CSS.
    pub fn explain(&self, token: &str) -> Resolution {
        match self.registry.resolve(token) {
            Some(properties) => Resolution::Resolved {
                properties: properties.into_owned(),
            },
            None => Resolution::Unresolved,
        }
    }
}

/// Assembles a [`Compiler`] from plugins, loose rules and family policies.
#[derive(Default)]
pub struct CompilerBuilder {
    families: FamilySettings,
    plugins: Vec<Box<dyn Plugin>>,
    rules: Vec<Rule>,
}

impl CompilerBuilder {
    pub fn families(mut self, families: FamilySettings) -> Self {
        self.families = families;
        self
    }

    pub fn plugin<P: Plugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn plugins<I: IntoIterator<Item = Box<dyn Plugin>>>(mut self, plugins: I) -> Self {
        self.plugins.extend(plugins);
        self
    }

    pub fn core_plugins(self) -> Self {
        self.plugins(core_plugins())
    }

    /// A rule registered after all plugins.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Result<Compiler> {
        let mut builder = RegistryBuilder::new().with_families(self.families);
        for plugin in &self.plugins {
            builder.install(plugin.as_ref());
        }
        builder.register_all(self.rules);

        Ok(Compiler::new(builder.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn compiler() -> Compiler {
        Compiler::builder()
            .rule(Rule::exact("flex", [("display", "flex")]))
            .rule(Rule::arbitrary("w", |v| Some(PropertyMap::from([("width", v)]))))
            .build()
            .unwrap()
    }

    #[test]
    fn test_generate_in_input_order() {
        let css = compiler().generate(["w-[1px]", "flex"]);
        assert_eq!(css, ".w-\\[1px\\] {\n  width: 1px;\n}\n.flex {\n  display: flex;\n}\n");
    }

    #[test]
    fn test_unknown_tokens_are_silent() {
        let compiler = compiler();
        assert_eq!(compiler.generate(["unknown-class"]), "");
        assert_eq!(compiler.generate(["w-[", "w-[]"]), "");
        assert_eq!(compiler.generate(Vec::<String>::new()), "");
    }

    #[test]
    fn test_generate_source() {
        let compiler = compiler();
        assert_eq!(compiler.generate_source("  flex\n\tnope "), compiler.generate(["flex"]));
    }

    #[test]
    fn test_compile_reports_unresolved() {
        let compilation = compiler().compile(["flex", "nope", "w-[]"]);
        assert_eq!(compilation.resolved, 1);
        assert_eq!(compilation.unresolved, vec!["nope", "w-[]"]);
    }

    #[test]
    fn test_explain() {
        let compiler = compiler();
        assert_eq!(
            compiler.explain("flex").properties(),
            Some(&PropertyMap::from([("display", "flex")]))
        );
        assert_eq!(compiler.explain("block"), Resolution::Unresolved);
    }

    #[test]
    fn test_explain_json() {
        let json = serde_json::to_string(&compiler().explain("w-[3px]")).unwrap();
        assert_eq!(json, r#"{"status":"resolved","properties":{"width":"3px"}}"#);
    }

    #[test]
    fn test_loose_rules_follow_plugins() {
        let compiler = Compiler::builder()
            .core_plugins()
            .rule(Rule::exact("flex", [("display", "inline-flex")]))
            .build()
            .unwrap();

        assert_eq!(compiler.registry().plugins().len(), 7);
        assert!(compiler.generate(["flex"]).contains("display: inline-flex;"));
    }

    #[test]
    fn test_compiler_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Compiler>();
    }
}

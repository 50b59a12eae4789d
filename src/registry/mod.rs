//! Rule registry: a builder for the install phase and a frozen, shareable
//! registry for resolution.
//!
//! Exact tokens live in a hash index and always win. Everything else is kept
//! in registration order and scanned first-match-wins; a handler that
//! declines a token lets the scan continue.
//!
//! # Example
//!
//! ```ignore
//! use coral::registry::RegistryBuilder;
//! use coral::plugin::Transforms;
//!
//! let mut builder = RegistryBuilder::new();
//! builder.install(&Transforms);
//! builder.exact("flex", [("display", "flex")]);
//!
//! let registry = builder.build()?;
//! let props = registry.resolve("scale-x-110");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use regex::Captures;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{CoralError, Result};
use crate::family::{CompositeFamily, FamilyKind, FamilySettings};
use crate::plugin::Plugin;
use crate::rule::{Arity, PropertyMap, Rule};

/// A plugin recorded by [`RegistryBuilder::install`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    /// Number of rules the plugin registered.
    pub rules: usize,
}

/// Accumulates rules during the install phase.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    exact: HashMap<String, PropertyMap>,
    patterns: Vec<Rule>,
    families: FamilySettings,
    plugins: Vec<PluginInfo>,
    registered: usize,
    errors: Vec<CoralError>,
}

impl RegistryBuilder {
    /// Create a new empty builder with default family policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given family policies for every rule installed afterwards.
    pub fn with_families(mut self, families: FamilySettings) -> Self {
        self.families = families;
        self
    }

    pub fn families(&self) -> &FamilySettings {
        &self.families
    }

    /// The family for `kind` under the configured policy.
    pub fn family(&self, kind: FamilyKind) -> CompositeFamily {
        self.families.family(kind)
    }

    /// Add a rule. A repeated exact token replaces the earlier one.
    pub fn register(&mut self, rule: Rule) -> &mut Self {
        self.registered += 1;
        match rule {
            Rule::Exact { token, properties } => {
                self.exact.insert(token, properties);
            }
            rule => self.patterns.push(rule),
        }
        self
    }

    /// Add several rules in order.
    pub fn register_all<I: IntoIterator<Item = Rule>>(&mut self, rules: I) -> &mut Self {
        for rule in rules {
            self.register(rule);
        }
        self
    }

    /// Add an exact-token rule.
    pub fn exact(&mut self, token: impl Into<String>, properties: impl Into<PropertyMap>) -> &mut Self {
        self.register(Rule::exact(token, properties))
    }

    /// Add a `prefix-[…]` rule.
    pub fn arbitrary<F>(&mut self, prefix: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&str) -> Option<PropertyMap> + Send + Sync + 'static,
    {
        self.register(Rule::arbitrary(prefix, handler))
    }

    /// Add a `prefix-[a,b,…]` rule.
    pub fn list<F>(&mut self, prefix: impl Into<String>, arity: Arity, handler: F) -> &mut Self
    where
        F: Fn(&[&str]) -> Option<PropertyMap> + Send + Sync + 'static,
    {
        self.register(Rule::list(prefix, arity, handler))
    }

    /// Add a pattern rule. A grammar that fails to compile is reported by
    /// [`build`](Self::build).
    pub fn pattern<F>(&mut self, prefix: impl Into<String>, grammar: &str, handler: F) -> &mut Self
    where
        F: Fn(&Captures<'_>) -> Option<PropertyMap> + Send + Sync + 'static,
    {
        match Rule::pattern(prefix, grammar, handler) {
            Ok(rule) => self.register(rule),
            Err(e) => {
                self.errors.push(e);
                self
            }
        }
    }

    /// Let a plugin register its rules.
    pub fn install(&mut self, plugin: &dyn Plugin) -> &mut Self {
        let before = self.registered;
        plugin.install(self);
        let rules = self.registered - before;

        debug!(plugin = plugin.name(), version = plugin.version(), rules, "installed plugin");
        self.plugins.push(PluginInfo {
            name: plugin.name().to_string(),
            version: plugin.version().to_string(),
            rules,
        });
        self
    }

    /// Number of `register` calls so far, including shadowed exact tokens.
    pub fn registered(&self) -> usize {
        self.registered
    }

    /// Freeze the registry.
    pub fn build(mut self) -> Result<RuleRegistry> {
        if !self.errors.is_empty() {
            return Err(self.errors.swap_remove(0));
        }

        debug!(
            exact = self.exact.len(),
            patterns = self.patterns.len(),
            plugins = self.plugins.len(),
            "registry frozen"
        );

        Ok(RuleRegistry {
            exact: self.exact,
            patterns: self.patterns,
            families: self.families,
            plugins: self.plugins,
        })
    }
}

/// Immutable rule set. Safe to share between threads.
#[derive(Debug)]
pub struct RuleRegistry {
    exact: HashMap<String, PropertyMap>,
    patterns: Vec<Rule>,
    families: FamilySettings,
    plugins: Vec<PluginInfo>,
}

impl RuleRegistry {
    /// Resolve a token to its declarations.
    ///
    /// Exact tokens are looked up first. Otherwise non-exact rules are tried
    /// in registration order and the first usable result wins. Results that
    /// are empty or carry an empty value count as no match.
    pub fn resolve(&self, token: &str) -> Option<Cow<'_, PropertyMap>> {
        if let Some(properties) = self.exact.get(token).filter(|p| usable(p)) {
            return Some(Cow::Borrowed(properties));
        }

        let resolved = self
            .patterns
            .iter()
            .filter_map(|rule| rule.matches(token))
            .find(usable);

        if resolved.is_none() {
            trace!(token, "unresolved token");
        }

        resolved.map(Cow::Owned)
    }

    /// Get the number of exact-token rules.
    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }

    /// Get the number of non-exact rules.
    pub fn pattern_len(&self) -> usize {
        self.patterns.len()
    }

    pub fn len(&self) -> usize {
        self.exact_len() + self.pattern_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact rules, in no particular order.
    pub fn exact_rules(&self) -> impl Iterator<Item = (&str, &PropertyMap)> {
        self.exact.iter().map(|(t, p)| (t.as_str(), p))
    }

    /// Non-exact rules in registration order.
    pub fn patterns(&self) -> &[Rule] {
        &self.patterns
    }

    /// Installed plugins in install order.
    pub fn plugins(&self) -> &[PluginInfo] {
        &self.plugins
    }

    pub fn families(&self) -> &FamilySettings {
        &self.families
    }
}

fn usable(properties: &PropertyMap) -> bool {
    !properties.is_empty() && !properties.has_empty_value()
}

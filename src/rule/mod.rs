//! Rules: the unit a plugin registers.
//!
//! A rule pairs a matcher with whatever its handler needs. Matchers are a
//! closed set so cheap structural checks (literal prefix, bracket scan,
//! arity) run before any regex is evaluated.
//!
//! # Example
//!
//! ```ignore
//! use coral::rule::{Arity, PropertyMap, Rule};
//!
//! let flex = Rule::exact("flex", [("display", "flex")]);
//! let width = Rule::arbitrary("w", |v| Some(PropertyMap::from([("width", v)])));
//! let clamp = Rule::list("w-clamp", Arity::Exactly(3), |parts| {
//!     Some(PropertyMap::from([("width", format!("clamp({})", parts.join(", ")))]))
//! });
//! ```

mod properties;

use std::fmt;

use regex::{Captures, Regex};

use crate::arbitrary::{extract_payload, split_list};
use crate::error::{CoralError, Result};

pub use properties::PropertyMap;

/// Handler for a single bracketed payload.
pub type ValueHandler = Box<dyn Fn(&str) -> Option<PropertyMap> + Send + Sync>;

/// Handler for a comma-separated bracketed payload, already split and trimmed.
pub type ListHandler = Box<dyn Fn(&[&str]) -> Option<PropertyMap> + Send + Sync>;

/// Handler for a pattern rule's capture groups.
pub type CaptureHandler = Box<dyn Fn(&Captures<'_>) -> Option<PropertyMap> + Send + Sync>;

/// Accepted component counts for a list payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => *n == count,
            Arity::OneOf(counts) => counts.contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{}", n),
            Arity::OneOf(counts) => {
                let parts: Vec<String> = counts.iter().map(|n| n.to_string()).collect();
                write!(f, "{}", parts.join(" or "))
            }
        }
    }
}

/// A single resolution rule.
pub enum Rule {
    /// A literal token with a fixed property map.
    Exact { token: String, properties: PropertyMap },

    /// `prefix-[PAYLOAD]`, payload passed through verbatim.
    Arbitrary { prefix: String, handler: ValueHandler },

    /// `prefix-[a,b,…]`, split on commas and checked against `arity`.
    ArbitraryList {
        prefix: String,
        arity: Arity,
        handler: ListHandler,
    },

    /// A literal prefix followed by a suffix that must fully match `grammar`.
    Pattern {
        prefix: String,
        grammar: Regex,
        handler: CaptureHandler,
    },
}

impl Rule {
    /// Create an exact-token rule.
    pub fn exact(token: impl Into<String>, properties: impl Into<PropertyMap>) -> Self {
        Rule::Exact {
            token: token.into(),
            properties: properties.into(),
        }
    }

    /// Create a single-value arbitrary rule for `prefix-[…]`.
    pub fn arbitrary<F>(prefix: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str) -> Option<PropertyMap> + Send + Sync + 'static,
    {
        Rule::Arbitrary {
            prefix: prefix.into(),
            handler: Box::new(handler),
        }
    }

    /// Create a list arbitrary rule for `prefix-[a,b,…]`.
    pub fn list<F>(prefix: impl Into<String>, arity: Arity, handler: F) -> Self
    where
        F: Fn(&[&str]) -> Option<PropertyMap> + Send + Sync + 'static,
    {
        Rule::ArbitraryList {
            prefix: prefix.into(),
            arity,
            handler: Box::new(handler),
        }
    }

    /// Create a pattern rule.
    ///
    /// `grammar` is matched against everything after `prefix` and must
    /// consume it entirely; it is anchored here, so callers write the bare
    /// suffix grammar (e.g. `(\d+)`).
    pub fn pattern<F>(prefix: impl Into<String>, grammar: &str, handler: F) -> Result<Self>
    where
        F: Fn(&Captures<'_>) -> Option<PropertyMap> + Send + Sync + 'static,
    {
        let anchored = format!("^(?:{})$", grammar);
        let grammar = Regex::new(&anchored).map_err(|e| CoralError::InvalidPattern {
            pattern: grammar.to_string(),
            message: e.to_string(),
        })?;

        Ok(Rule::Pattern {
            prefix: prefix.into(),
            grammar,
            handler: Box::new(handler),
        })
    }

    /// The literal token (exact rules) or prefix (everything else).
    pub fn key(&self) -> &str {
        match self {
            Rule::Exact { token, .. } => token,
            Rule::Arbitrary { prefix, .. }
            | Rule::ArbitraryList { prefix, .. }
            | Rule::Pattern { prefix, .. } => prefix,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Rule::Exact { .. })
    }

    /// Try this rule against a token.
    ///
    /// Returns `None` when the token does not fit the matcher or the
    /// handler declines it.
    pub fn matches(&self, token: &str) -> Option<PropertyMap> {
        match self {
            Rule::Exact {
                token: literal,
                properties,
            } => (literal == token).then(|| properties.clone()),
            Rule::Arbitrary { prefix, handler } => handler(extract_payload(token, prefix)?),
            Rule::ArbitraryList {
                prefix,
                arity,
                handler,
            } => {
                let payload = extract_payload(token, prefix)?;
                handler(&split_list(payload, *arity)?)
            }
            Rule::Pattern {
                prefix,
                grammar,
                handler,
            } => {
                let suffix = token.strip_prefix(prefix.as_str())?;
                handler(&grammar.captures(suffix)?)
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Exact { token, properties } => f
                .debug_struct("Exact")
                .field("token", token)
                .field("properties", properties)
                .finish(),
            Rule::Arbitrary { prefix, .. } => {
                f.debug_struct("Arbitrary").field("prefix", prefix).finish()
            }
            Rule::ArbitraryList { prefix, arity, .. } => f
                .debug_struct("ArbitraryList")
                .field("prefix", prefix)
                .field("arity", arity)
                .finish(),
            Rule::Pattern {
                prefix, grammar, ..
            } => f
                .debug_struct("Pattern")
                .field("prefix", prefix)
                .field("grammar", &grammar.as_str())
                .finish(),
        }
    }
}

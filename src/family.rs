//! Composable property families.
//!
//! A family is a set of rules that all write one composite property (such
//! as `transform` or `filter`) with the same template string, each rule
//! setting a different `--coral-` custom property the template reads.
//! Several classes from one family on the same element therefore compose
//! regardless of which class wins the cascade.
//!
//! Whether an unset variable should fall back to a neutral value is a
//! per-family [`FallbackPolicy`]. The defaults keep the bare `var()`
//! references for transform and filter families and use fallbacks for the
//! others.
//!
//! # Example
//!
//! ```ignore
//! use coral::family::{CompositeFamily, FallbackPolicy, FamilyKind};
//!
//! let filter = CompositeFamily::new(FamilyKind::Filter, FallbackPolicy::Omit);
//! let props = filter.declare("blur", "blur(4px)");
//! assert_eq!(props.get("filter"), Some(filter.template()));
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::PropertyMap;

/// Reserved prefix for every custom property the compiler writes.
pub const VAR_PREFIX: &str = "--coral-";

/// Full custom property name for a family variable.
pub fn custom_property(name: &str) -> String {
    format!("{}{}", VAR_PREFIX, name)
}

/// How a template references variables that have a neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// `var(--coral-x)`
    Omit,
    /// `var(--coral-x, <neutral>)`
    Neutral,
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::Omit => write!(f, "omit"),
            FallbackPolicy::Neutral => write!(f, "neutral"),
        }
    }
}

/// Fallback behaviour of one template variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// No neutral value exists.
    None,
    /// Used only under [`FallbackPolicy::Neutral`].
    Neutral(&'static str),
    /// Always rendered; the template is invalid without it.
    Always(&'static str),
}

/// A variable read by a family template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    pub name: &'static str,
    pub fallback: Fallback,
}

const fn var(name: &'static str, neutral: &'static str) -> Variable {
    Variable {
        name,
        fallback: Fallback::Neutral(neutral),
    }
}

const TRANSFORM_VARS: &[Variable] = &[
    var("translate-x", "0"),
    var("translate-y", "0"),
    var("rotate", "0"),
    var("skew-x", "0"),
    var("skew-y", "0"),
    var("scale-x", "1"),
    var("scale-y", "1"),
];

const TRANSFORM_3D_VARS: &[Variable] = &[
    var("perspective", "1000px"),
    var("rotate-x", "0deg"),
    var("rotate-y", "0deg"),
    var("rotate-z", "0deg"),
    var("translate-z", "0px"),
    var("scale-z", "1"),
];

const FILTER_VARS: &[Variable] = &[
    var("blur", "blur(0)"),
    var("brightness", "brightness(1)"),
    var("contrast", "contrast(1)"),
    var("grayscale", "grayscale(0)"),
    var("hue-rotate", "hue-rotate(0deg)"),
    var("invert", "invert(0)"),
    var("saturate", "saturate(1)"),
    var("sepia", "sepia(0)"),
    var("drop-shadow", "drop-shadow(0 0 #0000)"),
];

const BACKDROP_FILTER_VARS: &[Variable] = &[
    var("backdrop-blur", "blur(0)"),
    var("backdrop-brightness", "brightness(1)"),
    var("backdrop-contrast", "contrast(1)"),
    var("backdrop-grayscale", "grayscale(0)"),
    var("backdrop-hue-rotate", "hue-rotate(0deg)"),
    var("backdrop-invert", "invert(0)"),
    var("backdrop-opacity", "opacity(1)"),
    var("backdrop-saturate", "saturate(1)"),
    var("backdrop-sepia", "sepia(0)"),
];

const BOX_SHADOW_VARS: &[Variable] = &[
    var("ring-offset-shadow", "0 0 #0000"),
    var("ring-shadow", "0 0 #0000"),
    Variable {
        name: "shadow",
        fallback: Fallback::None,
    },
];

const GRADIENT_STOP_VARS: &[Variable] = &[
    var("gradient-from", "rgb(255 255 255 / 0)"),
    Variable {
        name: "gradient-via-stops",
        fallback: Fallback::Always(""),
    },
    var("gradient-to", "rgb(255 255 255 / 0)"),
];

/// The composite families the compiler knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyKind {
    Transform,
    Transform3d,
    Filter,
    BackdropFilter,
    BoxShadow,
    GradientStops,
}

impl FamilyKind {
    pub const ALL: [FamilyKind; 6] = [
        FamilyKind::Transform,
        FamilyKind::Transform3d,
        FamilyKind::Filter,
        FamilyKind::BackdropFilter,
        FamilyKind::BoxShadow,
        FamilyKind::GradientStops,
    ];

    /// Configuration key, e.g. `backdrop-filter`.
    pub fn name(self) -> &'static str {
        match self {
            FamilyKind::Transform => "transform",
            FamilyKind::Transform3d => "transform3d",
            FamilyKind::Filter => "filter",
            FamilyKind::BackdropFilter => "backdrop-filter",
            FamilyKind::BoxShadow => "box-shadow",
            FamilyKind::GradientStops => "gradient-stops",
        }
    }

    /// The composite property every rule in the family writes.
    pub fn property(self) -> &'static str {
        match self {
            FamilyKind::Transform | FamilyKind::Transform3d => "transform",
            FamilyKind::Filter => "filter",
            FamilyKind::BackdropFilter => "backdrop-filter",
            FamilyKind::BoxShadow => "box-shadow",
            FamilyKind::GradientStops => "--coral-gradient-stops",
        }
    }

    /// Template variables, in template order.
    pub fn variables(self) -> &'static [Variable] {
        match self {
            FamilyKind::Transform => TRANSFORM_VARS,
            FamilyKind::Transform3d => TRANSFORM_3D_VARS,
            FamilyKind::Filter => FILTER_VARS,
            FamilyKind::BackdropFilter => BACKDROP_FILTER_VARS,
            FamilyKind::BoxShadow => BOX_SHADOW_VARS,
            FamilyKind::GradientStops => GRADIENT_STOP_VARS,
        }
    }

    /// Look up a variable by its short name (without `--coral-`).
    pub fn variable(self, name: &str) -> Option<&'static Variable> {
        self.variables().iter().find(|v| v.name == name)
    }

    /// Check whether a full custom property name belongs to this family.
    pub fn owns_property(self, property: &str) -> bool {
        property
            .strip_prefix(VAR_PREFIX)
            .is_some_and(|name| self.variable(name).is_some())
    }

    pub fn default_policy(self) -> FallbackPolicy {
        match self {
            FamilyKind::Transform | FamilyKind::Filter | FamilyKind::BackdropFilter => {
                FallbackPolicy::Omit
            }
            FamilyKind::Transform3d | FamilyKind::BoxShadow | FamilyKind::GradientStops => {
                FallbackPolicy::Neutral
            }
        }
    }

    /// Render the template under a policy.
    pub fn render(self, policy: FallbackPolicy) -> String {
        let v = |name: &str| reference(self, name, policy);

        match self {
            FamilyKind::Transform => format!(
                "translate({}, {}) rotate({}) skewX({}) skewY({}) scaleX({}) scaleY({})",
                v("translate-x"),
                v("translate-y"),
                v("rotate"),
                v("skew-x"),
                v("skew-y"),
                v("scale-x"),
                v("scale-y"),
            ),
            FamilyKind::Transform3d => format!(
                "perspective({}) rotateX({}) rotateY({}) rotateZ({}) translateZ({}) scaleZ({})",
                v("perspective"),
                v("rotate-x"),
                v("rotate-y"),
                v("rotate-z"),
                v("translate-z"),
                v("scale-z"),
            ),
            FamilyKind::Filter | FamilyKind::BackdropFilter => self
                .variables()
                .iter()
                .map(|var| v(var.name))
                .collect::<Vec<_>>()
                .join(" "),
            FamilyKind::BoxShadow => format!(
                "{}, {}, {}",
                v("ring-offset-shadow"),
                v("ring-shadow"),
                v("shadow")
            ),
            // The via slot carries its own trailing comma.
            FamilyKind::GradientStops => format!(
                "{}, {} {}",
                v("gradient-from"),
                v("gradient-via-stops"),
                v("gradient-to")
            ),
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn reference(kind: FamilyKind, name: &str, policy: FallbackPolicy) -> String {
    let fallback = kind.variable(name).map(|v| v.fallback).unwrap_or(Fallback::None);

    match (fallback, policy) {
        (Fallback::Always(""), _) => format!("var({}{},)", VAR_PREFIX, name),
        (Fallback::Always(value), _) | (Fallback::Neutral(value), FallbackPolicy::Neutral) => {
            format!("var({}{}, {})", VAR_PREFIX, name, value)
        }
        _ => format!("var({}{})", VAR_PREFIX, name),
    }
}

/// A family bound to a policy, with its template rendered once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeFamily {
    kind: FamilyKind,
    policy: FallbackPolicy,
    template: String,
}

impl CompositeFamily {
    pub fn new(kind: FamilyKind, policy: FallbackPolicy) -> Self {
        Self {
            kind,
            policy,
            template: kind.render(policy),
        }
    }

    pub fn kind(&self) -> FamilyKind {
        self.kind
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    pub fn property(&self) -> &'static str {
        self.kind.property()
    }

    /// The composite value every rule in this family writes.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Set one variable and write the composite property after it.
    pub fn declare(&self, variable: &str, value: impl Into<String>) -> PropertyMap {
        self.declare_all([(variable, value.into())])
    }

    /// Set several variables, then write the composite property.
    pub fn declare_all<'a, I, V>(&self, assignments: I) -> PropertyMap
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<String>,
    {
        let mut properties = PropertyMap::new();
        for (variable, value) in assignments {
            debug_assert!(
                self.kind.variable(variable).is_some(),
                "{} is not a {} variable",
                variable,
                self.kind
            );
            properties.insert(custom_property(variable), value);
        }
        properties.insert(self.property(), self.template.clone());
        properties
    }
}

/// Per-family fallback policies, defaulting to [`FamilyKind::default_policy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilySettings {
    overrides: HashMap<FamilyKind, FallbackPolicy>,
}

impl FamilySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every family under the same policy.
    pub fn uniform(policy: FallbackPolicy) -> Self {
        let mut settings = Self::new();
        for kind in FamilyKind::ALL {
            settings.set(kind, policy);
        }
        settings
    }

    pub fn set(&mut self, kind: FamilyKind, policy: FallbackPolicy) -> &mut Self {
        self.overrides.insert(kind, policy);
        self
    }

    pub fn with(mut self, kind: FamilyKind, policy: FallbackPolicy) -> Self {
        self.set(kind, policy);
        self
    }

    pub fn policy(&self, kind: FamilyKind) -> FallbackPolicy {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_policy())
    }

    pub fn family(&self, kind: FamilyKind) -> CompositeFamily {
        CompositeFamily::new(kind, self.policy(kind))
    }

    /// All families in declaration order.
    pub fn families(&self) -> impl Iterator<Item = CompositeFamily> + '_ {
        FamilyKind::ALL.into_iter().map(|kind| self.family(kind))
    }
}

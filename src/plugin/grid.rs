//! Grid layout utilities.

use crate::registry::RegistryBuilder;

use super::scales::SPACING;
use super::{register_scale, single, Plugin};

const FLOWS: &[(&str, &str)] = &[
    ("row", "row"),
    ("col", "column"),
    ("dense", "dense"),
    ("row-dense", "row dense"),
    ("col-dense", "column dense"),
];

const AUTO_TRACKS: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fr", "minmax(0, 1fr)"),
];

pub struct Grid;

impl Plugin for Grid {
    fn name(&self) -> &str {
        "grid"
    }

    fn install(&self, registry: &mut RegistryBuilder) {
        registry.exact("grid", [("display", "grid")]);
        registry.exact("inline-grid", [("display", "inline-grid")]);

        install_template(registry, "grid-cols", "grid-template-columns", 12);
        install_template(registry, "grid-rows", "grid-template-rows", 6);
        install_placement(registry, "col", "grid-column", 12);
        install_placement(registry, "row", "grid-row", 6);

        register_scale(registry, "grid-flow", FLOWS, |v| single("grid-auto-flow", v));
        register_scale(registry, "auto-cols", AUTO_TRACKS, |v| single("grid-auto-columns", v));
        register_scale(registry, "auto-rows", AUTO_TRACKS, |v| single("grid-auto-rows", v));
        registry.arbitrary("auto-cols", |v| Some(single("grid-auto-columns", v)));
        registry.arbitrary("auto-rows", |v| Some(single("grid-auto-rows", v)));

        for (prefix, property) in [("gap", "gap"), ("gap-x", "column-gap"), ("gap-y", "row-gap")] {
            register_scale(registry, prefix, SPACING, |v| single(property, v));
            registry.arbitrary(prefix, move |v| Some(single(property, v)));
        }
    }
}

/// `{prefix}-N` for an even N-track template, `{prefix}-none`, and
/// `{prefix}-[…]`. Counts beyond `max` are served by a pattern rule.
fn install_template(registry: &mut RegistryBuilder, prefix: &str, property: &'static str, max: u32) {
    for n in 1..=max {
        registry.exact(format!("{}-{}", prefix, n), [(property, repeat(n))]);
    }
    registry.exact(format!("{}-none", prefix), [(property, "none")]);
    registry.exact(format!("{}-subgrid", prefix), [(property, "subgrid")]);

    registry.pattern(format!("{}-", prefix), r"([1-9][0-9]*)", move |caps| {
        let n: u32 = caps[1].parse().ok()?;
        Some(single(property, &repeat(n)))
    });
    registry.arbitrary(prefix, move |v| Some(single(property, v)));
}

fn repeat(n: u32) -> String {
    format!("repeat({}, minmax(0, 1fr))", n)
}

/// Span, start and end utilities for one axis.
fn install_placement(registry: &mut RegistryBuilder, axis: &str, property: &'static str, max: u32) {
    registry.exact(format!("{}-auto", axis), [(property, "auto")]);
    registry.exact(format!("{}-span-full", axis), [(property, "1 / -1")]);

    for n in 1..=max {
        registry.exact(
            format!("{}-span-{}", axis, n),
            [(property, format!("span {0} / span {0}", n))],
        );
    }
    for n in 1..=max + 1 {
        registry.exact(format!("{}-start-{}", axis, n), [(format!("{}-start", property), n.to_string())]);
        registry.exact(format!("{}-end-{}", axis, n), [(format!("{}-end", property), n.to_string())]);
    }

    registry.arbitrary(axis, move |v| Some(single(property, v)));
}

//! Background utilities and gradient stops.
//!
//! `bg-[…]` infers its property from the payload. Gradient direction
//! classes read `--coral-gradient-stops`, which `from-*`, `via-*` and
//! `to-*` populate through the gradient-stop family.

use crate::arbitrary::classify_background;
use crate::family::{CompositeFamily, FamilyKind};
use crate::registry::RegistryBuilder;

use super::scales::COLORS;
use super::{register_scale, single, Plugin};

const DIRECTIONS: &[(&str, &str)] = &[
    ("t", "to top"),
    ("tr", "to top right"),
    ("r", "to right"),
    ("br", "to bottom right"),
    ("b", "to bottom"),
    ("bl", "to bottom left"),
    ("l", "to left"),
    ("tl", "to top left"),
];

const SIZES: &[(&str, &str)] = &[("auto", "auto"), ("cover", "cover"), ("contain", "contain")];

const POSITIONS: &[(&str, &str)] = &[
    ("bottom", "bottom"),
    ("center", "center"),
    ("left", "left"),
    ("left-bottom", "left bottom"),
    ("left-top", "left top"),
    ("right", "right"),
    ("right-bottom", "right bottom"),
    ("right-top", "right top"),
    ("top", "top"),
];

const REPEATS: &[(&str, &str)] = &[
    ("repeat", "repeat"),
    ("no-repeat", "no-repeat"),
    ("repeat-x", "repeat-x"),
    ("repeat-y", "repeat-y"),
    ("repeat-round", "round"),
    ("repeat-space", "space"),
];

/// Bare color names fall back to a same-named custom property.
const COLOR_NAME: &str = "([a-z][a-z0-9-]*)";

pub struct Backgrounds;

impl Plugin for Backgrounds {
    fn name(&self) -> &str {
        "backgrounds"
    }

    fn install(&self, registry: &mut RegistryBuilder) {
        install_background(registry);
        install_gradients(registry);

        let stops = registry.family(FamilyKind::GradientStops);
        install_stop(registry, &stops, "from", "gradient-from", |c| c.to_string());
        install_stop(registry, &stops, "via", "gradient-via-stops", |c| format!("{},", c));
        install_stop(registry, &stops, "to", "gradient-to", |c| c.to_string());
    }
}

fn install_background(registry: &mut RegistryBuilder) {
    register_scale(registry, "bg", COLORS, |v| single("background-color", v));
    register_scale(registry, "bg", SIZES, |v| single("background-size", v));
    register_scale(registry, "bg", POSITIONS, |v| single("background-position", v));
    register_scale(registry, "bg", REPEATS, |v| single("background-repeat", v));
    registry.exact("bg-fixed", [("background-attachment", "fixed")]);
    registry.exact("bg-local", [("background-attachment", "local")]);
    registry.exact("bg-scroll", [("background-attachment", "scroll")]);

    // Must precede the classifier, which would read `url(…)` as a colour.
    registry.pattern("bg-", r"\[(url\(.+\))\]", |caps| {
        Some(single("background-image", &caps[1]))
    });
    registry.arbitrary("bg", |v| Some(single(classify_background(v).property(), v)));
}

fn install_gradients(registry: &mut RegistryBuilder) {
    registry.exact("bg-none", [("background-image", "none")]);

    for (key, direction) in DIRECTIONS {
        registry.exact(
            format!("bg-gradient-to-{}", key),
            [(
                "background-image",
                format!("linear-gradient({}, var(--coral-gradient-stops))", direction),
            )],
        );
    }

    registry.exact(
        "bg-gradient-radial",
        [("background-image", "radial-gradient(var(--coral-gradient-stops))")],
    );
    registry.exact(
        "bg-gradient-conic",
        [("background-image", "conic-gradient(var(--coral-gradient-stops))")],
    );
}

/// Named, arbitrary and custom-property forms of one gradient stop.
fn install_stop(
    registry: &mut RegistryBuilder,
    family: &CompositeFamily,
    prefix: &'static str,
    variable: &'static str,
    stop: fn(&str) -> String,
) {
    register_scale(registry, prefix, COLORS, |c| family.declare(variable, stop(c)));

    let arbitrary = family.clone();
    registry.arbitrary(prefix, move |v| Some(arbitrary.declare(variable, stop(v))));

    let named = family.clone();
    registry.pattern(format!("{}-", prefix), COLOR_NAME, move |caps| {
        let name = &caps[1];
        Some(named.declare(variable, stop(&format!("var(--{}, {})", name, name))))
    });
}

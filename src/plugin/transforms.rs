//! Transform utilities.
//!
//! Scale, rotate, translate and skew classes feed the 2-D transform family;
//! `rotate-x/y/z`, `translate-z`, `scale-z` and `perspective` feed the 3-D
//! family. List payloads (`rotate-3d-[…]`, `matrix-[…]`, …) write a raw
//! transform function instead.

use crate::family::FamilyKind;
use crate::registry::RegistryBuilder;
use crate::rule::{Arity, PropertyMap};

use super::scales::{FRACTIONS, PERSPECTIVE, ROTATE, SCALE, SKEW, SPACING};
use super::{register_negative_scale, register_scale, single, Plugin};

const ORIGINS: &[(&str, &str)] = &[
    ("center", "center"),
    ("top", "top"),
    ("top-right", "top right"),
    ("right", "right"),
    ("bottom-right", "bottom right"),
    ("bottom", "bottom"),
    ("bottom-left", "bottom left"),
    ("left", "left"),
    ("top-left", "top left"),
];

pub struct Transforms;

impl Plugin for Transforms {
    fn name(&self) -> &str {
        "transforms"
    }

    fn install(&self, registry: &mut RegistryBuilder) {
        install_2d(registry);
        install_3d(registry);
        install_functions(registry);
        install_utilities(registry);
    }
}

fn install_2d(registry: &mut RegistryBuilder) {
    let family = registry.family(FamilyKind::Transform);

    register_scale(registry, "scale", SCALE, |v| {
        family.declare_all([("scale-x", v), ("scale-y", v)])
    });
    for var in ["scale-x", "scale-y"] {
        register_scale(registry, var, SCALE, |v| family.declare(var, v));
    }

    register_scale(registry, "rotate", ROTATE, |v| family.declare("rotate", v));
    register_negative_scale(registry, "rotate", ROTATE, |v| family.declare("rotate", v));

    for var in ["translate-x", "translate-y"] {
        for scale in [SPACING, FRACTIONS] {
            register_scale(registry, var, scale, |v| family.declare(var, v));
            register_negative_scale(registry, var, scale, |v| family.declare(var, v));
        }
    }

    for var in ["skew-x", "skew-y"] {
        register_scale(registry, var, SKEW, |v| family.declare(var, v));
        register_negative_scale(registry, var, SKEW, |v| family.declare(var, v));
    }

    let both = family.clone();
    registry.arbitrary("scale", move |v| {
        Some(both.declare_all([("scale-x", v), ("scale-y", v)]))
    });
    for var in ["scale-x", "scale-y", "rotate", "translate-x", "translate-y", "skew-x", "skew-y"] {
        let family = family.clone();
        registry.arbitrary(var, move |v| Some(family.declare(var, v)));
    }
}

fn install_3d(registry: &mut RegistryBuilder) {
    let family = registry.family(FamilyKind::Transform3d);

    for var in ["rotate-x", "rotate-y", "rotate-z"] {
        register_scale(registry, var, ROTATE, |v| family.declare(var, v));
        register_negative_scale(registry, var, ROTATE, |v| family.declare(var, v));
    }

    register_scale(registry, "translate-z", SPACING, |v| family.declare("translate-z", v));
    register_negative_scale(registry, "translate-z", SPACING, |v| {
        family.declare("translate-z", v)
    });
    register_scale(registry, "scale-z", SCALE, |v| family.declare("scale-z", v));
    register_scale(registry, "perspective", PERSPECTIVE, |v| family.declare("perspective", v));

    for var in ["rotate-x", "rotate-y", "rotate-z", "translate-z", "scale-z", "perspective"] {
        let family = family.clone();
        registry.arbitrary(var, move |v| Some(family.declare(var, v)));
    }
}

/// `transform: name(a,b,…)`.
fn function(name: &str, args: &str) -> PropertyMap {
    single("transform", &format!("{}({})", name, args))
}

fn install_functions(registry: &mut RegistryBuilder) {
    registry.list("rotate-3d", Arity::Exactly(4), |parts| {
        Some(function("rotate3d", &parts.join(",")))
    });

    registry.list("scale-3d", Arity::OneOf(&[1, 3]), |parts| {
        let args = match parts {
            [uniform] => format!("{0},{0},{0}", uniform),
            _ => parts.join(","),
        };
        Some(function("scale3d", &args))
    });

    registry.list("translate-3d", Arity::Exactly(3), |parts| {
        Some(function("translate3d", &parts.join(",")))
    });
    registry.list("matrix", Arity::Exactly(6), |parts| {
        Some(function("matrix", &parts.join(",")))
    });
    registry.list("matrix3d", Arity::Exactly(16), |parts| {
        Some(function("matrix3d", &parts.join(",")))
    });
}

fn install_utilities(registry: &mut RegistryBuilder) {
    registry.exact("transform-none", [("transform", "none")]);

    register_scale(registry, "origin", ORIGINS, |v| single("transform-origin", v));
    registry.arbitrary("origin", |v| Some(single("transform-origin", v)));

    registry.exact("backface-visible", [("backface-visibility", "visible")]);
    registry.exact("backface-hidden", [("backface-visibility", "hidden")]);
    registry.exact("transform-style-3d", [("transform-style", "preserve-3d")]);
    registry.exact("transform-style-flat", [("transform-style", "flat")]);
}

//! Box shadows, rings, opacity and blend modes.

use crate::family::FamilyKind;
use crate::registry::RegistryBuilder;

use super::scales::{BOX_SHADOW, COLORS, OPACITY, RING_OFFSET, RING_WIDTH};
use super::{register_scale, single, Plugin};

const BLEND_MODES: &[&str] = &[
    "normal",
    "multiply",
    "screen",
    "overlay",
    "darken",
    "lighten",
    "color-dodge",
    "color-burn",
    "hard-light",
    "soft-light",
    "difference",
    "exclusion",
    "hue",
    "saturation",
    "color",
    "luminosity",
];

fn ring_shadow(width: &str) -> String {
    format!("0 0 0 {} var(--coral-ring-color, rgb(59 130 246 / 0.5))", width)
}

fn ring_offset_shadow(width: &str) -> String {
    format!("0 0 0 {} var(--coral-ring-offset-color, #fff)", width)
}

pub struct Effects;

impl Plugin for Effects {
    fn name(&self) -> &str {
        "effects"
    }

    fn install(&self, registry: &mut RegistryBuilder) {
        let shadow = registry.family(FamilyKind::BoxShadow);

        register_scale(registry, "shadow", BOX_SHADOW, |v| shadow.declare("shadow", v));
        register_scale(registry, "ring", RING_WIDTH, |v| {
            shadow.declare("ring-shadow", ring_shadow(v))
        });
        register_scale(registry, "ring-offset", RING_OFFSET, |v| {
            shadow.declare("ring-offset-shadow", ring_offset_shadow(v))
        });
        register_scale(registry, "ring", COLORS, |v| single("--coral-ring-color", v));
        register_scale(registry, "ring-offset", COLORS, |v| single("--coral-ring-offset-color", v));

        let arbitrary = shadow.clone();
        registry.arbitrary("shadow", move |v| Some(arbitrary.declare("shadow", v)));
        let arbitrary = shadow.clone();
        registry.arbitrary("ring", move |v| {
            Some(arbitrary.declare("ring-shadow", ring_shadow(v)))
        });

        register_scale(registry, "opacity", OPACITY, |v| single("opacity", v));
        registry.arbitrary("opacity", |v| Some(single("opacity", v)));

        for mode in BLEND_MODES {
            registry.exact(format!("mix-blend-{}", mode), [("mix-blend-mode", *mode)]);
            registry.exact(format!("bg-blend-{}", mode), [("background-blend-mode", *mode)]);
        }
    }
}

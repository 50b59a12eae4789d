//! Filter and backdrop-filter utilities.
//!
//! Each class sets one `--coral-` variable to a complete filter function
//! (`blur(4px)`) and repeats the family template as the visible property.

use crate::family::{CompositeFamily, FamilyKind};
use crate::registry::RegistryBuilder;

use super::scales::{BLUR, BRIGHTNESS, CONTRAST, DROP_SHADOW, HUE_ROTATE, OPACITY, SATURATE, TOGGLE};
use super::{register_negative_scale, register_scale, Plugin};

/// `(class prefix, css function, scale)` for filters that wrap a scale value.
const FUNCTIONS: &[(&str, &str, &[(&str, &str)])] = &[
    ("blur", "blur", BLUR),
    ("brightness", "brightness", BRIGHTNESS),
    ("contrast", "contrast", CONTRAST),
    ("grayscale", "grayscale", TOGGLE),
    ("hue-rotate", "hue-rotate", HUE_ROTATE),
    ("invert", "invert", TOGGLE),
    ("saturate", "saturate", SATURATE),
    ("sepia", "sepia", TOGGLE),
];

const BACKDROP_FUNCTIONS: &[(&str, &str, &[(&str, &str)])] = &[
    ("backdrop-blur", "blur", BLUR),
    ("backdrop-brightness", "brightness", BRIGHTNESS),
    ("backdrop-contrast", "contrast", CONTRAST),
    ("backdrop-grayscale", "grayscale", TOGGLE),
    ("backdrop-hue-rotate", "hue-rotate", HUE_ROTATE),
    ("backdrop-invert", "invert", TOGGLE),
    ("backdrop-opacity", "opacity", OPACITY),
    ("backdrop-saturate", "saturate", SATURATE),
    ("backdrop-sepia", "sepia", TOGGLE),
];

pub struct Filters;

impl Plugin for Filters {
    fn name(&self) -> &str {
        "filters"
    }

    fn install(&self, registry: &mut RegistryBuilder) {
        let filter = registry.family(FamilyKind::Filter);
        install_functions(registry, &filter, FUNCTIONS);

        register_scale(registry, "drop-shadow", DROP_SHADOW, |v| filter.declare("drop-shadow", v));
        let drop_shadow = filter.clone();
        registry.arbitrary("drop-shadow", move |v| {
            Some(drop_shadow.declare("drop-shadow", format!("drop-shadow({})", v)))
        });
        registry.exact("filter-none", [("filter", "none")]);

        let backdrop = registry.family(FamilyKind::BackdropFilter);
        install_functions(registry, &backdrop, BACKDROP_FUNCTIONS);
        registry.exact("backdrop-filter-none", [("backdrop-filter", "none")]);
    }
}

/// Register scale, negative (hue-rotate) and arbitrary rules for each
/// function. The class prefix doubles as the variable name.
fn install_functions(
    registry: &mut RegistryBuilder,
    family: &CompositeFamily,
    functions: &'static [(&'static str, &'static str, &'static [(&'static str, &'static str)])],
) {
    for &(prefix, function, scale) in functions {
        let declare = |v: &str| family.declare(prefix, format!("{}({})", function, v));

        register_scale(registry, prefix, scale, declare);
        if function == "hue-rotate" {
            register_negative_scale(registry, prefix, scale, declare);
        }

        let family = family.clone();
        registry.arbitrary(prefix, move |v| {
            Some(family.declare(prefix, format!("{}({})", function, v)))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RuleRegistry;
    use pretty_assertions::assert_eq;

    fn registry() -> RuleRegistry {
        let mut builder = RegistryBuilder::new();
        builder.install(&Filters);
        builder.build().unwrap()
    }

    #[test]
    fn test_blur_scale() {
        let registry = registry();
        assert_eq!(registry.resolve("blur-sm").unwrap().get("--coral-blur"), Some("blur(4px)"));
        assert_eq!(registry.resolve("blur").unwrap().get("--coral-blur"), Some("blur(8px)"));
        assert!(registry.resolve("blur-DEFAULT").is_none());
    }

    #[test]
    fn test_contrast_ratio() {
        let registry = registry();
        assert_eq!(
            registry.resolve("contrast-125").unwrap().get("--coral-contrast"),
            Some("contrast(1.25)")
        );
    }

    #[test]
    fn test_filter_template_identity() {
        let registry = registry();
        let blur = registry.resolve("blur-sm").unwrap().get("filter").map(String::from);
        let contrast = registry.resolve("contrast-125").unwrap().get("filter").map(String::from);
        let shadow = registry.resolve("drop-shadow-lg").unwrap().get("filter").map(String::from);

        assert_eq!(blur, contrast);
        assert_eq!(contrast, shadow);
    }

    #[test]
    fn test_grayscale_toggle() {
        let registry = registry();
        assert_eq!(
            registry.resolve("grayscale").unwrap().get("--coral-grayscale"),
            Some("grayscale(100%)")
        );
        assert_eq!(
            registry.resolve("grayscale-0").unwrap().get("--coral-grayscale"),
            Some("grayscale(0)")
        );
    }

    #[test]
    fn test_negative_hue_rotate() {
        let registry = registry();
        assert_eq!(
            registry.resolve("-hue-rotate-90").unwrap().get("--coral-hue-rotate"),
            Some("hue-rotate(-90deg)")
        );
        assert!(registry.resolve("-blur-sm").is_none());
    }

    #[test]
    fn test_arbitrary_filters() {
        let registry = registry();
        assert_eq!(
            registry.resolve("blur-[2px]").unwrap().get("--coral-blur"),
            Some("blur(2px)")
        );
        assert_eq!(
            registry.resolve("drop-shadow-[0_0_2px_red]").unwrap().get("--coral-drop-shadow"),
            Some("drop-shadow(0_0_2px_red)")
        );
        assert!(registry.resolve("blur-[]").is_none());
    }

    #[test]
    fn test_backdrop_family_is_separate() {
        let registry = registry();
        let props = registry.resolve("backdrop-blur-md").unwrap();

        assert_eq!(props.get("--coral-backdrop-blur"), Some("blur(12px)"));
        assert!(props.get("filter").is_none());
        assert!(props.get("backdrop-filter").unwrap().contains("var(--coral-backdrop-opacity)"));
    }

    #[test]
    fn test_backdrop_opacity() {
        let registry = registry();
        assert_eq!(
            registry.resolve("backdrop-opacity-50").unwrap().get("--coral-backdrop-opacity"),
            Some("opacity(0.5)")
        );
    }
}

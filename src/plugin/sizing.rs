//! Width and height utilities.

use crate::registry::RegistryBuilder;
use crate::rule::{Arity, PropertyMap};

use super::scales::{FRACTIONS, MAX_WIDTH, SPACING};
use super::{register_scale, single, Plugin};

const INTRINSIC: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const MIN_SIZE: &[(&str, &str)] = &[
    ("0", "0px"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

pub struct Sizing;

impl Plugin for Sizing {
    fn name(&self) -> &str {
        "sizing"
    }

    fn install(&self, registry: &mut RegistryBuilder) {
        for (prefix, property, screen) in [("w", "width", "100vw"), ("h", "height", "100vh")] {
            for scale in [SPACING, FRACTIONS, INTRINSIC] {
                register_scale(registry, prefix, scale, |v| single(property, v));
            }
            registry.exact(format!("{}-screen", prefix), [(property, screen)]);
            registry.arbitrary(prefix, move |v| Some(single(property, v)));
            registry.list(format!("{}-clamp", prefix), Arity::Exactly(3), move |parts| {
                Some(single(property, &format!("clamp({})", parts.join(", "))))
            });
        }

        for scale in [SPACING, FRACTIONS, INTRINSIC] {
            register_scale(registry, "size", scale, square);
        }
        registry.arbitrary("size", |v| Some(square(v)));

        register_scale(registry, "min-w", MIN_SIZE, |v| single("min-width", v));
        register_scale(registry, "max-w", MAX_WIDTH, |v| single("max-width", v));
        register_scale(registry, "min-h", MIN_SIZE, |v| single("min-height", v));
        register_scale(registry, "max-h", SPACING, |v| single("max-height", v));
        registry.exact("min-h-screen", [("min-height", "100vh")]);
        registry.exact("max-h-screen", [("max-height", "100vh")]);
        registry.exact("max-h-full", [("max-height", "100%")]);

        for (prefix, property) in [
            ("min-w", "min-width"),
            ("max-w", "max-width"),
            ("min-h", "min-height"),
            ("max-h", "max-height"),
        ] {
            registry.arbitrary(prefix, move |v| Some(single(property, v)));
        }
    }
}

fn square(value: &str) -> PropertyMap {
    PropertyMap::from([("width", value), ("height", value)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RuleRegistry;
    use pretty_assertions::assert_eq;

    fn registry() -> RuleRegistry {
        let mut builder = RegistryBuilder::new();
        builder.install(&Sizing);
        builder.build().unwrap()
    }

    #[test]
    fn test_width_scale() {
        let registry = registry();
        assert_eq!(registry.resolve("w-4").unwrap().get("width"), Some("1rem"));
        assert_eq!(registry.resolve("w-1/2").unwrap().get("width"), Some("50%"));
        assert_eq!(registry.resolve("h-screen").unwrap().get("height"), Some("100vh"));
    }

    #[test]
    fn test_arbitrary_width() {
        let registry = registry();
        assert_eq!(registry.resolve("w-[200px]").unwrap().get("width"), Some("200px"));
        assert!(registry.resolve("w-[]").is_none());
        assert!(registry.resolve("w-[").is_none());
    }

    #[test]
    fn test_clamp() {
        let registry = registry();
        assert_eq!(
            registry.resolve("w-clamp-[200px,50vw,600px]").unwrap().get("width"),
            Some("clamp(200px, 50vw, 600px)")
        );
        assert!(registry.resolve("w-clamp-[200px,50vw]").is_none());
        assert_eq!(
            registry.resolve("h-clamp-[1rem,10vh,4rem]").unwrap().get("height"),
            Some("clamp(1rem, 10vh, 4rem)")
        );
    }

    #[test]
    fn test_size_sets_both() {
        let registry = registry();
        let props = registry.resolve("size-[48px]").unwrap();
        assert_eq!(props.get("width"), Some("48px"));
        assert_eq!(props.get("height"), Some("48px"));
    }

    #[test]
    fn test_min_max() {
        let registry = registry();
        assert_eq!(registry.resolve("max-w-prose").unwrap().get("max-width"), Some("65ch"));
        assert_eq!(registry.resolve("min-h-[50dvh]").unwrap().get("min-height"), Some("50dvh"));
    }
}

//! Typography utilities.

use crate::arbitrary::classify_text;
use crate::registry::RegistryBuilder;
use crate::rule::PropertyMap;

use super::scales::{COLORS, FONT_SIZE, FONT_WEIGHT, LETTER_SPACING, LINE_HEIGHT};
use super::{register_scale, single, Plugin};

const ALIGN: &[(&str, &str)] = &[
    ("left", "left"),
    ("center", "center"),
    ("right", "right"),
    ("justify", "justify"),
    ("start", "start"),
    ("end", "end"),
];

const KEYWORDS: &[(&str, &str, &str)] = &[
    ("italic", "font-style", "italic"),
    ("not-italic", "font-style", "normal"),
    ("uppercase", "text-transform", "uppercase"),
    ("lowercase", "text-transform", "lowercase"),
    ("capitalize", "text-transform", "capitalize"),
    ("normal-case", "text-transform", "none"),
    ("underline", "text-decoration-line", "underline"),
    ("overline", "text-decoration-line", "overline"),
    ("line-through", "text-decoration-line", "line-through"),
    ("no-underline", "text-decoration-line", "none"),
    ("font-sans", "font-family", "ui-sans-serif, system-ui, sans-serif"),
    ("font-serif", "font-family", "ui-serif, Georgia, serif"),
    ("font-mono", "font-family", "ui-monospace, SFMono-Regular, monospace"),
];

pub struct Typography;

impl Plugin for Typography {
    fn name(&self) -> &str {
        "typography"
    }

    fn install(&self, registry: &mut RegistryBuilder) {
        for (key, (size, line_height)) in FONT_SIZE {
            registry.exact(
                format!("text-{}", key),
                [("font-size", *size), ("line-height", *line_height)],
            );
        }
        register_scale(registry, "text", COLORS, |v| single("color", v));
        register_scale(registry, "text", ALIGN, |v| single("text-align", v));
        registry.arbitrary("text", |v| Some(single(classify_text(v).property(), v)));

        register_scale(registry, "font", FONT_WEIGHT, |v| single("font-weight", v));
        registry.arbitrary("font", |v| Some(single("font-family", v)));

        register_scale(registry, "leading", LINE_HEIGHT, |v| single("line-height", v));
        registry.arbitrary("leading", |v| Some(single("line-height", v)));
        register_scale(registry, "tracking", LETTER_SPACING, |v| single("letter-spacing", v));
        registry.arbitrary("tracking", |v| Some(single("letter-spacing", v)));

        for (token, property, value) in KEYWORDS {
            registry.exact(*token, [(*property, *value)]);
        }
        registry.exact(
            "truncate",
            PropertyMap::from([
                ("overflow", "hidden"),
                ("text-overflow", "ellipsis"),
                ("white-space", "nowrap"),
            ]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RuleRegistry;
    use pretty_assertions::assert_eq;

    fn registry() -> RuleRegistry {
        let mut builder = RegistryBuilder::new();
        builder.install(&Typography);
        builder.build().unwrap()
    }

    #[test]
    fn test_font_size_sets_line_height() {
        let registry = registry();
        let props = registry.resolve("text-lg").unwrap();

        let order: Vec<_> = props.iter().collect();
        assert_eq!(order, vec![("font-size", "1.125rem"), ("line-height", "1.75rem")]);
    }

    #[test]
    fn test_text_arbitrary_classification() {
        let registry = registry();
        assert_eq!(registry.resolve("text-[22px]").unwrap().get("font-size"), Some("22px"));
        assert_eq!(registry.resolve("text-[#333]").unwrap().get("color"), Some("#333"));
        assert!(registry.resolve("text-[]").is_none());
    }

    #[test]
    fn test_text_color_and_align() {
        let registry = registry();
        assert_eq!(registry.resolve("text-red-500").unwrap().get("color"), Some("#ef4444"));
        assert_eq!(registry.resolve("text-center").unwrap().get("text-align"), Some("center"));
    }

    #[test]
    fn test_truncate_order() {
        let registry = registry();
        let props: Vec<_> = registry.resolve("truncate").unwrap().properties().map(String::from).collect();
        assert_eq!(props, vec!["overflow", "text-overflow", "white-space"]);
    }

    #[test]
    fn test_keywords() {
        let registry = registry();
        assert_eq!(registry.resolve("italic").unwrap().get("font-style"), Some("italic"));
        assert_eq!(registry.resolve("font-bold").unwrap().get("font-weight"), Some("700"));
        assert_eq!(registry.resolve("tracking-wide").unwrap().get("letter-spacing"), Some("0.025em"));
    }

    #[test]
    fn test_font_arbitrary_is_family() {
        let registry = registry();
        let props = registry.resolve("font-[Inter]").unwrap();
        assert_eq!(props.get("font-family"), Some("Inter"));
        assert!(props.get("font-weight").is_none());
        assert_eq!(registry.resolve("font-semibold").unwrap().get("font-weight"), Some("600"));
    }

    #[test]
    fn test_text_arbitrary_math_sizes() {
        let registry = registry();
        for token in ["text-[clamp(1rem,2vw,3rem)]", "text-[calc(1rem+2px)]", "text-[min(2rem,5vw)]"] {
            let props = registry.resolve(token).unwrap();
            assert!(props.get("font-size").is_some(), "token {}", token);
            assert!(props.get("color").is_none(), "token {}", token);
        }
        assert_eq!(registry.resolve("text-[lemonchiffon]").unwrap().get("color"), Some("lemonchiffon"));
    }
}

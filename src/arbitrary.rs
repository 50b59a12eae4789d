//! Arbitrary-value extraction and payload classification.
//!
//! Tokens of the form `prefix-[PAYLOAD]` bypass the built-in scales. The
//! payload is returned verbatim: underscores, quotes and nested brackets are
//! left untouched.

use crate::rule::Arity;

/// Extract the bracketed payload from `prefix-[PAYLOAD]`.
///
/// Returns `None` for a different prefix, a missing bracket, or an empty
/// payload.
pub fn extract_payload<'t>(token: &'t str, prefix: &str) -> Option<&'t str> {
    let payload = token
        .strip_prefix(prefix)?
        .strip_prefix("-[")?
        .strip_suffix(']')?;

    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

/// Split a comma-separated payload and check its component count.
///
/// Components are trimmed. An empty component or a count outside `arity`
/// yields `None`.
pub fn split_list(payload: &str, arity: Arity) -> Option<Vec<&str>> {
    let parts: Vec<&str> = payload.split(',').map(str::trim).collect();

    if parts.iter().any(|p| p.is_empty()) || !arity.accepts(parts.len()) {
        return None;
    }

    Some(parts)
}

/// What a `bg-[…]` payload denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Image,
    Size,
    Color,
}

impl BackgroundKind {
    pub fn property(self) -> &'static str {
        match self {
            BackgroundKind::Image => "background-image",
            BackgroundKind::Size => "background-size",
            BackgroundKind::Color => "background-color",
        }
    }
}

const SIZE_MARKERS: &[&str] = &["%", "px", "rem", "auto"];

/// Classify a background payload: gradients, then sizes, then colours.
pub fn classify_background(payload: &str) -> BackgroundKind {
    if payload.contains("gradient") {
        BackgroundKind::Image
    } else if SIZE_MARKERS.iter().any(|m| payload.contains(m)) {
        BackgroundKind::Size
    } else {
        BackgroundKind::Color
    }
}

/// What a `text-[…]` payload denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    FontSize,
    Color,
}

impl TextKind {
    pub fn property(self) -> &'static str {
        match self {
            TextKind::FontSize => "font-size",
            TextKind::Color => "color",
        }
    }
}

const FONT_SIZE_UNITS: &[&str] = &["rem", "px", "em", "%"];
const LENGTH_UNITS: &[&str] = &["rem", "px", "em"];
const MATH_FUNCTIONS: &[&str] = &["calc(", "clamp(", "min(", "max("];

/// Classify a text payload as a font size or a colour.
///
/// Sizes start with a number or a math function, end in a length unit, or
/// contain a number immediately followed by one (`clamp(1rem,2vw,3rem)`).
pub fn classify_text(payload: &str) -> TextKind {
    let leading_number = payload
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');

    if leading_number
        || MATH_FUNCTIONS.iter().any(|f| payload.starts_with(f))
        || FONT_SIZE_UNITS.iter().any(|u| payload.ends_with(u))
        || has_dimension(payload)
    {
        TextKind::FontSize
    } else {
        TextKind::Color
    }
}

/// A digit directly followed by a length unit anywhere in the payload.
fn has_dimension(payload: &str) -> bool {
    payload.char_indices().any(|(i, c)| {
        c.is_ascii_digit() && LENGTH_UNITS.iter().any(|u| payload[i + 1..].starts_with(u))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_payload() {
        assert_eq!(extract_payload("w-[200px]", "w"), Some("200px"));
        assert_eq!(extract_payload("grid-cols-[200px_1fr_200px]", "grid-cols"), Some("200px_1fr_200px"));
        assert_eq!(extract_payload("bg-[url('a[1].png')]", "bg"), Some("url('a[1].png')"));
    }

    #[test]
    fn test_extract_payload_rejects_malformed() {
        assert_eq!(extract_payload("w-[]", "w"), None);
        assert_eq!(extract_payload("w-[", "w"), None);
        assert_eq!(extract_payload("w-200px]", "w"), None);
        assert_eq!(extract_payload("w-[200px", "w"), None);
        assert_eq!(extract_payload("h-[200px]", "w"), None);
        assert_eq!(extract_payload("w-clamp-[1,2,3]", "w"), None);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("1, 1,0 ,45deg", Arity::Exactly(4)), Some(vec!["1", "1", "0", "45deg"]));
        assert_eq!(split_list("1,1,0", Arity::Exactly(4)), None);
        assert_eq!(split_list("1,,0,45deg", Arity::Exactly(4)), None);
        assert_eq!(split_list("2", Arity::OneOf(&[1, 3])), Some(vec!["2"]));
    }

    #[test]
    fn test_classify_background() {
        assert_eq!(classify_background("#ff0000"), BackgroundKind::Color);
        assert_eq!(classify_background("50%"), BackgroundKind::Size);
        assert_eq!(classify_background("auto_100px"), BackgroundKind::Size);
        assert_eq!(classify_background("linear-gradient(red,blue)"), BackgroundKind::Image);
        assert_eq!(classify_background("rgb(0_0_0)"), BackgroundKind::Color);
    }

    #[test]
    fn test_gradient_wins_over_size() {
        assert_eq!(
            classify_background("linear-gradient(red_10%,blue_90%)"),
            BackgroundKind::Image
        );
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify_text("22px"), TextKind::FontSize);
        assert_eq!(classify_text("1.5rem"), TextKind::FontSize);
        assert_eq!(classify_text(".75em"), TextKind::FontSize);
        assert_eq!(classify_text("#333"), TextKind::Color);
        assert_eq!(classify_text("lemonchiffon"), TextKind::Color);
        assert_eq!(classify_text("var(--brand)"), TextKind::Color);
        assert_eq!(classify_text("rgb(0_0_0)"), TextKind::Color);
    }

    #[test]
    fn test_classify_text_math_functions() {
        assert_eq!(classify_text("clamp(1rem,2vw,3rem)"), TextKind::FontSize);
        assert_eq!(classify_text("calc(1rem+2px)"), TextKind::FontSize);
        assert_eq!(classify_text("min(2rem,5vw)"), TextKind::FontSize);
        assert_eq!(classify_text("max(12px,1vw)"), TextKind::FontSize);
        assert_eq!(classify_text("var(--size,1.25rem)"), TextKind::FontSize);
        assert_eq!(classify_text("lemonchiffon"), TextKind::Color);
    }

    #[test]
    fn test_property_names() {
        assert_eq!(BackgroundKind::Size.property(), "background-size");
        assert_eq!(TextKind::FontSize.property(), "font-size");
    }
}

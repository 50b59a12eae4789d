//! CSS emission for resolved tokens.
//!
//! The emitter is an order-preserving serializer: it escapes the token into
//! a class selector and writes each declaration verbatim.

use std::fmt::Write;

use crate::rule::PropertyMap;

/// Characters that must be backslash-escaped in a class selector.
const SPECIAL: &[char] = &[
    ':', '[', ']', '(', ')', '/', '!', '@', '#', '$', '%', '^', '&', '*', '+', '=', '~', '`', '{',
    '}', '|', '\\', ';', ',', '.', '?', '<', '>', '\'', '"',
];

/// Escape a token for use as a CSS class name.
///
/// A digit at the start, or right after a leading `-`, becomes a hex escape
/// (`3xl` → `\33 xl`, `-2xl` → `-\32 xl`).
pub fn escape_class(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len() + 8);
    let leading_dash = token.starts_with('-');

    for (i, c) in token.chars().enumerate() {
        let starts_ident = i == 0 || (i == 1 && leading_dash);
        if starts_ident && c.is_ascii_digit() {
            let _ = write!(escaped, "\\{:x} ", c as u32);
        } else if c == ' ' || SPECIAL.contains(&c) {
            escaped.push('\\');
            escaped.push(c);
        } else if c.is_whitespace() || c.is_control() {
            let _ = write!(escaped, "\\{:x} ", c as u32);
        } else {
            escaped.push(c);
        }
    }

    escaped
}

/// Append one rule block for `token` to `out`.
///
/// Declarations with an empty value are skipped; if none remain nothing is
/// written.
pub fn write_rule(out: &mut String, token: &str, properties: &PropertyMap) {
    let mut declarations = properties.iter().filter(|(_, v)| !v.trim().is_empty()).peekable();
    if declarations.peek().is_none() {
        return;
    }

    let _ = writeln!(out, ".{} {{", escape_class(token));
    for (property, value) in declarations {
        let _ = writeln!(out, "  {}: {};", property, value);
    }
    out.push_str("}\n");
}

/// Render one rule block for `token`.
pub fn emit_rule(token: &str, properties: &PropertyMap) -> String {
    let mut out = String::new();
    write_rule(&mut out, token, properties);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_brackets_and_units() {
        assert_eq!(escape_class("w-[200px]"), r"w-\[200px\]");
        assert_eq!(escape_class("bg-[50%]"), r"bg-\[50\%\]");
        assert_eq!(escape_class("w-1/2"), r"w-1\/2");
        assert_eq!(escape_class("scale-y-1.5"), r"scale-y-1\.5");
    }

    #[test]
    fn test_escape_hash_and_parens() {
        assert_eq!(escape_class("bg-[#ff0000]"), r"bg-\[\#ff0000\]");
        assert_eq!(escape_class("bg-[rgb(0,0,0)]"), r"bg-\[rgb\(0\,0\,0\)\]");
    }

    #[test]
    fn test_escape_leading_digit() {
        assert_eq!(escape_class("2xl"), r"\32 xl");
        assert_eq!(escape_class("-2xl"), r"-\32 xl");
        assert_eq!(escape_class("-rotate-2"), "-rotate-2");
    }

    #[test]
    fn test_escape_plain_token_unchanged() {
        assert_eq!(escape_class("-translate-x-4"), "-translate-x-4");
        assert_eq!(escape_class("grid_area"), "grid_area");
    }

    #[test]
    fn test_emit_rule() {
        let props = PropertyMap::from([("--coral-blur", "blur(4px)"), ("filter", "var(--coral-blur)")]);
        assert_eq!(
            emit_rule("blur-sm", &props),
            ".blur-sm {\n  --coral-blur: blur(4px);\n  filter: var(--coral-blur);\n}\n"
        );
    }

    #[test]
    fn test_emit_skips_empty_values() {
        let props = PropertyMap::from([("width", ""), ("height", "1px")]);
        assert_eq!(emit_rule("x", &props), ".x {\n  height: 1px;\n}\n");
        assert_eq!(emit_rule("x", &PropertyMap::from([("width", "")])), "");
        assert_eq!(emit_rule("x", &PropertyMap::new()), "");
    }

    #[test]
    fn test_emit_snapshot() {
        let props = PropertyMap::from([("width", "200px")]);
        insta::assert_snapshot!(emit_rule("w-[200px]", &props), @r"
        .w-\[200px\] {
          width: 200px;
        }
        ");
    }
}

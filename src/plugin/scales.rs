//! Design-token scales shared by the built-in plugins.

/// Scale key that maps to the bare prefix (`blur`, `shadow`).
pub const DEFAULT: &str = "DEFAULT";

/// True for zero values with or without a unit (`0`, `0px`, `0deg`).
pub fn is_zero(value: &str) -> bool {
    let rest = value.trim_start_matches('0');
    value.starts_with('0')
        && !rest.starts_with('.')
        && rest.chars().all(|c| c.is_ascii_alphabetic() || c == '%')
}

pub const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

pub const FRACTIONS: &[(&str, &str)] = &[
    ("1/2", "50%"),
    ("1/3", "33.333333%"),
    ("2/3", "66.666667%"),
    ("1/4", "25%"),
    ("2/4", "50%"),
    ("3/4", "75%"),
    ("1/5", "20%"),
    ("2/5", "40%"),
    ("3/5", "60%"),
    ("4/5", "80%"),
    ("full", "100%"),
];

/// Percent keys rendered as unit ratios (`125` → `1.25`).
pub const SCALE: &[(&str, &str)] = &[
    ("0", "0"),
    ("50", "0.5"),
    ("75", "0.75"),
    ("90", "0.9"),
    ("95", "0.95"),
    ("100", "1"),
    ("105", "1.05"),
    ("110", "1.1"),
    ("125", "1.25"),
    ("150", "1.5"),
];

pub const BRIGHTNESS: &[(&str, &str)] = &[
    ("0", "0"),
    ("50", "0.5"),
    ("75", "0.75"),
    ("90", "0.9"),
    ("95", "0.95"),
    ("100", "1"),
    ("105", "1.05"),
    ("110", "1.1"),
    ("125", "1.25"),
    ("150", "1.5"),
    ("200", "2"),
];

pub const CONTRAST: &[(&str, &str)] = &[
    ("0", "0"),
    ("50", "0.5"),
    ("75", "0.75"),
    ("100", "1"),
    ("125", "1.25"),
    ("150", "1.5"),
    ("200", "2"),
];

pub const SATURATE: &[(&str, &str)] = &[
    ("0", "0"),
    ("50", "0.5"),
    ("100", "1"),
    ("150", "1.5"),
    ("200", "2"),
];

pub const OPACITY: &[(&str, &str)] = &[
    ("0", "0"),
    ("5", "0.05"),
    ("10", "0.1"),
    ("15", "0.15"),
    ("20", "0.2"),
    ("25", "0.25"),
    ("30", "0.3"),
    ("40", "0.4"),
    ("50", "0.5"),
    ("60", "0.6"),
    ("70", "0.7"),
    ("75", "0.75"),
    ("80", "0.8"),
    ("90", "0.9"),
    ("95", "0.95"),
    ("100", "1"),
];

/// `DEFAULT` keys render as the function applied fully (`grayscale(100%)`).
pub const TOGGLE: &[(&str, &str)] = &[("0", "0"), (DEFAULT, "100%")];

pub const ROTATE: &[(&str, &str)] = &[
    ("0", "0deg"),
    ("1", "1deg"),
    ("2", "2deg"),
    ("3", "3deg"),
    ("6", "6deg"),
    ("12", "12deg"),
    ("45", "45deg"),
    ("90", "90deg"),
    ("180", "180deg"),
];

pub const SKEW: &[(&str, &str)] = &[
    ("0", "0deg"),
    ("1", "1deg"),
    ("2", "2deg"),
    ("3", "3deg"),
    ("6", "6deg"),
    ("12", "12deg"),
];

pub const HUE_ROTATE: &[(&str, &str)] = &[
    ("0", "0deg"),
    ("15", "15deg"),
    ("30", "30deg"),
    ("60", "60deg"),
    ("90", "90deg"),
    ("180", "180deg"),
];

pub const PERSPECTIVE: &[(&str, &str)] = &[
    ("none", "none"),
    ("250", "250px"),
    ("500", "500px"),
    ("750", "750px"),
    ("1000", "1000px"),
];

pub const BLUR: &[(&str, &str)] = &[
    ("none", "0"),
    ("sm", "4px"),
    (DEFAULT, "8px"),
    ("md", "12px"),
    ("lg", "16px"),
    ("xl", "24px"),
    ("2xl", "40px"),
    ("3xl", "64px"),
];

pub const BOX_SHADOW: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (DEFAULT, "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
    ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
    ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
    ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "0 0 #0000"),
];

/// Full `drop-shadow()` chains, since some entries stack two shadows.
pub const DROP_SHADOW: &[(&str, &str)] = &[
    ("sm", "drop-shadow(0 1px 1px rgb(0 0 0 / 0.05))"),
    (DEFAULT, "drop-shadow(0 1px 2px rgb(0 0 0 / 0.1)) drop-shadow(0 1px 1px rgb(0 0 0 / 0.06))"),
    ("md", "drop-shadow(0 4px 3px rgb(0 0 0 / 0.07)) drop-shadow(0 2px 2px rgb(0 0 0 / 0.06))"),
    ("lg", "drop-shadow(0 10px 8px rgb(0 0 0 / 0.04)) drop-shadow(0 4px 3px rgb(0 0 0 / 0.1))"),
    ("xl", "drop-shadow(0 20px 13px rgb(0 0 0 / 0.03)) drop-shadow(0 8px 5px rgb(0 0 0 / 0.08))"),
    ("2xl", "drop-shadow(0 25px 25px rgb(0 0 0 / 0.15))"),
    ("none", "drop-shadow(0 0 #0000)"),
];

pub const RING_WIDTH: &[(&str, &str)] = &[
    ("0", "0px"),
    ("1", "1px"),
    ("2", "2px"),
    (DEFAULT, "3px"),
    ("4", "4px"),
    ("8", "8px"),
];

pub const RING_OFFSET: &[(&str, &str)] = &[
    ("0", "0px"),
    ("1", "1px"),
    ("2", "2px"),
    ("4", "4px"),
    ("8", "8px"),
];

/// `(font-size, line-height)` pairs.
pub const FONT_SIZE: &[(&str, (&str, &str))] = &[
    ("xs", ("0.75rem", "1rem")),
    ("sm", ("0.875rem", "1.25rem")),
    ("base", ("1rem", "1.5rem")),
    ("lg", ("1.125rem", "1.75rem")),
    ("xl", ("1.25rem", "1.75rem")),
    ("2xl", ("1.5rem", "2rem")),
    ("3xl", ("1.875rem", "2.25rem")),
    ("4xl", ("2.25rem", "2.5rem")),
    ("5xl", ("3rem", "1")),
    ("6xl", ("3.75rem", "1")),
];

pub const FONT_WEIGHT: &[(&str, &str)] = &[
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

pub const LINE_HEIGHT: &[(&str, &str)] = &[
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

pub const LETTER_SPACING: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0em"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

pub const MAX_WIDTH: &[(&str, &str)] = &[
    ("none", "none"),
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
    ("prose", "65ch"),
];

pub const COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000"),
    ("white", "#fff"),
    ("gray-100", "#f3f4f6"),
    ("gray-300", "#d1d5db"),
    ("gray-500", "#6b7280"),
    ("gray-700", "#374151"),
    ("gray-900", "#111827"),
    ("red-100", "#fee2e2"),
    ("red-300", "#fca5a5"),
    ("red-500", "#ef4444"),
    ("red-700", "#b91c1c"),
    ("red-900", "#7f1d1d"),
    ("orange-100", "#ffedd5"),
    ("orange-300", "#fdba74"),
    ("orange-500", "#f97316"),
    ("orange-700", "#c2410c"),
    ("orange-900", "#7c2d12"),
    ("yellow-100", "#fef9c3"),
    ("yellow-300", "#fde047"),
    ("yellow-500", "#eab308"),
    ("yellow-700", "#a16207"),
    ("yellow-900", "#713f12"),
    ("green-100", "#dcfce7"),
    ("green-300", "#86efac"),
    ("green-500", "#22c55e"),
    ("green-700", "#15803d"),
    ("green-900", "#14532d"),
    ("blue-100", "#dbeafe"),
    ("blue-300", "#93c5fd"),
    ("blue-500", "#3b82f6"),
    ("blue-700", "#1d4ed8"),
    ("blue-900", "#1e3a8a"),
    ("indigo-100", "#e0e7ff"),
    ("indigo-300", "#a5b4fc"),
    ("indigo-500", "#6366f1"),
    ("indigo-700", "#4338ca"),
    ("indigo-900", "#312e81"),
    ("purple-100", "#f3e8ff"),
    ("purple-300", "#d8b4fe"),
    ("purple-500", "#a855f7"),
    ("purple-700", "#7e22ce"),
    ("purple-900", "#581c87"),
    ("pink-100", "#fce7f3"),
    ("pink-300", "#f9a8d4"),
    ("pink-500", "#ec4899"),
    ("pink-700", "#be185d"),
    ("pink-900", "#831843"),
];

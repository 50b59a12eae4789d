//! End-to-end generation through the public API.

use std::sync::Arc;
use std::thread;

use coral::{Compiler, FallbackPolicy, FamilyKind, FamilySettings, Rule};
use pretty_assertions::assert_eq;

fn compiler() -> Compiler {
    Compiler::with_default_plugins().unwrap()
}

fn declaration<'a>(css: &'a str, property: &str) -> Option<&'a str> {
    let needle = format!("  {}: ", property);
    css.lines()
        .find_map(|line| line.strip_prefix(needle.as_str()))
        .map(|rest| rest.trim_end_matches(';'))
}

#[test]
fn generate_is_deterministic() {
    let compiler = compiler();
    let tokens = ["w-4", "blur-sm", "grid-cols-3", "bg-[#fff]", "rotate-45"];
    assert_eq!(compiler.generate(tokens), compiler.generate(tokens));
}

#[test]
fn output_follows_input_order() {
    let compiler = compiler();
    let forward = compiler.generate(["w-4", "h-4"]);
    let backward = compiler.generate(["h-4", "w-4"]);

    assert!(forward.find(".w-4").unwrap() < forward.find(".h-4").unwrap());
    assert!(backward.find(".h-4").unwrap() < backward.find(".w-4").unwrap());
    assert_eq!(forward.len(), backward.len());
}

#[test]
fn malformed_and_unknown_tokens_are_dropped() {
    let compiler = compiler();
    for token in ["w-[", "w-[]", "unknown-class", "", "rotate-3d-[1,1,0]"] {
        assert_eq!(compiler.generate([token]), "", "token {:?}", token);
    }
}

#[test]
fn dropped_tokens_do_not_disturb_neighbours() {
    let compiler = compiler();
    assert_eq!(
        compiler.generate(["nope", "w-4", "w-[]"]),
        compiler.generate(["w-4"])
    );
}

#[test]
fn arbitrary_width() {
    insta::assert_snapshot!(compiler().generate(["w-[200px]"]), @r###"
    .w-\[200px\] {
      width: 200px;
    }
    "###);
}

#[test]
fn exact_rule_wins_over_pattern() {
    let compiler = Compiler::builder()
        .rule(Rule::exact("w-[1px]", [("width", "exactly-one")]))
        .core_plugins()
        .build()
        .unwrap();

    let css = compiler.generate(["w-[1px]", "w-[2px]"]);
    assert!(css.contains("width: exactly-one;"));
    assert!(css.contains("width: 2px;"));
}

#[test]
fn rotate_3d_requires_four_values() {
    let compiler = compiler();
    let css = compiler.generate(["rotate-3d-[1,1,0,45deg]"]);
    assert_eq!(declaration(&css, "transform"), Some("rotate3d(1,1,0,45deg)"));
    assert_eq!(compiler.generate(["rotate-3d-[1,1,0,45deg,9]"]), "");
}

#[test]
fn grid_template_payload_is_literal() {
    let css = compiler().generate(["grid-cols-[200px_1fr_200px]"]);
    assert_eq!(declaration(&css, "grid-template-columns"), Some("200px_1fr_200px"));
}

#[test]
fn background_payloads_are_classified() {
    let compiler = compiler();
    let cases = [
        ("bg-[#ff0000]", "background-color", "#ff0000"),
        ("bg-[50%]", "background-size", "50%"),
        ("bg-[auto]", "background-size", "auto"),
        ("bg-[linear-gradient(red,blue)]", "background-image", "linear-gradient(red,blue)"),
    ];

    for (token, property, value) in cases {
        let css = compiler.generate([token]);
        assert_eq!(declaration(&css, property), Some(value), "token {}", token);
    }
}

#[test]
fn filter_utilities_share_one_template() {
    let compiler = compiler();
    let blur = compiler.generate(["blur-sm"]);
    let contrast = compiler.generate(["contrast-125"]);

    assert_eq!(declaration(&blur, "--coral-blur"), Some("blur(4px)"));
    assert_eq!(declaration(&contrast, "--coral-contrast"), Some("contrast(1.25)"));
    assert!(declaration(&blur, "filter").is_some());
    assert_eq!(declaration(&blur, "filter"), declaration(&contrast, "filter"));
}

#[test]
fn neutral_policy_adds_fallbacks() {
    let compiler = Compiler::builder()
        .families(FamilySettings::new().with(FamilyKind::Filter, FallbackPolicy::Neutral))
        .core_plugins()
        .build()
        .unwrap();

    let css = compiler.generate(["blur-sm"]);
    let filter = declaration(&css, "filter").unwrap();
    assert!(filter.contains("var(--coral-blur, blur(0))"));
    assert_eq!(filter, FamilyKind::Filter.render(FallbackPolicy::Neutral));
}

#[test]
fn compile_reports_unresolved_tokens() {
    let compilation = compiler().compile(["w-4", "mystery", "h-[", "h-4"]);
    assert_eq!(compilation.resolved, 2);
    assert_eq!(compilation.unresolved, vec!["mystery", "h-["]);
}

#[test]
fn generate_source_splits_whitespace() {
    let compiler = compiler();
    assert_eq!(
        compiler.generate_source("  w-4\n\th-4  "),
        compiler.generate(["w-4", "h-4"])
    );
}

#[test]
fn compiler_is_shared_across_threads() {
    let compiler = Arc::new(compiler());
    let expected = compiler.generate(["blur-sm", "w-[3px]", "grid-cols-2"]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let compiler = Arc::clone(&compiler);
            thread::spawn(move || compiler.generate(["blur-sm", "w-[3px]", "grid-cols-2"]))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn text_math_functions_are_font_sizes() {
    let compiler = compiler();
    for (token, value) in [
        ("text-[clamp(1rem,2vw,3rem)]", "clamp(1rem,2vw,3rem)"),
        ("text-[calc(1rem+2px)]", "calc(1rem+2px)"),
        ("text-[min(2rem,5vw)]", "min(2rem,5vw)"),
    ] {
        let css = compiler.generate([token]);
        assert_eq!(declaration(&css, "font-size"), Some(value), "token {}", token);
        assert_eq!(declaration(&css, "color"), None, "token {}", token);
    }

    let css = compiler.generate(["text-[lemonchiffon]"]);
    assert_eq!(declaration(&css, "color"), Some("lemonchiffon"));
}

#[test]
fn arbitrary_font_sets_family() {
    let css = compiler().generate(["font-[Inter]"]);
    assert_eq!(declaration(&css, "font-family"), Some("Inter"));
    assert_eq!(declaration(&css, "font-weight"), None);
}

//! Integration tests for the rule organizer
//!
//! Tests rule flattening, ordering, priority, and category validation.

use metasyntax_foundation::{Category, Color, ErrorKind};
use metasyntax_language::{EXAMPLE_DESCRIPTION, MatchRule, compile};
use proptest::prelude::*;

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn example_rule_order() {
    let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
    let described: Vec<String> = rules.iter().map(ToString::to_string).collect();
    assert_eq!(
        described,
        [
            r#"Identifier (Normal) r"[a-zA-Z_][a-zA-Z_0-9]*" #9CDCFE"#,
            r#"Identifier[If] (Special) r"if" #C586C0"#,
            r#"Identifier[Else] (Special) r"else" #C586C0"#,
            r#"Symbol[LeftParen] (Special) r"\(""#,
            r#"Symbol[RightParen] (Special) r"\)""#,
        ]
    );
}

#[test]
fn declaration_order_kept_within_category() {
    let rules = compile(r#"T { Special [ C r"c", A r"a", B r"b" ] }"#).unwrap();
    let labels: Vec<&str> = rules.iter().map(MatchRule::label).collect();
    assert_eq!(labels, ["T[C]", "T[A]", "T[B]"]);
}

#[test]
fn prioritized_order_puts_every_special_first_latest_first() {
    let source = r#"
A { Normal r"a" }
B { Special [ X r"x" ] Normal r"b" }
C { Special [ Y r"y" ] }
"#;
    let rules = compile(source).unwrap();
    let labels: Vec<&str> = rules.prioritized().map(MatchRule::label).collect();
    assert_eq!(labels, ["C[Y]", "B[X]", "B", "A"]);
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn color_is_nearest_declared() {
    let source = r#"T { Special [ A r"a", B r"b" #000001 ] #000002 Normal r"n" }"#;
    let rules = compile(source).unwrap();
    let colors: Vec<Option<Color>> = rules.iter().map(|r| r.color).collect();
    assert_eq!(
        colors,
        [
            None,
            Some(Color::rgb(0, 0, 2)),
            Some(Color::rgb(0, 0, 1)),
        ]
    );
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn unsupported_category_names_the_category() {
    let err = compile(r#"Foo { Weird r"x" }"#).unwrap_err();
    match err.kind {
        ErrorKind::UnsupportedCategory { category, .. } => assert_eq!(category, "Weird"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unsupported_category_fails_even_after_valid_ones() {
    let err = compile(r#"Ok { Normal r"o" } Foo { Normal r"f" Other r"x" }"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedCategory { .. }));
}

#[test]
fn normal_rules_have_no_sub_token() {
    let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
    for rule in &rules {
        assert_eq!(rule.sub_token.is_some(), rule.category == Category::Special);
    }
}

// =============================================================================
// Properties
// =============================================================================

fn token_block() -> impl Strategy<Value = (bool, bool)> {
    (any::<bool>(), any::<bool>())
}

proptest! {
    /// Each token's `Normal` rule precedes its `Special` rules, and tokens
    /// keep declaration order.
    #[test]
    fn organizer_order_invariant(blocks in prop::collection::vec(token_block(), 0..8)) {
        let source: String = blocks
            .iter()
            .enumerate()
            .map(|(i, (special_first, has_normal))| {
                let special = format!(r#"Special [ S r"s{i}" ]"#);
                let normal = if *has_normal { format!(r#"Normal r"n{i}""#) } else { String::new() };
                if *special_first {
                    format!("T{i} {{ {special} {normal} }}\n")
                } else {
                    format!("T{i} {{ {normal} {special} }}\n")
                }
            })
            .collect();

        let rules = compile(&source).unwrap();
        let order: Vec<(usize, Category)> = rules
            .iter()
            .map(|r| (r.token_name[1..].parse().unwrap(), r.category))
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        prop_assert_eq!(order, sorted);
    }
}

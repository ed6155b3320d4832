//! Integration tests for the description parser
//!
//! Tests the parse tree and structured failures.

use metasyntax_foundation::{ErrorKind, Location};
use metasyntax_language::{CategoryBody, EXAMPLE_DESCRIPTION, parse, parse_source, tokenize};

fn parse_err(source: &str) -> ErrorKind {
    parse_source(source).unwrap_err().kind
}

// =============================================================================
// Parse Tree
// =============================================================================

#[test]
fn parse_example_tree() {
    let description = parse(tokenize(EXAMPLE_DESCRIPTION)).unwrap();
    assert_eq!(description.tokens.len(), 2);

    let identifier = description.token("Identifier").unwrap();
    assert_eq!(identifier.categories.len(), 2);

    let special = identifier.category("Special").unwrap();
    let CategoryBody::Named { entries, color } = &special.body else {
        panic!("expected a sub-token list");
    };
    assert_eq!(color, &None);
    let names: Vec<&str> = entries.iter().map(|e| e.name.text.as_str()).collect();
    assert_eq!(names, ["If", "Else"]);
    assert_eq!(entries[0].pattern.pattern.as_str(), "if");
    assert_eq!(entries[0].pattern.color.map(|c| c.to_string()).as_deref(), Some("#C586C0"));

    let normal = identifier.category("Normal").unwrap();
    let CategoryBody::Single(spec) = &normal.body else {
        panic!("expected a single pattern");
    };
    assert_eq!(spec.pattern.as_str(), "[a-zA-Z_][a-zA-Z_0-9]*");

    let symbol = description.token("Symbol").unwrap();
    let CategoryBody::Named { entries, .. } = &symbol.category("Special").unwrap().body else {
        panic!("expected a sub-token list");
    };
    assert_eq!(entries[0].pattern.pattern.as_str(), r"\(");
    assert_eq!(entries[1].pattern.color, None);
}

#[test]
fn category_level_color() {
    let description = parse_source(r#"K { Special [ A r"a" ] #010203 }"#).unwrap();
    let body = &description.tokens[0].categories[0].body;
    assert!(matches!(body, CategoryBody::Named { color: Some(_), .. }));
}

#[test]
fn empty_description_and_empty_token() {
    assert!(parse_source("").unwrap().is_empty());
    let description = parse_source("Empty { }").unwrap();
    assert!(description.tokens[0].categories.is_empty());
}

#[test]
fn unknown_categories_parse() {
    let description = parse_source(r#"Foo { Weird r"x" }"#).unwrap();
    assert_eq!(description.tokens[0].categories[0].name.text, "Weird");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_open_brace() {
    match parse_err(r#"Foo Normal r"x" }"#) {
        ErrorKind::Syntax {
            expected,
            found,
            location,
        } => {
            assert_eq!(expected, "'{'");
            assert_eq!(found, "identifier");
            assert_eq!(location, Location::new(1, 5, 4));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_close_brace() {
    match parse_err(r#"Foo { Normal r"x""#) {
        ErrorKind::Syntax { found, .. } => assert_eq!(found, "end of input"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn stray_character_is_reported_as_unexpected() {
    match parse_err("Foo { @ }") {
        ErrorKind::UnexpectedCharacter {
            character,
            location,
        } => {
            assert_eq!(character, "@");
            assert_eq!(location, Location::new(1, 7, 6));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_regex_is_pattern_compile_error() {
    assert!(matches!(
        parse_err(r#"Foo { Normal r"[a-" }"#),
        ErrorKind::PatternCompile { .. }
    ));
}

#[test]
fn unterminated_literal_fails_instead_of_hanging() {
    match parse_err(r#"Foo { Normal r"abc }"#) {
        ErrorKind::PatternCompile { reason, location, .. } => {
            assert_eq!(reason, "unterminated pattern literal");
            assert_eq!(location, Location::new(1, 14, 13));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_color_is_rejected() {
    assert!(matches!(
        parse_err(r#"Foo { Normal r"x" #12345G }"#),
        ErrorKind::InvalidColor { .. }
    ));
}

#[test]
fn sub_token_list_must_not_be_empty() {
    assert!(matches!(parse_err("Foo { Special [ ] }"), ErrorKind::Syntax { .. }));
}

#[test]
fn trailing_comma_is_rejected() {
    assert!(matches!(
        parse_err(r#"Foo { Special [ A r"a", ] }"#),
        ErrorKind::Syntax { .. }
    ));
}

#[test]
fn sub_token_without_pattern() {
    match parse_err("Foo { Special [ A B ] }") {
        ErrorKind::Syntax { expected, .. } => assert_eq!(expected, "pattern literal"),
        other => panic!("unexpected error: {other:?}"),
    }
}

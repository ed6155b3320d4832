//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use metasyntax_foundation::{Error, ErrorContext, ErrorKind, Location};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_syntax() {
    let err = Error::syntax("'{'", "identifier", Location::new(3, 7, 40));
    assert!(matches!(err.kind, ErrorKind::Syntax { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("3:7"));
    assert!(msg.contains("offset 40"));
    assert!(msg.contains("'{'"));
    assert!(msg.contains("identifier"));
}

#[test]
fn error_unsupported_category() {
    let err = Error::unsupported_category("Foo", "Weird", Location::new(1, 7, 6));
    let msg = format!("{err}");
    assert!(msg.contains("Weird"));
    assert!(msg.contains("Foo"));
    assert_eq!(err.location(), Some(Location::new(1, 7, 6)));
}

#[test]
fn error_pattern_compile() {
    let err = Error::pattern_compile(r#"r"(""#, "unclosed group", Location::start());
    assert!(matches!(err.kind, ErrorKind::PatternCompile { .. }));
    assert!(format!("{err}").contains("unclosed group"));
}

#[test]
fn error_invalid_color() {
    let err = Error::invalid_color("#GGGGGG", Location::new(2, 1, 10));
    assert!(matches!(err.kind, ErrorKind::InvalidColor { .. }));
    assert!(format!("{err}").contains("#GGGGGG"));
}

#[test]
fn io_errors_have_no_location() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = Error::from(io);
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(err.location(), None);
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_snippet_for_location() {
    let text = "first\nsecond line\nthird";
    let context = ErrorContext::for_location(text, Location::new(2, 3, 8));
    assert_eq!(context.snippet.as_deref(), Some("second line"));
}

#[test]
fn context_display() {
    let context = ErrorContext::new()
        .with_source("lang.ms")
        .with_snippet("Foo { Weird }");
    assert_eq!(context.to_string(), "in lang.ms\n  | Foo { Weird }");
}

#[test]
fn error_with_context_keeps_kind() {
    let err = Error::invalid_color("#12", Location::start())
        .with_context(ErrorContext::new().with_source("x.ms"));
    assert!(matches!(err.kind, ErrorKind::InvalidColor { .. }));
    assert_eq!(err.context.and_then(|c| c.source), Some("x.ms".to_string()));
}

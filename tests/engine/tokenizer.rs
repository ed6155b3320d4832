//! Integration tests for the token stream
//!
//! Tests the stream state machine, sentinel, and rule sharing.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use metasyntax_engine::{StreamItem, StreamState, TokenStream, run};
use metasyntax_foundation::Location;
use metasyntax_language::{EXAMPLE_DESCRIPTION, compile};
use proptest::prelude::*;

// =============================================================================
// State Machine
// =============================================================================

#[test]
fn stream_moves_from_scanning_to_exhausted() {
    let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
    let mut stream = TokenStream::new(&rules, "if");
    assert_eq!(stream.state(), StreamState::Scanning);
    assert_eq!(stream.cursor(), Location::start());

    assert_eq!(stream.next().map(|i| i.label().to_string()), Some("Identifier[If]".into()));
    assert_eq!(stream.cursor(), Location::new(1, 3, 2));
    assert_eq!(stream.state(), StreamState::Scanning);

    assert_eq!(stream.next(), Some(StreamItem::Eof));
    assert_eq!(stream.state(), StreamState::Exhausted);
    assert_eq!(stream.next(), None);
}

#[test]
fn sentinel_has_no_coordinates() {
    let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
    let items = run(&rules, "x");
    let eof = items.last().unwrap();
    assert_eq!(eof.label(), "EOF");
    assert_eq!(eof.text(), "");
    assert_eq!(eof.category_name(), "EOF");
    assert_eq!(eof.location(), None);
}

#[test]
fn stream_is_lazy() {
    let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
    let first: Vec<String> = TokenStream::new(&rules, "if else if else")
        .take(2)
        .map(|i| i.text().to_string())
        .collect();
    assert_eq!(first, ["if", "else"]);
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn rules_are_shareable_across_threads() {
    let rules = Arc::new(compile(EXAMPLE_DESCRIPTION).unwrap());
    let expected = run(&rules, "if (a) else (b)");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || run(&rules, "if (a) else (b)"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// =============================================================================
// Scan Cost
// =============================================================================

#[test]
fn long_unmatched_run_scans_in_linear_time() {
    let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
    let text = format!("{}if", "%".repeat(100_000));

    let started = Instant::now();
    let items = run(&rules, &text);
    let elapsed = started.elapsed();

    assert_eq!(items.len(), 2);
    let token = items[0].as_token().unwrap();
    assert_eq!(token.label, "Identifier[If]");
    assert_eq!(token.location, Location::new(1, 100_001, 100_000));
    assert!(
        elapsed < Duration::from_secs(10),
        "100k unmatched characters took {elapsed:?}"
    );
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn tokenize_is_idempotent(text in "[a-z (){};\n%]{0,60}") {
        let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
        prop_assert_eq!(run(&rules, &text), run(&rules, &text));
    }

    #[test]
    fn skipped_characters_keep_coordinates_consistent(text in "[a-z%é\n]{0,60}") {
        let rules = compile(EXAMPLE_DESCRIPTION).unwrap();
        for item in run(&rules, &text) {
            if let Some(token) = item.as_token() {
                let expected = Location::start().advance_str(&text[..token.location.offset]);
                prop_assert_eq!(token.location, expected);
            }
        }
    }
}

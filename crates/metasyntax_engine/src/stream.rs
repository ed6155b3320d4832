//! First-match token stream.
//!
//! At each cursor position the rules are tried highest priority first as
//! anchored matches. The first rule with a non-empty match produces a token
//! and the cursor moves past it. When no rule matches, the character under
//! the cursor is skipped without producing a token. An empty match counts
//! as no match, so the cursor always makes progress.

use std::iter::FusedIterator;

use metasyntax_foundation::Location;
use metasyntax_language::{MatchRule, RuleSet};
use tracing::{debug, trace};

use crate::matched::{MatchedToken, StreamItem};

/// Where a [`TokenStream`] is in its scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    /// Text remains, or the sentinel has not been produced yet.
    Scanning,
    /// The sentinel has been produced; the stream yields nothing more.
    Exhausted,
}

/// An iterator of tokens matched in sample text.
///
/// The stream borrows the rules and the text; it never mutates either, so
/// one [`RuleSet`] can back any number of streams.
#[derive(Clone, Debug)]
pub struct TokenStream<'r, 't> {
    rules: &'r RuleSet,
    text: &'t str,
    cursor: Location,
    state: StreamState,
}

impl<'r, 't> TokenStream<'r, 't> {
    /// Creates a stream positioned at the start of `text`.
    #[must_use]
    pub fn new(rules: &'r RuleSet, text: &'t str) -> Self {
        Self {
            rules,
            text,
            cursor: Location::start(),
            state: StreamState::Scanning,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Returns the position of the next character to scan.
    #[must_use]
    pub fn cursor(&self) -> Location {
        self.cursor
    }

    /// Finds the first rule with a non-empty match at the cursor.
    fn match_here(&self) -> Option<(&'r MatchRule, usize)> {
        let rules = self.rules;
        let at = self.cursor.offset;
        rules.prioritized().find_map(|rule| {
            let end = rule.pattern.match_at(self.text, at)?;
            if end == at {
                trace!(rule = rule.label(), offset = at, "ignored empty match");
                None
            } else {
                Some((rule, end))
            }
        })
    }

    /// Moves the cursor past one character without producing a token.
    fn skip_char(&mut self) {
        if let Some(c) = self.text[self.cursor.offset..].chars().next() {
            trace!(character = ?c, location = %self.cursor, "skipped unmatched character");
            self.cursor = self.cursor.advance(c);
        }
    }
}

impl Iterator for TokenStream<'_, '_> {
    type Item = StreamItem;

    fn next(&mut self) -> Option<StreamItem> {
        loop {
            if self.state == StreamState::Exhausted {
                return None;
            }
            if self.cursor.offset >= self.text.len() {
                self.state = StreamState::Exhausted;
                return Some(StreamItem::Eof);
            }
            if let Some((rule, end)) = self.match_here() {
                let start = self.cursor;
                let matched = &self.text[start.offset..end];
                self.cursor = start.advance_str(matched);
                return Some(StreamItem::Token(MatchedToken {
                    label: rule.label().to_string(),
                    text: matched.to_string(),
                    category: rule.category,
                    location: start,
                    color: rule.color,
                }));
            }
            self.skip_char();
        }
    }
}

impl FusedIterator for TokenStream<'_, '_> {}

/// Tokenizes `text` with `rules`.
///
/// The result always ends with exactly one [`StreamItem::Eof`].
#[must_use]
pub fn run(rules: &RuleSet, text: &str) -> Vec<StreamItem> {
    let items: Vec<StreamItem> = TokenStream::new(rules, text).collect();
    debug!(
        rules = rules.len(),
        bytes = text.len(),
        tokens = items.len() - 1,
        "tokenized sample"
    );
    items
}

//! Compiled patterns.

use std::fmt;

use metasyntax_foundation::{Error, Location, Result};
use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use crate::literal::RawLiteral;
use crate::token::Token;

/// A pattern literal compiled by the regex engine.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    source: String,
    literal: String,
}

impl Pattern {
    /// Compiles a pattern literal token.
    ///
    /// # Errors
    /// Returns a pattern compile error if the literal is unterminated, has a
    /// malformed escape, or is not valid regex syntax.
    pub fn from_token(token: &Token) -> Result<Self> {
        let fail = |reason: &str| Error::pattern_compile(&token.text, reason, token.location());
        let raw = RawLiteral::split(&token.text).map_err(|e| fail(e.reason()))?;
        let source = raw.pattern().map_err(|e| fail(e.reason()))?;
        let regex = Regex::new(&source).map_err(|e| fail(&e.to_string()))?;
        Ok(Self {
            regex,
            source,
            literal: token.text.clone(),
        })
    }

    /// Compiles regex source directly.
    ///
    /// # Errors
    /// Returns a pattern compile error if `source` is not valid regex syntax.
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(source)
            .map_err(|e| Error::pattern_compile(source, e.to_string(), Location::start()))?;
        Ok(Self {
            regex,
            source: source.to_string(),
            literal: crate::literal::to_literal(source),
        })
    }

    /// Returns the end offset of a match that starts exactly at `at`.
    ///
    /// The search is anchored, so a rule that cannot match at `at` fails
    /// without looking further ahead. The whole haystack stays visible to
    /// the engine, so assertions such as `\b` see the text before `at`.
    #[must_use]
    pub fn match_at(&self, haystack: &str, at: usize) -> Option<usize> {
        if at > haystack.len() {
            return None;
        }
        let input = Input::new(haystack).range(at..).anchored(Anchored::Yes);
        self.regex.find(input).map(|m| m.end())
    }

    /// Returns the regex source handed to the engine.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the literal as written in the description.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

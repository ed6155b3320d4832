//! Tokenizer output.

use std::fmt;
use std::ops::Range;

use metasyntax_foundation::{Category, Color, Location};

/// Label, text, and category reported by the end-of-stream sentinel.
pub const EOF_LABEL: &str = "EOF";

/// A token produced by matching a rule against sample text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedToken {
    /// `Token` for `Normal` matches, `Token[Sub]` for `Special` matches.
    pub label: String,
    /// The matched text.
    pub text: String,
    /// The category of the rule that matched.
    pub category: Category,
    /// Where the match starts.
    pub location: Location,
    /// The rule color, if one was declared.
    pub color: Option<Color>,
}

impl MatchedToken {
    /// Returns the byte range of the match in the sample text.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.location.offset..self.location.offset + self.text.len()
    }
}

impl fmt::Display for MatchedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} ({}) at {}",
            self.label, self.text, self.category, self.location
        )
    }
}

/// One item of a token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamItem {
    /// A matched token.
    Token(MatchedToken),
    /// The end-of-stream sentinel. It has no coordinates.
    Eof,
}

impl StreamItem {
    /// Returns the token label, or `"EOF"` for the sentinel.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Token(token) => &token.label,
            Self::Eof => EOF_LABEL,
        }
    }

    /// Returns the matched text; the sentinel's text is empty.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Token(token) => &token.text,
            Self::Eof => "",
        }
    }

    /// Returns the category name, or `"EOF"` for the sentinel.
    #[must_use]
    pub fn category_name(&self) -> &'static str {
        match self {
            Self::Token(token) => token.category.name(),
            Self::Eof => EOF_LABEL,
        }
    }

    /// Returns where the token starts; the sentinel has no location.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.as_token().map(|token| token.location)
    }

    /// Returns the matched token, if this is not the sentinel.
    #[must_use]
    pub fn as_token(&self) -> Option<&MatchedToken> {
        match self {
            Self::Token(token) => Some(token),
            Self::Eof => None,
        }
    }

    /// Returns true for the end-of-stream sentinel.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl fmt::Display for StreamItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => token.fmt(f),
            Self::Eof => f.write_str(EOF_LABEL),
        }
    }
}

impl From<MatchedToken> for StreamItem {
    fn from(token: MatchedToken) -> Self {
        Self::Token(token)
    }
}

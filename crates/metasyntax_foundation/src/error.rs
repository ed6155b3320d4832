//! Errors raised while compiling and using descriptions.
//!
//! Compiling a description is fail-fast: the first error from any stage
//! aborts the compile and is surfaced as a single [`Error`].

use std::fmt;

use thiserror::Error;

use crate::location::Location;

/// Result type alias using the MetaSyntax [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// An error with an optional pointer into the source that caused it.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct Error {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Source name and line, when known.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Wraps `kind` without context.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches source context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(
        expected: impl Into<String>,
        found: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(ErrorKind::Syntax {
            expected: expected.into(),
            found: found.into(),
            location,
        })
    }

    /// Creates an error for an unrecognized character the parser had to consume.
    #[must_use]
    pub fn unexpected_character(character: impl Into<String>, location: Location) -> Self {
        Self::new(ErrorKind::UnexpectedCharacter {
            character: character.into(),
            location,
        })
    }

    /// Creates a pattern compile error.
    #[must_use]
    pub fn pattern_compile(
        pattern: impl Into<String>,
        reason: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(ErrorKind::PatternCompile {
            pattern: pattern.into(),
            reason: reason.into(),
            location,
        })
    }

    /// Creates an invalid color literal error.
    #[must_use]
    pub fn invalid_color(text: impl Into<String>, location: Location) -> Self {
        Self::new(ErrorKind::InvalidColor {
            text: text.into(),
            location,
        })
    }

    /// Creates an unsupported category error.
    #[must_use]
    pub fn unsupported_category(
        token: impl Into<String>,
        category: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(ErrorKind::UnsupportedCategory {
            token: token.into(),
            category: category.into(),
            location,
        })
    }

    /// Returns the source location this error points at, if it has one.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match &self.kind {
            ErrorKind::Syntax { location, .. }
            | ErrorKind::UnexpectedCharacter { location, .. }
            | ErrorKind::PatternCompile { location, .. }
            | ErrorKind::InvalidColor { location, .. }
            | ErrorKind::UnsupportedCategory { location, .. }
            | ErrorKind::BodyMismatch { location, .. }
            | ErrorKind::DuplicateName { location, .. } => Some(*location),
            ErrorKind::Io(_) | ErrorKind::Internal(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(e.to_string()))
    }
}

/// Every way a compile or session operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The parser found a token kind the grammar does not allow here.
    #[error(
        "syntax error at {location} (offset {}): expected {expected}, found {found}",
        .location.offset
    )]
    Syntax {
        /// What the grammar expected.
        expected: String,
        /// The token kind actually found.
        found: String,
        /// Where the offending token starts.
        location: Location,
    },

    /// An unrecognized character reached the parser.
    #[error(
        "unexpected character {character:?} at {location} (offset {})",
        .location.offset
    )]
    UnexpectedCharacter {
        /// The character as written in source.
        character: String,
        /// Where the character appears.
        location: Location,
    },

    /// A pattern literal could not be turned into a compiled pattern.
    #[error("invalid pattern {pattern:?} at {location}: {reason}")]
    PatternCompile {
        /// The literal as written in source.
        pattern: String,
        /// Why compilation failed.
        reason: String,
        /// Where the literal starts.
        location: Location,
    },

    /// A color literal is not `#` followed by six hex digits.
    #[error("invalid color literal {text:?} at {location}")]
    InvalidColor {
        /// The literal as written in source.
        text: String,
        /// Where the literal starts.
        location: Location,
    },

    /// A category other than `Normal` or `Special`.
    #[error("unsupported category {category:?} in token {token} at {location}")]
    UnsupportedCategory {
        /// The token that declared the category.
        token: String,
        /// The category name as written.
        category: String,
        /// Where the category name appears.
        location: Location,
    },

    /// A category body has the wrong shape for its category.
    #[error("category {category} of token {token} at {location} expects {expected}")]
    BodyMismatch {
        /// The token that declared the category.
        token: String,
        /// The category name.
        category: String,
        /// The body shape the category requires.
        expected: &'static str,
        /// Where the category name appears.
        location: Location,
    },

    /// A name declared twice in the same scope.
    #[error("duplicate {what} {name:?} at {location}")]
    DuplicateName {
        /// What kind of name was repeated.
        what: &'static str,
        /// The repeated name.
        name: String,
        /// Where the second declaration appears.
        location: Location,
    },

    /// Reading input failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A terminal or editor failure outside the description pipeline.
    #[error("internal error: {0}")]
    Internal(String),
}

/// The source an error points into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file or buffer name.
    pub source: Option<String>,
    /// The source line containing the error.
    pub snippet: Option<String>,
}

impl ErrorContext {
    /// An empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the offending source line.
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Builds a context holding the line of `text` that contains `location`.
    #[must_use]
    pub fn for_location(text: &str, location: Location) -> Self {
        let line = text
            .lines()
            .nth(location.line.saturating_sub(1) as usize)
            .unwrap_or_default();
        Self::new().with_snippet(line)
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(snippet) = &self.snippet {
            if self.source.is_some() {
                writeln!(f)?;
            }
            write!(f, "  | {snippet}")?;
        }
        Ok(())
    }
}

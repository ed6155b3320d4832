//! Lexical tokens of the description language.
//!
//! Tokens are the output of the lexer and input to the parser.

use metasyntax_foundation::Location;

use crate::span::Span;

/// A token from lexical analysis.
///
/// The recorded text is the lexeme exactly as written, including the
/// quotes and prefix letter of a pattern literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The lexeme as written in source.
    pub text: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns where this token starts.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.span.location()
    }
}

/// Token kinds of the description language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Token, category, or sub-token name like `Identifier`
    Identifier,
    /// Pattern literal like `r"[a-z]+"` or `"if"`
    StringLiteral {
        /// False when the closing quote was never found.
        terminated: bool,
    },
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// Color literal like `#C586C0`
    ColorLiteral,
    /// A character the lexer does not recognize
    Unknown,
    /// End of input
    EndOfInput,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::StringLiteral { .. } => "pattern literal",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::ColorLiteral => "color literal",
            Self::Unknown => "unknown character",
            Self::EndOfInput => "end of input",
        }
    }

    /// Returns true if this is a pattern literal of either termination.
    #[must_use]
    pub const fn is_string_literal(&self) -> bool {
        matches!(self, Self::StringLiteral { .. })
    }
}

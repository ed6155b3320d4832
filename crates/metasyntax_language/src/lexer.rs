//! Lexer for the token description language.
//!
//! The lexer converts description source into a flat stream of tokens. It
//! never fails: characters it does not recognize become
//! [`TokenKind::Unknown`] tokens so the parser can report their location.
//!
//! Pattern literals may be bare (`"if"`) or carry any single-letter prefix
//! (`r"if"`); both forms are accepted, and the prefix has no meaning. A
//! prefix only counts when the letter stands alone, so `Wr"x"` lexes as
//! the identifier `Wr` followed by the literal `"x"`.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Width of a color literal: `#` plus six hex digits.
const COLOR_LITERAL_LEN: usize = 7;

/// Lexer for description source.
pub struct Lexer<'src> {
    /// The whole description.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Byte offset of `rest` within `source`.
    offset: usize,
    /// 1-based line of the next character.
    line: u32,
    /// 1-based column of the next character.
    column: u32,
    /// Set once the end-of-input token has been produced.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Starts lexing at the beginning of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            offset: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Lexes one token.
    ///
    /// Once the input is exhausted every call returns an end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_blank();

        let start = self.offset;
        let (line, column) = (self.line, self.column);

        let Some(c) = self.peek() else {
            self.finished = true;
            return Token::new(TokenKind::EndOfInput, "", Span::new(start, start, line, column));
        };

        let kind = match c {
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            '#' => self.scan_color(),
            '"' => self.scan_literal(),
            c if c.is_ascii_alphabetic() => {
                if self.peek_nth(1) == Some('"') {
                    self.bump(); // prefix letter
                    self.scan_literal()
                } else {
                    self.scan_identifier()
                }
            }
            _ => self.single(TokenKind::Unknown),
        };

        Token::new(
            kind,
            &self.source[start..self.offset],
            Span::new(start, self.offset, line, column),
        )
    }

    /// Lexes all of `source`.
    ///
    /// The result always ends with exactly one end-of-input token.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    /// The next character.
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// The character after the next `n`.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Consumes one character, tracking line and column.
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.offset += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes one character and returns `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    /// Skips spaces, tabs and newlines.
    fn skip_blank(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Scans a name made of ASCII letters, digits, and underscores.
    fn scan_identifier(&mut self) -> TokenKind {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.bump();
        }
        TokenKind::Identifier
    }

    /// Scans a quoted pattern body starting at the opening `"`.
    ///
    /// A backslash and the character after it are consumed as a pair. An
    /// unterminated literal absorbs the rest of the input.
    fn scan_literal(&mut self) -> TokenKind {
        self.bump(); // opening quote
        loop {
            match self.peek() {
                Some('"') => {
                    self.bump();
                    return TokenKind::StringLiteral { terminated: true };
                }
                Some('\\') => {
                    self.bump();
                    self.bump();
                }
                Some(_) => self.bump(),
                None => return TokenKind::StringLiteral { terminated: false },
            }
        }
    }

    /// Scans a color literal: `#` and the six characters after it, unchecked.
    fn scan_color(&mut self) -> TokenKind {
        for _ in 0..COLOR_LITERAL_LEN {
            self.bump();
        }
        TokenKind::ColorLiteral
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

/// Tokenizes description source.
///
/// Never fails; the result always ends with exactly one end-of-input token.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::tokenize_all(source)
}

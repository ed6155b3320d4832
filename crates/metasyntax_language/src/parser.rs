//! Parser for the token description language.
//!
//! Recursive descent with one token of lookahead and no backtracking:
//!
//! ```text
//! description   := tokenDef* EndOfInput
//! tokenDef      := Identifier '{' category* '}'
//! category      := Identifier (patternSpec | subtokenList) colorLiteral?
//! patternSpec   := StringLiteral
//! subtokenList  := '[' subtokenEntry (',' subtokenEntry)* ']'
//! subtokenEntry := Identifier patternSpec colorLiteral?
//! ```
//!
//! The first unexpected token aborts the parse. Category names are not
//! checked here.

use metasyntax_foundation::{Color, Error, Result};
use tracing::debug;

use crate::ast::{
    CategoryBody, CategoryDef, Description, Ident, PatternSpec, SubTokenDef, TokenDef,
};
use crate::lexer::Lexer;
use crate::pattern::Pattern;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser over a lexed description.
pub struct Parser {
    /// Tokens, always ending with an end-of-input token.
    tokens: Vec<Token>,
    /// Index of the current token (lookahead).
    index: usize,
}

impl Parser {
    /// Creates a parser over lexer output.
    ///
    /// An end-of-input token is appended if `tokens` does not end with one.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::EndOfInput) {
            let end = tokens.last().map_or_else(Span::default, |t| {
                Span::new(t.span.end, t.span.end, t.span.line, t.span.column)
            });
            tokens.push(Token::new(TokenKind::EndOfInput, "", end));
        }
        Self { tokens, index: 0 }
    }

    /// Creates a parser over description source.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::tokenize_all(source))
    }

    /// Parses the whole description.
    ///
    /// # Errors
    /// Returns an error at the first token the grammar does not allow, or
    /// at the first pattern or color literal that fails to compile.
    pub fn parse(&mut self) -> Result<Description> {
        let mut tokens = Vec::new();
        while self.current().kind != TokenKind::EndOfInput {
            tokens.push(self.parse_token_def()?);
        }
        debug!(tokens = tokens.len(), "parsed description");
        Ok(Description { tokens })
    }

    /// Parses `Identifier '{' category* '}'`.
    fn parse_token_def(&mut self) -> Result<TokenDef> {
        let name = self.parse_ident()?;
        self.expect(TokenKind::LBrace)?;

        let mut categories = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::RBrace => break,
                TokenKind::Identifier => categories.push(self.parse_category()?),
                _ => return Err(self.unexpected("category name or '}'")),
            }
        }

        let close = self.expect(TokenKind::RBrace)?;
        Ok(TokenDef {
            span: name.span.covering(close.span),
            name,
            categories,
        })
    }

    /// Parses `Identifier (patternSpec | subtokenList) colorLiteral?`.
    fn parse_category(&mut self) -> Result<CategoryDef> {
        let name = self.parse_ident()?;
        let body = if self.current().kind == TokenKind::LBracket {
            let entries = self.parse_sub_tokens()?;
            let color = self.parse_optional_color()?;
            CategoryBody::Named { entries, color }
        } else {
            CategoryBody::Single(self.parse_pattern_spec()?)
        };
        Ok(CategoryDef { name, body })
    }

    /// Parses `'[' subtokenEntry (',' subtokenEntry)* ']'`.
    fn parse_sub_tokens(&mut self) -> Result<Vec<SubTokenDef>> {
        self.expect(TokenKind::LBracket)?;

        let mut entries = Vec::new();
        loop {
            let name = self.parse_ident()?;
            let pattern = self.parse_pattern_spec()?;
            entries.push(SubTokenDef { name, pattern });

            match self.current().kind {
                TokenKind::Comma => self.advance(),
                TokenKind::RBracket => {
                    self.advance();
                    return Ok(entries);
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
    }

    /// Parses a pattern literal and its optional color.
    fn parse_pattern_spec(&mut self) -> Result<PatternSpec> {
        let literal = self.expect(TokenKind::StringLiteral { terminated: true })?;
        let pattern = Pattern::from_token(&literal)?;
        let color = self.parse_optional_color()?;
        Ok(PatternSpec {
            pattern,
            color,
            span: literal.span,
        })
    }

    /// Parses a color literal if one is next.
    fn parse_optional_color(&mut self) -> Result<Option<Color>> {
        if self.current().kind != TokenKind::ColorLiteral {
            return Ok(None);
        }
        let token = self.current().clone();
        self.advance();
        Color::from_hex(&token.text)
            .map(Some)
            .ok_or_else(|| Error::invalid_color(&token.text, token.location()))
    }

    /// Parses an identifier.
    fn parse_ident(&mut self) -> Result<Ident> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Ident {
            text: token.text,
            span: token.span,
        })
    }

    /// Returns the current token.
    fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.index.min(last)]
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    /// Expects the current token to be of a specific kind, then advances.
    ///
    /// Pattern literals match regardless of termination.
    fn expect(&mut self, expected: TokenKind) -> Result<Token> {
        let matches =
            std::mem::discriminant(&self.current().kind) == std::mem::discriminant(&expected);

        if matches {
            let token = self.current().clone();
            self.advance();
            Ok(token)
        } else {
            Err(self.unexpected(expected.name()))
        }
    }

    /// Creates an error for the current token.
    fn unexpected(&self, expected: &str) -> Error {
        let token = self.current();
        if token.kind == TokenKind::Unknown {
            Error::unexpected_character(&token.text, token.location())
        } else {
            Error::syntax(expected, token.kind.name(), token.location())
        }
    }
}

/// Parses lexer output into a description tree.
///
/// # Errors
/// Returns an error if the tokens do not form a valid description.
pub fn parse(tokens: Vec<Token>) -> Result<Description> {
    Parser::new(tokens).parse()
}

/// Lexes and parses description source.
///
/// # Errors
/// Returns an error if the source is not a valid description.
pub fn parse_source(source: &str) -> Result<Description> {
    Parser::from_source(source).parse()
}

//! Lexer, parser, and rule organizer for the MetaSyntax description language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of description source
//! - [`Parser`] - Parsing tokens into a [`Description`] tree
//! - [`organize`] - Flattening the tree into a prioritized [`RuleSet`]
//! - [`compile`] - The whole pipeline, failing fast at the first error
//!
//! ```text
//! Identifier {
//!     Special [
//!         If r"if" #C586C0,
//!         Else r"else" #C586C0
//!     ]
//!     Normal r"[a-zA-Z_][a-zA-Z_0-9]*" #9CDCFE
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod literal;
pub mod organizer;
pub mod parser;
pub mod pattern;
pub mod span;
pub mod token;

use metasyntax_foundation::Result;
use tracing::debug;

pub use ast::{CategoryBody, CategoryDef, Description, Ident, PatternSpec, SubTokenDef, TokenDef};
pub use lexer::{Lexer, tokenize};
pub use literal::{LiteralError, RawLiteral};
pub use organizer::{MatchRule, RuleSet, organize};
pub use parser::{Parser, parse, parse_source};
pub use pattern::Pattern;
pub use span::Span;
pub use token::{Token, TokenKind};

/// The example description shipped with the tools.
pub const EXAMPLE_DESCRIPTION: &str = r#"Identifier {
    Special [
        If r"if" #C586C0,
        Else r"else" #C586C0
    ]
    Normal r"[a-zA-Z_][a-zA-Z_0-9]*" #9CDCFE
}
Symbol {
    Special [
        LeftParen r"\(",
        RightParen r"\)"
    ]
}
"#;

/// Compiles description source into a rule set.
///
/// Runs lex, parse, and organize in order; the first failure aborts the
/// compile.
///
/// # Errors
/// Returns the first syntax, pattern, color, or category error.
pub fn compile(source: &str) -> Result<RuleSet> {
    let tokens = tokenize(source);
    debug!(lexemes = tokens.len(), "lexed description");
    let description = parse(tokens)?;
    organize(&description)
}

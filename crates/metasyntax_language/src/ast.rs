//! Parse tree of a token description.
//!
//! The tree mirrors the source: token definitions hold categories, and each
//! category holds either a single pattern or a named list of sub-patterns.
//! Category names stay as written; they are checked against the closed
//! [`Category`](metasyntax_foundation::Category) set by the organizer.

use metasyntax_foundation::Color;

use crate::pattern::Pattern;
use crate::span::Span;

/// A parsed description: token definitions in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Description {
    /// Token definitions in declaration order.
    pub tokens: Vec<TokenDef>,
}

impl Description {
    /// Returns true if the description declares no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Looks up a token definition by name.
    #[must_use]
    pub fn token(&self, name: &str) -> Option<&TokenDef> {
        self.tokens.iter().find(|t| t.name.text == name)
    }
}

/// A name as written in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    /// The name.
    pub text: String,
    /// Where the name appears.
    pub span: Span,
}

/// `TokenName { category* }`
#[derive(Clone, Debug)]
pub struct TokenDef {
    /// The token name.
    pub name: Ident,
    /// Categories in declaration order.
    pub categories: Vec<CategoryDef>,
    /// Span from the name to the closing brace.
    pub span: Span,
}

impl TokenDef {
    /// Looks up a category by its written name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.name.text == name)
    }
}

/// `CategoryName body`
#[derive(Clone, Debug)]
pub struct CategoryDef {
    /// The category name as written.
    pub name: Ident,
    /// The category body.
    pub body: CategoryBody,
}

/// The body of a category.
#[derive(Clone, Debug)]
pub enum CategoryBody {
    /// One pattern, optionally colored: `r"..." #RRGGBB`.
    Single(PatternSpec),
    /// Named sub-patterns: `[ Name r"..." #RRGGBB, ... ] #RRGGBB`.
    Named {
        /// Sub-token entries in declaration order; never empty.
        entries: Vec<SubTokenDef>,
        /// Color inherited by entries that declare none.
        color: Option<Color>,
    },
}

/// `SubTokenName r"..." #RRGGBB`
#[derive(Clone, Debug)]
pub struct SubTokenDef {
    /// The sub-token name.
    pub name: Ident,
    /// The sub-token pattern.
    pub pattern: PatternSpec,
}

/// A compiled pattern with its optional color.
#[derive(Clone, Debug)]
pub struct PatternSpec {
    /// The compiled pattern.
    pub pattern: Pattern,
    /// The declared color, if any.
    pub color: Option<Color>,
    /// Where the pattern literal appears.
    pub span: Span,
}

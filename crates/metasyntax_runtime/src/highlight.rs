//! Syntax highlighting for sample text and description source.

use std::fmt::Write as _;
use std::ops::Range;
use std::sync::Arc;

use metasyntax_engine::{StreamItem, run};
use metasyntax_foundation::{Category, Color};
use metasyntax_language::{RuleSet, Token, TokenKind, tokenize};

use crate::config::{DescriptionTheme, HighlightConfig, Palette, Role};

/// Resets all ANSI attributes.
const RESET: &str = "\x1b[0m";

/// A colored byte range of highlighted text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Byte range in the highlighted text.
    pub range: Range<usize>,
    /// Foreground color.
    pub color: Color,
    /// What the range is: a token label or a description role.
    pub label: String,
}

/// Maps matched tokens to colored spans.
///
/// A token takes its rule color when one was declared, otherwise the
/// palette default for its category. The sentinel produces no span.
#[must_use]
pub fn highlight_spans(items: &[StreamItem], palette: &Palette) -> Vec<HighlightSpan> {
    items
        .iter()
        .filter_map(StreamItem::as_token)
        .map(|token| HighlightSpan {
            range: token.range(),
            color: token
                .color
                .unwrap_or_else(|| palette.color_for(token.category)),
            label: token.label.clone(),
        })
        .collect()
}

/// Renders text with 24-bit ANSI foreground colors.
///
/// Spans must be sorted and must not overlap. Text outside every span is
/// copied unstyled.
#[must_use]
pub fn render_ansi(text: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut cursor = 0;
    for span in spans {
        if span.range.start < cursor || span.range.end > text.len() {
            continue;
        }
        out.push_str(&text[cursor..span.range.start]);
        out.push_str(&span.color.ansi_foreground());
        out.push_str(&text[span.range.clone()]);
        out.push_str(RESET);
        cursor = span.range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Highlights sample text with a rule set.
pub struct SampleHighlighter {
    rules: Arc<RuleSet>,
    palette: Palette,
}

impl SampleHighlighter {
    /// Creates a highlighter for the given rules.
    #[must_use]
    pub fn new(rules: Arc<RuleSet>, palette: Palette) -> Self {
        Self { rules, palette }
    }

    /// Replaces the rules used for highlighting.
    pub fn set_rules(&mut self, rules: Arc<RuleSet>) {
        self.rules = rules;
    }

    /// Returns the colored spans for `text`.
    #[must_use]
    pub fn spans(&self, text: &str) -> Vec<HighlightSpan> {
        highlight_spans(&run(&self.rules, text), &self.palette)
    }

    /// Renders `text` with ANSI colors.
    #[must_use]
    pub fn highlight(&self, text: &str) -> String {
        render_ansi(text, &self.spans(text))
    }
}

/// Highlights description source by the role of each lexeme.
#[derive(Clone, Debug, Default)]
pub struct DescriptionHighlighter {
    theme: DescriptionTheme,
}

impl DescriptionHighlighter {
    /// Creates a highlighter with the given theme.
    #[must_use]
    pub fn new(theme: DescriptionTheme) -> Self {
        Self { theme }
    }

    /// Returns the colored spans for description source.
    ///
    /// Works on any input, including descriptions that do not compile.
    #[must_use]
    pub fn spans(&self, source: &str) -> Vec<HighlightSpan> {
        classify(&tokenize(source))
            .into_iter()
            .map(|(range, role)| HighlightSpan {
                range,
                color: self.theme.color_for(role),
                label: role.name().to_string(),
            })
            .collect()
    }

    /// Renders description source with ANSI colors.
    #[must_use]
    pub fn highlight(&self, source: &str) -> String {
        render_ansi(source, &self.spans(source))
    }
}

/// Assigns a role to each description lexeme.
///
/// An identifier followed by `{` names a token; `Normal` and `Special`
/// elsewhere are categories; any other identifier is a sub-token name.
/// Unknown characters get no role.
#[must_use]
pub fn classify(tokens: &[Token]) -> Vec<(Range<usize>, Role)> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| {
            let role = match token.kind {
                TokenKind::Identifier => {
                    if tokens.get(i + 1).is_some_and(|t| t.kind == TokenKind::LBrace) {
                        Role::TokenName
                    } else if Category::from_name(&token.text).is_some() {
                        Role::Category
                    } else {
                        Role::SubToken
                    }
                }
                TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Comma => Role::Symbol,
                TokenKind::StringLiteral { .. } => Role::Pattern,
                TokenKind::ColorLiteral => Role::ColorLiteral,
                TokenKind::Unknown | TokenKind::EndOfInput => return None,
            };
            Some((token.span.range(), role))
        })
        .collect()
}

/// Formats matched tokens as a table, one token per line.
///
/// Columns are `line:column`, label, category, and the quoted text.
#[must_use]
pub fn token_table(items: &[StreamItem], config: &HighlightConfig) -> String {
    let mut out = String::new();
    for item in items {
        if item.is_eof() && !config.show_eof {
            continue;
        }
        let at = item
            .location()
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        let label = match item.as_token() {
            Some(token) if config.ansi => {
                let color = token
                    .color
                    .unwrap_or_else(|| config.palette.color_for(token.category));
                format!("{}{}{RESET}", color.ansi_foreground(), token.label)
            }
            _ => item.label().to_string(),
        };
        let _ = writeln!(
            out,
            "{at:>7}  {label}  {}  {:?}",
            item.category_name(),
            item.text()
        );
    }
    out
}

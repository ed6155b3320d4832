//! Pattern literal escaping.
//!
//! A literal is an optional single prefix letter followed by a
//! double-quoted body. The prefix carries no meaning. Bodies are unescaped
//! with one rule: `\"` becomes `"`, and every other backslash pair is kept
//! as written so the regex engine sees its own escapes (`\(`, `\\`, `\d`).

/// Why a literal body could not be unescaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiteralError {
    /// The literal has no opening quote.
    MissingQuote,
    /// The closing quote was never found.
    Unterminated,
    /// A backslash with nothing after it.
    DanglingEscape,
}

impl LiteralError {
    /// Returns a short description of the problem.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingQuote => "pattern literal has no opening quote",
            Self::Unterminated => "unterminated pattern literal",
            Self::DanglingEscape => "backslash at end of pattern literal",
        }
    }
}

/// A pattern literal split into its parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawLiteral<'a> {
    /// The prefix letter, if any.
    pub prefix: Option<char>,
    /// The body between the quotes, still escaped.
    pub body: &'a str,
    /// Whether a closing quote ended the literal.
    pub terminated: bool,
}

impl<'a> RawLiteral<'a> {
    /// Splits literal text as recorded by the lexer.
    ///
    /// # Errors
    /// Returns [`LiteralError::MissingQuote`] if the text has no opening quote.
    pub fn split(text: &'a str) -> Result<Self, LiteralError> {
        let (prefix, quoted) = match text.chars().next() {
            Some('"') => (None, text),
            Some(c) if c.is_ascii_alphabetic() => (Some(c), &text[1..]),
            _ => return Err(LiteralError::MissingQuote),
        };
        let inner = quoted.strip_prefix('"').ok_or(LiteralError::MissingQuote)?;

        let close = closing_quote(inner);
        Ok(Self {
            prefix,
            body: close.map_or(inner, |i| &inner[..i]),
            terminated: close.is_some(),
        })
    }

    /// Returns the unescaped pattern source.
    ///
    /// # Errors
    /// Returns an error if the literal is unterminated or ends in a lone
    /// backslash.
    pub fn pattern(&self) -> Result<String, LiteralError> {
        if !self.terminated {
            return Err(LiteralError::Unterminated);
        }
        unescape(self.body)
    }
}

/// Finds the byte index of the unescaped closing quote in a literal body.
fn closing_quote(inner: &str) -> Option<usize> {
    let mut chars = inner.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some(i),
            '\\' => {
                chars.next();
            }
            _ => {}
        }
    }
    None
}

/// Unescapes a literal body: `\"` becomes `"`, other pairs pass through.
///
/// # Errors
/// Returns [`LiteralError::DanglingEscape`] for a trailing lone backslash.
pub fn unescape(body: &str) -> Result<String, LiteralError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => return Err(LiteralError::DanglingEscape),
        }
    }
    Ok(out)
}

/// Escapes pattern source back into a literal body.
///
/// This is the inverse of [`unescape`]: quotes gain a backslash and
/// backslash pairs are copied unchanged.
#[must_use]
pub fn escape(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => {
                out.push('\\');
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Builds literal text for a pattern, with the conventional `r` prefix.
#[must_use]
pub fn to_literal(pattern: &str) -> String {
    format!("r\"{}\"", escape(pattern))
}

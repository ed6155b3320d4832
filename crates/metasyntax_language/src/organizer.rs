//! Rule organizer.
//!
//! Flattens a [`Description`] into the ordered rule list the tokenizer
//! consumes. Within each token, `Normal` rules are emitted before `Special`
//! rules; otherwise declaration order is kept. Each rule carries an explicit
//! [`Priority`]. The tokenizer tries higher priorities first and, among
//! equal priorities, later rules before earlier ones.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;

use metasyntax_foundation::{Category, Color, Error, ErrorKind, Priority, Result};
use tracing::debug;

use crate::ast::{CategoryBody, CategoryDef, Description, Ident, TokenDef};
use crate::pattern::Pattern;

/// A flattened match rule.
#[derive(Clone, Debug)]
pub struct MatchRule {
    /// The compiled pattern.
    pub pattern: Pattern,
    /// The token this rule produces.
    pub token_name: String,
    /// The category the rule was declared under.
    pub category: Category,
    /// The sub-token name; only `Special` rules have one.
    pub sub_token: Option<String>,
    /// The nearest declared color, if any.
    pub color: Option<Color>,
    /// Match priority, derived from the category.
    pub priority: Priority,
    label: String,
}

impl MatchRule {
    /// Creates a rule; the label and priority are derived.
    #[must_use]
    pub fn new(
        pattern: Pattern,
        token_name: impl Into<String>,
        category: Category,
        sub_token: Option<String>,
        color: Option<Color>,
    ) -> Self {
        let token_name = token_name.into();
        let label = match &sub_token {
            Some(sub) => format!("{token_name}[{sub}]"),
            None => token_name.clone(),
        };
        Self {
            pattern,
            token_name,
            category,
            sub_token,
            color,
            priority: category.priority(),
            label,
        }
    }

    /// Returns the label of tokens this rule produces: `Token` for `Normal`
    /// rules, `Token[Sub]` for `Special` rules.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.label, self.category, self.pattern)?;
        if let Some(color) = self.color {
            write!(f, " {color}")?;
        }
        Ok(())
    }
}

/// An organized, immutable rule list.
///
/// Share it behind an `Arc` to reuse one compile across many tokenizer runs.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<MatchRule>,
    /// Indices into `rules`, highest priority first, ties latest rule first.
    prioritized: Vec<usize>,
}

impl RuleSet {
    /// Builds a rule set from rules in organizer order.
    #[must_use]
    pub fn new(rules: Vec<MatchRule>) -> Self {
        let mut prioritized: Vec<usize> = (0..rules.len()).collect();
        prioritized.sort_by_key(|&i| Reverse((rules[i].priority, i)));
        Self { rules, prioritized }
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rules in organizer order.
    pub fn iter(&self) -> std::slice::Iter<'_, MatchRule> {
        self.rules.iter()
    }

    /// Returns the rules in the order the tokenizer tries them.
    pub fn prioritized(&self) -> impl Iterator<Item = &MatchRule> + '_ {
        self.prioritized.iter().map(|&i| &self.rules[i])
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a MatchRule;
    type IntoIter = std::slice::Iter<'a, MatchRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Flattens a description into a rule set.
///
/// # Errors
/// Fails on the first category that is not `Normal` or `Special`, on a
/// category whose body has the wrong shape, and on repeated names.
pub fn organize(description: &Description) -> Result<RuleSet> {
    let mut rules = Vec::new();
    let mut token_names = HashSet::new();

    for token in &description.tokens {
        check_unique(&mut token_names, &token.name, "token")?;
        organize_token(token, &mut rules)?;
    }

    debug!(
        tokens = description.tokens.len(),
        rules = rules.len(),
        "organized rules"
    );
    Ok(RuleSet::new(rules))
}

/// Appends one token's rules, `Normal` before `Special`.
fn organize_token(token: &TokenDef, rules: &mut Vec<MatchRule>) -> Result<()> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(token.categories.len());
    for def in &token.categories {
        let location = def.name.span.location();
        let category = Category::from_name(&def.name.text).ok_or_else(|| {
            Error::unsupported_category(&token.name.text, &def.name.text, location)
        })?;
        check_unique(&mut seen, &def.name, "category")?;
        categories.push((category, def));
    }
    categories.sort_by_key(|(category, _)| *category);

    for (category, def) in categories {
        match (category, &def.body) {
            (Category::Normal, CategoryBody::Single(spec)) => rules.push(MatchRule::new(
                spec.pattern.clone(),
                &token.name.text,
                category,
                None,
                spec.color,
            )),
            (Category::Special, CategoryBody::Named { entries, color }) => {
                let mut sub_names = HashSet::new();
                for entry in entries {
                    check_unique(&mut sub_names, &entry.name, "sub-token")?;
                    rules.push(MatchRule::new(
                        entry.pattern.pattern.clone(),
                        &token.name.text,
                        category,
                        Some(entry.name.text.clone()),
                        entry.pattern.color.or(*color),
                    ));
                }
            }
            (Category::Normal, CategoryBody::Named { .. })
            | (Category::Special, CategoryBody::Single(_)) => {
                return Err(body_mismatch(token, def, category));
            }
        }
    }
    Ok(())
}

/// Records `name` in `seen`, failing if it is already there.
fn check_unique<'a>(
    seen: &mut HashSet<&'a str>,
    name: &'a Ident,
    what: &'static str,
) -> Result<()> {
    if seen.insert(name.text.as_str()) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::DuplicateName {
            what,
            name: name.text.clone(),
            location: name.span.location(),
        }))
    }
}

fn body_mismatch(token: &TokenDef, def: &CategoryDef, category: Category) -> Error {
    let expected = match category {
        Category::Normal => "a single pattern",
        Category::Special => "a sub-token list",
    };
    Error::new(ErrorKind::BodyMismatch {
        token: token.name.text.clone(),
        category: category.name().to_string(),
        expected,
        location: def.name.span.location(),
    })
}

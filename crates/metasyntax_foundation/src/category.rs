//! Rule categories.
//!
//! A description declares each token's patterns under one of two categories.
//! The set is closed: anything else is rejected when rules are organized.

use std::fmt;

/// Match priority of a rule. Higher values are tried first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u8);

/// The category of a token pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A token's single catch-all pattern.
    Normal,
    /// A set of named, higher-priority sub-patterns (keywords, punctuation).
    Special,
}

impl Category {
    /// All categories in emission order.
    pub const ALL: [Self; 2] = [Self::Normal, Self::Special];

    /// Looks up a category by its name in description source.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Normal" => Some(Self::Normal),
            "Special" => Some(Self::Special),
            _ => None,
        }
    }

    /// Returns the name used in description source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Special => "Special",
        }
    }

    /// Returns the match priority of rules in this category.
    #[must_use]
    pub const fn priority(self) -> Priority {
        match self {
            Self::Normal => Priority(0),
            Self::Special => Priority(1),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

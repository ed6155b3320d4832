//! Configuration for highlighting and token output.

use metasyntax_foundation::{Category, Color};

/// Default colors for tokens whose rule declares none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Color for `Normal` tokens.
    pub normal: Color,
    /// Color for `Special` tokens.
    pub special: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            normal: Color::rgb(0xDC, 0xDC, 0xAA),
            special: Color::rgb(0x9C, 0xDC, 0xFE),
        }
    }
}

impl Palette {
    /// Returns the default color for a category.
    #[must_use]
    pub const fn color_for(&self, category: Category) -> Color {
        match category {
            Category::Normal => self.normal,
            Category::Special => self.special,
        }
    }

    /// Builder method to set the `Normal` color.
    #[must_use]
    pub const fn with_normal(mut self, color: Color) -> Self {
        self.normal = color;
        self
    }

    /// Builder method to set the `Special` color.
    #[must_use]
    pub const fn with_special(mut self, color: Color) -> Self {
        self.special = color;
        self
    }
}

/// Roles of description source text, for highlighting descriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// A token name, the identifier before `{`.
    TokenName,
    /// `Normal` or `Special`.
    Category,
    /// A sub-token name inside a `Special` list.
    SubToken,
    /// `{`, `}`, `[`, `]`, or `,`.
    Symbol,
    /// A pattern literal.
    Pattern,
    /// A `#RRGGBB` color literal.
    ColorLiteral,
}

impl Role {
    /// Returns a short name for the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TokenName => "token",
            Self::Category => "category",
            Self::SubToken => "sub-token",
            Self::Symbol => "symbol",
            Self::Pattern => "pattern",
            Self::ColorLiteral => "color",
        }
    }
}

/// Colors used to highlight description source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DescriptionTheme {
    /// Token names.
    pub token_name: Color,
    /// Category names.
    pub category: Color,
    /// Sub-token names.
    pub sub_token: Color,
    /// Braces, brackets, and commas.
    pub symbol: Color,
    /// Pattern literals.
    pub pattern: Color,
    /// Color literals.
    pub color_literal: Color,
}

impl Default for DescriptionTheme {
    fn default() -> Self {
        Self {
            token_name: Color::rgb(0xDC, 0xDC, 0xAA),
            category: Color::rgb(0xC5, 0x86, 0xC0),
            sub_token: Color::rgb(0x9C, 0xDC, 0xFE),
            symbol: Color::rgb(0xFF, 0xFF, 0xFF),
            pattern: Color::rgb(0x6A, 0x99, 0x55),
            color_literal: Color::rgb(0xCE, 0x60, 0x21),
        }
    }
}

impl DescriptionTheme {
    /// Returns the color for a role.
    #[must_use]
    pub const fn color_for(&self, role: Role) -> Color {
        match role {
            Role::TokenName => self.token_name,
            Role::Category => self.category,
            Role::SubToken => self.sub_token,
            Role::Symbol => self.symbol,
            Role::Pattern => self.pattern,
            Role::ColorLiteral => self.color_literal,
        }
    }
}

/// Configuration for highlighting and token dumps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Fallback colors for rules without one.
    pub palette: Palette,
    /// Whether output carries ANSI color escapes.
    pub ansi: bool,
    /// Whether token tables list the EOF sentinel.
    pub show_eof: bool,
    /// Colors for description source.
    pub description_theme: DescriptionTheme,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            ansi: true,
            show_eof: true,
            description_theme: DescriptionTheme::default(),
        }
    }
}

impl HighlightConfig {
    /// Creates a configuration for plain-text output, such as when stdout
    /// is not a terminal.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            ansi: false,
            ..Self::default()
        }
    }

    /// Builder method to set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Builder method to enable/disable ANSI output.
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Builder method to show/hide the EOF sentinel in token tables.
    #[must_use]
    pub fn with_show_eof(mut self, show_eof: bool) -> Self {
        self.show_eof = show_eof;
        self
    }
}

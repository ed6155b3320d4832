//! Integration tests for colors, categories, and locations

use metasyntax_foundation::{Category, Color, Location};

// =============================================================================
// Colors
// =============================================================================

#[test]
fn parse_hex_color() {
    let color: Color = "#C586C0".parse().unwrap();
    assert_eq!(color, Color::rgb(0xC5, 0x86, 0xC0));
    assert_eq!(color.to_string(), "#C586C0");
}

#[test]
fn lowercase_hex_displays_uppercase() {
    assert_eq!(Color::from_hex("#9cdcfe").unwrap().to_string(), "#9CDCFE");
}

#[test]
fn reject_malformed_colors() {
    for text in ["C586C0", "#C586C", "#C586C0F", "#GGGGGG", "", "#"] {
        assert!(Color::from_hex(text).is_none(), "accepted {text:?}");
    }
}

#[test]
fn ansi_escape() {
    assert_eq!(Color::rgb(1, 2, 3).ansi_foreground(), "\x1b[38;2;1;2;3m");
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn special_outranks_normal() {
    assert!(Category::Special.priority() > Category::Normal.priority());
}

#[test]
fn category_names_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_name(category.name()), Some(category));
    }
    assert_eq!(Category::from_name("normal"), None);
}

#[test]
fn normal_sorts_before_special() {
    let mut categories = vec![Category::Special, Category::Normal];
    categories.sort();
    assert_eq!(categories, [Category::Normal, Category::Special]);
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn advance_over_lines() {
    let loc = Location::start().advance_str("ab\ncd");
    assert_eq!(loc, Location::new(2, 3, 5));
    assert_eq!(loc.to_string(), "2:3");
}

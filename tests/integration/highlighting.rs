//! Highlighting sample text and description source

use metasyntax::engine::run;
use metasyntax::foundation::Color;
use metasyntax::language::compile;
use metasyntax::runtime::{
    DEFAULT_DESCRIPTION, DescriptionHighlighter, Palette, highlight_spans, render_ansi,
};

#[test]
fn highlight_round_trips_text() {
    let rules = compile(DEFAULT_DESCRIPTION).unwrap();
    let text = "if (a) % else";
    let spans = highlight_spans(&run(&rules, text), &Palette::default());
    let rendered = render_ansi(text, &spans);

    let mut stripped = rendered.clone();
    for span in &spans {
        stripped = stripped.replace(&span.color.ansi_foreground(), "");
    }
    assert_eq!(stripped.replace("\x1b[0m", ""), text);
}

#[test]
fn palette_applies_to_uncolored_rules() {
    let rules = compile(r#"Word { Normal r"[a-z]+" }"#).unwrap();
    let palette = Palette::default().with_normal(Color::rgb(10, 20, 30));
    let spans = highlight_spans(&run(&rules, "abc"), &palette);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].color, Color::rgb(10, 20, 30));
    assert_eq!(spans[0].range, 0..3);
}

#[test]
fn description_highlighting_survives_broken_source() {
    let highlighter = DescriptionHighlighter::default();
    let spans = highlighter.spans(r#"Foo { Normal r"abc }"#);
    let labels: Vec<&str> = spans.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["token", "symbol", "category", "pattern"]);
}

#[test]
fn description_highlighting_covers_example() {
    let highlighter = DescriptionHighlighter::default();
    let spans = highlighter.spans(DEFAULT_DESCRIPTION);
    let tokens = spans.iter().filter(|s| s.label == "token").count();
    let sub_tokens = spans.iter().filter(|s| s.label == "sub-token").count();
    let colors = spans.iter().filter(|s| s.label == "color").count();
    assert_eq!(tokens, 2);
    assert_eq!(sub_tokens, 4);
    assert_eq!(colors, 3);
}

//! Highlighting, sessions, REPL, and CLI for MetaSyntax.
//!
//! This crate provides:
//! - [`highlight_spans`] and [`render_ansi`] - Coloring sample text from matched tokens
//! - [`DescriptionHighlighter`] - Coloring description source
//! - [`Session`] - Generation-stamped description compiles, last writer wins
//! - [`Repl`] - Interactive read-eval-print loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use config::{DescriptionTheme, HighlightConfig, Palette, Role};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::{
    DescriptionHighlighter, HighlightSpan, SampleHighlighter, classify, highlight_spans,
    render_ansi, token_table,
};
pub use repl::{Repl, Reply, format_error};
pub use session::{
    Applied, Compilation, CompileRequest, DEFAULT_DESCRIPTION, DEFAULT_SAMPLE, Session,
};

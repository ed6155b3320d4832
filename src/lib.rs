//! MetaSyntax - Token descriptions compiled into highlighting rules
//!
//! This crate re-exports all layers of the MetaSyntax system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: metasyntax_runtime    — Highlighting, sessions, REPL, CLI
//! Layer 2: metasyntax_engine     — Tokenizer runtime
//! Layer 1: metasyntax_language   — Description lexer, parser, rule organizer
//! Layer 0: metasyntax_foundation — Core types (Location, Color, Category, Error)
//! ```

pub use metasyntax_engine as engine;
pub use metasyntax_foundation as foundation;
pub use metasyntax_language as language;
pub use metasyntax_runtime as runtime;

//! Integration tests for Layer 1: Language
//!
//! Tests for the description lexer, parser, and rule organizer.

mod organizer;
mod parser;

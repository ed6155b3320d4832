//! Cross-layer integration tests for MetaSyntax
//!
//! Tests that verify correct interaction between multiple crates.

mod highlighting;
mod session;

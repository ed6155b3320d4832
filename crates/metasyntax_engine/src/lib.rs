//! Tokenizer runtime for MetaSyntax.
//!
//! This crate provides:
//! - [`TokenStream`] - A first-match scan of sample text against a [`RuleSet`]
//! - [`StreamItem`] - Matched tokens and the end-of-stream sentinel
//! - [`run`] - Collects a whole stream
//!
//! The runtime never fails. Characters no rule matches are skipped, and
//! the stream always ends with exactly one [`StreamItem::Eof`].
//!
//! [`RuleSet`]: metasyntax_language::RuleSet

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matched;
pub mod stream;

pub use matched::{MatchedToken, StreamItem};
pub use stream::{StreamState, TokenStream, run};

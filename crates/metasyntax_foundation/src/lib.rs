//! Core types and errors for MetaSyntax.
//!
//! This crate provides:
//! - [`Location`] - Line/column/offset coordinates in source text
//! - [`Color`] - `#RRGGBB` colors attached to rules
//! - [`Category`] - The closed set of rule categories
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod color;
pub mod error;
pub mod location;

pub use category::{Category, Priority};
pub use color::Color;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use location::Location;

//! Source model and diagnostics shared by the component language front end.
//!
//! # Overview
//!
//! - [`Source`] - An in-memory source text with a symbolic [`SourcePath`]
//! - [`Position`] - Zero-based (line, column) location
//! - [`Range`] - Half-open range of positions
//! - [`Diagnostic`] - Code, message and range of any front end failure
//!
//! # Examples
//!
//! ```
//! use core_types::{Position, Range, Source};
//!
//! let source = Source::from_string("component Foo {}");
//! let end = Position::ZERO.advanced_by_str(source.contents());
//! let range = Range::new(Position::ZERO, end);
//!
//! assert_eq!(range.end, Position::new(0, 16));
//! assert_eq!(range.to_string(), "[1:1]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{Diagnostic, DiagnosticReport};
pub use source::{Position, Range, Source, SourcePath};

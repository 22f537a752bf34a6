//! Diagnostics surface shared by every layer of the front end.
//!
//! Each error type of the scanner, lexer, parser and type system implements
//! [`Diagnostic`], so editors and command line tools can report any failure
//! uniformly without knowing which layer produced it.

use crate::Range;
use std::fmt;

/// A failure that can be shown to a user.
pub trait Diagnostic: std::error::Error {
    /// Stable numeric code of this failure
    fn code(&self) -> u32;

    /// Human-readable message, without position prefix
    fn message(&self) -> String;

    /// Source range the failure is about, if known
    fn affected_range(&self) -> Option<Range>;

    /// Collapse into a plain report value
    fn report(&self) -> DiagnosticReport {
        DiagnosticReport {
            code: self.code(),
            message: self.message(),
            range: self.affected_range(),
        }
    }
}

/// Plain, owned snapshot of a [`Diagnostic`].
///
/// # Examples
///
/// ```
/// use core_types::{DiagnosticReport, Range};
///
/// let report = DiagnosticReport {
///     code: 4001,
///     message: "Unexpected token".to_string(),
///     range: Some(Range::at(1, 4, 1, 5)),
/// };
/// assert_eq!(report.to_string(), "[2:5] Unexpected token (#4001)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Stable numeric code
    pub code: u32,
    /// Message without position prefix
    pub message: String,
    /// Affected range, if any
    pub range: Option<Range>,
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            Some(range) => write!(f, "{} {} (#{})", range, self.message, self.code),
            None => write!(f, "{} (#{})", self.message, self.code),
        }
    }
}

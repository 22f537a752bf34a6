//! Unit tests for the Diagnostic trait

use core_types::{Diagnostic, DiagnosticReport, Range};
use std::fmt;

#[derive(Debug)]
struct UnknownThing {
    range: Range,
}

impl fmt::Display for UnknownThing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.range, self.message())
    }
}

impl std::error::Error for UnknownThing {}

impl Diagnostic for UnknownThing {
    fn code(&self) -> u32 {
        9999
    }

    fn message(&self) -> String {
        "Unknown thing".to_string()
    }

    fn affected_range(&self) -> Option<Range> {
        Some(self.range)
    }
}

#[cfg(test)]
mod diagnostic_tests {
    use super::*;

    #[test]
    fn test_report_collects_code_message_and_range() {
        let error = UnknownThing {
            range: Range::at(3, 0, 3, 4),
        };

        let report = error.report();

        assert_eq!(
            report,
            DiagnosticReport {
                code: 9999,
                message: "Unknown thing".to_string(),
                range: Some(Range::at(3, 0, 3, 4)),
            }
        );
    }

    #[test]
    fn test_display_prefixes_position() {
        let error = UnknownThing {
            range: Range::at(3, 0, 3, 4),
        };

        assert_eq!(error.to_string(), "[4:1] Unknown thing");
        assert_eq!(error.report().to_string(), "[4:1] Unknown thing (#9999)");
    }

    #[test]
    fn test_diagnostic_is_object_safe() {
        let error: Box<dyn Diagnostic> = Box::new(UnknownThing {
            range: Range::default(),
        });

        assert_eq!(error.code(), 9999);
    }
}

//! Integration test suite for the component language front end
//!
//! This crate provides integration tests that verify the scanner, parser
//! and type system work together across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use parser;
    pub use type_system;
}

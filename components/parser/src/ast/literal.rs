//! Literal nodes

use super::ExpressionNode;
use core_types::Range;

/// `true` or `false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteralNode {
    /// Source location
    pub range: Range,
    /// Literal value
    pub value: bool,
}

/// `null`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullLiteralNode {
    /// Source location
    pub range: Range,
}

/// Notation an integer literal was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerFormat {
    /// `0b1010`
    Binary,
    /// `0o755`
    Octal,
    /// `42`
    Decimal,
    /// `0xff`
    Hexadecimal,
}

impl IntegerFormat {
    /// Radix of the digits
    pub fn radix(self) -> u32 {
        match self {
            IntegerFormat::Binary => 2,
            IntegerFormat::Octal => 8,
            IntegerFormat::Decimal => 10,
            IntegerFormat::Hexadecimal => 16,
        }
    }
}

/// Integer literal, kept as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteralNode {
    /// Source location
    pub range: Range,
    /// Notation
    pub format: IntegerFormat,
    /// Raw text, including any radix prefix
    pub value: String,
}

impl IntegerLiteralNode {
    /// Numeric value, `None` if it does not fit into a `u64`
    pub fn numeric_value(&self) -> Option<u64> {
        let digits = match self.format {
            IntegerFormat::Decimal => self.value.as_str(),
            _ => self.value.get(2..)?,
        };
        u64::from_str_radix(digits, self.format.radix()).ok()
    }
}

/// Float literal, kept as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatLiteralNode {
    /// Source location
    pub range: Range,
    /// Raw text
    pub value: String,
}

/// Double-quoted string literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteralNode {
    /// Source location, including the quotes
    pub range: Range,
    /// Value with escape sequences resolved
    pub value: String,
}

/// One segment of a template literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLiteralSegment {
    /// Literal text with escape sequences resolved
    String(StringLiteralNode),
    /// `{expression}`
    Expression(ExpressionNode),
}

/// Backtick template literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLiteralNode {
    /// Source location, including the backticks
    pub range: Range,
    /// Segments in source order
    pub segments: Vec<TemplateLiteralSegment>,
}

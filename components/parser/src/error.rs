//! Parser error types.
//!
//! Each layer has its own error type: [`ScannerError`], [`LexerError`] and
//! [`ParserError`]. The latter wraps one enum per production, which in turn
//! wraps the position-less `Invalid*` construction errors of the AST and
//! attaches the range of the offending node.
//!
//! Codes are stable and grouped by layer: scanner 1xxx, lexer 2xxx, AST 3xxx,
//! parser 4xxx.

use crate::ast::{
    InvalidAttributeNodes, InvalidEnumMemberDeclarationNodes, InvalidImportedNameNodes,
    InvalidMatchArmNodes, InvalidModuleNode, InvalidPropertyDeclarationNodes, InvalidTagNode,
    InvalidTypeNameNodes, InvalidTypeReferenceNode,
};
use crate::rule::{describe_rules, Rule};
use core_types::{Diagnostic, Range};
use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParserError>;

fn unexpected_characters(characters: &str) -> String {
    format!("Expected end of source, found \"{}\"", characters)
}

fn unexpected_end_of_source(expected: &[Rule]) -> String {
    format!("Unexpected end of source, expected {}", describe_rules(expected))
}

fn unexpected_character_sequence(actual: &str, expected: &[Rule]) -> String {
    format!(
        "Unexpected character sequence \"{}\", expected {}",
        actual,
        describe_rules(expected)
    )
}

/// Failure of the character-level scanner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScannerError {
    /// Characters remain where the source should have ended
    #[error("{range} {}", unexpected_characters(.characters))]
    UnexpectedCharacters {
        /// Remaining characters up to the end of their line
        characters: String,
        /// Location of those characters
        range: Range,
    },
}

impl Diagnostic for ScannerError {
    fn code(&self) -> u32 {
        match self {
            ScannerError::UnexpectedCharacters { .. } => 1001,
        }
    }

    fn message(&self) -> String {
        match self {
            ScannerError::UnexpectedCharacters { characters, .. } => {
                unexpected_characters(characters)
            }
        }
    }

    fn affected_range(&self) -> Option<Range> {
        match self {
            ScannerError::UnexpectedCharacters { range, .. } => Some(*range),
        }
    }
}

/// Failure to read an expected token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    /// The source ended while a token was expected
    #[error("{range} {}", unexpected_end_of_source(.expected))]
    UnexpectedEndOfSource {
        /// Rules that would have been accepted
        expected: Vec<Rule>,
        /// Empty range at the end of the source
        range: Range,
    },
    /// The characters at the cursor match none of the expected rules
    #[error("{range} {}", unexpected_character_sequence(.actual, .expected))]
    UnexpectedCharacterSequence {
        /// Rules that would have been accepted
        expected: Vec<Rule>,
        /// Characters read before every rule gave up
        actual: String,
        /// Location of `actual`
        range: Range,
    },
}

impl LexerError {
    /// Rules that would have been accepted
    pub fn expected(&self) -> &[Rule] {
        match self {
            LexerError::UnexpectedEndOfSource { expected, .. }
            | LexerError::UnexpectedCharacterSequence { expected, .. } => expected,
        }
    }

    /// Location of the failure
    pub fn range(&self) -> Range {
        match self {
            LexerError::UnexpectedEndOfSource { range, .. }
            | LexerError::UnexpectedCharacterSequence { range, .. } => *range,
        }
    }
}

impl Diagnostic for LexerError {
    fn code(&self) -> u32 {
        match self {
            LexerError::UnexpectedEndOfSource { .. } => 2001,
            LexerError::UnexpectedCharacterSequence { .. } => 2002,
        }
    }

    fn message(&self) -> String {
        match self {
            LexerError::UnexpectedEndOfSource { expected, .. } => {
                unexpected_end_of_source(expected)
            }
            LexerError::UnexpectedCharacterSequence {
                expected, actual, ..
            } => unexpected_character_sequence(actual, expected),
        }
    }

    fn affected_range(&self) -> Option<Range> {
        Some(self.range())
    }
}

macro_rules! position_less_diagnostic {
    ($error:ty, $($pattern:pat => $code:expr),+ $(,)?) => {
        impl Diagnostic for $error {
            fn code(&self) -> u32 {
                match self {
                    $($pattern => $code),+
                }
            }

            fn message(&self) -> String {
                self.to_string()
            }

            fn affected_range(&self) -> Option<Range> {
                None
            }
        }
    };
}

position_less_diagnostic!(InvalidTypeNameNodes,
    InvalidTypeNameNodes::Empty => 3001,
    InvalidTypeNameNodes::Duplicate { .. } => 3002,
);
position_less_diagnostic!(InvalidTypeReferenceNode,
    InvalidTypeReferenceNode::OptionalAndArrayAtTheSameTime => 3003,
    InvalidTypeReferenceNode::UnionTypeAndArrayAtTheSameTime => 3004,
    InvalidTypeReferenceNode::UnionTypeAndOptionalAtTheSameTime => 3005,
);
position_less_diagnostic!(InvalidMatchArmNodes,
    InvalidMatchArmNodes::MoreThanOneDefaultMatchArmNode { .. } => 3006,
);
position_less_diagnostic!(InvalidTagNode,
    InvalidTagNode::SelfClosingTagWithChildren { .. } => 3007,
);
position_less_diagnostic!(InvalidAttributeNodes,
    InvalidAttributeNodes::Duplicate { .. } => 3008,
);
position_less_diagnostic!(InvalidPropertyDeclarationNodes,
    InvalidPropertyDeclarationNodes::Duplicate { .. } => 3009,
);
position_less_diagnostic!(InvalidEnumMemberDeclarationNodes,
    InvalidEnumMemberDeclarationNodes::Duplicate { .. } => 3010,
);
position_less_diagnostic!(InvalidImportedNameNodes,
    InvalidImportedNameNodes::Empty => 3011,
    InvalidImportedNameNodes::Duplicate { .. } => 3012,
);
position_less_diagnostic!(InvalidModuleNode,
    InvalidModuleNode::DuplicateBinding { .. } => 3013,
);

/// Failure of the expression production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionCouldNotBeParsed {
    /// A token that cannot start an expression
    #[error("Unexpected token \"{actual}\", expected {}", describe_rules(.expected))]
    UnexpectedToken {
        /// Rules that can start an expression
        expected: Vec<Rule>,
        /// Characters found instead
        actual: String,
        /// Location of `actual`
        range: Range,
    },
}

/// Failure of the string and template literal productions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringLiteralCouldNotBeParsed {
    /// `\uXXXX` that is not a Unicode scalar value
    #[error("Invalid unicode escape sequence \"{sequence}\"")]
    InvalidUnicodeEscapeSequence {
        /// The escape sequence as written
        sequence: String,
        /// Location of the escape sequence
        range: Range,
    },
}

/// Failure of the tag production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagCouldNotBeParsed {
    /// `<a></b>`
    #[error("Closing tag \"{actual}\" does not match opening tag \"{expected}\"")]
    ClosingTagNameMismatch {
        /// Name of the opening tag
        expected: String,
        /// Name of the closing tag
        actual: String,
        /// Location of the closing tag name
        range: Range,
    },
    /// The tag violates a construction invariant
    #[error("{cause}")]
    InvalidTagNode {
        /// Construction error
        cause: InvalidTagNode,
        /// Location of the tag
        range: Range,
    },
    /// Two attributes share a name
    #[error("{cause}")]
    InvalidAttributeNodes {
        /// Construction error
        cause: InvalidAttributeNodes,
        /// Location of the duplicate attribute
        range: Range,
    },
}

/// Failure of the match production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchCouldNotBeParsed {
    /// The arms violate a construction invariant
    #[error("{cause}")]
    InvalidMatchArmNodes {
        /// Construction error
        cause: InvalidMatchArmNodes,
        /// Location of the offending arm
        range: Range,
    },
}

/// Failure of the type reference production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeReferenceCouldNotBeParsed {
    /// The listed names violate a construction invariant
    #[error("{cause}")]
    InvalidTypeNameNodes {
        /// Construction error
        cause: InvalidTypeNameNodes,
        /// Location of the offending name
        range: Range,
    },
    /// Invalid combination of `?`, `[]` and `|`
    #[error("{cause}")]
    InvalidTypeReferenceNode {
        /// Construction error
        cause: InvalidTypeReferenceNode,
        /// Location of the type reference
        range: Range,
    },
}

/// Failure of the import production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportCouldNotBeParsed {
    /// The imported names violate a construction invariant
    #[error("{cause}")]
    InvalidImportedNameNodes {
        /// Construction error
        cause: InvalidImportedNameNodes,
        /// Location of the offending name or list
        range: Range,
    },
}

/// Failure of the enum production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumCouldNotBeParsed {
    /// The members violate a construction invariant
    #[error("{cause}")]
    InvalidEnumMemberDeclarationNodes {
        /// Construction error
        cause: InvalidEnumMemberDeclarationNodes,
        /// Location of the duplicate member
        range: Range,
    },
}

/// Failure of the struct production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructCouldNotBeParsed {
    /// The properties violate a construction invariant
    #[error("{cause}")]
    InvalidPropertyDeclarationNodes {
        /// Construction error
        cause: InvalidPropertyDeclarationNodes,
        /// Location of the duplicate property
        range: Range,
    },
}

/// Failure of the component production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentCouldNotBeParsed {
    /// The props violate a construction invariant
    #[error("{cause}")]
    InvalidPropertyDeclarationNodes {
        /// Construction error
        cause: InvalidPropertyDeclarationNodes,
        /// Location of the duplicate prop
        range: Range,
    },
}

/// Failure of the module production
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleCouldNotBeParsed {
    /// Top-level bindings violate a construction invariant
    #[error("{cause}")]
    InvalidModuleNode {
        /// Construction error
        cause: InvalidModuleNode,
        /// Location of the duplicate binding
        range: Range,
    },
}

macro_rules! production_diagnostic {
    ($error:ident, $($variant:ident => $code:expr),+ $(,)?) => {
        impl $error {
            /// Location of the failure
            pub fn range(&self) -> Range {
                match self {
                    $($error::$variant { range, .. } => *range),+
                }
            }
        }

        impl Diagnostic for $error {
            fn code(&self) -> u32 {
                match self {
                    $($error::$variant { .. } => $code),+
                }
            }

            fn message(&self) -> String {
                self.to_string()
            }

            fn affected_range(&self) -> Option<Range> {
                Some(self.range())
            }
        }
    };
}

production_diagnostic!(ExpressionCouldNotBeParsed, UnexpectedToken => 4001);
production_diagnostic!(StringLiteralCouldNotBeParsed, InvalidUnicodeEscapeSequence => 4002);
production_diagnostic!(TagCouldNotBeParsed,
    ClosingTagNameMismatch => 4011,
    InvalidTagNode => 4012,
    InvalidAttributeNodes => 4013,
);
production_diagnostic!(MatchCouldNotBeParsed, InvalidMatchArmNodes => 4021);
production_diagnostic!(TypeReferenceCouldNotBeParsed,
    InvalidTypeNameNodes => 4031,
    InvalidTypeReferenceNode => 4032,
);
production_diagnostic!(ImportCouldNotBeParsed, InvalidImportedNameNodes => 4041);
production_diagnostic!(EnumCouldNotBeParsed, InvalidEnumMemberDeclarationNodes => 4051);
production_diagnostic!(StructCouldNotBeParsed, InvalidPropertyDeclarationNodes => 4061);
production_diagnostic!(ComponentCouldNotBeParsed, InvalidPropertyDeclarationNodes => 4071);
production_diagnostic!(ModuleCouldNotBeParsed, InvalidModuleNode => 4081);

/// Any failure while turning source text into an AST
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// Trailing characters
    #[error(transparent)]
    Scanner(#[from] ScannerError),
    /// Unexpected token
    #[error(transparent)]
    Lexer(#[from] LexerError),
    /// Expression production
    #[error("{} {}", .0.range(), .0)]
    Expression(#[from] ExpressionCouldNotBeParsed),
    /// String and template literal productions
    #[error("{} {}", .0.range(), .0)]
    StringLiteral(#[from] StringLiteralCouldNotBeParsed),
    /// Tag production
    #[error("{} {}", .0.range(), .0)]
    Tag(#[from] TagCouldNotBeParsed),
    /// Match production
    #[error("{} {}", .0.range(), .0)]
    Match(#[from] MatchCouldNotBeParsed),
    /// Type reference production
    #[error("{} {}", .0.range(), .0)]
    TypeReference(#[from] TypeReferenceCouldNotBeParsed),
    /// Import production
    #[error("{} {}", .0.range(), .0)]
    Import(#[from] ImportCouldNotBeParsed),
    /// Enum production
    #[error("{} {}", .0.range(), .0)]
    Enum(#[from] EnumCouldNotBeParsed),
    /// Struct production
    #[error("{} {}", .0.range(), .0)]
    Struct(#[from] StructCouldNotBeParsed),
    /// Component production
    #[error("{} {}", .0.range(), .0)]
    Component(#[from] ComponentCouldNotBeParsed),
    /// Module production
    #[error("{} {}", .0.range(), .0)]
    Module(#[from] ModuleCouldNotBeParsed),
}

impl ParserError {
    fn inner(&self) -> &dyn Diagnostic {
        match self {
            ParserError::Scanner(error) => error,
            ParserError::Lexer(error) => error,
            ParserError::Expression(error) => error,
            ParserError::StringLiteral(error) => error,
            ParserError::Tag(error) => error,
            ParserError::Match(error) => error,
            ParserError::TypeReference(error) => error,
            ParserError::Import(error) => error,
            ParserError::Enum(error) => error,
            ParserError::Struct(error) => error,
            ParserError::Component(error) => error,
            ParserError::Module(error) => error,
        }
    }
}

impl Diagnostic for ParserError {
    fn code(&self) -> u32 {
        self.inner().code()
    }

    fn message(&self) -> String {
        self.inner().message()
    }

    fn affected_range(&self) -> Option<Range> {
        self.inner().affected_range()
    }
}

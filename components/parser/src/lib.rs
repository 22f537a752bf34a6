//! Component Language Parser
//!
//! Turns source text of the component language into an immutable AST.
//!
//! # Overview
//!
//! - [`Scanner`] - Character cursor with a speculative branch and commit/dismiss
//! - [`Rule`] - Lexical rules and the matchers implementing them
//! - [`Lexer`] - Reads rules at the cursor and reports what was expected
//! - [`Tokenizer`] / [`TokenStream`] - Lossless token sequence with lookahead
//! - [`Parser`] - Recursive descent parser producing [`ast::ModuleNode`]
//!
//! # Example
//!
//! ```
//! use core_types::Source;
//! use parser::parse_module;
//!
//! let source = Source::from_string("export component Greeting {\n  name: string\n  return <p>Hello</p>\n}");
//! let module = parse_module(&source).unwrap();
//!
//! assert_eq!(module.exports().len(), 1);
//! assert!(module.export("Greeting").is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod rule;
pub mod scanner;
pub mod tokenizer;

pub use error::{
    ComponentCouldNotBeParsed, EnumCouldNotBeParsed, ExpressionCouldNotBeParsed,
    ImportCouldNotBeParsed, LexerError, MatchCouldNotBeParsed, ModuleCouldNotBeParsed,
    ParseResult, ParserError, ScannerError, StringLiteralCouldNotBeParsed,
    StructCouldNotBeParsed, TagCouldNotBeParsed, TypeReferenceCouldNotBeParsed,
};
pub use lexer::Lexer;
pub use parser::{parse_expression, parse_module, Parser, Precedence};
pub use rule::{Rule, TokenType};
pub use scanner::Scanner;
pub use tokenizer::{Token, TokenStream, Tokenizer};

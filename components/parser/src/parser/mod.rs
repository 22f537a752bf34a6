//! Recursive descent parser for the component language.
//!
//! Every production lives in its own file as an `impl Parser` block. All
//! productions share one [`Lexer`] cursor, so a production observes exactly
//! what its siblings consumed before it.

mod declaration;
mod expression;
mod literal;
mod match_expression;
mod module;
mod tag;
mod type_reference;

pub use expression::Precedence;

use crate::ast::{ExpressionNode, ModuleNode};
use crate::error::ParseResult;
use crate::lexer::Lexer;
use core_types::Source;
use tracing::{debug, trace};

/// Parser over one source
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    source: &'a Source,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source
    pub fn new(source: &'a Source) -> Self {
        Self {
            lexer: Lexer::new(source),
            source,
        }
    }

    /// The underlying lexer
    pub fn lexer(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }

    /// Fail unless everything but trailing space and comments was consumed
    pub fn assert_is_end(&mut self) -> ParseResult<()> {
        self.lexer.skip_space_and_comments();
        self.lexer.assert_is_end()?;
        Ok(())
    }

    fn skip(&mut self) {
        self.lexer.skip_space_and_comments();
    }
}

/// Parse a whole module
pub fn parse_module(source: &Source) -> ParseResult<ModuleNode> {
    debug!(path = %source.path(), "parsing module");

    let mut parser = Parser::new(source);
    let module = parser.parse_module()?;
    parser.assert_is_end()?;

    trace!(
        path = %source.path(),
        imports = module.imports().len(),
        exports = module.exports().len(),
        declarations = module.declarations().len(),
        "parsed module"
    );
    Ok(module)
}

/// Parse a source consisting of exactly one expression
pub fn parse_expression(source: &Source) -> ParseResult<ExpressionNode> {
    trace!(path = %source.path(), "parsing expression");

    let mut parser = Parser::new(source);
    parser.skip();
    let expression = parser.parse_expression()?;
    parser.assert_is_end()?;
    Ok(expression)
}

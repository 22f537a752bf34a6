//! Type references

use super::Parser;
use crate::ast::{InvalidTypeNameNodes, TypeNameNode, TypeNameNodes, TypeReferenceNode};
use crate::error::{ParseResult, TypeReferenceCouldNotBeParsed};
use crate::rule::Rule;
use core_types::Range;

impl<'a> Parser<'a> {
    /// `?Name`, `Name[]`, `A | B`
    pub fn parse_type_reference(&mut self) -> ParseResult<TypeReferenceNode> {
        let start = self.lexer.position();
        let is_optional = self.lexer.probe(Rule::SymbolQuestionmark).is_some();

        let first = self.lexer.read(Rule::Word)?;
        let mut end = first.range.end;
        let mut names = vec![TypeNameNode {
            range: first.range,
            value: first.value,
        }];

        loop {
            self.lexer.skip_space();
            if self.lexer.probe(Rule::SymbolPipe).is_none() {
                break;
            }
            self.lexer.skip_space();
            let name = self.lexer.read(Rule::Word)?;
            end = name.range.end;
            names.push(TypeNameNode {
                range: name.range,
                value: name.value,
            });
        }

        let is_array = match self.lexer.probe(Rule::BracketSquareOpen) {
            Some(_) => {
                end = self.lexer.read(Rule::BracketSquareClose)?.range.end;
                true
            }
            None => false,
        };

        let range = Range::new(start, end);
        let names = TypeNameNodes::new(names).map_err(|cause| {
            let range = match &cause {
                InvalidTypeNameNodes::Duplicate {
                    duplicate_type_name_node,
                } => duplicate_type_name_node.range,
                InvalidTypeNameNodes::Empty => range,
            };
            TypeReferenceCouldNotBeParsed::InvalidTypeNameNodes { cause, range }
        })?;

        TypeReferenceNode::new(range, names, is_array, is_optional).map_err(|cause| {
            TypeReferenceCouldNotBeParsed::InvalidTypeReferenceNode { cause, range }.into()
        })
    }
}

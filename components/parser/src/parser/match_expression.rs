//! `match (subject) { a, b -> x  default -> y }`

use super::Parser;
use crate::ast::{InvalidMatchArmNodes, MatchArmNode, MatchArmNodes, MatchNode};
use crate::error::{MatchCouldNotBeParsed, ParseResult};
use crate::rule::Rule;
use core_types::Range;

impl<'a> Parser<'a> {
    /// Match expression
    pub fn parse_match(&mut self) -> ParseResult<MatchNode> {
        let keyword = self.lexer.read(Rule::KeywordMatch)?;
        self.skip();
        self.lexer.read(Rule::BracketRoundOpen)?;
        let subject = self.parse_expression()?;
        self.skip();
        self.lexer.read(Rule::BracketRoundClose)?;
        self.skip();
        self.lexer.read(Rule::BracketCurlyOpen)?;

        let mut arms = Vec::new();
        let close = loop {
            self.skip();
            if let Some(close) = self.lexer.probe(Rule::BracketCurlyClose) {
                break close;
            }
            arms.push(self.parse_match_arm()?);
        };

        let arms = MatchArmNodes::new(arms).map_err(|cause| {
            let InvalidMatchArmNodes::MoreThanOneDefaultMatchArmNode {
                second_default_match_arm_node,
            } = &cause;
            MatchCouldNotBeParsed::InvalidMatchArmNodes {
                range: second_default_match_arm_node.range,
                cause,
            }
        })?;

        Ok(MatchNode {
            range: keyword.range.to(&close.range),
            subject: Box::new(subject),
            arms,
        })
    }

    /// One arm: `default -> x` or `a, b -> x`
    pub fn parse_match_arm(&mut self) -> ParseResult<MatchArmNode> {
        self.skip();
        let start = self.lexer.position();

        let left = match self.lexer.probe(Rule::KeywordDefault) {
            Some(_) => None,
            None => {
                let mut patterns = vec![self.parse_expression()?];
                loop {
                    self.skip();
                    if self.lexer.probe(Rule::SymbolComma).is_none() {
                        break;
                    }
                    patterns.push(self.parse_expression()?);
                }
                Some(patterns)
            }
        };

        self.skip();
        self.lexer.read(Rule::SymbolArrowSingle)?;
        let right = self.parse_expression()?;

        Ok(MatchArmNode {
            range: Range::from_positions(start, right.range().end),
            left,
            right: Box::new(right),
        })
    }
}

//! Tags.
//!
//! `<` name attribute* then either `/>` or `>` child* `</` name `>`, where the
//! closing name must equal the opening one. Text inside a tag is significant,
//! so only whitespace-only text spanning a line break is dropped.

use super::Parser;
use crate::ast::{
    AttributeNode, AttributeNodes, AttributeValue, ChildNode, IdentifierNode,
    InvalidAttributeNodes, TagNode, TextNode,
};
use crate::error::{ParseResult, TagCouldNotBeParsed};
use crate::rule::Rule;
use crate::tokenizer::Token;
use core_types::Range;

const ATTRIBUTE_VALUES: &[Rule] = &[
    Rule::StringLiteralDelimiter,
    Rule::BracketCurlyOpen,
    Rule::BracketAngleOpen,
];

fn is_formatting(text: &str) -> bool {
    text.contains('\n') && text.chars().all(char::is_whitespace)
}

impl<'a> Parser<'a> {
    /// `<name ... />` or `<name ...>children</name>`
    pub fn parse_tag(&mut self) -> ParseResult<TagNode> {
        let open = self.lexer.read(Rule::BracketAngleOpen)?;
        self.parse_tag_after_opening_bracket(open)
    }

    fn parse_tag_after_opening_bracket(&mut self, open: Token) -> ParseResult<TagNode> {
        let name = self.lexer.read(Rule::Name)?;
        let name = IdentifierNode::new(name.range, name.value);
        let attributes = self.parse_attributes()?;

        self.lexer.skip_space();
        if self.lexer.probe(Rule::SymbolSlashForward).is_some() {
            let close = self.lexer.read(Rule::TagEnd)?;
            return self.build_tag(open.range.to(&close.range), name, attributes, vec![], true);
        }

        self.lexer.read(Rule::TagEnd)?;
        let mut children = Vec::new();

        loop {
            if let Some(text) = self.lexer.probe(Rule::Text) {
                if !is_formatting(&text.value) {
                    children.push(ChildNode::Text(TextNode {
                        range: text.range,
                        value: text.value,
                    }));
                }
                continue;
            }

            if self.lexer.probe(Rule::BracketCurlyOpen).is_some() {
                let expression = self.parse_expression()?;
                self.skip();
                self.lexer.read(Rule::BracketCurlyClose)?;
                children.push(ChildNode::Expression(expression));
                continue;
            }

            let child_open = self.lexer.read(Rule::BracketAngleOpen)?;
            if self.lexer.probe(Rule::SymbolSlashForward).is_none() {
                let child = self.parse_tag_after_opening_bracket(child_open)?;
                children.push(ChildNode::Tag(child));
                continue;
            }

            let closing_name = self.lexer.read(Rule::Name)?;
            if closing_name.value != name.value {
                return Err(TagCouldNotBeParsed::ClosingTagNameMismatch {
                    expected: name.value,
                    actual: closing_name.value,
                    range: closing_name.range,
                }
                .into());
            }
            self.lexer.skip_space();
            let close = self.lexer.read(Rule::TagEnd)?;

            return self.build_tag(open.range.to(&close.range), name, attributes, children, false);
        }
    }

    fn parse_attributes(&mut self) -> ParseResult<AttributeNodes> {
        let mut attributes = Vec::new();

        loop {
            self.lexer.skip_space();
            if self.lexer.peek(Rule::Name) {
                attributes.push(self.parse_attribute()?);
            } else {
                break;
            }
        }

        AttributeNodes::new(attributes).map_err(|cause| {
            let InvalidAttributeNodes::Duplicate {
                duplicate_attribute_node,
            } = &cause;
            TagCouldNotBeParsed::InvalidAttributeNodes {
                range: duplicate_attribute_node.range,
                cause,
            }
            .into()
        })
    }

    /// `name`, `name="text"`, `name={expression}` or `name=<tag />`
    pub fn parse_attribute(&mut self) -> ParseResult<AttributeNode> {
        let name = self.lexer.read(Rule::Name)?;
        let name = IdentifierNode::new(name.range, name.value);

        if self.lexer.probe(Rule::SymbolEquals).is_none() {
            return Ok(AttributeNode {
                range: name.range,
                name,
                value: None,
            });
        }

        let (value, end) = match self.lexer.expect_one_of(ATTRIBUTE_VALUES)? {
            Rule::StringLiteralDelimiter => {
                let string = self.parse_string_literal()?;
                let end = string.range;
                (AttributeValue::String(string), end)
            }
            Rule::BracketCurlyOpen => {
                self.lexer.read(Rule::BracketCurlyOpen)?;
                let expression = self.parse_expression()?;
                self.skip();
                let close = self.lexer.read(Rule::BracketCurlyClose)?;
                (AttributeValue::Expression(expression), close.range)
            }
            _ => {
                let tag = self.parse_tag()?;
                let end = tag.range();
                (AttributeValue::Tag(tag), end)
            }
        };

        Ok(AttributeNode {
            range: name.range.to(&end),
            name,
            value: Some(value),
        })
    }

    fn build_tag(
        &self,
        range: Range,
        name: IdentifierNode,
        attributes: AttributeNodes,
        children: Vec<ChildNode>,
        is_self_closing: bool,
    ) -> ParseResult<TagNode> {
        TagNode::new(range, name, attributes, children, is_self_closing).map_err(|cause| {
            TagCouldNotBeParsed::InvalidTagNode { cause, range }.into()
        })
    }
}

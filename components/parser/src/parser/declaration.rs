//! Enum, struct and component declarations and their properties

use super::Parser;
use crate::ast::{
    ComponentDeclarationNode, DeclarationNode, EnumDeclarationNode, EnumMemberDeclarationNode,
    EnumMemberDeclarationNodes, EnumMemberValue, IdentifierNode,
    InvalidEnumMemberDeclarationNodes, InvalidPropertyDeclarationNodes, PropertyDeclarationNode,
    PropertyDeclarationNodes, StructDeclarationNode,
};
use crate::error::{
    ComponentCouldNotBeParsed, EnumCouldNotBeParsed, ParseResult, StructCouldNotBeParsed,
};
use crate::rule::Rule;
use core_types::Range;

/// Rules that start a declaration
pub(super) const DECLARATIONS: &[Rule] = &[
    Rule::KeywordComponent,
    Rule::KeywordStruct,
    Rule::KeywordEnum,
];

fn duplicate_property_range(cause: &InvalidPropertyDeclarationNodes) -> Range {
    match cause {
        InvalidPropertyDeclarationNodes::Duplicate {
            duplicate_property_declaration_node,
        } => duplicate_property_declaration_node.range,
    }
}

impl<'a> Parser<'a> {
    /// `component`, `struct` or `enum` declaration
    pub fn parse_declaration(&mut self) -> ParseResult<DeclarationNode> {
        match self.lexer.expect_one_of(DECLARATIONS)? {
            Rule::KeywordComponent => Ok(DeclarationNode::Component(
                self.parse_component_declaration()?,
            )),
            Rule::KeywordStruct => Ok(DeclarationNode::Struct(self.parse_struct_declaration()?)),
            _ => Ok(DeclarationNode::Enum(self.parse_enum_declaration()?)),
        }
    }

    /// `name: TypeReference`
    pub fn parse_property_declaration(&mut self) -> ParseResult<PropertyDeclarationNode> {
        let name = self.lexer.read(Rule::Word)?;
        self.skip();
        self.lexer.read(Rule::SymbolColon)?;
        self.skip();
        let type_reference = self.parse_type_reference()?;

        Ok(PropertyDeclarationNode {
            range: name.range.to(&type_reference.range()),
            name: IdentifierNode::new(name.range, name.value),
            type_reference,
        })
    }

    /// `enum Name { MEMBER MEMBER("value") MEMBER(42) }`
    pub fn parse_enum_declaration(&mut self) -> ParseResult<EnumDeclarationNode> {
        let keyword = self.lexer.read(Rule::KeywordEnum)?;
        self.skip();
        let name = self.lexer.read(Rule::Word)?;
        self.skip();
        self.lexer.read(Rule::BracketCurlyOpen)?;

        let mut members = Vec::new();
        let close = loop {
            self.skip();
            if let Some(close) = self.lexer.probe(Rule::BracketCurlyClose) {
                break close;
            }
            members.push(self.parse_enum_member_declaration()?);
        };

        let members = EnumMemberDeclarationNodes::new(members).map_err(|cause| {
            let InvalidEnumMemberDeclarationNodes::Duplicate {
                duplicate_enum_member_declaration_node,
            } = &cause;
            EnumCouldNotBeParsed::InvalidEnumMemberDeclarationNodes {
                range: duplicate_enum_member_declaration_node.range,
                cause,
            }
        })?;

        Ok(EnumDeclarationNode {
            range: keyword.range.to(&close.range),
            name: IdentifierNode::new(name.range, name.value),
            members,
        })
    }

    /// `NAME`, `NAME("value")` or `NAME(42)`
    pub fn parse_enum_member_declaration(&mut self) -> ParseResult<EnumMemberDeclarationNode> {
        let name = self.lexer.read(Rule::Word)?;
        let name = IdentifierNode::new(name.range, name.value);

        if self.lexer.probe(Rule::BracketRoundOpen).is_none() {
            return Ok(EnumMemberDeclarationNode {
                range: name.range,
                name,
                value: None,
            });
        }

        self.skip();
        let value = match self.lexer.peek(Rule::StringLiteralDelimiter) {
            true => EnumMemberValue::String(self.parse_string_literal()?),
            false => EnumMemberValue::Integer(self.parse_integer_literal()?),
        };
        self.skip();
        let close = self.lexer.read(Rule::BracketRoundClose)?;

        Ok(EnumMemberDeclarationNode {
            range: name.range.to(&close.range),
            name,
            value: Some(value),
        })
    }

    /// `struct Name { property: Type ... }`
    pub fn parse_struct_declaration(&mut self) -> ParseResult<StructDeclarationNode> {
        let keyword = self.lexer.read(Rule::KeywordStruct)?;
        self.skip();
        let name = self.lexer.read(Rule::Word)?;
        self.skip();
        self.lexer.read(Rule::BracketCurlyOpen)?;

        let mut properties = Vec::new();
        let close = loop {
            self.skip();
            if let Some(close) = self.lexer.probe(Rule::BracketCurlyClose) {
                break close;
            }
            properties.push(self.parse_property_declaration()?);
        };

        let properties = PropertyDeclarationNodes::new(properties).map_err(|cause| {
            StructCouldNotBeParsed::InvalidPropertyDeclarationNodes {
                range: duplicate_property_range(&cause),
                cause,
            }
        })?;

        Ok(StructDeclarationNode {
            range: keyword.range.to(&close.range),
            name: IdentifierNode::new(name.range, name.value),
            properties,
        })
    }

    /// `component Name { prop: Type ... return expression }`
    pub fn parse_component_declaration(&mut self) -> ParseResult<ComponentDeclarationNode> {
        let keyword = self.lexer.read(Rule::KeywordComponent)?;
        self.skip();
        let name = self.lexer.read(Rule::Word)?;
        self.skip();
        self.lexer.read(Rule::BracketCurlyOpen)?;

        let mut props = Vec::new();
        loop {
            self.skip();
            if self.lexer.peek(Rule::KeywordReturn) {
                break;
            }
            props.push(self.parse_property_declaration()?);
        }

        let props = PropertyDeclarationNodes::new(props).map_err(|cause| {
            ComponentCouldNotBeParsed::InvalidPropertyDeclarationNodes {
                range: duplicate_property_range(&cause),
                cause,
            }
        })?;

        self.lexer.read(Rule::KeywordReturn)?;
        let return_expression = self.parse_expression()?;
        self.skip();
        let close = self.lexer.read(Rule::BracketCurlyClose)?;

        Ok(ComponentDeclarationNode {
            range: keyword.range.to(&close.range),
            name: IdentifierNode::new(name.range, name.value),
            props,
            return_expression,
        })
    }
}

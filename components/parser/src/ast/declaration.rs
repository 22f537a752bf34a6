//! Component, struct and enum declarations

use super::{ExpressionNode, IdentifierNode, IntegerLiteralNode, StringLiteralNode, TypeReferenceNode};
use core_types::Range;
use thiserror::Error;

/// `name: TypeReference`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclarationNode {
    /// Source location
    pub range: Range,
    /// Property name
    pub name: IdentifierNode,
    /// Declared type
    pub type_reference: TypeReferenceNode,
}

/// Properties of a struct or props of a component, with unique names
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyDeclarationNodes {
    items: Vec<PropertyDeclarationNode>,
}

/// Construction failure of [`PropertyDeclarationNodes`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPropertyDeclarationNodes {
    /// The same property name appears twice
    #[error("Duplicate property \"{}\"", .duplicate_property_declaration_node.name.value)]
    Duplicate {
        /// The second occurrence
        duplicate_property_declaration_node: PropertyDeclarationNode,
    },
}

impl PropertyDeclarationNodes {
    /// Validate and wrap `items`
    pub fn new(
        items: Vec<PropertyDeclarationNode>,
    ) -> Result<Self, InvalidPropertyDeclarationNodes> {
        for (index, item) in items.iter().enumerate() {
            if items[..index]
                .iter()
                .any(|seen| seen.name.value == item.name.value)
            {
                return Err(InvalidPropertyDeclarationNodes::Duplicate {
                    duplicate_property_declaration_node: item.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Properties in source order
    pub fn items(&self) -> &[PropertyDeclarationNode] {
        &self.items
    }

    /// Property by name
    pub fn get(&self, name: &str) -> Option<&PropertyDeclarationNode> {
        self.items.iter().find(|property| property.name.value == name)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no properties
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Explicit value of an enum member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumMemberValue {
    /// `MEMBER("text")`
    String(StringLiteralNode),
    /// `MEMBER(42)`
    Integer(IntegerLiteralNode),
}

/// `NAME` or `NAME(value)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMemberDeclarationNode {
    /// Source location
    pub range: Range,
    /// Member name
    pub name: IdentifierNode,
    /// Explicit value
    pub value: Option<EnumMemberValue>,
}

/// Members of an enum, with unique names
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumMemberDeclarationNodes {
    items: Vec<EnumMemberDeclarationNode>,
}

/// Construction failure of [`EnumMemberDeclarationNodes`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEnumMemberDeclarationNodes {
    /// The same member name appears twice
    #[error("Duplicate enum member \"{}\"", .duplicate_enum_member_declaration_node.name.value)]
    Duplicate {
        /// The second occurrence
        duplicate_enum_member_declaration_node: EnumMemberDeclarationNode,
    },
}

impl EnumMemberDeclarationNodes {
    /// Validate and wrap `items`
    pub fn new(
        items: Vec<EnumMemberDeclarationNode>,
    ) -> Result<Self, InvalidEnumMemberDeclarationNodes> {
        for (index, item) in items.iter().enumerate() {
            if items[..index]
                .iter()
                .any(|seen| seen.name.value == item.name.value)
            {
                return Err(InvalidEnumMemberDeclarationNodes::Duplicate {
                    duplicate_enum_member_declaration_node: item.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Members in source order
    pub fn items(&self) -> &[EnumMemberDeclarationNode] {
        &self.items
    }

    /// Member by name
    pub fn get(&self, name: &str) -> Option<&EnumMemberDeclarationNode> {
        self.items.iter().find(|member| member.name.value == name)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the enum has no members
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `enum Name { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclarationNode {
    /// Source location
    pub range: Range,
    /// Enum name
    pub name: IdentifierNode,
    /// Members
    pub members: EnumMemberDeclarationNodes,
}

/// `struct Name { properties }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDeclarationNode {
    /// Source location
    pub range: Range,
    /// Struct name
    pub name: IdentifierNode,
    /// Properties
    pub properties: PropertyDeclarationNodes,
}

/// `component Name { props return expression }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDeclarationNode {
    /// Source location
    pub range: Range,
    /// Component name
    pub name: IdentifierNode,
    /// Declared props
    pub props: PropertyDeclarationNodes,
    /// Rendered expression
    pub return_expression: ExpressionNode,
}

/// Any top-level declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationNode {
    /// `component`
    Component(ComponentDeclarationNode),
    /// `enum`
    Enum(EnumDeclarationNode),
    /// `struct`
    Struct(StructDeclarationNode),
}

impl DeclarationNode {
    /// Declared name
    pub fn name(&self) -> &IdentifierNode {
        match self {
            DeclarationNode::Component(node) => &node.name,
            DeclarationNode::Enum(node) => &node.name,
            DeclarationNode::Struct(node) => &node.name,
        }
    }

    /// Source location
    pub fn range(&self) -> Range {
        match self {
            DeclarationNode::Component(node) => node.range,
            DeclarationNode::Enum(node) => node.range,
            DeclarationNode::Struct(node) => node.range,
        }
    }
}

//! Abstract Syntax Tree node definitions.
//!
//! Nodes are immutable once built. Collections that carry invariants keep
//! their items private and are only constructible through a validating
//! `new`, which returns the matching `Invalid*` error. Construction errors
//! have no position; the parser attaches one when it reports them.

mod declaration;
mod expression;
mod literal;
mod match_node;
mod module;
mod tag;
mod type_reference;

pub use declaration::{
    ComponentDeclarationNode, DeclarationNode, EnumDeclarationNode, EnumMemberDeclarationNode,
    EnumMemberDeclarationNodes, EnumMemberValue, InvalidEnumMemberDeclarationNodes,
    InvalidPropertyDeclarationNodes, PropertyDeclarationNode, PropertyDeclarationNodes,
    StructDeclarationNode,
};
pub use expression::{
    AccessNode, AccessType, BinaryOperationNode, BinaryOperator, CallNode, ExpressionNode,
    IndexNode, TernaryOperationNode, UnaryOperationNode, UnaryOperator, ValueReferenceNode,
};
pub use literal::{
    BooleanLiteralNode, FloatLiteralNode, IntegerFormat, IntegerLiteralNode, NullLiteralNode,
    StringLiteralNode, TemplateLiteralNode, TemplateLiteralSegment,
};
pub use match_node::{InvalidMatchArmNodes, MatchArmNode, MatchArmNodes, MatchNode};
pub use module::{
    ExportNode, ImportNode, ImportedNameNode, ImportedNameNodes, InvalidImportedNameNodes,
    InvalidModuleNode, ModuleNode,
};
pub use tag::{
    AttributeNode, AttributeNodes, AttributeValue, ChildNode, InvalidAttributeNodes,
    InvalidTagNode, TagNode, TextNode,
};
pub use type_reference::{
    InvalidTypeNameNodes, InvalidTypeReferenceNode, TypeNameNode, TypeNameNodes,
    TypeReferenceNode,
};

use core_types::Range;

/// A name together with its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierNode {
    /// Source location
    pub range: Range,
    /// Name as written
    pub value: String,
}

impl IdentifierNode {
    /// Create an identifier
    pub fn new(range: Range, value: impl Into<String>) -> Self {
        Self {
            range,
            value: value.into(),
        }
    }
}

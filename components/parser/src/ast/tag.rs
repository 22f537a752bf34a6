//! Tags, attributes and children

use super::{ExpressionNode, IdentifierNode, StringLiteralNode};
use core_types::Range;
use thiserror::Error;

/// Value of an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `name="text"`
    String(StringLiteralNode),
    /// `name={expression}`
    Expression(ExpressionNode),
    /// `name=<tag />`
    Tag(TagNode),
}

/// `name`, `name="text"`, `name={expression}` or `name=<tag />`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNode {
    /// Source location
    pub range: Range,
    /// Attribute name
    pub name: IdentifierNode,
    /// `None` for boolean attributes
    pub value: Option<AttributeValue>,
}

/// Attributes of one tag, with unique names
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeNodes {
    items: Vec<AttributeNode>,
}

/// Construction failure of [`AttributeNodes`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAttributeNodes {
    /// The same attribute name appears twice
    #[error("Duplicate attribute \"{}\"", .duplicate_attribute_node.name.value)]
    Duplicate {
        /// The second occurrence
        duplicate_attribute_node: AttributeNode,
    },
}

impl AttributeNodes {
    /// Validate and wrap `items`
    pub fn new(items: Vec<AttributeNode>) -> Result<Self, InvalidAttributeNodes> {
        for (index, item) in items.iter().enumerate() {
            if items[..index]
                .iter()
                .any(|seen| seen.name.value == item.name.value)
            {
                return Err(InvalidAttributeNodes::Duplicate {
                    duplicate_attribute_node: item.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Attributes in source order
    pub fn items(&self) -> &[AttributeNode] {
        &self.items
    }

    /// Attribute by name
    pub fn get(&self, name: &str) -> Option<&AttributeNode> {
        self.items.iter().find(|attribute| attribute.name.value == name)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tag has no attributes
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Literal text between tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// Source location
    pub range: Range,
    /// Text as written
    pub value: String,
}

/// Content of a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildNode {
    /// Text
    Text(TextNode),
    /// `{expression}`
    Expression(ExpressionNode),
    /// Nested tag
    Tag(TagNode),
}

impl ChildNode {
    /// Source location
    pub fn range(&self) -> Range {
        match self {
            ChildNode::Text(node) => node.range,
            ChildNode::Expression(node) => node.range(),
            ChildNode::Tag(node) => node.range(),
        }
    }
}

/// `<name attributes />` or `<name attributes>children</name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    pub(super) range: Range,
    name: IdentifierNode,
    attributes: AttributeNodes,
    children: Vec<ChildNode>,
    is_self_closing: bool,
}

/// Construction failure of [`TagNode`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTagNode {
    /// `<a />` cannot have content
    #[error("Self-closing tag \"{tag_name}\" cannot have children")]
    SelfClosingTagWithChildren {
        /// Name of the offending tag
        tag_name: String,
    },
}

impl TagNode {
    /// Validate and build a tag
    pub fn new(
        range: Range,
        name: IdentifierNode,
        attributes: AttributeNodes,
        children: Vec<ChildNode>,
        is_self_closing: bool,
    ) -> Result<Self, InvalidTagNode> {
        if is_self_closing && !children.is_empty() {
            return Err(InvalidTagNode::SelfClosingTagWithChildren {
                tag_name: name.value,
            });
        }

        Ok(Self {
            range,
            name,
            attributes,
            children,
            is_self_closing,
        })
    }

    /// Source location, from `<` to the final `>`
    pub fn range(&self) -> Range {
        self.range
    }

    /// Tag name
    pub fn name(&self) -> &IdentifierNode {
        &self.name
    }

    /// Attributes
    pub fn attributes(&self) -> &AttributeNodes {
        &self.attributes
    }

    /// Children in source order
    pub fn children(&self) -> &[ChildNode] {
        &self.children
    }

    /// `<name />`
    pub fn is_self_closing(&self) -> bool {
        self.is_self_closing
    }
}

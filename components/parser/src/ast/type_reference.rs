//! Type references: `string`, `?Foo`, `Bar[]`, `A | B`

use core_types::Range;
use thiserror::Error;

/// A single type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNameNode {
    /// Source location
    pub range: Range,
    /// Name as written
    pub value: String,
}

/// Non-empty list of distinct type names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNameNodes {
    items: Vec<TypeNameNode>,
}

/// Construction failure of [`TypeNameNodes`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTypeNameNodes {
    /// No names at all
    #[error("Type reference must name at least one type")]
    Empty,
    /// The same name appears twice
    #[error("Duplicate type name \"{}\"", .duplicate_type_name_node.value)]
    Duplicate {
        /// The second occurrence
        duplicate_type_name_node: TypeNameNode,
    },
}

impl TypeNameNodes {
    /// Validate and wrap `items`
    pub fn new(items: Vec<TypeNameNode>) -> Result<Self, InvalidTypeNameNodes> {
        if items.is_empty() {
            return Err(InvalidTypeNameNodes::Empty);
        }

        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|seen| seen.value == item.value) {
                return Err(InvalidTypeNameNodes::Duplicate {
                    duplicate_type_name_node: item.clone(),
                });
            }
        }

        Ok(Self { items })
    }

    /// The names in source order
    pub fn items(&self) -> &[TypeNameNode] {
        &self.items
    }

    /// Number of names, at least one
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether more than one name is listed
    pub fn is_union(&self) -> bool {
        self.items.len() > 1
    }

    /// Bounding range of all names
    pub fn range(&self) -> Range {
        match (self.items.first(), self.items.last()) {
            (Some(first), Some(last)) => first.range.to(&last.range),
            _ => Range::default(),
        }
    }
}

/// `?Name`, `Name[]` or `A | B | C`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReferenceNode {
    range: Range,
    names: TypeNameNodes,
    is_array: bool,
    is_optional: bool,
}

/// Construction failure of [`TypeReferenceNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTypeReferenceNode {
    /// `?Foo[]`
    #[error("Type reference cannot be optional and an array at the same time")]
    OptionalAndArrayAtTheSameTime,
    /// `A | B[]`
    #[error("Union type cannot be an array at the same time")]
    UnionTypeAndArrayAtTheSameTime,
    /// `?A | B`
    #[error("Union type cannot be optional at the same time")]
    UnionTypeAndOptionalAtTheSameTime,
}

impl TypeReferenceNode {
    /// Validate and build a type reference.
    ///
    /// Exactly one failure is reported per invalid combination, checked in
    /// declaration order of [`InvalidTypeReferenceNode`].
    pub fn new(
        range: Range,
        names: TypeNameNodes,
        is_array: bool,
        is_optional: bool,
    ) -> Result<Self, InvalidTypeReferenceNode> {
        if is_array && is_optional {
            return Err(InvalidTypeReferenceNode::OptionalAndArrayAtTheSameTime);
        }
        if names.is_union() && is_array {
            return Err(InvalidTypeReferenceNode::UnionTypeAndArrayAtTheSameTime);
        }
        if names.is_union() && is_optional {
            return Err(InvalidTypeReferenceNode::UnionTypeAndOptionalAtTheSameTime);
        }

        Ok(Self {
            range,
            names,
            is_array,
            is_optional,
        })
    }

    /// Source location
    pub fn range(&self) -> Range {
        self.range
    }

    /// Referenced names
    pub fn names(&self) -> &TypeNameNodes {
        &self.names
    }

    /// `Name[]`
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// `?Name`
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }
}

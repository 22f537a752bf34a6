//! Named and structured type definitions shared through `Rc`

use super::Type;
use std::fmt;
use std::rc::Rc;

/// A literal value that is also a type, as carried by enum members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralType {
    /// `"active"`
    String(String),
    /// `2`
    Integer(u64),
    /// `true` or `false`
    Boolean(bool),
}

impl LiteralType {
    /// The primitive type the literal belongs to
    pub fn primitive(&self) -> Type {
        match self {
            LiteralType::String(_) => Type::String,
            LiteralType::Integer(_) => Type::Integer,
            LiteralType::Boolean(_) => Type::Boolean,
        }
    }

    /// Whether the value is `""`, `0` or `false`
    pub fn is_falsy(&self) -> bool {
        match self {
            LiteralType::String(value) => value.is_empty(),
            LiteralType::Integer(value) => *value == 0,
            LiteralType::Boolean(value) => !value,
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralType::String(value) => write!(f, "{value:?}"),
            LiteralType::Integer(value) => write!(f, "{value}"),
            LiteralType::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// `struct Name { property: Type ... }`
#[derive(Debug, PartialEq, Eq)]
pub struct StructType {
    /// Declared name
    pub name: String,
    /// Properties in declaration order
    pub properties: Vec<(String, Type)>,
}

impl StructType {
    /// Type of the named property
    pub fn property(&self, name: &str) -> Option<&Type> {
        find(&self.properties, name)
    }
}

/// One member of an enum together with the literal type of its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Member name
    pub name: String,
    /// Type of `Enum.MEMBER.value`
    pub value: Type,
}

/// The enum itself, as referenced by `Status` in `Status.ACTIVE`
#[derive(Debug, PartialEq, Eq)]
pub struct EnumStaticType {
    /// Declared name
    pub name: String,
    /// Members in declaration order
    pub members: Vec<EnumMember>,
}

impl EnumStaticType {
    /// The named member
    pub fn member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|member| member.name == name)
    }
}

/// A value of an enum, optionally known to be one specific member
#[derive(Debug, Clone)]
pub struct EnumInstanceType {
    /// The enum the value belongs to
    pub enum_type: Rc<EnumStaticType>,
    /// The member, when statically known
    pub member: Option<String>,
}

impl EnumInstanceType {
    /// Type of `.value` on this instance
    pub fn value_type(&self) -> Type {
        match self.member.as_deref().and_then(|name| self.enum_type.member(name)) {
            Some(member) => member.value.clone(),
            None => Type::union(self.enum_type.members.iter().map(|member| member.value.clone())),
        }
    }
}

/// `component Name { props ... return ... }`
#[derive(Debug, PartialEq, Eq)]
pub struct ComponentType {
    /// Declared name
    pub name: String,
    /// Props in declaration order
    pub props: Vec<(String, Type)>,
}

impl ComponentType {
    /// Type of the named prop
    pub fn prop(&self, name: &str) -> Option<&Type> {
        find(&self.props, name)
    }
}

/// Function signature, possibly generic over [`GenericType`] placeholders
#[derive(Debug, PartialEq, Eq)]
pub struct FunctionType {
    /// Parameter types in order
    pub parameters: Vec<Type>,
    /// Result type
    pub return_type: Type,
}

/// Placeholder in a generic signature.
///
/// Placeholders are compared by identity, never by name: two placeholders
/// called `T` in different signatures are unrelated.
#[derive(Debug, PartialEq, Eq)]
pub struct GenericType {
    /// Name used for display only
    pub name: String,
}

impl GenericType {
    /// Create a fresh placeholder
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { name: name.into() })
    }
}

fn find<'a>(entries: &'a [(String, Type)], name: &str) -> Option<&'a Type> {
    entries
        .iter()
        .find(|(entry, _)| entry == name)
        .map(|(_, ty)| ty)
}

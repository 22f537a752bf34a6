//! The static type model
//!
//! [`Type`] is a cheap-to-clone value: named definitions live behind `Rc`
//! so that every reference to a struct, enum or component shares one
//! definition. Unions are normalized on construction: nested unions are
//! flattened, duplicates are dropped and a single remaining member stands
//! for itself.

mod definition;

pub use definition::{
    ComponentType, EnumInstanceType, EnumMember, EnumStaticType, FunctionType, GenericType,
    LiteralType, StructType,
};

use std::fmt;
use std::rc::Rc;

/// A static type
#[derive(Debug, Clone)]
pub enum Type {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// Renderable markup, the type of every tag
    Slot,
    /// `T[]`
    Array(Box<Type>),
    /// `A|B`, always normalized
    Union(UnionType),
    /// Host-provided function
    Function(Rc<FunctionType>),
    /// A struct value
    Struct(Rc<StructType>),
    /// The enum itself
    EnumStatic(Rc<EnumStaticType>),
    /// A value of an enum
    EnumInstance(EnumInstanceType),
    /// A component, usable as a tag
    Component(Rc<ComponentType>),
    /// Placeholder inside a generic signature
    Generic(Rc<GenericType>),
    /// A single literal value
    Literal(LiteralType),
}

/// Members of a normalized union
#[derive(Debug, Clone)]
pub struct UnionType {
    members: Vec<Type>,
}

impl UnionType {
    /// Members in first-seen order; never a union themselves
    pub fn members(&self) -> &[Type] {
        &self.members
    }
}

impl Type {
    /// Normalized union of `members`.
    ///
    /// Returns the single member when only one remains, and [`Type::Null`]
    /// when there are none.
    pub fn union(members: impl IntoIterator<Item = Type>) -> Type {
        let mut flat: Vec<Type> = Vec::new();
        for member in members {
            match member {
                Type::Union(union) => {
                    for inner in union.members {
                        push_unique(&mut flat, inner);
                    }
                }
                other => push_unique(&mut flat, other),
            }
        }

        match flat.len() {
            0 => Type::Null,
            1 => flat.remove(0),
            _ => Type::Union(UnionType { members: flat }),
        }
    }

    /// `T|null`
    pub fn nullable(self) -> Type {
        Type::union([self, Type::Null])
    }

    /// `T[]`
    pub fn array(item: Type) -> Type {
        Type::Array(Box::new(item))
    }

    /// Function type from parameters and result
    pub fn function(parameters: Vec<Type>, return_type: Type) -> Type {
        Type::Function(Rc::new(FunctionType {
            parameters,
            return_type,
        }))
    }

    /// Reference to a generic placeholder
    pub fn generic(placeholder: &Rc<GenericType>) -> Type {
        Type::Generic(Rc::clone(placeholder))
    }

    /// Union members, or the type itself when it is not a union
    pub fn members(&self) -> &[Type] {
        match self {
            Type::Union(union) => union.members(),
            other => std::slice::from_ref(other),
        }
    }

    /// Whether `null` is among the possible values
    pub fn is_nullable(&self) -> bool {
        self.members().iter().any(|member| matches!(member, Type::Null))
    }

    /// The type with `null` removed
    pub fn without_null(&self) -> Type {
        Type::union(
            self.members()
                .iter()
                .filter(|member| !matches!(member, Type::Null))
                .cloned(),
        )
    }

    /// The part of the type whose values may be falsy
    pub fn falsy_part(&self) -> Vec<Type> {
        self.members()
            .iter()
            .filter(|member| member.can_be_falsy())
            .cloned()
            .collect()
    }

    /// The part of the type left once `null` is ruled out
    pub fn truthy_part(&self) -> Vec<Type> {
        self.members()
            .iter()
            .filter(|member| !matches!(member, Type::Null))
            .cloned()
            .collect()
    }

    fn can_be_falsy(&self) -> bool {
        match self {
            Type::String | Type::Number | Type::Integer | Type::Boolean | Type::Null => true,
            Type::Literal(literal) => literal.is_falsy(),
            Type::Union(union) => union.members.iter().any(Type::can_be_falsy),
            Type::Generic(_) => true,
            _ => false,
        }
    }

    /// Whether the type is `integer`, `number` or an integer literal
    pub fn is_numeric(&self) -> bool {
        match self {
            Type::Number | Type::Integer => true,
            Type::Literal(literal) => matches!(literal.primitive(), Type::Integer),
            _ => false,
        }
    }

    /// Whether the type is `integer` or an integer literal
    pub fn is_integer(&self) -> bool {
        match self {
            Type::Integer => true,
            Type::Literal(literal) => matches!(literal.primitive(), Type::Integer),
            _ => false,
        }
    }

    /// Whether the type is `string` or a string literal
    pub fn is_string(&self) -> bool {
        match self {
            Type::String => true,
            Type::Literal(literal) => matches!(literal.primitive(), Type::String),
            _ => false,
        }
    }

    /// Whether a generic placeholder occurs anywhere in the type
    pub fn contains_generic(&self) -> bool {
        match self {
            Type::Generic(_) => true,
            Type::Array(item) => item.contains_generic(),
            Type::Union(union) => union.members.iter().any(Type::contains_generic),
            Type::Function(function) => {
                function.parameters.iter().any(Type::contains_generic)
                    || function.return_type.contains_generic()
            }
            _ => false,
        }
    }

    /// Structural type identity.
    ///
    /// Unions compare as sets. Named definitions compare by identity first
    /// and fall back to their structure; generic placeholders compare by
    /// identity only.
    pub fn is(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::String, Type::String)
            | (Type::Number, Type::Number)
            | (Type::Integer, Type::Integer)
            | (Type::Boolean, Type::Boolean)
            | (Type::Null, Type::Null)
            | (Type::Slot, Type::Slot) => true,
            (Type::Array(a), Type::Array(b)) => a.is(b),
            (Type::Union(a), Type::Union(b)) => {
                a.members.len() == b.members.len()
                    && a.members
                        .iter()
                        .all(|member| b.members.iter().any(|other| member.is(other)))
            }
            (Type::Function(a), Type::Function(b)) => Rc::ptr_eq(a, b) || **a == **b,
            (Type::Struct(a), Type::Struct(b)) => Rc::ptr_eq(a, b) || **a == **b,
            (Type::EnumStatic(a), Type::EnumStatic(b)) => Rc::ptr_eq(a, b) || **a == **b,
            (Type::EnumInstance(a), Type::EnumInstance(b)) => {
                (Rc::ptr_eq(&a.enum_type, &b.enum_type) || a.enum_type == b.enum_type)
                    && a.member == b.member
            }
            (Type::Component(a), Type::Component(b)) => Rc::ptr_eq(a, b) || **a == **b,
            (Type::Generic(a), Type::Generic(b)) => Rc::ptr_eq(a, b),
            (Type::Literal(a), Type::Literal(b)) => a == b,
            _ => false,
        }
    }

    /// Whether every value of `self` is a valid value of `target`
    pub fn is_assignable_to(&self, target: &Type) -> bool {
        if self.is(target) {
            return true;
        }

        match (self, target) {
            (Type::Union(union), _) => union
                .members
                .iter()
                .all(|member| member.is_assignable_to(target)),
            (_, Type::Union(union)) => union
                .members
                .iter()
                .any(|member| self.is_assignable_to(member)),
            (Type::Literal(literal), _) => literal.primitive().is_assignable_to(target),
            (Type::Integer, Type::Number) => true,
            (Type::String | Type::Number | Type::Integer, Type::Slot) => true,
            (Type::Array(item), Type::Array(target_item)) => item.is_assignable_to(target_item),
            (Type::EnumInstance(instance), Type::EnumInstance(target_instance)) => {
                target_instance.member.is_none()
                    && (Rc::ptr_eq(&instance.enum_type, &target_instance.enum_type)
                        || instance.enum_type == target_instance.enum_type)
            }
            _ => false,
        }
    }
}

fn push_unique(members: &mut Vec<Type>, candidate: Type) {
    if !members.iter().any(|member| member.is(&candidate)) {
        members.push(candidate);
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::String => write!(f, "string"),
            Type::Number => write!(f, "number"),
            Type::Integer => write!(f, "integer"),
            Type::Boolean => write!(f, "boolean"),
            Type::Null => write!(f, "null"),
            Type::Slot => write!(f, "slot"),
            Type::Array(item) if matches!(**item, Type::Union(_) | Type::Function(_)) => {
                write!(f, "({item})[]")
            }
            Type::Array(item) => write!(f, "{item}[]"),
            Type::Union(union) => {
                for (index, member) in union.members.iter().enumerate() {
                    if index > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Type::Function(function) => {
                write!(f, "(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") => {}", function.return_type)
            }
            Type::Struct(definition) => write!(f, "{}", definition.name),
            Type::EnumStatic(definition) => write!(f, "enum {}", definition.name),
            Type::EnumInstance(instance) => match &instance.member {
                Some(member) => write!(f, "{}.{}", instance.enum_type.name, member),
                None => write!(f, "{}", instance.enum_type.name),
            },
            Type::Component(definition) => write!(f, "component {}", definition.name),
            Type::Generic(placeholder) => write!(f, "{}", placeholder.name),
            Type::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

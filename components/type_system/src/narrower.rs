//! Flow-sensitive narrowing of value types under a condition

use crate::scope::Scope;
use crate::types::Type;
use parser::ast::{BinaryOperator, ExpressionNode, UnaryOperator};
use rustc_hash::FxHashMap;

/// Whether the condition is known to have held or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrowingContext {
    /// The condition evaluated to a truthy value
    Truthy,
    /// The condition evaluated to a falsy value
    Falsy,
}

impl NarrowingContext {
    /// The opposite context
    pub fn flip(self) -> Self {
        match self {
            NarrowingContext::Truthy => NarrowingContext::Falsy,
            NarrowingContext::Falsy => NarrowingContext::Truthy,
        }
    }
}

/// Refined types of value names, valid under one condition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrowedTypes {
    types: FxHashMap<String, Type>,
}

impl NarrowedTypes {
    /// No refinements
    pub fn new() -> Self {
        Self::default()
    }

    /// Refined type of `name`
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Number of refined names
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing was refined
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Refinements as `(name, type)` pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Add the refinements of `other`; on a shared name, `other` wins
    pub fn merge(mut self, other: NarrowedTypes) -> Self {
        self.types.extend(other.types);
        self
    }

    /// Child scope of `scope` with every refinement bound
    pub fn apply_to<'s>(&self, scope: &'s Scope<'s>) -> Scope<'s> {
        let mut child = scope.push();
        for (name, ty) in &self.types {
            child.define_value(name.clone(), ty.clone());
        }
        child
    }

    fn single(name: &str, ty: Type) -> Self {
        let mut types = FxHashMap::default();
        types.insert(name.to_string(), ty);
        Self { types }
    }
}

/// Computes what a condition implies about the names it mentions
pub struct TypeNarrower<'s> {
    scope: &'s Scope<'s>,
}

impl<'s> TypeNarrower<'s> {
    /// Narrower over the bindings of `scope`
    pub fn new(scope: &'s Scope<'s>) -> Self {
        Self { scope }
    }

    /// Refined types of the names in `expression`, assuming it evaluated
    /// in `context`. Names the condition says nothing about are absent.
    pub fn narrow_types_of_symbols_in(
        &self,
        expression: &ExpressionNode,
        context: NarrowingContext,
    ) -> NarrowedTypes {
        match expression {
            ExpressionNode::ValueReference(reference) => {
                match self.scope.lookup_type_for(&reference.name) {
                    Some(ty) if ty.is_nullable() && !matches!(ty, Type::Null) => {
                        let narrowed = match context {
                            NarrowingContext::Truthy => ty.without_null(),
                            NarrowingContext::Falsy => Type::Null,
                        };
                        NarrowedTypes::single(&reference.name, narrowed)
                    }
                    _ => NarrowedTypes::new(),
                }
            }
            ExpressionNode::UnaryOperation(operation) => match operation.operator {
                UnaryOperator::Not => {
                    self.narrow_types_of_symbols_in(&operation.operand, context.flip())
                }
            },
            ExpressionNode::BinaryOperation(operation) => match operation.operator {
                BinaryOperator::Equal | BinaryOperator::NotEqual => {
                    let context = match operation.operator {
                        BinaryOperator::NotEqual => context.flip(),
                        _ => context,
                    };
                    self.narrow_comparison(&operation.left, &operation.right, context)
                }
                BinaryOperator::And if context == NarrowingContext::Truthy => self
                    .narrow_types_of_symbols_in(&operation.left, context)
                    .merge(self.narrow_types_of_symbols_in(&operation.right, context)),
                BinaryOperator::Or if context == NarrowingContext::Falsy => self
                    .narrow_types_of_symbols_in(&operation.left, context)
                    .merge(self.narrow_types_of_symbols_in(&operation.right, context)),
                _ => NarrowedTypes::new(),
            },
            _ => NarrowedTypes::new(),
        }
    }

    /// `left === right` evaluated in `context`
    fn narrow_comparison(
        &self,
        left: &ExpressionNode,
        right: &ExpressionNode,
        context: NarrowingContext,
    ) -> NarrowedTypes {
        let (constant, other) = match (left, right) {
            (constant, other) if is_narrowing_constant(constant) => (constant, other),
            (other, constant) if is_narrowing_constant(constant) => (constant, other),
            _ => return NarrowedTypes::new(),
        };

        let context = match constant {
            ExpressionNode::BooleanLiteral(literal) if literal.value => context,
            _ => context.flip(),
        };
        self.narrow_types_of_symbols_in(other, context)
    }
}

fn is_narrowing_constant(expression: &ExpressionNode) -> bool {
    matches!(
        expression,
        ExpressionNode::BooleanLiteral(_) | ExpressionNode::NullLiteral(_)
    )
}

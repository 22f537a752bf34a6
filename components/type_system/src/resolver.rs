//! Type resolution of expressions

use crate::error::{TypeError, TypeResult};
use crate::inference::InferenceContext;
use crate::narrower::{NarrowedTypes, NarrowingContext, TypeNarrower};
use crate::scope::Scope;
use crate::types::{ComponentType, EnumInstanceType, Type};
use core_types::Range;
use parser::ast::{
    AccessNode, AccessType, AttributeValue, BinaryOperationNode, BinaryOperator, CallNode,
    ChildNode, ExpressionNode, IndexNode, MatchNode, TagNode, TemplateLiteralSegment,
    TernaryOperationNode,
};
use std::rc::Rc;
use tracing::trace;

/// Computes the static type of expressions against a scope.
///
/// The resolver only reads the AST. Conditional constructs resolve their
/// branches in child scopes holding the narrowed bindings of the condition.
pub struct TypeResolver<'s> {
    scope: &'s Scope<'s>,
}

impl<'s> TypeResolver<'s> {
    /// Resolver over the bindings of `scope`
    pub fn new(scope: &'s Scope<'s>) -> Self {
        Self { scope }
    }

    /// Static type of `expression`
    pub fn resolve_type_of(&self, expression: &ExpressionNode) -> TypeResult<Type> {
        match expression {
            ExpressionNode::BooleanLiteral(_) => Ok(Type::Boolean),
            ExpressionNode::NullLiteral(_) => Ok(Type::Null),
            ExpressionNode::IntegerLiteral(_) => Ok(Type::Integer),
            ExpressionNode::FloatLiteral(_) => Ok(Type::Number),
            ExpressionNode::StringLiteral(_) => Ok(Type::String),
            ExpressionNode::TemplateLiteral(template) => {
                for segment in &template.segments {
                    if let TemplateLiteralSegment::Expression(expression) = segment {
                        self.resolve_type_of(expression)?;
                    }
                }
                Ok(Type::String)
            }
            ExpressionNode::ValueReference(reference) => self
                .scope
                .lookup_type_for(&reference.name)
                .cloned()
                .ok_or_else(|| TypeError::UnknownIdentifier {
                    name: reference.name.clone(),
                    range: reference.range,
                }),
            ExpressionNode::UnaryOperation(operation) => {
                self.resolve_type_of(&operation.operand)?;
                Ok(Type::Boolean)
            }
            ExpressionNode::BinaryOperation(operation) => self.resolve_binary_operation(operation),
            ExpressionNode::TernaryOperation(operation) => {
                self.resolve_ternary_operation(operation)
            }
            ExpressionNode::Access(access) => self.resolve_access(access),
            ExpressionNode::Call(call) => self.resolve_call(call),
            ExpressionNode::Index(index) => self.resolve_index(index),
            ExpressionNode::Match(node) => self.resolve_match(node),
            ExpressionNode::Tag(tag) => self.resolve_tag(tag),
        }
    }

    fn narrowed(&self, condition: &ExpressionNode, context: NarrowingContext) -> Scope<'s> {
        TypeNarrower::new(self.scope)
            .narrow_types_of_symbols_in(condition, context)
            .apply_to(self.scope)
    }

    fn resolve_binary_operation(&self, operation: &BinaryOperationNode) -> TypeResult<Type> {
        let left = self.resolve_type_of(&operation.left)?;

        match operation.operator {
            BinaryOperator::And => {
                let scope = self.narrowed(&operation.left, NarrowingContext::Truthy);
                let right = TypeResolver::new(&scope).resolve_type_of(&operation.right)?;
                let mut members = left.falsy_part();
                members.push(right);
                return Ok(Type::union(members));
            }
            BinaryOperator::Or => {
                let scope = self.narrowed(&operation.left, NarrowingContext::Falsy);
                let right = TypeResolver::new(&scope).resolve_type_of(&operation.right)?;
                let mut members = left.truthy_part();
                members.push(right);
                return Ok(Type::union(members));
            }
            _ => {}
        }

        let right = self.resolve_type_of(&operation.right)?;
        if operation.operator.is_arithmetic() {
            resolve_arithmetic(left, operation.operator, right, operation.range)
        } else {
            Ok(Type::Boolean)
        }
    }

    fn resolve_ternary_operation(&self, operation: &TernaryOperationNode) -> TypeResult<Type> {
        self.resolve_type_of(&operation.condition)?;

        let truthy = self.narrowed(&operation.condition, NarrowingContext::Truthy);
        let true_branch = TypeResolver::new(&truthy).resolve_type_of(&operation.true_branch)?;

        let falsy = self.narrowed(&operation.condition, NarrowingContext::Falsy);
        let false_branch = TypeResolver::new(&falsy).resolve_type_of(&operation.false_branch)?;

        Ok(Type::union([true_branch, false_branch]))
    }

    fn resolve_access(&self, access: &AccessNode) -> TypeResult<Type> {
        let parent = self.resolve_type_of(&access.parent)?;

        match access.access_type {
            AccessType::Optional => {
                if matches!(parent, Type::Null) {
                    return Ok(Type::Null);
                }
                let member = access_member(&parent.without_null(), &access.key, access.range)?;
                Ok(member.nullable())
            }
            AccessType::NotOptional if parent.is_nullable() => {
                Err(TypeError::AccessOnNullableValue {
                    ty: parent,
                    key: access.key.clone(),
                    range: access.range,
                })
            }
            AccessType::NotOptional => access_member(&parent, &access.key, access.range),
        }
    }

    fn resolve_index(&self, index: &IndexNode) -> TypeResult<Type> {
        let target = self.resolve_type_of(&index.target)?;
        let index_type = self.resolve_type_of(&index.index)?;

        let item = match target {
            Type::Array(item) => item,
            other => {
                return Err(TypeError::NotIndexable {
                    ty: other,
                    range: index.range,
                })
            }
        };
        if !index_type.is_integer() {
            return Err(TypeError::InvalidIndexType {
                ty: index_type,
                range: index.index.range(),
            });
        }
        Ok(*item)
    }

    fn resolve_call(&self, call: &CallNode) -> TypeResult<Type> {
        let callee = self.resolve_type_of(&call.callee)?;
        let function = match callee {
            Type::Function(function) => function,
            other => {
                return Err(TypeError::NotCallable {
                    ty: other,
                    range: call.callee.range(),
                })
            }
        };
        if function.parameters.len() != call.arguments.len() {
            return Err(TypeError::ArityMismatch {
                expected: function.parameters.len(),
                actual: call.arguments.len(),
                range: call.range,
            });
        }

        let arguments = call
            .arguments
            .iter()
            .map(|argument| self.resolve_type_of(argument))
            .collect::<TypeResult<Vec<_>>>()?;

        let mut inference = InferenceContext::new();
        for (parameter, argument) in function.parameters.iter().zip(&arguments) {
            inference.infer(parameter, argument);
        }

        for ((parameter, argument), node) in function
            .parameters
            .iter()
            .zip(arguments)
            .zip(&call.arguments)
        {
            let expected = inference.substitute(parameter);
            if !argument.is_assignable_to(&expected) {
                return Err(TypeError::ArgumentTypeMismatch {
                    expected,
                    actual: argument,
                    range: node.range(),
                });
            }
        }

        Ok(inference.substitute(&function.return_type))
    }

    fn resolve_match(&self, node: &MatchNode) -> TypeResult<Type> {
        self.resolve_type_of(&node.subject)?;

        let mut arm_types = Vec::with_capacity(node.arms.len());
        for arm in node.arms.items() {
            let narrowed = match &arm.left {
                Some(patterns) => {
                    for pattern in patterns {
                        self.resolve_type_of(pattern)?;
                    }
                    self.narrow_for_patterns(&node.subject, patterns)
                }
                None => NarrowedTypes::new(),
            };
            let scope = narrowed.apply_to(self.scope);
            arm_types.push(TypeResolver::new(&scope).resolve_type_of(&arm.right)?);
        }

        Ok(Type::union(arm_types))
    }

    fn narrow_for_patterns(
        &self,
        subject: &ExpressionNode,
        patterns: &[ExpressionNode],
    ) -> NarrowedTypes {
        let all = |accept: fn(&ExpressionNode) -> bool| {
            !patterns.is_empty() && patterns.iter().all(accept)
        };
        let context = if all(|p| matches!(p, ExpressionNode::BooleanLiteral(b) if b.value)) {
            NarrowingContext::Truthy
        } else if all(|p| matches!(p, ExpressionNode::BooleanLiteral(b) if !b.value))
            || all(|p| matches!(p, ExpressionNode::NullLiteral(_)))
        {
            NarrowingContext::Falsy
        } else {
            return NarrowedTypes::new();
        };
        TypeNarrower::new(self.scope).narrow_types_of_symbols_in(subject, context)
    }

    fn resolve_tag(&self, tag: &TagNode) -> TypeResult<Type> {
        let mut attribute_types = Vec::with_capacity(tag.attributes().len());
        for attribute in tag.attributes().items() {
            let ty = match &attribute.value {
                None => Type::Boolean,
                Some(AttributeValue::String(_)) => Type::String,
                Some(AttributeValue::Expression(expression)) => self.resolve_type_of(expression)?,
                Some(AttributeValue::Tag(value)) => self.resolve_tag(value)?,
            };
            attribute_types.push(ty);
        }

        for child in tag.children() {
            match child {
                ChildNode::Text(_) => {}
                ChildNode::Expression(expression) => {
                    self.resolve_type_of(expression)?;
                }
                ChildNode::Tag(nested) => {
                    self.resolve_tag(nested)?;
                }
            }
        }

        if let Some(Type::Component(component)) = self.scope.lookup_type_for(&tag.name().value) {
            check_props(component, tag, &attribute_types)?;
        }

        Ok(Type::Slot)
    }
}

fn resolve_arithmetic(
    left: Type,
    operator: BinaryOperator,
    right: Type,
    range: Range,
) -> TypeResult<Type> {
    let concatenates = operator == BinaryOperator::Plus
        && ((left.is_string() && (right.is_string() || right.is_numeric()))
            || (right.is_string() && left.is_numeric()));
    if concatenates {
        return Ok(Type::String);
    }

    if left.is_numeric() && right.is_numeric() {
        if operator != BinaryOperator::Divide && left.is_integer() && right.is_integer() {
            return Ok(Type::Integer);
        }
        return Ok(Type::Number);
    }

    Err(TypeError::IllegalBinaryOperation {
        left,
        operator,
        right,
        range,
    })
}

fn access_member(ty: &Type, key: &str, range: Range) -> TypeResult<Type> {
    let member = match ty {
        Type::Struct(definition) => definition.property(key).cloned(),
        Type::EnumStatic(definition) => definition.member(key).map(|member| {
            Type::EnumInstance(EnumInstanceType {
                enum_type: Rc::clone(definition),
                member: Some(member.name.clone()),
            })
        }),
        Type::EnumInstance(instance) if key == "value" => Some(instance.value_type()),
        Type::Array(_) if key == "length" => Some(Type::Integer),
        Type::Union(union) => {
            return union
                .members()
                .iter()
                .map(|member| access_member(member, key, range))
                .collect::<TypeResult<Vec<_>>>()
                .map(Type::union);
        }
        _ => None,
    };

    member.ok_or_else(|| TypeError::MemberNotFound {
        ty: ty.clone(),
        key: key.to_string(),
        range,
    })
}

fn check_props(
    component: &ComponentType,
    tag: &TagNode,
    attribute_types: &[Type],
) -> TypeResult<()> {
    trace!(component = %component.name, "checking props");

    for (attribute, actual) in tag.attributes().items().iter().zip(attribute_types) {
        let name = &attribute.name.value;
        let Some(expected) = component.prop(name) else {
            return Err(TypeError::UnknownAttribute {
                component: component.name.clone(),
                attribute: name.clone(),
                range: attribute.range,
            });
        };
        if !actual.is_assignable_to(expected) {
            return Err(TypeError::AttributeTypeMismatch {
                attribute: name.clone(),
                expected: expected.clone(),
                actual: actual.clone(),
                range: attribute.range,
            });
        }
    }

    for (prop, ty) in &component.props {
        if !ty.is_nullable() && tag.attributes().get(prop).is_none() {
            return Err(TypeError::MissingProp {
                component: component.name.clone(),
                prop: prop.clone(),
                range: tag.range(),
            });
        }
    }

    Ok(())
}

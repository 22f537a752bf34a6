//! Expression nodes

use super::{
    BooleanLiteralNode, FloatLiteralNode, IntegerLiteralNode, MatchNode, NullLiteralNode,
    StringLiteralNode, TagNode, TemplateLiteralNode, TemplateLiteralSegment,
};
use core_types::Range;
use std::fmt;

/// Any expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionNode {
    /// `true` / `false`
    BooleanLiteral(BooleanLiteralNode),
    /// `null`
    NullLiteral(NullLiteralNode),
    /// `42`, `0xff`
    IntegerLiteral(IntegerLiteralNode),
    /// `1.5`
    FloatLiteral(FloatLiteralNode),
    /// `"text"`
    StringLiteral(StringLiteralNode),
    /// `` `text {expression}` ``
    TemplateLiteral(TemplateLiteralNode),
    /// `name`
    ValueReference(ValueReferenceNode),
    /// `!operand`
    UnaryOperation(UnaryOperationNode),
    /// `left op right`
    BinaryOperation(BinaryOperationNode),
    /// `condition ? a : b`
    TernaryOperation(TernaryOperationNode),
    /// `parent.key`, `parent?.key`
    Access(AccessNode),
    /// `callee(arguments)`
    Call(CallNode),
    /// `target[index]`
    Index(IndexNode),
    /// `match (subject) { arms }`
    Match(MatchNode),
    /// `<tag />`
    Tag(TagNode),
}

impl ExpressionNode {
    /// Source location of the whole expression
    pub fn range(&self) -> Range {
        match self {
            ExpressionNode::BooleanLiteral(node) => node.range,
            ExpressionNode::NullLiteral(node) => node.range,
            ExpressionNode::IntegerLiteral(node) => node.range,
            ExpressionNode::FloatLiteral(node) => node.range,
            ExpressionNode::StringLiteral(node) => node.range,
            ExpressionNode::TemplateLiteral(node) => node.range,
            ExpressionNode::ValueReference(node) => node.range,
            ExpressionNode::UnaryOperation(node) => node.range,
            ExpressionNode::BinaryOperation(node) => node.range,
            ExpressionNode::TernaryOperation(node) => node.range,
            ExpressionNode::Access(node) => node.range,
            ExpressionNode::Call(node) => node.range,
            ExpressionNode::Index(node) => node.range,
            ExpressionNode::Match(node) => node.range,
            ExpressionNode::Tag(node) => node.range(),
        }
    }

    pub(crate) fn set_range(&mut self, range: Range) {
        match self {
            ExpressionNode::BooleanLiteral(node) => node.range = range,
            ExpressionNode::NullLiteral(node) => node.range = range,
            ExpressionNode::IntegerLiteral(node) => node.range = range,
            ExpressionNode::FloatLiteral(node) => node.range = range,
            ExpressionNode::StringLiteral(node) => node.range = range,
            ExpressionNode::TemplateLiteral(node) => node.range = range,
            ExpressionNode::ValueReference(node) => node.range = range,
            ExpressionNode::UnaryOperation(node) => node.range = range,
            ExpressionNode::BinaryOperation(node) => node.range = range,
            ExpressionNode::TernaryOperation(node) => node.range = range,
            ExpressionNode::Access(node) => node.range = range,
            ExpressionNode::Call(node) => node.range = range,
            ExpressionNode::Index(node) => node.range = range,
            ExpressionNode::Match(node) => node.range = range,
            ExpressionNode::Tag(node) => node.range = range,
        }
    }
}

/// Reference to a value by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueReferenceNode {
    /// Source location
    pub range: Range,
    /// Referenced identifier
    pub name: String,
}

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `!`
    Not,
}

/// Prefix operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOperationNode {
    /// Source location
    pub range: Range,
    /// Operator
    pub operator: UnaryOperator,
    /// Operand
    pub operand: Box<ExpressionNode>,
}

/// Infix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `===`
    Equal,
    /// `!==`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl BinaryOperator {
    /// Operator as written in source
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::Equal => "===",
            BinaryOperator::NotEqual => "!==",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }

    /// Whether the operator is `+ - * / %`
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOperator::Multiply
                | BinaryOperator::Divide
                | BinaryOperator::Modulo
                | BinaryOperator::Plus
                | BinaryOperator::Minus
        )
    }
}

/// Infix operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperationNode {
    /// Source location
    pub range: Range,
    /// Left operand
    pub left: Box<ExpressionNode>,
    /// Operator
    pub operator: BinaryOperator,
    /// Right operand
    pub right: Box<ExpressionNode>,
}

/// `condition ? true_branch : false_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TernaryOperationNode {
    /// Source location
    pub range: Range,
    /// Condition
    pub condition: Box<ExpressionNode>,
    /// Value if the condition is truthy
    pub true_branch: Box<ExpressionNode>,
    /// Value otherwise
    pub false_branch: Box<ExpressionNode>,
}

/// Kind of member access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// `.`
    NotOptional,
    /// `?.`
    Optional,
}

/// Member access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessNode {
    /// Source location
    pub range: Range,
    /// Accessed value
    pub parent: Box<ExpressionNode>,
    /// `.` or `?.`
    pub access_type: AccessType,
    /// Member name
    pub key: String,
}

/// Function call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    /// Source location
    pub range: Range,
    /// Called value
    pub callee: Box<ExpressionNode>,
    /// Arguments in source order
    pub arguments: Vec<ExpressionNode>,
}

/// Index access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexNode {
    /// Source location
    pub range: Range,
    /// Indexed value
    pub target: Box<ExpressionNode>,
    /// Index
    pub index: Box<ExpressionNode>,
}

/// Renders the expression with every operation fully parenthesized.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::BooleanLiteral(node) => write!(f, "{}", node.value),
            ExpressionNode::NullLiteral(_) => f.write_str("null"),
            ExpressionNode::IntegerLiteral(node) => f.write_str(&node.value),
            ExpressionNode::FloatLiteral(node) => f.write_str(&node.value),
            ExpressionNode::StringLiteral(node) => write!(f, "{:?}", node.value),
            ExpressionNode::TemplateLiteral(node) => {
                f.write_str("`")?;
                for segment in &node.segments {
                    match segment {
                        TemplateLiteralSegment::String(string) => f.write_str(&string.value)?,
                        TemplateLiteralSegment::Expression(expression) => {
                            write!(f, "{{{}}}", expression)?
                        }
                    }
                }
                f.write_str("`")
            }
            ExpressionNode::ValueReference(node) => f.write_str(&node.name),
            ExpressionNode::UnaryOperation(node) => write!(f, "!{}", node.operand),
            ExpressionNode::BinaryOperation(node) => write!(
                f,
                "({} {} {})",
                node.left,
                node.operator.symbol(),
                node.right
            ),
            ExpressionNode::TernaryOperation(node) => write!(
                f,
                "({} ? {} : {})",
                node.condition, node.true_branch, node.false_branch
            ),
            ExpressionNode::Access(node) => match node.access_type {
                AccessType::NotOptional => write!(f, "{}.{}", node.parent, node.key),
                AccessType::Optional => write!(f, "{}?.{}", node.parent, node.key),
            },
            ExpressionNode::Call(node) => {
                write!(f, "{}(", node.callee)?;
                for (index, argument) in node.arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                f.write_str(")")
            }
            ExpressionNode::Index(node) => write!(f, "{}[{}]", node.target, node.index),
            ExpressionNode::Match(node) => write!(f, "match ({}) {{...}}", node.subject),
            ExpressionNode::Tag(node) => write!(f, "<{} />", node.name().value),
        }
    }
}

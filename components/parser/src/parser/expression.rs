//! Expressions, by precedence climbing

use super::Parser;
use crate::ast::{
    AccessNode, AccessType, BinaryOperationNode, BinaryOperator, CallNode, ExpressionNode,
    IndexNode, TernaryOperationNode, UnaryOperationNode, UnaryOperator, ValueReferenceNode,
};
use crate::error::{ExpressionCouldNotBeParsed, LexerError, ParseResult, ParserError};
use crate::rule::Rule;

/// Binding strength of operators, loosest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `,`
    Sequence,
    /// `? :`
    Ternary,
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `=== !==`
    Equality,
    /// `< <= > >=`
    Comparison,
    /// `+ -`
    Additive,
    /// `* / %`
    Multiplicative,
    /// `!`
    Unary,
    /// `. ?. [] ()`
    Access,
}

impl Precedence {
    /// Precedence of the operator starting with `rule`, if any
    pub fn for_rule(rule: Rule) -> Option<Precedence> {
        let precedence = match rule {
            Rule::SymbolPeriod
            | Rule::SymbolOptchain
            | Rule::BracketSquareOpen
            | Rule::BracketRoundOpen => Precedence::Access,
            Rule::SymbolExclamationmark => Precedence::Unary,
            Rule::SymbolAsterisk | Rule::SymbolSlashForward | Rule::SymbolPercent => {
                Precedence::Multiplicative
            }
            Rule::SymbolPlus | Rule::SymbolDash => Precedence::Additive,
            Rule::BracketAngleOpen
            | Rule::BracketAngleClose
            | Rule::SymbolLessThanOrEqual
            | Rule::SymbolGreaterThanOrEqual => Precedence::Comparison,
            Rule::SymbolStrictEquals | Rule::SymbolNotEquals => Precedence::Equality,
            Rule::SymbolBooleanAnd => Precedence::LogicalAnd,
            Rule::SymbolBooleanOr => Precedence::LogicalOr,
            Rule::SymbolQuestionmark => Precedence::Ternary,
            Rule::SymbolComma => Precedence::Sequence,
            _ => return None,
        };
        Some(precedence)
    }

    /// The next tighter level; `Access` is the tightest
    pub fn tighter(self) -> Precedence {
        match self {
            Precedence::Sequence => Precedence::Ternary,
            Precedence::Ternary => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Comparison,
            Precedence::Comparison => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary | Precedence::Access => Precedence::Access,
        }
    }
}

/// Rules that may start an expression
pub(super) const PRIMARY: &[Rule] = &[
    Rule::KeywordTrue,
    Rule::KeywordFalse,
    Rule::KeywordNull,
    Rule::KeywordMatch,
    Rule::IntegerBinary,
    Rule::IntegerOctal,
    Rule::IntegerHexadecimal,
    Rule::IntegerDecimal,
    Rule::Float,
    Rule::StringLiteralDelimiter,
    Rule::TemplateLiteralDelimiter,
    Rule::SymbolExclamationmark,
    Rule::BracketRoundOpen,
    Rule::BracketAngleOpen,
    Rule::Word,
];

/// Rules that may continue an expression
const INFIX: &[Rule] = &[
    Rule::SymbolPeriod,
    Rule::SymbolOptchain,
    Rule::BracketSquareOpen,
    Rule::BracketRoundOpen,
    Rule::SymbolAsterisk,
    Rule::SymbolSlashForward,
    Rule::SymbolPercent,
    Rule::SymbolPlus,
    Rule::SymbolDash,
    Rule::SymbolLessThanOrEqual,
    Rule::SymbolGreaterThanOrEqual,
    Rule::BracketAngleOpen,
    Rule::BracketAngleClose,
    Rule::SymbolStrictEquals,
    Rule::SymbolNotEquals,
    Rule::SymbolBooleanAnd,
    Rule::SymbolBooleanOr,
    Rule::SymbolQuestionmark,
];

/// Infix rules that only continue an expression on the line it ends on.
///
/// On a new line they start the next expression, such as the pattern of the
/// following match arm.
const STARTS_LINE: &[Rule] = &[
    Rule::BracketRoundOpen,
    Rule::BracketSquareOpen,
    Rule::BracketAngleOpen,
];

fn binary_operator(rule: Rule) -> Option<BinaryOperator> {
    let operator = match rule {
        Rule::SymbolAsterisk => BinaryOperator::Multiply,
        Rule::SymbolSlashForward => BinaryOperator::Divide,
        Rule::SymbolPercent => BinaryOperator::Modulo,
        Rule::SymbolPlus => BinaryOperator::Plus,
        Rule::SymbolDash => BinaryOperator::Minus,
        Rule::BracketAngleOpen => BinaryOperator::LessThan,
        Rule::SymbolLessThanOrEqual => BinaryOperator::LessThanOrEqual,
        Rule::BracketAngleClose => BinaryOperator::GreaterThan,
        Rule::SymbolGreaterThanOrEqual => BinaryOperator::GreaterThanOrEqual,
        Rule::SymbolStrictEquals => BinaryOperator::Equal,
        Rule::SymbolNotEquals => BinaryOperator::NotEqual,
        Rule::SymbolBooleanAnd => BinaryOperator::And,
        Rule::SymbolBooleanOr => BinaryOperator::Or,
        _ => return None,
    };
    Some(operator)
}

impl<'a> Parser<'a> {
    /// Parse an expression at the default (`Ternary`) precedence
    pub fn parse_expression(&mut self) -> ParseResult<ExpressionNode> {
        self.parse_expression_with_precedence(Precedence::Ternary)
    }

    /// Parse an expression, consuming only operators that bind at least as
    /// tightly as `precedence`
    pub fn parse_expression_with_precedence(
        &mut self,
        precedence: Precedence,
    ) -> ParseResult<ExpressionNode> {
        self.skip();
        let mut left = self.parse_primary()?;

        loop {
            self.skip();
            let Some(rule) = self.lexer.peek_one_of(INFIX) else {
                break;
            };
            if STARTS_LINE.contains(&rule)
                && self.lexer.position().line_number != left.range().end.line_number
            {
                break;
            }
            let Some(operator_precedence) = Precedence::for_rule(rule) else {
                break;
            };
            if operator_precedence < precedence {
                break;
            }

            left = match rule {
                Rule::SymbolPeriod | Rule::SymbolOptchain => self.parse_access(left)?,
                Rule::BracketSquareOpen => self.parse_index(left)?,
                Rule::BracketRoundOpen => self.parse_call(left)?,
                Rule::SymbolQuestionmark => self.parse_ternary(left)?,
                _ => self.parse_binary_operation(left, rule, operator_precedence)?,
            };
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> ParseResult<ExpressionNode> {
        let rule = self
            .lexer
            .expect_one_of(PRIMARY)
            .map_err(unexpected_token)?;

        match rule {
            Rule::KeywordTrue | Rule::KeywordFalse => {
                Ok(ExpressionNode::BooleanLiteral(self.parse_boolean_literal()?))
            }
            Rule::KeywordNull => Ok(ExpressionNode::NullLiteral(self.parse_null_literal()?)),
            Rule::KeywordMatch => Ok(ExpressionNode::Match(self.parse_match()?)),
            Rule::IntegerBinary
            | Rule::IntegerOctal
            | Rule::IntegerHexadecimal
            | Rule::IntegerDecimal => Ok(ExpressionNode::IntegerLiteral(
                self.parse_integer_literal()?,
            )),
            Rule::Float => Ok(ExpressionNode::FloatLiteral(self.parse_float_literal()?)),
            Rule::StringLiteralDelimiter => {
                Ok(ExpressionNode::StringLiteral(self.parse_string_literal()?))
            }
            Rule::TemplateLiteralDelimiter => Ok(ExpressionNode::TemplateLiteral(
                self.parse_template_literal()?,
            )),
            Rule::SymbolExclamationmark => self.parse_unary_operation(),
            Rule::BracketRoundOpen => self.parse_bracketed_expression(),
            Rule::BracketAngleOpen => Ok(ExpressionNode::Tag(self.parse_tag()?)),
            _ => {
                let token = self.lexer.read(Rule::Word)?;
                Ok(ExpressionNode::ValueReference(ValueReferenceNode {
                    range: token.range,
                    name: token.value,
                }))
            }
        }
    }

    fn parse_unary_operation(&mut self) -> ParseResult<ExpressionNode> {
        let operator = self.lexer.read(Rule::SymbolExclamationmark)?;
        let operand = self.parse_expression_with_precedence(Precedence::Unary)?;

        Ok(ExpressionNode::UnaryOperation(UnaryOperationNode {
            range: operator.range.to(&operand.range()),
            operator: UnaryOperator::Not,
            operand: Box::new(operand),
        }))
    }

    /// `(expression)`; the node's range is widened to include the brackets
    fn parse_bracketed_expression(&mut self) -> ParseResult<ExpressionNode> {
        let open = self.lexer.read(Rule::BracketRoundOpen)?;
        let mut expression = self.parse_expression()?;
        self.skip();
        let close = self.lexer.read(Rule::BracketRoundClose)?;
        expression.set_range(open.range.to(&close.range));
        Ok(expression)
    }

    fn parse_binary_operation(
        &mut self,
        left: ExpressionNode,
        rule: Rule,
        precedence: Precedence,
    ) -> ParseResult<ExpressionNode> {
        let token = self.lexer.read(rule)?;
        let Some(operator) = binary_operator(token.rule) else {
            return Err(unexpected_token(LexerError::UnexpectedCharacterSequence {
                expected: INFIX.to_vec(),
                actual: token.value,
                range: token.range,
            }));
        };
        let right = self.parse_expression_with_precedence(precedence.tighter())?;

        Ok(ExpressionNode::BinaryOperation(BinaryOperationNode {
            range: left.range().to(&right.range()),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_ternary(&mut self, condition: ExpressionNode) -> ParseResult<ExpressionNode> {
        self.lexer.read(Rule::SymbolQuestionmark)?;
        let true_branch = self.parse_expression_with_precedence(Precedence::Ternary)?;
        self.skip();
        self.lexer.read(Rule::SymbolColon)?;
        let false_branch = self.parse_expression_with_precedence(Precedence::Ternary)?;

        Ok(ExpressionNode::TernaryOperation(TernaryOperationNode {
            range: condition.range().to(&false_branch.range()),
            condition: Box::new(condition),
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }))
    }

    fn parse_access(&mut self, parent: ExpressionNode) -> ParseResult<ExpressionNode> {
        let operator = self
            .lexer
            .read_one_of(&[Rule::SymbolPeriod, Rule::SymbolOptchain])?;
        let access_type = match operator.rule {
            Rule::SymbolOptchain => AccessType::Optional,
            _ => AccessType::NotOptional,
        };
        self.skip();
        let key = self.lexer.read(Rule::Word)?;

        Ok(ExpressionNode::Access(AccessNode {
            range: parent.range().to(&key.range),
            parent: Box::new(parent),
            access_type,
            key: key.value,
        }))
    }

    fn parse_index(&mut self, target: ExpressionNode) -> ParseResult<ExpressionNode> {
        self.lexer.read(Rule::BracketSquareOpen)?;
        let index = self.parse_expression()?;
        self.skip();
        let close = self.lexer.read(Rule::BracketSquareClose)?;

        Ok(ExpressionNode::Index(IndexNode {
            range: target.range().to(&close.range),
            target: Box::new(target),
            index: Box::new(index),
        }))
    }

    fn parse_call(&mut self, callee: ExpressionNode) -> ParseResult<ExpressionNode> {
        self.lexer.read(Rule::BracketRoundOpen)?;
        let mut arguments = Vec::new();

        let close = loop {
            self.skip();
            if let Some(close) = self.lexer.probe(Rule::BracketRoundClose) {
                break close;
            }
            arguments.push(self.parse_expression()?);
            self.skip();
            if self.lexer.probe(Rule::SymbolComma).is_none() {
                self.skip();
                break self.lexer.read(Rule::BracketRoundClose)?;
            }
        };

        Ok(ExpressionNode::Call(CallNode {
            range: callee.range().to(&close.range),
            callee: Box::new(callee),
            arguments,
        }))
    }
}

/// A token that cannot start an expression is reported by the expression
/// production; running out of source stays a lexer error.
fn unexpected_token(error: LexerError) -> ParserError {
    match error {
        LexerError::UnexpectedCharacterSequence {
            expected,
            actual,
            range,
        } => ExpressionCouldNotBeParsed::UnexpectedToken {
            expected,
            actual,
            range,
        }
        .into(),
        error => error.into(),
    }
}

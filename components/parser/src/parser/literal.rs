//! Boolean, null, number, string and template literals

use super::Parser;
use crate::ast::{
    BooleanLiteralNode, FloatLiteralNode, IntegerFormat, IntegerLiteralNode, NullLiteralNode,
    StringLiteralNode, TemplateLiteralNode, TemplateLiteralSegment,
};
use crate::error::{ParseResult, StringLiteralCouldNotBeParsed};
use crate::rule::Rule;
use crate::tokenizer::Token;
use core_types::Range;

const INTEGERS: &[Rule] = &[
    Rule::IntegerBinary,
    Rule::IntegerOctal,
    Rule::IntegerHexadecimal,
    Rule::IntegerDecimal,
];

const STRING_PARTS: &[Rule] = &[
    Rule::StringLiteralDelimiter,
    Rule::EscapeSequenceUnicode,
    Rule::EscapeSequenceSingleCharacter,
    Rule::StringLiteralContent,
];

const TEMPLATE_PARTS: &[Rule] = &[
    Rule::TemplateLiteralDelimiter,
    Rule::EscapeSequenceUnicode,
    Rule::EscapeSequenceSingleCharacter,
    Rule::BracketCurlyOpen,
    Rule::TemplateLiteralContent,
];

/// Resolve an escape sequence token into the character it stands for
fn unescape(token: &Token) -> ParseResult<char> {
    if token.rule == Rule::EscapeSequenceUnicode {
        return u32::from_str_radix(&token.value[2..], 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                StringLiteralCouldNotBeParsed::InvalidUnicodeEscapeSequence {
                    sequence: token.value.clone(),
                    range: token.range,
                }
                .into()
            });
    }

    Ok(match token.value.chars().nth(1) {
        Some('n') => '\n',
        Some('r') => '\r',
        Some('t') => '\t',
        Some(character) => character,
        None => '\\',
    })
}

/// Collects the text of one string or template segment
#[derive(Default)]
struct Segment {
    value: String,
    range: Option<Range>,
}

impl Segment {
    fn push_str(&mut self, text: &str, range: Range) {
        self.value.push_str(text);
        self.extend(range);
    }

    fn push(&mut self, character: char, range: Range) {
        self.value.push(character);
        self.extend(range);
    }

    fn extend(&mut self, range: Range) {
        self.range = Some(match self.range {
            Some(current) => current.to(&range),
            None => range,
        });
    }

    fn take(&mut self) -> Option<StringLiteralNode> {
        let range = self.range.take()?;
        Some(StringLiteralNode {
            range,
            value: std::mem::take(&mut self.value),
        })
    }
}

impl<'a> Parser<'a> {
    /// `true` or `false`
    pub fn parse_boolean_literal(&mut self) -> ParseResult<BooleanLiteralNode> {
        let token = self
            .lexer
            .read_one_of(&[Rule::KeywordTrue, Rule::KeywordFalse])?;
        Ok(BooleanLiteralNode {
            range: token.range,
            value: token.rule == Rule::KeywordTrue,
        })
    }

    /// `null`
    pub fn parse_null_literal(&mut self) -> ParseResult<NullLiteralNode> {
        let token = self.lexer.read(Rule::KeywordNull)?;
        Ok(NullLiteralNode { range: token.range })
    }

    /// Binary, octal, decimal or hexadecimal integer
    pub fn parse_integer_literal(&mut self) -> ParseResult<IntegerLiteralNode> {
        let token = self.lexer.read_one_of(INTEGERS)?;
        let format = match token.rule {
            Rule::IntegerBinary => IntegerFormat::Binary,
            Rule::IntegerOctal => IntegerFormat::Octal,
            Rule::IntegerHexadecimal => IntegerFormat::Hexadecimal,
            _ => IntegerFormat::Decimal,
        };

        Ok(IntegerLiteralNode {
            range: token.range,
            format,
            value: token.value,
        })
    }

    /// `1.5`, `2.5e-3`
    pub fn parse_float_literal(&mut self) -> ParseResult<FloatLiteralNode> {
        let token = self.lexer.read(Rule::Float)?;
        Ok(FloatLiteralNode {
            range: token.range,
            value: token.value,
        })
    }

    /// Double-quoted string with escape sequences
    pub fn parse_string_literal(&mut self) -> ParseResult<StringLiteralNode> {
        let open = self.lexer.read(Rule::StringLiteralDelimiter)?;
        let mut value = String::new();

        loop {
            let token = self.lexer.read_one_of(STRING_PARTS)?;
            match token.rule {
                Rule::StringLiteralDelimiter => {
                    return Ok(StringLiteralNode {
                        range: open.range.to(&token.range),
                        value,
                    });
                }
                Rule::StringLiteralContent => value.push_str(&token.value),
                _ => value.push(unescape(&token)?),
            }
        }
    }

    /// Backtick template with `{expression}` interpolation
    pub fn parse_template_literal(&mut self) -> ParseResult<TemplateLiteralNode> {
        let open = self.lexer.read(Rule::TemplateLiteralDelimiter)?;
        let mut segments = Vec::new();
        let mut segment = Segment::default();

        loop {
            let token = self.lexer.read_one_of(TEMPLATE_PARTS)?;
            match token.rule {
                Rule::TemplateLiteralDelimiter => {
                    if let Some(string) = segment.take() {
                        segments.push(TemplateLiteralSegment::String(string));
                    }
                    return Ok(TemplateLiteralNode {
                        range: open.range.to(&token.range),
                        segments,
                    });
                }
                Rule::BracketCurlyOpen => {
                    if let Some(string) = segment.take() {
                        segments.push(TemplateLiteralSegment::String(string));
                    }
                    let expression = self.parse_expression()?;
                    self.skip();
                    self.lexer.read(Rule::BracketCurlyClose)?;
                    segments.push(TemplateLiteralSegment::Expression(expression));
                }
                Rule::TemplateLiteralContent => segment.push_str(&token.value, token.range),
                _ => segment.push(unescape(&token)?, token.range),
            }
        }
    }
}

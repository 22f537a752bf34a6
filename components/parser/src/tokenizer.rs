//! Tokens, the lossless tokenizer and a buffered token stream.
//!
//! The [`Tokenizer`] turns a whole source into tokens without parser
//! guidance. It tracks whether it is inside a string literal, a template
//! literal, a tag or nested braces, and emits whitespace and comments as
//! tokens too, so concatenating the values of all tokens yields the source
//! again.

use crate::error::LexerError;
use crate::lexer::Lexer;
use crate::rule::{Rule, TokenType};
use core_types::{Range, Source, SourcePath};
use std::collections::VecDeque;
use std::fmt;

/// A lexeme together with its rule and location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Rule that matched
    pub rule: TokenType,
    /// Matched characters
    pub value: String,
    /// Location of `value`
    pub range: Range,
    /// Source the token was read from
    pub source_path: SourcePath,
}

impl Token {
    /// Create a token
    pub fn new(
        rule: TokenType,
        value: impl Into<String>,
        range: Range,
        source_path: SourcePath,
    ) -> Self {
        Self {
            rule,
            value: value.into(),
            range,
            source_path,
        }
    }

    /// Same token re-typed as `rule`
    pub fn with_rule(&self, rule: TokenType) -> Self {
        Self {
            rule,
            ..self.clone()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} ({})", self.range, self.value, self.rule)
    }
}

const CODE: &[Rule] = &[
    Rule::Space,
    Rule::EndOfLine,
    Rule::Comment,
    Rule::KeywordFrom,
    Rule::KeywordImport,
    Rule::KeywordExport,
    Rule::KeywordEnum,
    Rule::KeywordStruct,
    Rule::KeywordComponent,
    Rule::KeywordMatch,
    Rule::KeywordDefault,
    Rule::KeywordReturn,
    Rule::KeywordTrue,
    Rule::KeywordFalse,
    Rule::KeywordNull,
    Rule::IntegerBinary,
    Rule::IntegerOctal,
    Rule::IntegerHexadecimal,
    Rule::IntegerDecimal,
    Rule::Float,
    Rule::StringLiteralDelimiter,
    Rule::TemplateLiteralDelimiter,
    Rule::BracketCurlyOpen,
    Rule::BracketCurlyClose,
    Rule::BracketRoundOpen,
    Rule::BracketRoundClose,
    Rule::BracketSquareOpen,
    Rule::BracketSquareClose,
    Rule::BracketAngleOpen,
    Rule::BracketAngleClose,
    Rule::SymbolPeriod,
    Rule::SymbolColon,
    Rule::SymbolQuestionmark,
    Rule::SymbolOptchain,
    Rule::SymbolExclamationmark,
    Rule::SymbolComma,
    Rule::SymbolDash,
    Rule::SymbolPlus,
    Rule::SymbolAsterisk,
    Rule::SymbolSlashForward,
    Rule::SymbolPercent,
    Rule::SymbolArrowSingle,
    Rule::SymbolEquals,
    Rule::SymbolStrictEquals,
    Rule::SymbolNotEquals,
    Rule::SymbolGreaterThanOrEqual,
    Rule::SymbolLessThanOrEqual,
    Rule::SymbolBooleanAnd,
    Rule::SymbolBooleanOr,
    Rule::SymbolPipe,
    Rule::Word,
];

const STRING: &[Rule] = &[
    Rule::StringLiteralDelimiter,
    Rule::EscapeSequenceUnicode,
    Rule::EscapeSequenceSingleCharacter,
    Rule::StringLiteralContent,
];

const TEMPLATE: &[Rule] = &[
    Rule::TemplateLiteralDelimiter,
    Rule::EscapeSequenceUnicode,
    Rule::EscapeSequenceSingleCharacter,
    Rule::BracketCurlyOpen,
    Rule::TemplateLiteralContent,
];

const TAG_START: &[Rule] = &[Rule::SymbolSlashForward, Rule::Name];

const TAG_ATTRIBUTES: &[Rule] = &[
    Rule::Space,
    Rule::EndOfLine,
    Rule::Name,
    Rule::SymbolEquals,
    Rule::StringLiteralDelimiter,
    Rule::BracketCurlyOpen,
    Rule::BracketAngleOpen,
    Rule::SymbolSlashForward,
    Rule::TagEnd,
];

const TAG_SELF_CLOSING: &[Rule] = &[Rule::TagEnd];

const TAG_CHILDREN: &[Rule] = &[Rule::Text, Rule::BracketCurlyOpen, Rule::BracketAngleOpen];

const TAG_CLOSING: &[Rule] = &[Rule::Name, Rule::Space, Rule::EndOfLine, Rule::TagEnd];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Code,
    String,
    Template,
    /// Right after `<`
    TagStart,
    /// Between the tag name and `>` or `/>`
    TagAttributes,
    /// After the `/` of `/>`
    TagSelfClosing,
    /// Between `>` and `</`
    TagChildren,
    /// Between `</` and `>`
    TagClosing,
}

impl Context {
    fn rules(self) -> &'static [Rule] {
        match self {
            Context::Code => CODE,
            Context::String => STRING,
            Context::Template => TEMPLATE,
            Context::TagStart => TAG_START,
            Context::TagAttributes => TAG_ATTRIBUTES,
            Context::TagSelfClosing => TAG_SELF_CLOSING,
            Context::TagChildren => TAG_CHILDREN,
            Context::TagClosing => TAG_CLOSING,
        }
    }
}

/// Whether a token read in code can end an operand
fn ends_operand(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::Word
            | Rule::KeywordTrue
            | Rule::KeywordFalse
            | Rule::KeywordNull
            | Rule::IntegerBinary
            | Rule::IntegerOctal
            | Rule::IntegerHexadecimal
            | Rule::IntegerDecimal
            | Rule::Float
            | Rule::BracketRoundClose
            | Rule::BracketSquareClose
            | Rule::BracketCurlyClose
    )
}

/// Lazy, forward-only token iterator over one source.
///
/// In code, `<` opens a tag when it is directly followed by a name and does
/// not continue an operand on the same line; otherwise it is the comparison
/// operator. Inside tags, text is a single token.
///
/// After the first error the iterator is exhausted. To tokenize again,
/// create a new tokenizer over the same [`Source`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    lexer: Lexer<'a>,
    contexts: Vec<Context>,
    after_operand: bool,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `source`
    pub fn new(source: &'a Source) -> Self {
        Self {
            lexer: Lexer::new(source),
            contexts: vec![Context::Code],
            after_operand: false,
            finished: false,
        }
    }

    fn context(&self) -> Context {
        self.contexts.last().copied().unwrap_or(Context::Code)
    }

    fn replace(&mut self, context: Context) {
        self.contexts.pop();
        self.contexts.push(context);
    }

    fn enter(&mut self, token: &Token) {
        let context = self.context();
        let opens_tag = context == Context::Code
            && token.rule == Rule::BracketAngleOpen
            && !self.after_operand
            && self.lexer.peek(Rule::Name);

        match (context, token.rule) {
            (Context::Code, Rule::BracketAngleOpen) if opens_tag => {
                self.contexts.push(Context::TagStart)
            }
            (Context::Code | Context::TagAttributes, Rule::StringLiteralDelimiter) => {
                self.contexts.push(Context::String)
            }
            (Context::Code, Rule::TemplateLiteralDelimiter) => {
                self.contexts.push(Context::Template)
            }
            (
                Context::Code | Context::Template | Context::TagAttributes | Context::TagChildren,
                Rule::BracketCurlyOpen,
            ) => self.contexts.push(Context::Code),
            (Context::Code, Rule::BracketCurlyClose) if self.contexts.len() > 1 => {
                self.contexts.pop();
            }
            (Context::String, Rule::StringLiteralDelimiter)
            | (Context::Template, Rule::TemplateLiteralDelimiter)
            | (Context::TagSelfClosing, Rule::TagEnd) => {
                self.contexts.pop();
            }
            (Context::TagAttributes | Context::TagChildren, Rule::BracketAngleOpen) => {
                self.contexts.push(Context::TagStart)
            }
            (Context::TagStart, Rule::Name) => self.replace(Context::TagAttributes),
            (Context::TagStart, Rule::SymbolSlashForward) => self.replace(Context::TagClosing),
            (Context::TagAttributes, Rule::SymbolSlashForward) => {
                self.replace(Context::TagSelfClosing)
            }
            (Context::TagAttributes, Rule::TagEnd) => self.replace(Context::TagChildren),
            (Context::TagClosing, Rule::TagEnd) => {
                self.contexts.pop();
                if self.context() == Context::TagChildren {
                    self.contexts.pop();
                }
            }
            _ => {}
        }

        self.after_operand = match (context, token.rule) {
            (Context::Code, Rule::Space | Rule::Comment) => self.after_operand,
            (Context::Code, rule) => ends_operand(rule),
            (Context::String, Rule::StringLiteralDelimiter)
            | (Context::Template, Rule::TemplateLiteralDelimiter)
            | (Context::TagSelfClosing | Context::TagClosing, Rule::TagEnd) => true,
            _ => false,
        };
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.lexer.is_end() {
            self.finished = true;
            return None;
        }

        let rules = self.context().rules();
        match self.lexer.read_one_of(rules) {
            Ok(token) => {
                self.enter(&token);
                Some(Ok(token))
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Token cursor with unbounded lookahead over a [`Tokenizer`]
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokenizer: Tokenizer<'a>,
    lookahead: VecDeque<Token>,
    last_token: Option<Token>,
}

impl<'a> TokenStream<'a> {
    /// Create a token stream over `source`
    pub fn new(source: &'a Source) -> Self {
        Self::from_tokenizer(Tokenizer::new(source))
    }

    /// Wrap an existing tokenizer
    pub fn from_tokenizer(tokenizer: Tokenizer<'a>) -> Self {
        Self {
            tokenizer,
            lookahead: VecDeque::new(),
            last_token: None,
        }
    }

    fn fill(&mut self, count: usize) -> Result<(), LexerError> {
        while self.lookahead.len() < count {
            match self.tokenizer.next() {
                Some(token) => self.lookahead.push_back(token?),
                None => break,
            }
        }
        Ok(())
    }

    /// The token `n` positions after the current one, without consuming.
    ///
    /// `look_ahead(0)` is the current token.
    pub fn look_ahead(&mut self, n: usize) -> Result<Option<&Token>, LexerError> {
        self.fill(n + 1)?;
        Ok(self.lookahead.get(n))
    }

    /// The token at the cursor
    pub fn current(&mut self) -> Result<Option<&Token>, LexerError> {
        self.look_ahead(0)
    }

    /// Consume the current token
    pub fn next(&mut self) -> Result<Option<Token>, LexerError> {
        self.fill(1)?;
        let token = self.lookahead.pop_front();
        if let Some(token) = &token {
            self.last_token = Some(token.clone());
        }
        Ok(token)
    }

    /// Whether a current token exists
    pub fn valid(&mut self) -> Result<bool, LexerError> {
        Ok(self.current()?.is_some())
    }

    /// Consume `n` tokens
    pub fn skip(&mut self, n: usize) -> Result<(), LexerError> {
        for _ in 0..n {
            if self.next()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Consume tokens while they are spaces, line breaks or comments
    pub fn skip_white_space_and_comments(&mut self) -> Result<(), LexerError> {
        while let Some(token) = self.current()? {
            if !token.rule.is_trivia() {
                break;
            }
            self.next()?;
        }
        Ok(())
    }

    /// The most recently consumed token
    pub fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }
}

//! Lexer - reads tokens by rule on top of the scanner
//!
//! The lexer is driven by the parser: every call names the rules acceptable at
//! the cursor, so the same characters can lex differently depending on where
//! they appear (`<` opens a tag in an expression, text inside a tag is one
//! token, and so on).

use crate::error::{LexerError, ScannerError};
use crate::rule::Rule;
use crate::scanner::Scanner;
use crate::tokenizer::Token;
use core_types::{Position, Range, Source, SourcePath};

const SPACE: &[Rule] = &[Rule::Space, Rule::EndOfLine];
const SPACE_AND_COMMENTS: &[Rule] = &[Rule::Space, Rule::EndOfLine, Rule::Comment];

/// Rule-driven lexer over one source
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    source_path: SourcePath,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `source`
    pub fn new(source: &'a Source) -> Self {
        Self {
            scanner: Scanner::new(source.contents()),
            source_path: source.path().clone(),
        }
    }

    /// Symbolic path of the source being lexed
    pub fn source_path(&self) -> &SourcePath {
        &self.source_path
    }

    /// Read a token of `rule` or fail without consuming anything
    pub fn read(&mut self, rule: Rule) -> Result<Token, LexerError> {
        self.read_one_of(&[rule])
    }

    /// Read a token of any of `rules` or fail without consuming anything
    pub fn read_one_of(&mut self, rules: &[Rule]) -> Result<Token, LexerError> {
        match self.scanner.scan_one_of(rules) {
            Some(rule) => Ok(self.commit(rule)),
            None => {
                let error = self.failure(rules);
                self.scanner.dismiss();
                Err(error)
            }
        }
    }

    /// Read a token of `rule` if one is at the cursor
    pub fn probe(&mut self, rule: Rule) -> Option<Token> {
        self.probe_one_of(&[rule])
    }

    /// Read a token of any of `rules` if one is at the cursor
    pub fn probe_one_of(&mut self, rules: &[Rule]) -> Option<Token> {
        match self.scanner.scan_one_of(rules) {
            Some(rule) => Some(self.commit(rule)),
            None => {
                self.scanner.dismiss();
                None
            }
        }
    }

    /// Whether a token of `rule` is at the cursor. Never consumes.
    pub fn peek(&mut self, rule: Rule) -> bool {
        self.peek_one_of(&[rule]).is_some()
    }

    /// Which of `rules` matches at the cursor. Never consumes.
    pub fn peek_one_of(&mut self, rules: &[Rule]) -> Option<Rule> {
        let rule = self.scanner.scan_one_of(rules);
        self.scanner.dismiss();
        rule
    }

    /// Fail unless a token of `rule` is at the cursor. Never consumes.
    pub fn expect(&mut self, rule: Rule) -> Result<(), LexerError> {
        self.expect_one_of(&[rule]).map(|_| ())
    }

    /// Fail unless a token of any of `rules` is at the cursor. Never consumes.
    pub fn expect_one_of(&mut self, rules: &[Rule]) -> Result<Rule, LexerError> {
        let result = match self.scanner.scan_one_of(rules) {
            Some(rule) => Ok(rule),
            None => Err(self.failure(rules)),
        };
        self.scanner.dismiss();
        result
    }

    /// Skip spaces and line breaks
    pub fn skip_space(&mut self) {
        self.skip_all(SPACE);
    }

    /// Skip spaces, line breaks and comments
    pub fn skip_space_and_comments(&mut self) {
        self.skip_all(SPACE_AND_COMMENTS);
    }

    /// Whether every character has been consumed
    pub fn is_end(&self) -> bool {
        self.scanner.is_end()
    }

    /// Fail unless every character has been consumed
    pub fn assert_is_end(&self) -> Result<(), ScannerError> {
        self.scanner.assert_is_end()
    }

    /// Position of the cursor
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    fn skip_all(&mut self, rules: &[Rule]) {
        while self.scanner.scan_one_of(rules).is_some() {
            self.scanner.commit();
        }
        self.scanner.dismiss();
    }

    fn commit(&mut self, rule: Rule) -> Token {
        let buffer = self.scanner.buffer();
        let token = Token::new(
            rule,
            buffer.contents(),
            buffer.range(),
            self.source_path.clone(),
        );
        self.scanner.commit();
        token
    }

    fn failure(&self, rules: &[Rule]) -> LexerError {
        let buffer = self.scanner.buffer();
        if buffer.is_empty() {
            LexerError::UnexpectedEndOfSource {
                expected: rules.to_vec(),
                range: Range::empty_at(buffer.start()),
            }
        } else {
            LexerError::UnexpectedCharacterSequence {
                expected: rules.to_vec(),
                actual: buffer.contents().to_string(),
                range: buffer.range(),
            }
        }
    }
}

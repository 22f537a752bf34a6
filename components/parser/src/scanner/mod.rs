//! Backtracking scanner with a commit/dismiss protocol.
//!
//! The scanner keeps two cursors over the same source. `main` holds the
//! committed state; `branch` advances while a rule is being scanned. After a
//! scan the caller either [`commit`](Scanner::commit)s the branch or
//! [`dismiss`](Scanner::dismiss)es it, which gives unbounded lookahead at the
//! cost of one cursor copy.

mod buffer;
mod character_stream;

pub use buffer::Buffer;
pub use character_stream::CharacterStream;

use crate::error::ScannerError;
use crate::matcher::{MatchCursor, Signal};
use crate::rule::{matcher_for, Rule};
use core_types::{Position, Range};

#[derive(Debug, Clone)]
struct Cursor<'a> {
    stream: CharacterStream<'a>,
    buffer: Buffer,
}

impl<'a> Cursor<'a> {
    fn new(contents: &'a str) -> Self {
        Self {
            stream: CharacterStream::new(contents),
            buffer: Buffer::at(Position::ZERO),
        }
    }

    fn consume(&mut self, character: char) {
        self.buffer.append(character);
        self.stream.next();
    }
}

/// Character-level scanner over one source text
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    main: Cursor<'a>,
    branch: Cursor<'a>,
    halted: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `contents`
    pub fn new(contents: &'a str) -> Self {
        let main = Cursor::new(contents);
        Self {
            branch: main.clone(),
            main,
            halted: false,
        }
    }

    /// Scan a single rule on the branch cursor.
    ///
    /// # Panics
    ///
    /// Panics if the previous scan was neither committed nor dismissed.
    pub fn scan(&mut self, rule: Rule) -> bool {
        self.scan_one_of(&[rule]).is_some()
    }

    /// Scan all `rules` in lock-step and return the winner.
    ///
    /// A candidate drops out when it cancels. The first candidate, in
    /// argument order, to be satisfied at the earliest offset wins. When every
    /// candidate cancels the triggering character is kept in the buffer so
    /// that diagnostics can show it.
    ///
    /// # Panics
    ///
    /// Panics if the previous scan was neither committed nor dismissed.
    pub fn scan_one_of(&mut self, rules: &[Rule]) -> Option<Rule> {
        assert!(
            !self.halted,
            "scanner is halted; commit or dismiss the previous scan first"
        );
        self.halted = true;

        let mut candidates: Vec<(Rule, MatchCursor<'static>)> = rules
            .iter()
            .map(|rule| (*rule, matcher_for(*rule).cursor()))
            .collect();

        loop {
            let character = self.branch.stream.current();
            let mut satisfied = None;

            candidates.retain_mut(|(rule, cursor)| match cursor.feed(character) {
                Signal::Keep => true,
                Signal::Satisfied => {
                    satisfied.get_or_insert(*rule);
                    false
                }
                Signal::Cancel => false,
            });

            if satisfied.is_some() {
                return satisfied;
            }

            let Some(character) = character else {
                return None;
            };
            self.branch.consume(character);

            if candidates.is_empty() {
                return None;
            }
        }
    }

    /// Make the branch cursor the committed state and start a new lexeme
    pub fn commit(&mut self) {
        self.branch.buffer.flush();
        self.main = self.branch.clone();
        self.halted = false;
    }

    /// Roll the branch cursor back to the committed state
    pub fn dismiss(&mut self) {
        self.branch = self.main.clone();
        self.halted = false;
    }

    /// Characters accumulated by the last scan
    pub fn buffer(&self) -> &Buffer {
        &self.branch.buffer
    }

    /// Committed position
    pub fn position(&self) -> Position {
        self.main.stream.position()
    }

    /// Whether the committed cursor reached the end of the source
    pub fn is_end(&self) -> bool {
        self.main.stream.is_end()
    }

    /// Fail unless every character of the source has been committed
    pub fn assert_is_end(&self) -> Result<(), ScannerError> {
        if self.is_end() {
            return Ok(());
        }

        let rest = self.main.stream.rest();
        let characters: String = rest.chars().take_while(|c| *c != '\n').collect();
        let start = self.position();
        Err(ScannerError::UnexpectedCharacters {
            range: Range::new(start, start.advanced_by_str(&characters)),
            characters,
        })
    }
}

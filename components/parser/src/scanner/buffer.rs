//! Accumulator for the characters of the lexeme being scanned

use core_types::{Position, Range};

/// Characters appended since the last flush, with their start and end
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Buffer {
    contents: String,
    start: Position,
    end: Position,
}

impl Buffer {
    /// Empty buffer located at `position`
    pub fn at(position: Position) -> Self {
        Self {
            contents: String::new(),
            start: position,
            end: position,
        }
    }

    /// Append one character, moving `end` past it
    pub fn append(&mut self, character: char) {
        self.contents.push(character);
        self.end = self.end.advanced_by(character);
    }

    /// Drop the contents and continue from the current end
    pub fn flush(&mut self) {
        self.contents.clear();
        self.start = self.end;
    }

    /// Drop the contents and move `end` back to `start`
    pub fn reset(&mut self) {
        self.contents.clear();
        self.end = self.start;
    }

    /// Accumulated characters
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Position of the first accumulated character
    pub fn start(&self) -> Position {
        self.start
    }

    /// Position after the last accumulated character
    pub fn end(&self) -> Position {
        self.end
    }

    /// Range covered by the accumulated characters
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    /// Whether nothing has been appended since the last flush or reset
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

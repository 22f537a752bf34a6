//! Forward cursor over the characters of a source

use core_types::Position;

/// Byte index and position of the next character to read.
///
/// Cloning is cheap; the scanner rolls back by copying a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterStream<'a> {
    contents: &'a str,
    index: usize,
    position: Position,
}

impl<'a> CharacterStream<'a> {
    /// Stream positioned at the first character of `contents`
    pub fn new(contents: &'a str) -> Self {
        Self {
            contents,
            index: 0,
            position: Position::ZERO,
        }
    }

    /// The next character, `None` at the end
    pub fn current(&self) -> Option<char> {
        self.contents[self.index..].chars().next()
    }

    /// Move past the current character
    pub fn next(&mut self) {
        if let Some(character) = self.current() {
            self.index += character.len_utf8();
            self.position = self.position.advanced_by(character);
        }
    }

    /// Position of the current character
    pub fn position(&self) -> Position {
        self.position
    }

    /// Everything not read yet
    pub fn rest(&self) -> &'a str {
        &self.contents[self.index..]
    }

    /// Whether every character has been read
    pub fn is_end(&self) -> bool {
        self.index >= self.contents.len()
    }
}

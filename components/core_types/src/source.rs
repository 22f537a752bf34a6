//! Source buffers, positions and ranges.
//!
//! Positions are zero-based and advance one column per `char`, so multi-byte
//! characters never split a column. Ranges are half-open: `end` is the
//! position right after the last covered character.

use std::fmt;
use std::sync::Arc;

/// Symbolic name of a source buffer.
///
/// Nothing in the front end opens this path; it only labels tokens and
/// diagnostics and keys modules inside a loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePath(Arc<str>);

impl SourcePath {
    /// Create a source path from any string-like value
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(Arc::from(path.as_ref()))
    }

    /// Path used for sources that were not loaded from anywhere
    pub fn memory() -> Self {
        Self::new(":memory:")
    }

    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully materialized source text.
///
/// # Examples
///
/// ```
/// use core_types::Source;
///
/// let source = Source::from_string("struct Foo {}");
/// assert_eq!(source.contents(), "struct Foo {}");
/// assert_eq!(source.path().as_str(), ":memory:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    path: SourcePath,
    contents: Arc<str>,
}

impl Source {
    /// Create a source with an explicit symbolic path
    pub fn new(path: SourcePath, contents: impl AsRef<str>) -> Self {
        Self {
            path,
            contents: Arc::from(contents.as_ref()),
        }
    }

    /// Create an in-memory source
    pub fn from_string(contents: impl AsRef<str>) -> Self {
        Self::new(SourcePath::memory(), contents)
    }

    /// Symbolic path of this source
    pub fn path(&self) -> &SourcePath {
        &self.path
    }

    /// Full text of this source
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// A (line, column) position in a source, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Zero-based line number
    pub line_number: u32,
    /// Zero-based column number, counted in `char`s
    pub column_number: u32,
}

impl Position {
    /// The position of the first character of any source
    pub const ZERO: Position = Position {
        line_number: 0,
        column_number: 0,
    };

    /// Create a new position
    pub const fn new(line_number: u32, column_number: u32) -> Self {
        Self {
            line_number,
            column_number,
        }
    }

    /// Position right after `character` when it is read at `self`
    pub fn advanced_by(self, character: char) -> Self {
        if character == '\n' {
            Self::new(self.line_number + 1, 0)
        } else {
            Self::new(self.line_number, self.column_number + 1)
        }
    }

    /// Position right after reading every character of `text` from `self`
    pub fn advanced_by_str(self, text: &str) -> Self {
        text.chars().fold(self, Position::advanced_by)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_number + 1, self.column_number + 1)
    }
}

/// A half-open range `[start, end)` of positions.
///
/// `Display` renders the one-based start as `[line:column]`, the prefix every
/// diagnostic message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// First covered position
    pub start: Position,
    /// Position after the last covered character
    pub end: Position,
}

impl Range {
    /// Create a range. `start` must not come after `end`.
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start {start} lies after end {end}");
        Self { start, end }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`
    pub fn at(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// Empty range located at `position`
    pub fn empty_at(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Minimal range covering both positions, in whichever order they come
    pub fn from_positions(a: Position, b: Position) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// Minimal range covering `self` and `other`
    pub fn to(&self, other: &Range) -> Range {
        Range::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Whether the range covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `position` lies inside the range
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.start)
    }
}

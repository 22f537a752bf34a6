//! Composable character matchers.
//!
//! A [`Matcher`] is an immutable description; scanning drives a fresh
//! [`MatchCursor`] one character at a time. Every matcher sees one character
//! of lookahead: it reports [`Signal::Satisfied`] on the first character that
//! does *not* belong to the lexeme, which the scanner then leaves unconsumed.
//! At the end of the source the cursor is fed `None`.

/// Outcome of feeding one character to a [`MatchCursor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The character belongs to the lexeme, keep going
    Keep,
    /// The lexeme is complete; the character fed does not belong to it
    Satisfied,
    /// The input cannot match
    Cancel,
}

/// A set of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterSet {
    /// Exactly the listed characters
    Of(&'static str),
    /// Any character except the listed ones
    Except(&'static str),
    /// ASCII decimal digits
    Digits,
    /// ASCII hexadecimal digits
    HexDigits,
    /// Alphabetic characters and `_`
    WordStart,
    /// Alphanumeric characters and `_`
    WordCharacters,
    /// Word characters plus `-` and `:`, as used by tag and attribute names
    NameCharacters,
}

impl CharacterSet {
    /// Whether `character` belongs to this set
    pub fn contains(&self, character: char) -> bool {
        match self {
            CharacterSet::Of(characters) => characters.contains(character),
            CharacterSet::Except(characters) => !characters.contains(character),
            CharacterSet::Digits => character.is_ascii_digit(),
            CharacterSet::HexDigits => character.is_ascii_hexdigit(),
            CharacterSet::WordStart => character.is_alphabetic() || character == '_',
            CharacterSet::WordCharacters => is_word_character(character),
            CharacterSet::NameCharacters => {
                is_word_character(character) || character == '-' || character == ':'
            }
        }
    }
}

/// Whether `character` may appear in an identifier
pub fn is_word_character(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

/// Declarative description of a lexeme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Exactly this text
    Exact(&'static str),
    /// One or more characters of the set
    Characters(CharacterSet),
    /// Zero-width: succeeds iff the inner matcher cannot accept the next character
    Not(Box<Matcher>),
    /// Each matcher in turn
    Sequence(Vec<Matcher>),
    /// Exactly `n` characters of the set
    Fixed(usize, CharacterSet),
    /// The inner matcher, or nothing if it rejects its first character
    Optional(Box<Matcher>),
}

impl Matcher {
    /// Start matching from scratch
    pub fn cursor(&self) -> MatchCursor<'_> {
        MatchCursor::new(self)
    }

    /// Convenience constructor for [`Matcher::Not`]
    pub fn not(inner: Matcher) -> Self {
        Matcher::Not(Box::new(inner))
    }

    /// Convenience constructor for [`Matcher::Optional`]
    pub fn optional(inner: Matcher) -> Self {
        Matcher::Optional(Box::new(inner))
    }
}

/// In-flight state of one matcher over one scan
#[derive(Debug, Clone)]
pub struct MatchCursor<'m> {
    matcher: &'m Matcher,
    offset: usize,
    index: usize,
    inner: Option<Box<MatchCursor<'m>>>,
}

impl<'m> MatchCursor<'m> {
    fn new(matcher: &'m Matcher) -> Self {
        let inner = match matcher {
            Matcher::Sequence(matchers) => matchers.first().map(|m| Box::new(m.cursor())),
            Matcher::Optional(inner) => Some(Box::new(inner.cursor())),
            _ => None,
        };

        Self {
            matcher,
            offset: 0,
            index: 0,
            inner,
        }
    }

    /// Number of characters accepted so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Feed the next character (`None` at end of source)
    pub fn feed(&mut self, character: Option<char>) -> Signal {
        let signal = self.step(character);
        if signal == Signal::Keep {
            if character.is_none() {
                return Signal::Cancel;
            }
            self.offset += 1;
        }
        signal
    }

    fn step(&mut self, character: Option<char>) -> Signal {
        match self.matcher {
            Matcher::Exact(text) => match text.chars().nth(self.offset) {
                None => Signal::Satisfied,
                Some(expected) if character == Some(expected) => Signal::Keep,
                Some(_) => Signal::Cancel,
            },
            Matcher::Characters(set) => match character {
                Some(c) if set.contains(c) => Signal::Keep,
                _ if self.offset > 0 => Signal::Satisfied,
                _ => Signal::Cancel,
            },
            Matcher::Fixed(length, set) => {
                if self.offset == *length {
                    return Signal::Satisfied;
                }
                match character {
                    Some(c) if set.contains(c) => Signal::Keep,
                    _ => Signal::Cancel,
                }
            }
            Matcher::Not(inner) => match inner.cursor().feed(character) {
                Signal::Cancel => Signal::Satisfied,
                Signal::Keep | Signal::Satisfied => Signal::Cancel,
            },
            Matcher::Optional(_) => {
                let Some(inner) = self.inner.as_mut() else {
                    return Signal::Cancel;
                };
                match inner.feed(character) {
                    Signal::Cancel if inner.offset() == 0 => Signal::Satisfied,
                    signal => signal,
                }
            }
            Matcher::Sequence(matchers) => loop {
                let Some(inner) = self.inner.as_mut() else {
                    return Signal::Satisfied;
                };
                match inner.feed(character) {
                    Signal::Satisfied => {
                        self.index += 1;
                        self.inner = matchers.get(self.index).map(|m| Box::new(m.cursor()));
                    }
                    signal => return signal,
                }
            },
        }
    }
}

//! Lexical rules of the component language.
//!
//! A [`Rule`] is a plain tag; the matcher that implements it lives in a table
//! built once on first use and never mutated afterwards ([`matcher_for`]).

use crate::matcher::{CharacterSet, Matcher};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;

/// Token types produced by the lexer are exactly its rules
pub type TokenType = Rule;

/// Every lexical rule of the language
///
/// Variants are named after the lexeme they match.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Comment,

    KeywordFrom,
    KeywordImport,
    KeywordExport,
    KeywordEnum,
    KeywordStruct,
    KeywordComponent,
    KeywordMatch,
    KeywordDefault,
    KeywordReturn,
    KeywordTrue,
    KeywordFalse,
    KeywordNull,

    StringLiteralDelimiter,
    StringLiteralContent,
    TemplateLiteralDelimiter,
    TemplateLiteralContent,
    EscapeSequenceSingleCharacter,
    EscapeSequenceUnicode,

    IntegerBinary,
    IntegerOctal,
    IntegerHexadecimal,
    IntegerDecimal,
    Float,

    BracketCurlyOpen,
    BracketCurlyClose,
    BracketRoundOpen,
    BracketRoundClose,
    BracketSquareOpen,
    BracketSquareClose,
    BracketAngleOpen,
    BracketAngleClose,

    SymbolPeriod,
    SymbolColon,
    SymbolQuestionmark,
    SymbolOptchain,
    SymbolExclamationmark,
    SymbolComma,
    SymbolDash,
    SymbolPlus,
    SymbolAsterisk,
    SymbolSlashForward,
    SymbolPercent,
    SymbolArrowSingle,
    SymbolEquals,
    SymbolStrictEquals,
    SymbolNotEquals,
    SymbolGreaterThanOrEqual,
    SymbolLessThanOrEqual,
    SymbolBooleanAnd,
    SymbolBooleanOr,
    SymbolPipe,

    Word,
    Name,
    Text,
    TagEnd,

    Space,
    EndOfLine,
}

impl Rule {
    /// All rules, in declaration order
    pub const ALL: [Rule; 58] = [
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
        Rule::StringLiteralDelimiter,
        Rule::StringLiteralContent,
        Rule::TemplateLiteralDelimiter,
        Rule::TemplateLiteralContent,
        Rule::EscapeSequenceSingleCharacter,
        Rule::EscapeSequenceUnicode,
        Rule::IntegerBinary,
        Rule::IntegerOctal,
        Rule::IntegerHexadecimal,
        Rule::IntegerDecimal,
        Rule::Float,
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
        Rule::Name,
        Rule::Text,
        Rule::TagEnd,
        Rule::Space,
        Rule::EndOfLine,
    ];

    /// Whether this rule is a keyword
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Rule::KeywordFrom
                | Rule::KeywordImport
                | Rule::KeywordExport
                | Rule::KeywordEnum
                | Rule::KeywordStruct
                | Rule::KeywordComponent
                | Rule::KeywordMatch
                | Rule::KeywordDefault
                | Rule::KeywordReturn
                | Rule::KeywordTrue
                | Rule::KeywordFalse
                | Rule::KeywordNull
        )
    }

    /// Whether this rule only ever matches whitespace or comments
    pub fn is_trivia(self) -> bool {
        matches!(self, Rule::Comment | Rule::Space | Rule::EndOfLine)
    }

    /// Human-readable description used in diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            Rule::Comment => "comment",
            Rule::KeywordFrom => "\"from\"",
            Rule::KeywordImport => "\"import\"",
            Rule::KeywordExport => "\"export\"",
            Rule::KeywordEnum => "\"enum\"",
            Rule::KeywordStruct => "\"struct\"",
            Rule::KeywordComponent => "\"component\"",
            Rule::KeywordMatch => "\"match\"",
            Rule::KeywordDefault => "\"default\"",
            Rule::KeywordReturn => "\"return\"",
            Rule::KeywordTrue => "\"true\"",
            Rule::KeywordFalse => "\"false\"",
            Rule::KeywordNull => "\"null\"",
            Rule::StringLiteralDelimiter => "'\"'",
            Rule::StringLiteralContent => "string content",
            Rule::TemplateLiteralDelimiter => "\"`\"",
            Rule::TemplateLiteralContent => "template content",
            Rule::EscapeSequenceSingleCharacter => "escape sequence",
            Rule::EscapeSequenceUnicode => "unicode escape sequence",
            Rule::IntegerBinary => "binary integer",
            Rule::IntegerOctal => "octal integer",
            Rule::IntegerHexadecimal => "hexadecimal integer",
            Rule::IntegerDecimal => "decimal integer",
            Rule::Float => "float",
            Rule::BracketCurlyOpen => "\"{\"",
            Rule::BracketCurlyClose => "\"}\"",
            Rule::BracketRoundOpen => "\"(\"",
            Rule::BracketRoundClose => "\")\"",
            Rule::BracketSquareOpen => "\"[\"",
            Rule::BracketSquareClose => "\"]\"",
            Rule::BracketAngleOpen => "\"<\"",
            Rule::BracketAngleClose => "\">\"",
            Rule::SymbolPeriod => "\".\"",
            Rule::SymbolColon => "\":\"",
            Rule::SymbolQuestionmark => "\"?\"",
            Rule::SymbolOptchain => "\"?.\"",
            Rule::SymbolExclamationmark => "\"!\"",
            Rule::SymbolComma => "\",\"",
            Rule::SymbolDash => "\"-\"",
            Rule::SymbolPlus => "\"+\"",
            Rule::SymbolAsterisk => "\"*\"",
            Rule::SymbolSlashForward => "\"/\"",
            Rule::SymbolPercent => "\"%\"",
            Rule::SymbolArrowSingle => "\"->\"",
            Rule::SymbolEquals => "\"=\"",
            Rule::SymbolStrictEquals => "\"===\"",
            Rule::SymbolNotEquals => "\"!==\"",
            Rule::SymbolGreaterThanOrEqual => "\">=\"",
            Rule::SymbolLessThanOrEqual => "\"<=\"",
            Rule::SymbolBooleanAnd => "\"&&\"",
            Rule::SymbolBooleanOr => "\"||\"",
            Rule::SymbolPipe => "\"|\"",
            Rule::Word => "identifier",
            Rule::Name => "name",
            Rule::Text => "text",
            Rule::TagEnd => "\">\"",
            Rule::Space => "space",
            Rule::EndOfLine => "line break",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Render a set of rules as `a, b or c`
pub fn describe_rules(rules: &[Rule]) -> String {
    match rules {
        [] => "nothing".to_string(),
        [only] => only.describe().to_string(),
        [init @ .., last] => format!(
            "{} or {}",
            init.iter().map(|rule| rule.describe()).collect::<Vec<_>>().join(", "),
            last.describe()
        ),
    }
}

static MATCHERS: Lazy<FxHashMap<Rule, Matcher>> =
    Lazy::new(|| Rule::ALL.iter().map(|rule| (*rule, build_matcher(*rule))).collect());

/// The matcher implementing `rule`
pub fn matcher_for(rule: Rule) -> &'static Matcher {
    &MATCHERS[&rule]
}

fn keyword(text: &'static str) -> Matcher {
    Matcher::Sequence(vec![
        Matcher::Exact(text),
        Matcher::not(Matcher::Characters(CharacterSet::WordCharacters)),
    ])
}

fn not_followed_by(text: &'static str, forbidden: &'static str) -> Matcher {
    Matcher::Sequence(vec![
        Matcher::Exact(text),
        Matcher::not(Matcher::Characters(CharacterSet::Of(forbidden))),
    ])
}

fn identifier(rest: CharacterSet) -> Matcher {
    Matcher::Sequence(vec![
        Matcher::Fixed(1, CharacterSet::WordStart),
        Matcher::optional(Matcher::Characters(rest)),
    ])
}

fn prefixed_integer(prefix: &'static str, digits: CharacterSet) -> Matcher {
    Matcher::Sequence(vec![Matcher::Exact(prefix), Matcher::Characters(digits)])
}

fn build_matcher(rule: Rule) -> Matcher {
    match rule {
        Rule::Comment => Matcher::Sequence(vec![
            Matcher::Exact("#"),
            Matcher::optional(Matcher::Characters(CharacterSet::Except("\n"))),
        ]),

        Rule::KeywordFrom => keyword("from"),
        Rule::KeywordImport => keyword("import"),
        Rule::KeywordExport => keyword("export"),
        Rule::KeywordEnum => keyword("enum"),
        Rule::KeywordStruct => keyword("struct"),
        Rule::KeywordComponent => keyword("component"),
        Rule::KeywordMatch => keyword("match"),
        Rule::KeywordDefault => keyword("default"),
        Rule::KeywordReturn => keyword("return"),
        Rule::KeywordTrue => keyword("true"),
        Rule::KeywordFalse => keyword("false"),
        Rule::KeywordNull => keyword("null"),

        Rule::StringLiteralDelimiter => Matcher::Exact("\""),
        Rule::StringLiteralContent => Matcher::Characters(CharacterSet::Except("\"\\\n")),
        Rule::TemplateLiteralDelimiter => Matcher::Exact("`"),
        Rule::TemplateLiteralContent => Matcher::Characters(CharacterSet::Except("`{\\")),
        Rule::EscapeSequenceSingleCharacter => Matcher::Sequence(vec![
            Matcher::Exact("\\"),
            Matcher::Fixed(1, CharacterSet::Of("\\\"'`{}nrt")),
        ]),
        Rule::EscapeSequenceUnicode => Matcher::Sequence(vec![
            Matcher::Exact("\\u"),
            Matcher::Fixed(4, CharacterSet::HexDigits),
        ]),

        Rule::IntegerBinary => prefixed_integer("0b", CharacterSet::Of("01")),
        Rule::IntegerOctal => prefixed_integer("0o", CharacterSet::Of("01234567")),
        Rule::IntegerHexadecimal => prefixed_integer("0x", CharacterSet::HexDigits),
        Rule::IntegerDecimal => Matcher::Sequence(vec![
            Matcher::Characters(CharacterSet::Digits),
            Matcher::not(Matcher::Characters(CharacterSet::Of(".xbo"))),
        ]),
        Rule::Float => Matcher::Sequence(vec![
            Matcher::Characters(CharacterSet::Digits),
            Matcher::Exact("."),
            Matcher::Characters(CharacterSet::Digits),
            Matcher::optional(Matcher::Sequence(vec![
                Matcher::Fixed(1, CharacterSet::Of("eE")),
                Matcher::optional(Matcher::Fixed(1, CharacterSet::Of("+-"))),
                Matcher::Characters(CharacterSet::Digits),
            ])),
        ]),

        Rule::BracketCurlyOpen => Matcher::Exact("{"),
        Rule::BracketCurlyClose => Matcher::Exact("}"),
        Rule::BracketRoundOpen => Matcher::Exact("("),
        Rule::BracketRoundClose => Matcher::Exact(")"),
        Rule::BracketSquareOpen => Matcher::Exact("["),
        Rule::BracketSquareClose => Matcher::Exact("]"),
        Rule::BracketAngleOpen => not_followed_by("<", "="),
        Rule::BracketAngleClose => not_followed_by(">", "="),

        Rule::SymbolPeriod => Matcher::Exact("."),
        Rule::SymbolColon => Matcher::Exact(":"),
        Rule::SymbolQuestionmark => not_followed_by("?", "."),
        Rule::SymbolOptchain => Matcher::Exact("?."),
        Rule::SymbolExclamationmark => not_followed_by("!", "="),
        Rule::SymbolComma => Matcher::Exact(","),
        Rule::SymbolDash => not_followed_by("-", ">"),
        Rule::SymbolPlus => Matcher::Exact("+"),
        Rule::SymbolAsterisk => Matcher::Exact("*"),
        Rule::SymbolSlashForward => Matcher::Exact("/"),
        Rule::SymbolPercent => Matcher::Exact("%"),
        Rule::SymbolArrowSingle => Matcher::Exact("->"),
        Rule::SymbolEquals => not_followed_by("=", "="),
        Rule::SymbolStrictEquals => Matcher::Exact("==="),
        Rule::SymbolNotEquals => Matcher::Exact("!=="),
        Rule::SymbolGreaterThanOrEqual => Matcher::Exact(">="),
        Rule::SymbolLessThanOrEqual => Matcher::Exact("<="),
        Rule::SymbolBooleanAnd => Matcher::Exact("&&"),
        Rule::SymbolBooleanOr => Matcher::Exact("||"),
        Rule::SymbolPipe => not_followed_by("|", "|"),

        Rule::Word => identifier(CharacterSet::WordCharacters),
        Rule::Name => identifier(CharacterSet::NameCharacters),
        Rule::Text => Matcher::Characters(CharacterSet::Except("<{")),
        Rule::TagEnd => Matcher::Exact(">"),

        Rule::Space => Matcher::Characters(CharacterSet::Of(" \t")),
        Rule::EndOfLine => Matcher::Characters(CharacterSet::Of("\r\n")),
    }
}

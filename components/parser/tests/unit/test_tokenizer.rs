//! Unit tests for the tokenizer and the token stream

use core_types::{Range, Source};
use parser::{LexerError, Rule, TokenStream, Tokenizer};
use proptest::prelude::*;

fn rules(source: &str) -> Vec<Rule> {
    let source = Source::from_string(source);
    Tokenizer::new(&source)
        .map(|token| token.map(|token| token.rule))
        .collect::<Result<_, _>>()
        .unwrap()
}

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_struct() {
        assert_eq!(
            rules("struct P {\n  x: ?string\n}"),
            vec![
                Rule::KeywordStruct,
                Rule::Space,
                Rule::Word,
                Rule::Space,
                Rule::BracketCurlyOpen,
                Rule::EndOfLine,
                Rule::Space,
                Rule::Word,
                Rule::SymbolColon,
                Rule::Space,
                Rule::SymbolQuestionmark,
                Rule::Word,
                Rule::EndOfLine,
                Rule::BracketCurlyClose,
            ]
        );
    }

    #[test]
    fn test_keywords_inside_strings_are_content() {
        assert_eq!(
            rules("\"return\""),
            vec![
                Rule::StringLiteralDelimiter,
                Rule::StringLiteralContent,
                Rule::StringLiteralDelimiter,
            ]
        );
    }

    #[test]
    fn test_nested_template_interpolation() {
        assert_eq!(
            rules("`a{ `b{c}` }d`"),
            vec![
                Rule::TemplateLiteralDelimiter,
                Rule::TemplateLiteralContent,
                Rule::BracketCurlyOpen,
                Rule::Space,
                Rule::TemplateLiteralDelimiter,
                Rule::TemplateLiteralContent,
                Rule::BracketCurlyOpen,
                Rule::Word,
                Rule::BracketCurlyClose,
                Rule::TemplateLiteralDelimiter,
                Rule::Space,
                Rule::BracketCurlyClose,
                Rule::TemplateLiteralContent,
                Rule::TemplateLiteralDelimiter,
            ]
        );
    }

    #[test]
    fn test_tag_tokens() {
        assert_eq!(
            rules("<a href=\"x\">hi {y}</a>"),
            vec![
                Rule::BracketAngleOpen,
                Rule::Name,
                Rule::Space,
                Rule::Name,
                Rule::SymbolEquals,
                Rule::StringLiteralDelimiter,
                Rule::StringLiteralContent,
                Rule::StringLiteralDelimiter,
                Rule::TagEnd,
                Rule::Text,
                Rule::BracketCurlyOpen,
                Rule::Word,
                Rule::BracketCurlyClose,
                Rule::BracketAngleOpen,
                Rule::SymbolSlashForward,
                Rule::Name,
                Rule::TagEnd,
            ]
        );
    }

    #[test]
    fn test_self_closing_tag_returns_to_code() {
        assert_eq!(
            rules("<br />=x"),
            vec![
                Rule::BracketAngleOpen,
                Rule::Name,
                Rule::Space,
                Rule::SymbolSlashForward,
                Rule::TagEnd,
                Rule::SymbolEquals,
                Rule::Word,
            ]
        );
    }

    #[test]
    fn test_less_than_after_operand_is_a_comparison() {
        assert_eq!(
            rules("a <b"),
            vec![Rule::Word, Rule::Space, Rule::BracketAngleOpen, Rule::Word]
        );
    }

    #[test]
    fn test_tag_text_may_contain_any_character() {
        let text = "component A {\n  return <p>it's @home & \"free</p>\n}";
        let source = Source::from_string(text);
        let tokens = Tokenizer::new(&source)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tokens
            .iter()
            .any(|token| token.rule == Rule::Text && token.value == "it's @home & \"free"));
        let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
        assert_eq!(rebuilt, text);
        assert_eq!(tokens.last().unwrap().rule, Rule::BracketCurlyClose);
    }

    #[test]
    fn test_error_ends_iteration() {
        let source = Source::from_string("a @ b");
        let mut tokenizer = Tokenizer::new(&source);

        assert_eq!(tokenizer.next().unwrap().unwrap().value, "a");
        assert_eq!(tokenizer.next().unwrap().unwrap().rule, Rule::Space);
        let error = tokenizer.next().unwrap().unwrap_err();
        assert!(matches!(
            error,
            LexerError::UnexpectedCharacterSequence { ref actual, .. } if actual == "@"
        ));
        assert_eq!(error.range(), Range::at(0, 2, 0, 3));
        assert!(tokenizer.next().is_none());
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_token_stream_lookahead_does_not_consume() {
        let source = Source::from_string("a b c");
        let mut stream = TokenStream::new(&source);

        assert_eq!(stream.look_ahead(2).unwrap().unwrap().value, "b");
        assert_eq!(stream.current().unwrap().unwrap().value, "a");
        assert!(stream.last_token().is_none());

        assert_eq!(stream.next().unwrap().unwrap().value, "a");
        stream.skip_white_space_and_comments().unwrap();
        assert_eq!(stream.current().unwrap().unwrap().value, "b");
        assert_eq!(stream.last_token().unwrap().rule, Rule::Space);
    }

    #[test]
    fn test_token_stream_skip_past_end() {
        let source = Source::from_string("x # trailing");
        let mut stream = TokenStream::new(&source);

        stream.skip(1).unwrap();
        stream.skip_white_space_and_comments().unwrap();
        assert!(!stream.valid().unwrap());
        stream.skip(5).unwrap();
        assert!(stream.next().unwrap().is_none());
        assert_eq!(stream.last_token().unwrap().rule, Rule::Comment);
    }
}

const FRAGMENTS: &[&str] = &[
    "component",
    "Greeting",
    "return",
    "from",
    "defaults",
    "42",
    "0xff",
    "0b101",
    "3.14",
    "\"text\"",
    "\"esc\\\"aped\"",
    "\"\\u00e9\"",
    "`a{b}c`",
    "`{ x ? `y` : \"z\" }`",
    "# comment\n",
    "{",
    "}",
    "(",
    ")",
    "[]",
    "<",
    ">",
    "<=",
    "===",
    "!==",
    "&&",
    "||",
    "?.",
    "->",
    "|",
    "return <p>it's @home & \"free</p>",
    "return <br />",
    "return <a href={`x{y}`} on=\"1\">= {z < 2} text<b>!</b></a>",
];

fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(FRAGMENTS),
            prop::sample::select(&[" ", "\n", "\t", "  "][..]),
        ),
        0..24,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, separator)| format!("{fragment}{separator}"))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn prop_tokens_reconstruct_source(text in source_text()) {
        let source = Source::from_string(&text);
        let tokens = Tokenizer::new(&source).collect::<Result<Vec<_>, _>>();
        prop_assert!(tokens.is_ok(), "{:?}", tokens);

        let tokens = tokens.unwrap();
        prop_assert!(tokens.iter().all(|token| !token.value.is_empty()));
        let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_token_ranges_are_contiguous(text in source_text()) {
        let source = Source::from_string(&text);
        let tokens: Vec<_> = Tokenizer::new(&source).collect::<Result<_, _>>().unwrap();

        for pair in tokens.windows(2) {
            prop_assert_eq!(pair[0].range.end, pair[1].range.start);
        }
    }
}

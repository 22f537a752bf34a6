//! Unit tests for the scanner and its buffer

use core_types::{Position, Range};
use parser::rule::Rule;
use parser::scanner::Buffer;
use parser::Scanner;
use proptest::prelude::*;

fn any_rule() -> impl Strategy<Value = Rule> {
    (0..Rule::ALL.len()).prop_map(|index| Rule::ALL[index])
}

#[cfg(test)]
mod scanner_tests {
    use super::*;

    #[test]
    fn test_skipping_keyword_then_reading_word() {
        let mut scanner = Scanner::new("enum Color");
        assert!(scanner.scan(Rule::KeywordEnum));
        scanner.commit();
        assert!(scanner.scan(Rule::Space));
        scanner.commit();

        assert_eq!(scanner.scan_one_of(&[Rule::KeywordEnum, Rule::Word]), Some(Rule::Word));
        assert_eq!(scanner.buffer().contents(), "Color");
        assert_eq!(scanner.buffer().range(), Range::at(0, 5, 0, 10));
    }

    #[test]
    fn test_commit_then_dismiss_keeps_committed_position() {
        let mut scanner = Scanner::new("a b");
        assert!(scanner.scan(Rule::Word));
        scanner.commit();
        assert!(!scanner.scan(Rule::Word));
        scanner.dismiss();

        assert_eq!(scanner.position(), Position::new(0, 1));
    }

    #[test]
    fn test_arrow_is_not_a_dash() {
        let mut scanner = Scanner::new("->");
        assert_eq!(
            scanner.scan_one_of(&[Rule::SymbolDash, Rule::SymbolArrowSingle]),
            Some(Rule::SymbolArrowSingle)
        );
    }

    #[test]
    fn test_decimal_refuses_radix_prefix() {
        let mut scanner = Scanner::new("0x1F");
        assert_eq!(
            scanner.scan_one_of(&[Rule::IntegerDecimal, Rule::IntegerHexadecimal]),
            Some(Rule::IntegerHexadecimal)
        );
        assert_eq!(scanner.buffer().contents(), "0x1F");
    }

    #[test]
    fn test_float_with_exponent() {
        let mut scanner = Scanner::new("2.5e-3;");
        assert_eq!(
            scanner.scan_one_of(&[Rule::IntegerDecimal, Rule::Float]),
            Some(Rule::Float)
        );
        assert_eq!(scanner.buffer().contents(), "2.5e-3");
    }

    #[test]
    fn test_comment_stops_before_line_break() {
        let mut scanner = Scanner::new("# note\nnext");
        assert!(scanner.scan(Rule::Comment));
        assert_eq!(scanner.buffer().contents(), "# note");
    }
}

proptest! {
    #[test]
    fn prop_scan_then_dismiss_changes_nothing(input in "\\PC{0,24}", rule in any_rule()) {
        let mut scanner = Scanner::new(&input);
        let position = scanner.position();
        let buffer = scanner.buffer().clone();

        scanner.scan(rule);
        scanner.dismiss();

        prop_assert_eq!(scanner.position(), position);
        prop_assert_eq!(scanner.buffer(), &buffer);
    }

    #[test]
    fn prop_ties_go_to_the_first_rule(word in "[a-z][a-z0-9_]{0,12}", terminator in "[ ;)\n]") {
        let input = format!("{word}{terminator}");

        let mut scanner = Scanner::new(&input);
        prop_assert_eq!(scanner.scan_one_of(&[Rule::Word, Rule::Name]), Some(Rule::Word));
        scanner.dismiss();
        prop_assert_eq!(scanner.scan_one_of(&[Rule::Name, Rule::Word]), Some(Rule::Name));
    }

    #[test]
    fn prop_newline_moves_to_next_line(
        line in 0u32..100,
        column in 0u32..100,
        before in "[^\n]{0,16}",
        after in "[^\n]{0,16}",
    ) {
        let mut buffer = Buffer::at(Position::new(line, column));
        for character in before.chars().chain(std::iter::once('\n')).chain(after.chars()) {
            buffer.append(character);
        }

        prop_assert_eq!(buffer.end().line_number, line + 1);
        prop_assert_eq!(buffer.end().column_number, after.chars().count() as u32);
    }

    #[test]
    fn prop_plain_characters_advance_column(column in 0u32..100, text in "[^\n]{0,32}") {
        let mut buffer = Buffer::at(Position::new(3, column));
        for character in text.chars() {
            buffer.append(character);
        }

        prop_assert_eq!(buffer.end(), Position::new(3, column + text.chars().count() as u32));
        prop_assert_eq!(buffer.contents(), text.as_str());
    }
}

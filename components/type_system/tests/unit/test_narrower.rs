//! Unit tests for condition narrowing

use core_types::Source;
use parser::parse_expression;
use type_system::{NarrowedTypes, NarrowingContext, Scope, Type, TypeNarrower};

fn narrow(text: &str, context: NarrowingContext) -> NarrowedTypes {
    let mut scope = Scope::new();
    scope.define_value("x", Type::String.nullable());
    scope.define_value("count", Type::Integer.nullable());
    scope.define_value("flag", Type::Boolean);

    let expression = parse_expression(&Source::from_string(text)).unwrap();
    TypeNarrower::new(&scope).narrow_types_of_symbols_in(&expression, context)
}

fn only(narrowed: &NarrowedTypes, name: &str) -> String {
    assert_eq!(narrowed.len(), 1, "{narrowed:?}");
    narrowed.get(name).unwrap().to_string()
}

#[cfg(test)]
mod identifier_tests {
    use super::*;

    #[test]
    fn test_nullable_identifier() {
        assert_eq!(only(&narrow("x", NarrowingContext::Truthy), "x"), "string");
        assert_eq!(only(&narrow("x", NarrowingContext::Falsy), "x"), "null");
    }

    #[test]
    fn test_non_nullable_identifier_is_left_alone() {
        assert!(narrow("flag", NarrowingContext::Truthy).is_empty());
        assert!(narrow("flag", NarrowingContext::Falsy).is_empty());
    }
}

#[cfg(test)]
mod comparison_tests {
    use super::*;

    #[test]
    fn test_null_comparison() {
        assert_eq!(only(&narrow("x === null", NarrowingContext::Truthy), "x"), "null");
        assert_eq!(only(&narrow("x === null", NarrowingContext::Falsy), "x"), "string");
        assert_eq!(only(&narrow("x !== null", NarrowingContext::Truthy), "x"), "string");
        assert_eq!(only(&narrow("null === x", NarrowingContext::Truthy), "x"), "null");
    }

    #[test]
    fn test_boolean_comparison() {
        assert_eq!(only(&narrow("x === true", NarrowingContext::Truthy), "x"), "string");
        assert_eq!(only(&narrow("x === false", NarrowingContext::Truthy), "x"), "null");
        assert_eq!(only(&narrow("false !== x", NarrowingContext::Truthy), "x"), "string");
    }

    #[test]
    fn test_other_comparisons_narrow_nothing() {
        assert!(narrow("x === \"a\"", NarrowingContext::Truthy).is_empty());
        assert!(narrow("count > 1", NarrowingContext::Truthy).is_empty());
    }
}

#[cfg(test)]
mod logical_tests {
    use super::*;

    #[test]
    fn test_and_in_truthy_context() {
        let narrowed = narrow("x && count !== null", NarrowingContext::Truthy);
        assert_eq!(narrowed.get("x"), Some(&Type::String));
        assert_eq!(narrowed.get("count"), Some(&Type::Integer));
    }

    #[test]
    fn test_or_in_falsy_context() {
        let narrowed = narrow("x || count", NarrowingContext::Falsy);
        assert_eq!(narrowed.get("x"), Some(&Type::Null));
        assert_eq!(narrowed.get("count"), Some(&Type::Null));
    }

    #[test]
    fn test_later_binding_wins() {
        let narrowed = narrow("x && x === null", NarrowingContext::Truthy);
        assert_eq!(only(&narrowed, "x"), "null");
    }

    #[test]
    fn test_negated_or() {
        let narrowed = narrow("!(x || count)", NarrowingContext::Truthy);
        assert_eq!(narrowed.len(), 2);
        assert_eq!(narrowed.get("count"), Some(&Type::Null));
    }

    #[test]
    fn test_unrelated_expressions() {
        assert!(narrow("x ? 1 : 2", NarrowingContext::Truthy).is_empty());
        assert!(narrow("42", NarrowingContext::Falsy).is_empty());
    }
}

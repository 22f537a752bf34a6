//! Parser -> Type System Integration Tests
//!
//! Tests that expressions produced by the parser resolve to the expected
//! static types, including precedence, narrowing and generic calls.

use core_types::{Diagnostic, Source};
use parser::ast::ExpressionNode;
use parser::parse_expression;
use std::rc::Rc;
use type_system::{
    GenericType, NarrowingContext, Scope, StructType, Type, TypeNarrower, TypeResolver,
};

fn parse(text: &str) -> ExpressionNode {
    parse_expression(&Source::from_string(text)).expect("Parse failed")
}

fn scope() -> Scope<'static> {
    let item = Type::Struct(Rc::new(StructType {
        name: "Item".to_string(),
        properties: vec![
            ("label".to_string(), Type::String),
            ("price".to_string(), Type::Number),
            ("quantity".to_string(), Type::Integer),
        ],
    }));
    let t = GenericType::new("T");

    let mut scope = Scope::with_builtins();
    scope.define_value("a", Type::Integer);
    scope.define_value("b", Type::Integer);
    scope.define_value("c", Type::Integer);
    scope.define_value("x", Type::String.nullable());
    scope.define_value("items", Type::array(item.clone()));
    scope.define_value("selected", item.nullable());
    scope.define_value(
        "last",
        Type::function(vec![Type::array(Type::generic(&t))], Type::generic(&t).nullable()),
    );
    scope
}

fn type_of(text: &str) -> String {
    let scope = scope();
    TypeResolver::new(&scope)
        .resolve_type_of(&parse(text))
        .expect("Resolution failed")
        .to_string()
}

/// Test: Precedence shape and arithmetic type agree
#[test]
fn test_arithmetic_chain() {
    let expression = parse("42 * a / 23 + b - 17 * c");
    assert_eq!(expression.to_string(), "((((42 * a) / 23) + b) - (17 * c))");
    assert_eq!(type_of("42 * a / 23 + b - 17 * c"), "number");
    assert_eq!(type_of("42 * a + b - 17 * c"), "integer");
}

/// Test: Logical operators keep the possibly falsy part of the left side
#[test]
fn test_logical_operators() {
    assert_eq!(type_of("true && false"), "boolean");
    assert_eq!(type_of("true && 42"), "boolean|integer");
    assert_eq!(type_of("x && items.length"), "string|null|integer");
}

/// Test: Narrowing results for a nullable name
#[test]
fn test_narrowing_results() {
    let scope = scope();
    let narrower = TypeNarrower::new(&scope);

    let bare = parse("x");
    let truthy = narrower.narrow_types_of_symbols_in(&bare, NarrowingContext::Truthy);
    let falsy = narrower.narrow_types_of_symbols_in(&bare, NarrowingContext::Falsy);
    assert_eq!(truthy.get("x"), Some(&Type::String));
    assert_eq!(falsy.get("x"), Some(&Type::Null));

    let null_check = parse("x === null");
    let truthy = narrower.narrow_types_of_symbols_in(&null_check, NarrowingContext::Truthy);
    let falsy = narrower.narrow_types_of_symbols_in(&null_check, NarrowingContext::Falsy);
    assert_eq!(truthy.get("x"), Some(&Type::Null));
    assert_eq!(falsy.get("x"), Some(&Type::String));
}

/// Test: Generic call result feeds further resolution
#[test]
fn test_generic_call_chain() {
    assert_eq!(type_of("last(items)"), "Item|null");
    assert_eq!(type_of("last(items)?.price"), "number|null");
    assert_eq!(type_of("items[0].quantity * 2"), "integer");
}

/// Test: Conditional rendering inside markup
#[test]
fn test_conditional_markup() {
    assert_eq!(
        type_of("<ul>{selected ? <li>{selected.label}</li> : null}</ul>"),
        "slot"
    );
    assert_eq!(
        type_of("selected !== null ? `{selected.label}: {selected.price}` : \"none\""),
        "string"
    );
}

/// Test: Errors carry the range of the offending sub-expression
#[test]
fn test_error_ranges_point_into_source() {
    let scope = scope();
    let error = TypeResolver::new(&scope)
        .resolve_type_of(&parse("<p>{selected.label}</p>"))
        .unwrap_err();

    assert_eq!(error.code(), 5004);
    assert_eq!(error.report().to_string().split(' ').next(), Some("[1:5]"));
}

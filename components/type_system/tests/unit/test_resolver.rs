//! Unit tests for expression type resolution

use core_types::{Range, Source};
use parser::parse_expression;
use std::rc::Rc;
use type_system::*;

fn status() -> Rc<EnumStaticType> {
    Rc::new(EnumStaticType {
        name: "Status".to_string(),
        members: vec![
            EnumMember {
                name: "ACTIVE".to_string(),
                value: Type::Literal(LiteralType::String("active".to_string())),
            },
            EnumMember {
                name: "BLOCKED".to_string(),
                value: Type::Literal(LiteralType::Integer(2)),
            },
        ],
    })
}

fn globals() -> Scope<'static> {
    let user = Type::Struct(Rc::new(StructType {
        name: "User".to_string(),
        properties: vec![
            ("name".to_string(), Type::String),
            ("email".to_string(), Type::String.nullable()),
            ("tags".to_string(), Type::array(Type::String)),
        ],
    }));
    let card = Type::Component(Rc::new(ComponentType {
        name: "Card".to_string(),
        props: vec![
            ("title".to_string(), Type::String),
            ("subtitle".to_string(), Type::String.nullable()),
        ],
    }));
    let t = GenericType::new("T");

    let mut scope = Scope::with_builtins();
    scope.define_value("user", user.clone());
    scope.define_value("maybe", user.nullable());
    scope.define_value("flag", Type::Boolean);
    scope.define_value("Status", Type::EnumStatic(status()));
    scope.define_value(
        "status",
        Type::EnumInstance(EnumInstanceType {
            enum_type: status(),
            member: None,
        }),
    );
    scope.define_value("Card", card);
    scope.define_value(
        "first",
        Type::function(vec![Type::array(Type::generic(&t))], Type::generic(&t)),
    );
    scope.define_value(
        "format",
        Type::function(vec![Type::String, Type::Integer], Type::String),
    );
    scope
}

fn resolve(text: &str) -> TypeResult<Type> {
    let scope = globals();
    let expression = parse_expression(&Source::from_string(text)).unwrap();
    TypeResolver::new(&scope).resolve_type_of(&expression)
}

fn type_of(text: &str) -> String {
    resolve(text).unwrap().to_string()
}

#[cfg(test)]
mod access_tests {
    use super::*;

    #[test]
    fn test_struct_properties() {
        assert_eq!(type_of("user.name"), "string");
        assert_eq!(type_of("user.email"), "string|null");
        assert_eq!(type_of("user.tags.length"), "integer");
    }

    #[test]
    fn test_access_on_nullable_value() {
        let error = resolve("maybe.name").unwrap_err();
        assert!(matches!(
            error,
            TypeError::AccessOnNullableValue { ref key, range, .. }
                if key == "name" && range == Range::at(0, 0, 0, 10)
        ));
    }

    #[test]
    fn test_optional_access_adds_null() {
        assert_eq!(type_of("maybe?.name"), "string|null");
        assert_eq!(type_of("user?.name"), "string|null");
        assert_eq!(type_of("null?.name"), "null");
    }

    #[test]
    fn test_missing_member() {
        let error = resolve("user.age").unwrap_err();
        assert_eq!(error.to_string(), "[1:1] Type User has no member \"age\"");
    }

    #[test]
    fn test_enum_members_and_values() {
        assert_eq!(type_of("Status.ACTIVE"), "Status.ACTIVE");
        assert_eq!(type_of("Status.ACTIVE.value"), "\"active\"");
        assert_eq!(type_of("status.value"), "\"active\"|2");
        assert!(matches!(
            resolve("Status.GONE"),
            Err(TypeError::MemberNotFound { .. })
        ));
    }

    #[test]
    fn test_index() {
        assert_eq!(type_of("user.tags[0]"), "string");
        assert!(matches!(
            resolve("user.tags[\"a\"]"),
            Err(TypeError::InvalidIndexType { .. })
        ));
        assert!(matches!(resolve("user[0]"), Err(TypeError::NotIndexable { .. })));
    }
}

#[cfg(test)]
mod operator_tests {
    use super::*;

    #[test]
    fn test_and_narrows_its_right_side() {
        assert_eq!(type_of("maybe && maybe.name"), "null|string");
    }

    #[test]
    fn test_or_keeps_truthy_left_side() {
        assert_eq!(type_of("user.email || \"none\""), "string");
        assert_eq!(type_of("maybe || user"), "User");
    }

    #[test]
    fn test_ternary_narrows_branches() {
        assert_eq!(type_of("maybe ? maybe.name : \"anonymous\""), "string");
        assert_eq!(type_of("maybe === null ? 0 : maybe.tags.length"), "integer");
        assert_eq!(type_of("flag ? 1 : null"), "integer|null");
    }

    #[test]
    fn test_comparison_is_boolean() {
        assert_eq!(type_of("user.name === \"a\""), "boolean");
        assert_eq!(type_of("user.tags.length >= 2"), "boolean");
    }

    #[test]
    fn test_illegal_operation_names_both_types() {
        let error = resolve("user.email * 2").unwrap_err();
        assert_eq!(
            error.to_string(),
            "[1:1] Operator \"*\" cannot be applied to string|null and integer"
        );
    }
}

#[cfg(test)]
mod call_tests {
    use super::*;

    #[test]
    fn test_generic_return_is_inferred() {
        assert_eq!(type_of("first(user.tags)"), "string");
        assert!(matches!(
            resolve("first(user.tags).length"),
            Err(TypeError::MemberNotFound { ref key, .. }) if key == "length"
        ));
    }

    #[test]
    fn test_argument_mismatch() {
        match resolve("first(1)") {
            Err(TypeError::ArgumentTypeMismatch {
                expected,
                actual,
                range,
            }) => {
                assert_eq!(expected.to_string(), "T[]");
                assert_eq!(actual, Type::Integer);
                assert_eq!(range, Range::at(0, 6, 0, 7));
            }
            other => panic!("expected an argument mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_arity() {
        assert!(matches!(
            resolve("format(\"a\")"),
            Err(TypeError::ArityMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
        assert_eq!(type_of("format(\"a\", 1)"), "string");
    }

    #[test]
    fn test_not_callable() {
        assert!(matches!(resolve("user()"), Err(TypeError::NotCallable { .. })));
    }
}

#[cfg(test)]
mod match_tests {
    use super::*;

    #[test]
    fn test_match_is_union_of_arms() {
        assert_eq!(
            type_of("match (user.name) {\n  \"a\" -> 1\n  default -> \"other\"\n}"),
            "integer|string"
        );
    }

    #[test]
    fn test_true_arm_narrows_subject() {
        assert_eq!(
            type_of("match (maybe !== null) {\n  true -> maybe.name\n  default -> \"anonymous\"\n}"),
            "string"
        );
    }

    #[test]
    fn test_null_arm_narrows_subject_to_null() {
        assert_eq!(
            type_of("match (maybe) {\n  null -> maybe\n  default -> \"some\"\n}"),
            "null|string"
        );
    }
}

#[cfg(test)]
mod tag_tests {
    use super::*;

    #[test]
    fn test_tags_are_slots() {
        assert_eq!(type_of("<div class=\"x\">{user.name}</div>"), "slot");
        assert_eq!(type_of("<Card title=\"x\" subtitle={user.email} />"), "slot");
    }

    #[test]
    fn test_child_expressions_are_resolved() {
        assert!(matches!(
            resolve("<div>{missing}</div>"),
            Err(TypeError::UnknownIdentifier { ref name, .. }) if name == "missing"
        ));
    }

    #[test]
    fn test_missing_required_prop() {
        let error = resolve("<Card />").unwrap_err();
        assert_eq!(
            error,
            TypeError::MissingProp {
                component: "Card".to_string(),
                prop: "title".to_string(),
                range: Range::at(0, 0, 0, 8),
            }
        );
    }

    #[test]
    fn test_unknown_attribute() {
        let error = resolve("<Card title=\"x\" color=\"red\" />").unwrap_err();
        assert!(matches!(
            error,
            TypeError::UnknownAttribute { ref attribute, .. } if attribute == "color"
        ));
    }

    #[test]
    fn test_attribute_type_mismatch() {
        let error = resolve("<Card title={42} />").unwrap_err();
        assert!(matches!(
            error,
            TypeError::AttributeTypeMismatch { ref expected, ref actual, .. }
                if *expected == Type::String && *actual == Type::Integer
        ));
    }
}

//! Unit tests for union normalization and assignability

use proptest::prelude::*;
use type_system::{LiteralType, Type};

fn primitive() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::String),
        Just(Type::Number),
        Just(Type::Integer),
        Just(Type::Boolean),
        Just(Type::Null),
        Just(Type::Slot),
        "[a-c]{0,2}".prop_map(|value| Type::Literal(LiteralType::String(value))),
        (0u64..3).prop_map(|value| Type::Literal(LiteralType::Integer(value))),
    ]
}

fn any_type() -> impl Strategy<Value = Type> {
    primitive().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(Type::array),
            prop::collection::vec(inner, 0..4).prop_map(Type::union),
        ]
    })
}

#[cfg(test)]
mod union_tests {
    use super::*;

    #[test]
    fn test_nullable_of_nullable_is_unchanged() {
        let once = Type::String.nullable();
        assert_eq!(once.clone().nullable(), once);
        assert_eq!(once.members().len(), 2);
    }

    #[test]
    fn test_literal_is_kept_beside_its_primitive() {
        let ty = Type::union([
            Type::String,
            Type::Literal(LiteralType::String("a".to_string())),
        ]);
        assert_eq!(ty.members().len(), 2);
        assert!(ty.is_assignable_to(&Type::String));
    }
}

proptest! {
    #[test]
    fn prop_union_members_are_flat_and_distinct(members in prop::collection::vec(any_type(), 0..6)) {
        let union = Type::union(members);
        let flat = union.members();

        prop_assert!(flat.iter().all(|member| !matches!(member, Type::Union(_))));
        for (index, member) in flat.iter().enumerate() {
            prop_assert!(flat[index + 1..].iter().all(|other| !member.is(other)));
        }
    }

    #[test]
    fn prop_union_ignores_order(members in prop::collection::vec(any_type(), 0..6)) {
        let forward = Type::union(members.clone());
        let backward = Type::union(members.into_iter().rev());
        prop_assert!(forward.is(&backward));
    }

    #[test]
    fn prop_every_member_is_assignable_to_the_union(members in prop::collection::vec(any_type(), 1..6)) {
        let union = Type::union(members.clone());
        for member in members {
            prop_assert!(member.is_assignable_to(&union), "{} vs {}", member, union);
        }
    }
}

//! Unit tests for AST construction invariants

use core_types::{Range, SourcePath};
use parser::ast::*;

fn type_name(column: u32, value: &str) -> TypeNameNode {
    TypeNameNode {
        range: Range::at(0, column, 0, column + value.len() as u32),
        value: value.to_string(),
    }
}

fn names(values: &[&str]) -> TypeNameNodes {
    let mut column = 0;
    let items = values
        .iter()
        .map(|value| {
            let node = type_name(column, value);
            column += value.len() as u32 + 3;
            node
        })
        .collect();
    TypeNameNodes::new(items).unwrap()
}

fn null_at(column: u32) -> ExpressionNode {
    ExpressionNode::NullLiteral(NullLiteralNode {
        range: Range::at(0, column, 0, column + 4),
    })
}

fn arm(column: u32, left: Option<Vec<ExpressionNode>>) -> MatchArmNode {
    MatchArmNode {
        range: Range::at(0, column, 0, column + 10),
        left,
        right: Box::new(null_at(column + 6)),
    }
}

fn identifier(column: u32, value: &str) -> IdentifierNode {
    IdentifierNode::new(Range::at(0, column, 0, column + value.len() as u32), value)
}

#[cfg(test)]
mod type_reference_tests {
    use super::*;

    #[test]
    fn test_plain_optional_and_array_are_valid() {
        let range = Range::at(0, 0, 0, 8);
        assert!(TypeReferenceNode::new(range, names(&["string"]), false, false).is_ok());
        assert!(TypeReferenceNode::new(range, names(&["string"]), false, true).is_ok());
        assert!(TypeReferenceNode::new(range, names(&["string"]), true, false).is_ok());
        assert!(TypeReferenceNode::new(range, names(&["a", "b"]), false, false).is_ok());
    }

    #[test]
    fn test_optional_array_is_rejected() {
        let error =
            TypeReferenceNode::new(Range::default(), names(&["string"]), true, true).unwrap_err();
        assert_eq!(error, InvalidTypeReferenceNode::OptionalAndArrayAtTheSameTime);
    }

    #[test]
    fn test_union_array_is_rejected() {
        let error =
            TypeReferenceNode::new(Range::default(), names(&["a", "b"]), true, false).unwrap_err();
        assert_eq!(error, InvalidTypeReferenceNode::UnionTypeAndArrayAtTheSameTime);
    }

    #[test]
    fn test_optional_union_is_rejected() {
        let error =
            TypeReferenceNode::new(Range::default(), names(&["a", "b"]), false, true).unwrap_err();
        assert_eq!(error, InvalidTypeReferenceNode::UnionTypeAndOptionalAtTheSameTime);
    }

    #[test]
    fn test_all_three_flags_report_one_failure() {
        let error =
            TypeReferenceNode::new(Range::default(), names(&["a", "b"]), true, true).unwrap_err();
        assert_eq!(error, InvalidTypeReferenceNode::OptionalAndArrayAtTheSameTime);
    }

    #[test]
    fn test_type_names_must_not_be_empty() {
        assert_eq!(TypeNameNodes::new(vec![]).unwrap_err(), InvalidTypeNameNodes::Empty);
    }

    #[test]
    fn test_duplicate_type_name_cites_second_occurrence() {
        let error = TypeNameNodes::new(vec![
            type_name(0, "a"),
            type_name(4, "b"),
            type_name(8, "a"),
        ])
        .unwrap_err();

        assert_eq!(
            error,
            InvalidTypeNameNodes::Duplicate {
                duplicate_type_name_node: type_name(8, "a"),
            }
        );
        assert_eq!(error.to_string(), "Duplicate type name \"a\"");
    }
}

#[cfg(test)]
mod match_arm_tests {
    use super::*;

    #[test]
    fn test_zero_or_one_default_arm_is_valid() {
        assert!(MatchArmNodes::new(vec![]).unwrap().is_empty());
        assert!(MatchArmNodes::new(vec![arm(0, Some(vec![null_at(0)]))])
            .unwrap()
            .default_arm()
            .is_none());

        let arms = MatchArmNodes::new(vec![arm(0, Some(vec![null_at(0)])), arm(20, None)]).unwrap();
        assert_eq!(arms.len(), 2);
        assert_eq!(arms.default_arm().unwrap().range, Range::at(0, 20, 0, 30));
    }

    #[test]
    fn test_second_default_arm_is_rejected() {
        let error = MatchArmNodes::new(vec![arm(0, None), arm(20, Some(vec![])), arm(40, None)])
            .unwrap_err();

        let InvalidMatchArmNodes::MoreThanOneDefaultMatchArmNode {
            second_default_match_arm_node,
        } = error;
        assert_eq!(second_default_match_arm_node.range, Range::at(0, 40, 0, 50));
    }
}

#[cfg(test)]
mod collection_tests {
    use super::*;

    #[test]
    fn test_duplicate_attribute() {
        let error = AttributeNodes::new(vec![
            AttributeNode {
                range: Range::at(0, 3, 0, 8),
                name: identifier(3, "class"),
                value: None,
            },
            AttributeNode {
                range: Range::at(0, 9, 0, 14),
                name: identifier(9, "class"),
                value: None,
            },
        ])
        .unwrap_err();

        let InvalidAttributeNodes::Duplicate {
            duplicate_attribute_node,
        } = error;
        assert_eq!(duplicate_attribute_node.range, Range::at(0, 9, 0, 14));
    }

    #[test]
    fn test_self_closing_tag_cannot_have_children() {
        let child = ChildNode::Text(TextNode {
            range: Range::at(0, 3, 0, 4),
            value: "x".to_string(),
        });
        let error = TagNode::new(
            Range::at(0, 0, 0, 6),
            identifier(1, "a"),
            AttributeNodes::new(vec![]).unwrap(),
            vec![child],
            true,
        )
        .unwrap_err();

        assert_eq!(
            error,
            InvalidTagNode::SelfClosingTagWithChildren {
                tag_name: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_imported_names() {
        assert_eq!(
            ImportedNameNodes::new(vec![]).unwrap_err(),
            InvalidImportedNameNodes::Empty
        );

        let error =
            ImportedNameNodes::new(vec![identifier(0, "A"), identifier(3, "A")]).unwrap_err();
        assert_eq!(
            error,
            InvalidImportedNameNodes::Duplicate {
                duplicate_imported_name_node: identifier(3, "A"),
            }
        );
    }

    #[test]
    fn test_module_rejects_duplicate_bindings_across_imports_and_declarations() {
        let import = ImportNode {
            range: Range::at(0, 0, 0, 20),
            path: StringLiteralNode {
                range: Range::at(0, 5, 0, 10),
                value: "./a".to_string(),
            },
            names: ImportedNameNodes::new(vec![identifier(19, "Card")]).unwrap(),
        };
        let declaration = DeclarationNode::Struct(StructDeclarationNode {
            range: Range::at(1, 0, 1, 14),
            name: identifier(7, "Card"),
            properties: PropertyDeclarationNodes::new(vec![]).unwrap(),
        });

        let error = ModuleNode::new(
            Range::at(0, 0, 1, 14),
            SourcePath::new("/main.cl"),
            vec![import],
            vec![],
            vec![declaration],
        )
        .unwrap_err();

        let InvalidModuleNode::DuplicateBinding { duplicate_binding } = error;
        assert_eq!(duplicate_binding.value, "Card");
    }
}

//! Unit tests for module checking and the in-memory loader

use core_types::{Diagnostic, Range, Source, SourcePath};
use parser::parse_module;
use type_system::*;

const THEME: &str = r#"export enum Color {
  RED("red")
  BLUE("blue")
}

export struct Theme {
  primary: Color
  spacing: integer
}
"#;

const CARD: &str = r#"from "./theme" import { Color, Theme }

export component Card {
  title: string
  theme: ?Theme
  return <div class={theme?.primary?.value}>{title}</div>
}

struct Internal {
  color: Color
}
"#;

fn loader() -> InMemoryLoader {
    InMemoryLoader::new()
        .with_source("./theme", THEME)
        .with_source("./card", CARD)
}

fn check(loader: &InMemoryLoader, text: &str) -> TypeResult<ModuleTypes> {
    let module = parse_module(&Source::new(SourcePath::new("/main.cl"), text)).unwrap();
    ModuleChecker::new(loader).check(&module)
}

#[cfg(test)]
mod declaration_tests {
    use super::*;

    #[test]
    fn test_enum_and_struct_exports() {
        let types = loader().load_module("./theme").unwrap();

        let Some(Type::EnumStatic(color)) = types.exported_type("Color") else {
            panic!("Color is not an enum");
        };
        assert_eq!(color.members.len(), 2);
        assert_eq!(color.member("BLUE").unwrap().value.to_string(), "\"blue\"");

        let Some(Type::Struct(theme)) = types.exported_type("Theme") else {
            panic!("Theme is not a struct");
        };
        assert_eq!(theme.property("primary").unwrap().to_string(), "Color");
        assert_eq!(theme.property("spacing"), Some(&Type::Integer));
    }

    #[test]
    fn test_enum_member_without_value_is_its_name() {
        let types = check(&loader(), "export enum Size {\n  SMALL\n  LARGE(2)\n}").unwrap();
        let Some(Type::EnumStatic(size)) = types.exported_type("Size") else {
            panic!("Size is not an enum");
        };
        assert_eq!(size.member("SMALL").unwrap().value.to_string(), "\"SMALL\"");
        assert_eq!(size.member("LARGE").unwrap().value.to_string(), "2");
    }

    #[test]
    fn test_imported_types_are_shared() {
        let loader = loader();
        let card = loader.load_module("./card").unwrap();
        let theme = loader.load_module("./theme").unwrap();

        let Some(Type::Struct(internal)) = card.declared_type("Internal") else {
            panic!("Internal is not a struct");
        };
        let Some(Type::EnumInstance(color)) = internal.property("color") else {
            panic!("color is not an enum instance");
        };
        let Some(Type::EnumStatic(exported)) = theme.exported_type("Color") else {
            panic!("Color is not an enum");
        };
        assert!(std::rc::Rc::ptr_eq(&color.enum_type, exported));
        assert!(card.exported_type("Internal").is_none());
    }
}

#[cfg(test)]
mod component_tests {
    use super::*;

    #[test]
    fn test_component_usage_is_checked_across_modules() {
        let loader = loader();
        let source = "from \"./card\" import { Card }\n\nexport component Page {\n  return <main><Card title=\"Hi\" /></main>\n}";
        assert!(check(&loader, source).is_ok());

        let broken = "from \"./card\" import { Card }\n\nexport component Page {\n  return <main><Card theme={null} /></main>\n}";
        let error = check(&loader, broken).unwrap_err();
        assert!(matches!(
            error,
            TypeError::MissingProp { ref prop, .. } if prop == "title"
        ));
        assert_eq!(error.code(), 5013);
    }

    #[test]
    fn test_components_may_reference_later_components() {
        let source = "export component A {\n  return <B label=\"x\" />\n}\n\ncomponent B {\n  label: string\n  return <p>{label}</p>\n}";
        assert!(check(&loader(), source).is_ok());
    }

    #[test]
    fn test_return_expression_errors_surface() {
        let source = "export component A {\n  count: ?integer\n  return <p>{count + 1}</p>\n}";
        let error = check(&loader(), source).unwrap_err();
        assert!(matches!(error, TypeError::IllegalBinaryOperation { .. }));
        assert_eq!(error.affected_range(), Some(Range::at(2, 13, 2, 22)));
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn test_unknown_export() {
        let error = check(&loader(), "from \"./theme\" import { Colour }").unwrap_err();

        assert_eq!(
            error,
            TypeError::Loader(LoaderError::UnknownExport {
                path: "./theme".to_string(),
                name: "Colour".to_string(),
                range: Range::at(0, 24, 0, 30),
            })
        );
        assert_eq!(error.code(), 6002);
    }

    #[test]
    fn test_unexported_declaration_is_not_importable() {
        let error = check(&loader(), "from \"./card\" import { Internal }").unwrap_err();
        assert!(matches!(
            error,
            TypeError::Loader(LoaderError::UnknownExport { ref name, .. }) if name == "Internal"
        ));
    }

    #[test]
    fn test_unknown_module_points_at_path() {
        let error = check(&loader(), "from \"./nowhere\" import { X }").unwrap_err();
        assert_eq!(error.affected_range(), Some(Range::at(0, 5, 0, 16)));
        assert_eq!(error.code(), 6001);
    }

    #[test]
    fn test_type_error_inside_import_is_wrapped() {
        let loader = loader().with_source("./bad", "export struct Bad {\n  x: Nope\n}");
        let error = check(&loader, "from \"./bad\" import { Bad }").unwrap_err();

        let TypeError::Loader(LoaderError::CheckFailure { path, cause, .. }) = error else {
            panic!("expected a check failure");
        };
        assert_eq!(path, "./bad");
        assert_eq!(cause.code(), 5002);
    }
}

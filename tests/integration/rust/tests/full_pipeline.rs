//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Tokenizer/Parser -> AST -> ModuleChecker -> ModuleTypes,
//! across several modules resolved through the in-memory loader.

use core_types::{Diagnostic, Source, SourcePath};
use parser::{parse_module, Tokenizer};
use type_system::{InMemoryLoader, LoaderError, ModuleChecker, ModuleTypes, Type, TypeError};

const MODELS: &str = r#"# Shared models
export enum Role {
  ADMIN("admin")
  MEMBER("member")
}

export struct Member {
  name: string
  email: ?string
  role: Role
  tags: string[]
}
"#;

const BADGE: &str = r#"from "./models" import { Role }

export component Badge {
  role: Role
  return <span class={role.value}>{role.value}</span>
}
"#;

const PROFILE: &str = r#"from "./models" import { Member, Role }
from "./badge" import { Badge }

export component Profile {
  member: Member
  compact: ?boolean
  return <article>
    <h1>{member.name}</h1>
    {member.email ? <a href={`mailto:{member.email}`}>{member.email}</a> : null}
    {compact ? null : <Badge role={member.role} />}
    <p>{member.tags.length} tags</p>
  </article>
}
"#;

fn loader() -> InMemoryLoader {
    InMemoryLoader::new()
        .with_source("./models", MODELS)
        .with_source("./badge", BADGE)
        .with_source("./profile", PROFILE)
}

fn check_entry(loader: &InMemoryLoader, text: &str) -> Result<ModuleTypes, TypeError> {
    let source = Source::new(SourcePath::new("/app.cl"), text);
    let module = parse_module(&source).expect("Parse failed");
    ModuleChecker::new(loader).check(&module)
}

/// Test: Every module source tokenizes losslessly
#[test]
fn test_sources_tokenize_losslessly() {
    for text in [MODELS, BADGE, PROFILE] {
        let source = Source::from_string(text);
        let tokens = Tokenizer::new(&source)
            .collect::<Result<Vec<_>, _>>()
            .expect("Tokenization failed");
        let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
        assert_eq!(rebuilt, text);
    }
}

/// Test: A module graph checks and exposes its exports
#[test]
fn test_module_graph_checks() {
    let loader = loader();
    let profile = loader.load_module("./profile").expect("Check failed");

    let Some(Type::Component(component)) = profile.exported_type("Profile") else {
        panic!("Profile is not a component");
    };
    assert_eq!(component.props.len(), 2);
    assert_eq!(component.prop("compact"), Some(&Type::Boolean.nullable()));
    assert_eq!(component.prop("member").unwrap().to_string(), "Member");
}

/// Test: An entry module uses imported components as tags
#[test]
fn test_entry_module_renders_imported_component() {
    let loader = loader();
    let app = "from \"./profile\" import { Profile }\nfrom \"./models\" import { Member }\n\nexport component App {\n  current: ?Member\n  return <main>{current ? <Profile member={current} /> : <p>Nobody</p>}</main>\n}";

    let types = check_entry(&loader, app).expect("Check failed");
    assert_eq!(types.export_names().collect::<Vec<_>>(), vec!["App"]);
}

/// Test: Type errors in the entry module point into its source
#[test]
fn test_entry_module_type_error() {
    let loader = loader();
    let app = "from \"./profile\" import { Profile }\nfrom \"./models\" import { Member }\n\nexport component App {\n  current: ?Member\n  return <Profile member={current} />\n}";

    let error = check_entry(&loader, app).unwrap_err();
    assert_eq!(error.code(), 5012);
    assert_eq!(
        error.report().to_string(),
        "[6:19] Value of type Member|null is not assignable to prop \"member\" of type Member (#5012)"
    );
}

/// Test: Syntax errors in imported modules surface at the import
#[test]
fn test_imported_syntax_error() {
    let loader = loader().with_source("./broken", "export struct Broken {\n  field string\n}");
    let error = check_entry(&loader, "from \"./broken\" import { Broken }").unwrap_err();

    let TypeError::Loader(LoaderError::ParseFailure { path, cause, range }) = error else {
        panic!("expected a parse failure");
    };
    assert_eq!(path, "./broken");
    assert_eq!(range.start.column_number, 5);
    assert!(cause.code() / 1000 == 4 || cause.code() / 1000 == 2);
}

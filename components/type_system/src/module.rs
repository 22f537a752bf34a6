//! Checking of whole modules

use crate::error::{TypeError, TypeResult};
use crate::loader::Loader;
use crate::resolver::TypeResolver;
use crate::scope::Scope;
use crate::types::{
    ComponentType, EnumInstanceType, EnumMember, EnumStaticType, LiteralType, StructType, Type,
};
use core_types::SourcePath;
use parser::ast::{
    ComponentDeclarationNode, DeclarationNode, EnumMemberValue, ModuleNode,
    PropertyDeclarationNodes, TypeReferenceNode,
};
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tracing::{debug, trace};

/// Types declared and exported by one checked module
#[derive(Debug, Clone)]
pub struct ModuleTypes {
    source_path: SourcePath,
    declarations: FxHashMap<String, Type>,
    exports: Vec<String>,
}

impl ModuleTypes {
    /// Path of the checked module
    pub fn source_path(&self) -> &SourcePath {
        &self.source_path
    }

    /// Type of an exported declaration
    pub fn exported_type(&self, name: &str) -> Option<&Type> {
        if self.exports.iter().any(|export| export == name) {
            self.declarations.get(name)
        } else {
            None
        }
    }

    /// Type of any declaration, exported or not
    pub fn declared_type(&self, name: &str) -> Option<&Type> {
        self.declarations.get(name)
    }

    /// Names of the exports in source order
    pub fn export_names(&self) -> impl Iterator<Item = &str> {
        self.exports.iter().map(String::as_str)
    }
}

/// Checks a module against the exports of the modules it imports
pub struct ModuleChecker<'l> {
    loader: &'l dyn Loader,
}

impl<'l> ModuleChecker<'l> {
    /// Checker resolving imports through `loader`
    pub fn new(loader: &'l dyn Loader) -> Self {
        Self { loader }
    }

    /// Declare every type of `module` and check every component body
    pub fn check(&self, module: &ModuleNode) -> TypeResult<ModuleTypes> {
        debug!(path = %module.source_path(), "checking module");

        let mut scope = Scope::with_builtins();
        for import in module.imports() {
            for name in import.names.items() {
                let ty = self.loader.resolve_type_of_import(import, name)?;
                trace!(name = %name.value, ty = %ty, "imported");
                bind(&mut scope, &name.value, ty);
            }
        }

        let mut declarations = FxHashMap::default();
        let mut components = Vec::new();
        for declaration in module.all_declarations() {
            let name = &declaration.name().value;
            let ty = declare(&scope, declaration)?;
            trace!(name = %name, ty = %ty, "declared");

            if let (DeclarationNode::Component(node), Type::Component(component)) =
                (declaration, &ty)
            {
                components.push((node, Rc::clone(component)));
            }
            bind(&mut scope, name, ty.clone());
            declarations.insert(name.clone(), ty);
        }

        for (node, component) in components {
            check_component_body(&scope, node, &component)?;
        }

        Ok(ModuleTypes {
            source_path: module.source_path().clone(),
            declarations,
            exports: module
                .exports()
                .iter()
                .map(|export| export.declaration.name().value.clone())
                .collect(),
        })
    }
}

/// Type denoted by a type reference: `?T` is `T|null`, `T[]` is an array
/// and `A|B` a union.
pub fn resolve_type_reference(scope: &Scope, reference: &TypeReferenceNode) -> TypeResult<Type> {
    let members = reference
        .names()
        .items()
        .iter()
        .map(|name| {
            scope
                .lookup_type(&name.value)
                .cloned()
                .ok_or_else(|| TypeError::UnknownType {
                    name: name.value.clone(),
                    range: name.range,
                })
        })
        .collect::<TypeResult<Vec<_>>>()?;
    let ty = Type::union(members);

    Ok(if reference.is_array() {
        Type::array(ty)
    } else if reference.is_optional() {
        ty.nullable()
    } else {
        ty
    })
}

/// Make a declared or imported type visible under `name`.
///
/// Structs are type names; components are values usable as tags; an enum
/// is both, the type name denoting its instances.
fn bind(scope: &mut Scope, name: &str, ty: Type) {
    match &ty {
        Type::Struct(_) => scope.define_type(name, ty),
        Type::EnumStatic(definition) => {
            scope.define_type(
                name,
                Type::EnumInstance(EnumInstanceType {
                    enum_type: Rc::clone(definition),
                    member: None,
                }),
            );
            scope.define_value(name, ty);
        }
        _ => scope.define_value(name, ty),
    }
}

fn declare(scope: &Scope, declaration: &DeclarationNode) -> TypeResult<Type> {
    Ok(match declaration {
        DeclarationNode::Enum(node) => Type::EnumStatic(Rc::new(EnumStaticType {
            name: node.name.value.clone(),
            members: node
                .members
                .items()
                .iter()
                .map(|member| EnumMember {
                    name: member.name.value.clone(),
                    value: match &member.value {
                        Some(EnumMemberValue::String(value)) => {
                            Type::Literal(LiteralType::String(value.value.clone()))
                        }
                        Some(EnumMemberValue::Integer(value)) => value
                            .numeric_value()
                            .map(|value| Type::Literal(LiteralType::Integer(value)))
                            .unwrap_or(Type::Integer),
                        None => Type::Literal(LiteralType::String(member.name.value.clone())),
                    },
                })
                .collect(),
        })),
        DeclarationNode::Struct(node) => Type::Struct(Rc::new(StructType {
            name: node.name.value.clone(),
            properties: resolve_properties(scope, &node.properties)?,
        })),
        DeclarationNode::Component(node) => Type::Component(Rc::new(ComponentType {
            name: node.name.value.clone(),
            props: resolve_properties(scope, &node.props)?,
        })),
    })
}

fn resolve_properties(
    scope: &Scope,
    properties: &PropertyDeclarationNodes,
) -> TypeResult<Vec<(String, Type)>> {
    properties
        .items()
        .iter()
        .map(|property| {
            Ok((
                property.name.value.clone(),
                resolve_type_reference(scope, &property.type_reference)?,
            ))
        })
        .collect()
}

fn check_component_body(
    scope: &Scope,
    node: &ComponentDeclarationNode,
    component: &ComponentType,
) -> TypeResult<()> {
    let mut body = scope.push();
    for (name, ty) in &component.props {
        body.define_value(name.clone(), ty.clone());
    }
    TypeResolver::new(&body).resolve_type_of(&node.return_expression)?;
    Ok(())
}

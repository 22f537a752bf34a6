//! Modules, imports and exports

use super::{DeclarationNode, IdentifierNode, StringLiteralNode};
use core_types::{Range, SourcePath};
use thiserror::Error;

/// One name in an import list
pub type ImportedNameNode = IdentifierNode;

/// Names listed by one import, non-empty and unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedNameNodes {
    items: Vec<ImportedNameNode>,
}

/// Construction failure of [`ImportedNameNodes`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidImportedNameNodes {
    /// `import {}`
    #[error("Import must list at least one name")]
    Empty,
    /// The same name is imported twice
    #[error("Duplicate import \"{}\"", .duplicate_imported_name_node.value)]
    Duplicate {
        /// The second occurrence
        duplicate_imported_name_node: ImportedNameNode,
    },
}

impl ImportedNameNodes {
    /// Validate and wrap `items`
    pub fn new(items: Vec<ImportedNameNode>) -> Result<Self, InvalidImportedNameNodes> {
        if items.is_empty() {
            return Err(InvalidImportedNameNodes::Empty);
        }
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|seen| seen.value == item.value) {
                return Err(InvalidImportedNameNodes::Duplicate {
                    duplicate_imported_name_node: item.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Names in source order
    pub fn items(&self) -> &[ImportedNameNode] {
        &self.items
    }

    /// Number of names, at least one
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `from "path" import { names }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportNode {
    /// Source location
    pub range: Range,
    /// Symbolic path of the imported module
    pub path: StringLiteralNode,
    /// Imported names
    pub names: ImportedNameNodes,
}

/// `export declaration`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportNode {
    /// Source location
    pub range: Range,
    /// Exported declaration
    pub declaration: DeclarationNode,
}

/// A parsed source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    range: Range,
    source_path: SourcePath,
    imports: Vec<ImportNode>,
    exports: Vec<ExportNode>,
    declarations: Vec<DeclarationNode>,
}

/// Construction failure of [`ModuleNode`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidModuleNode {
    /// Two top-level bindings share a name
    #[error("Duplicate top-level name \"{}\"", .duplicate_binding.value)]
    DuplicateBinding {
        /// The second occurrence
        duplicate_binding: IdentifierNode,
    },
}

impl ModuleNode {
    /// Validate and build a module
    pub fn new(
        range: Range,
        source_path: SourcePath,
        imports: Vec<ImportNode>,
        exports: Vec<ExportNode>,
        declarations: Vec<DeclarationNode>,
    ) -> Result<Self, InvalidModuleNode> {
        let mut bindings: Vec<&IdentifierNode> = imports
            .iter()
            .flat_map(|import| import.names.items())
            .chain(exports.iter().map(|export| export.declaration.name()))
            .chain(declarations.iter().map(DeclarationNode::name))
            .collect();
        bindings.sort_by_key(|binding| binding.range.start);

        for (index, binding) in bindings.iter().enumerate() {
            if bindings[..index].iter().any(|seen| seen.value == binding.value) {
                return Err(InvalidModuleNode::DuplicateBinding {
                    duplicate_binding: (*binding).clone(),
                });
            }
        }

        Ok(Self {
            range,
            source_path,
            imports,
            exports,
            declarations,
        })
    }

    /// Source location of the whole file
    pub fn range(&self) -> Range {
        self.range
    }

    /// Symbolic path the module was parsed from
    pub fn source_path(&self) -> &SourcePath {
        &self.source_path
    }

    /// Imports in source order
    pub fn imports(&self) -> &[ImportNode] {
        &self.imports
    }

    /// Exports in source order
    pub fn exports(&self) -> &[ExportNode] {
        &self.exports
    }

    /// Declarations that are not exported, in source order
    pub fn declarations(&self) -> &[DeclarationNode] {
        &self.declarations
    }

    /// Every declaration, exported or not, in source order
    pub fn all_declarations(&self) -> Vec<&DeclarationNode> {
        let mut all: Vec<&DeclarationNode> = self
            .exports
            .iter()
            .map(|export| &export.declaration)
            .chain(self.declarations.iter())
            .collect();
        all.sort_by_key(|declaration| declaration.range().start);
        all
    }

    /// Exported declaration by name
    pub fn export(&self, name: &str) -> Option<&DeclarationNode> {
        self.exports
            .iter()
            .map(|export| &export.declaration)
            .find(|declaration| declaration.name().value == name)
    }
}

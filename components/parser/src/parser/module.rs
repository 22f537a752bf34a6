//! Modules, imports and exports

use super::declaration::DECLARATIONS;
use super::Parser;
use crate::ast::{
    ExportNode, IdentifierNode, ImportNode, ImportedNameNodes, InvalidImportedNameNodes,
    InvalidModuleNode, ModuleNode,
};
use crate::error::{ImportCouldNotBeParsed, ModuleCouldNotBeParsed, ParseResult};
use crate::rule::Rule;
use core_types::{Position, Range};

const TOP_LEVEL: &[Rule] = &[
    Rule::KeywordFrom,
    Rule::KeywordExport,
    Rule::KeywordComponent,
    Rule::KeywordStruct,
    Rule::KeywordEnum,
];

impl<'a> Parser<'a> {
    /// Imports, exports and declarations up to the end of the source
    pub fn parse_module(&mut self) -> ParseResult<ModuleNode> {
        let mut imports = Vec::new();
        let mut exports = Vec::new();
        let mut declarations = Vec::new();

        loop {
            self.skip();
            if self.lexer.is_end() {
                break;
            }

            match self.lexer.expect_one_of(TOP_LEVEL)? {
                Rule::KeywordFrom => imports.push(self.parse_import()?),
                Rule::KeywordExport => exports.push(self.parse_export()?),
                _ => declarations.push(self.parse_declaration()?),
            }
        }

        let range = Range::new(Position::ZERO, self.lexer.position());
        ModuleNode::new(
            range,
            self.source.path().clone(),
            imports,
            exports,
            declarations,
        )
        .map_err(|cause| {
            let InvalidModuleNode::DuplicateBinding { duplicate_binding } = &cause;
            ModuleCouldNotBeParsed::InvalidModuleNode {
                range: duplicate_binding.range,
                cause,
            }
            .into()
        })
    }

    /// `from "path" import { A, B }`
    pub fn parse_import(&mut self) -> ParseResult<ImportNode> {
        let keyword = self.lexer.read(Rule::KeywordFrom)?;
        self.skip();
        let path = self.parse_string_literal()?;
        self.skip();
        self.lexer.read(Rule::KeywordImport)?;
        self.skip();
        let open = self.lexer.read(Rule::BracketCurlyOpen)?;

        let mut names = Vec::new();
        let close = loop {
            self.skip();
            if let Some(close) = self.lexer.probe(Rule::BracketCurlyClose) {
                break close;
            }
            let name = self.lexer.read(Rule::Word)?;
            names.push(IdentifierNode::new(name.range, name.value));
            self.skip();
            if self.lexer.probe(Rule::SymbolComma).is_none() {
                self.skip();
                break self.lexer.read(Rule::BracketCurlyClose)?;
            }
        };

        let names = ImportedNameNodes::new(names).map_err(|cause| {
            let range = match &cause {
                InvalidImportedNameNodes::Duplicate {
                    duplicate_imported_name_node,
                } => duplicate_imported_name_node.range,
                InvalidImportedNameNodes::Empty => open.range.to(&close.range),
            };
            ImportCouldNotBeParsed::InvalidImportedNameNodes { cause, range }
        })?;

        Ok(ImportNode {
            range: keyword.range.to(&close.range),
            path,
            names,
        })
    }

    /// `export declaration`
    pub fn parse_export(&mut self) -> ParseResult<ExportNode> {
        let keyword = self.lexer.read(Rule::KeywordExport)?;
        self.skip();
        self.lexer.expect_one_of(DECLARATIONS)?;
        let declaration = self.parse_declaration()?;

        Ok(ExportNode {
            range: keyword.range.to(&declaration.range()),
            declaration,
        })
    }
}

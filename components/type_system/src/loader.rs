//! Resolution of imported names

use crate::error::LoaderError;
use crate::module::{ModuleChecker, ModuleTypes};
use crate::types::Type;
use core_types::{Range, Source, SourcePath};
use parser::ast::{ImportNode, ImportedNameNode};
use parser::parse_module;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Supplies the types of imported names.
///
/// The front end never touches the file system itself; hosts decide what an
/// import path means.
pub trait Loader {
    /// Type of `name` as exported by the module `import` refers to
    fn resolve_type_of_import(
        &self,
        import: &ImportNode,
        name: &ImportedNameNode,
    ) -> Result<Type, LoaderError>;
}

/// Loader over sources held in memory, keyed by their symbolic path.
///
/// Import paths are looked up verbatim. Each module is parsed and checked
/// at most once; modules that import each other are reported as circular.
#[derive(Debug, Default)]
pub struct InMemoryLoader {
    sources: FxHashMap<String, Source>,
    modules: RefCell<FxHashMap<String, Rc<ModuleTypes>>>,
    loading: RefCell<FxHashSet<String>>,
}

impl InMemoryLoader {
    /// Loader without sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `contents` under `path`
    pub fn add_source(&mut self, path: impl Into<String>, contents: impl AsRef<str>) {
        let path = path.into();
        let source = Source::new(SourcePath::new(&path), contents);
        self.sources.insert(path, source);
    }

    /// Builder form of [`InMemoryLoader::add_source`]
    pub fn with_source(mut self, path: impl Into<String>, contents: impl AsRef<str>) -> Self {
        self.add_source(path, contents);
        self
    }

    /// Parse and check the module registered under `path`
    pub fn load_module(&self, path: &str) -> Result<Rc<ModuleTypes>, LoaderError> {
        self.load(path, Range::default())
    }

    fn load(&self, path: &str, range: Range) -> Result<Rc<ModuleTypes>, LoaderError> {
        if let Some(types) = self.modules.borrow().get(path) {
            return Ok(Rc::clone(types));
        }
        if self.loading.borrow().contains(path) {
            return Err(LoaderError::CircularImport {
                path: path.to_string(),
                range,
            });
        }

        let source = self
            .sources
            .get(path)
            .ok_or_else(|| LoaderError::UnknownModule {
                path: path.to_string(),
                range,
            })?;

        debug!(path, "loading module");
        let module = parse_module(source).map_err(|cause| LoaderError::ParseFailure {
            path: path.to_string(),
            cause,
            range,
        })?;

        self.loading.borrow_mut().insert(path.to_string());
        let checked = ModuleChecker::new(self).check(&module);
        self.loading.borrow_mut().remove(path);

        let types = Rc::new(checked.map_err(|cause| LoaderError::CheckFailure {
            path: path.to_string(),
            cause: Box::new(cause),
            range,
        })?);
        self.modules
            .borrow_mut()
            .insert(path.to_string(), Rc::clone(&types));
        Ok(types)
    }
}

impl Loader for InMemoryLoader {
    fn resolve_type_of_import(
        &self,
        import: &ImportNode,
        name: &ImportedNameNode,
    ) -> Result<Type, LoaderError> {
        let path = &import.path.value;
        let types = self.load(path, import.path.range)?;

        types
            .exported_type(&name.value)
            .cloned()
            .ok_or_else(|| LoaderError::UnknownExport {
                path: path.clone(),
                name: name.value.clone(),
                range: name.range,
            })
    }
}
